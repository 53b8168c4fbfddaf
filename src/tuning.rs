//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads. Defaults come from
//! `consts`; any field can be overridden from the settings file.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Points needed to win
    pub max_score: u32,
    /// Ball sprite size (square)
    pub ball_size: i32,
    pub ball_min_speed: i32,
    pub ball_max_speed: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Speed paddles start each match with
    pub paddle_speed: f32,
    /// Range of AI pursuit speeds
    pub paddle_min_speed: i32,
    pub paddle_max_speed: i32,
    pub wall_offset: i32,
    /// Distraction period for the AI (0 disables it)
    pub ai_delay_secs: u32,
    pub score_text_offset: f32,
    pub score_text_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_score: MAX_SCORE,
            ball_size: BALL_SIZE,
            ball_min_speed: BALL_MIN_SPEED,
            ball_max_speed: BALL_MAX_SPEED,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_min_speed: PADDLE_MIN_SPEED,
            paddle_max_speed: PADDLE_MAX_SPEED,
            wall_offset: WALL_OFFSET,
            ai_delay_secs: AI_DELAY_SECS,
            score_text_offset: SCORE_TEXT_OFFSET,
            score_text_y: SCORE_TEXT_Y,
        }
    }
}

impl Tuning {
    /// Check the values describe a playable match.
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_score == 0 {
            return Err("max_score must be at least 1".into());
        }
        if self.ball_size <= 0 {
            return Err(format!("ball_size must be positive, got {}", self.ball_size));
        }
        if self.paddle_width <= 0 || self.paddle_height <= 0 {
            return Err(format!(
                "paddle size must be positive, got {}x{}",
                self.paddle_width, self.paddle_height
            ));
        }
        if self.ball_min_speed < 0 || self.ball_min_speed > self.ball_max_speed {
            return Err(format!(
                "ball speed range {}..={} is invalid",
                self.ball_min_speed, self.ball_max_speed
            ));
        }
        if self.paddle_min_speed < 0 || self.paddle_min_speed > self.paddle_max_speed {
            return Err(format!(
                "paddle speed range {}..={} is invalid",
                self.paddle_min_speed, self.paddle_max_speed
            ));
        }
        if !self.paddle_speed.is_finite() || self.paddle_speed < 0.0 {
            return Err(format!("paddle_speed must be >= 0, got {}", self.paddle_speed));
        }
        if self.paddle_height > VIEWPORT_HEIGHT || self.ball_size > VIEWPORT_HEIGHT {
            return Err("sprites must fit the default viewport".into());
        }
        let court_span = self
            .wall_offset
            .checked_mul(2)
            .and_then(|both| both.checked_add(self.paddle_width));
        if self.wall_offset < 0 || court_span.is_none_or(|span| span > VIEWPORT_WIDTH) {
            return Err(format!("wall_offset {} does not fit the viewport", self.wall_offset));
        }
        Ok(())
    }
}

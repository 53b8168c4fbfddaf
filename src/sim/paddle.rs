//! Paddles and their control modes
//!
//! Player 1 is steered from the keyboard; player 2 is driven by the AI,
//! which only sets the paddle's vertical velocity (see `ai`).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::platform::{Key, Keyboard, Viewport};
use crate::tuning::Tuning;

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    /// Left wall
    One,
    /// Right wall
    Two,
}

impl Player {
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Sign of a horizontal velocity heading toward this player's wall
    pub fn wall_direction(self) -> f32 {
        match self {
            Player::One => -1.0,
            Player::Two => 1.0,
        }
    }
}

/// How a paddle decides where to go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    /// Up/Down keys
    Human,
    /// Velocity set by the tracking policy, integrated and clamped
    Ai,
}

impl ControlMode {
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::One => ControlMode::Human,
            Player::Two => ControlMode::Ai,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub bounds: Rect,
    /// Pixels per second; only `y` is used
    pub velocity: Vec2,
    pub player: Player,
    pub control: ControlMode,
}

impl Paddle {
    pub fn new(player: Player, tuning: &Tuning) -> Self {
        Self {
            bounds: Rect::with_size(tuning.paddle_width, tuning.paddle_height),
            velocity: Vec2::ZERO,
            player,
            control: ControlMode::for_player(player),
        }
    }

    /// Advance by `dt` seconds according to the control mode
    pub fn update<K: Keyboard + ?Sized>(&mut self, dt: f32, keyboard: &K, viewport: Viewport) {
        let y = match self.control {
            ControlMode::Human => human_step(
                &self.bounds,
                self.velocity.y,
                dt,
                keyboard.is_key_down(Key::Up),
                keyboard.is_key_down(Key::Down),
                viewport,
            ),
            ControlMode::Ai => ai_step(&self.bounds, self.velocity.y, dt, viewport),
        };
        self.bounds.y = y;
    }

    /// Draw a fresh downward pursuit speed; negate it to go up
    pub fn reset_velocity<R: Rng + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) {
        self.velocity.x = 0.0;
        self.velocity.y =
            rng.random_range(tuning.paddle_min_speed..=tuning.paddle_max_speed) as f32;
    }

    pub fn stop_motion(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Place against its wall, vertically centered, at starting speed
    pub fn reset(&mut self, viewport: Viewport, tuning: &Tuning) {
        let court = viewport.as_rect();
        self.bounds.x = match self.player {
            Player::One => tuning.wall_offset,
            Player::Two => court.right() - tuning.wall_offset,
        };
        self.bounds.y = court.center().y - self.bounds.height / 2;
        self.velocity = Vec2::new(0.0, tuning.paddle_speed);
    }
}

/// Highest `y` that keeps the paddle on screen
fn max_y(bounds: &Rect, viewport: Viewport) -> i32 {
    (viewport.height - bounds.height).max(0)
}

/// Keyboard movement. Both keys may apply in one frame and cancel out.
fn human_step(bounds: &Rect, speed: f32, dt: f32, up: bool, down: bool, viewport: Viewport) -> i32 {
    let at_top = bounds.top() <= 0;
    let at_bottom = bounds.bottom() >= viewport.height;
    let step = (speed * dt).round() as i32;

    let mut y = bounds.y;
    if up && !at_top {
        y = y.saturating_sub(step);
    }
    if down && !at_bottom {
        y = y.saturating_add(step);
    }
    y.clamp(0, max_y(bounds, viewport))
}

/// Free movement, snapped back onto the screen on overshoot
fn ai_step(bounds: &Rect, speed: f32, dt: f32, viewport: Viewport) -> i32 {
    let y = bounds.y.saturating_add((speed * dt).round() as i32);
    y.clamp(0, max_y(bounds, viewport))
}

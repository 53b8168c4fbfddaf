//! The ball
//!
//! Moves in whole pixels, bounces off the top and bottom walls and raises a
//! scored flag when it leaves through a side wall. The side walls never
//! bounce; the match resets the ball after every point.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::paddle::Player;
use super::rect::Rect;
use crate::platform::Viewport;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub bounds: Rect,
    /// Pixels per second
    pub velocity: Vec2,
    /// Bounced off the top or bottom wall during the last update
    pub hit_wall: bool,
    /// Left through the right wall (player 1's point), sticky until reset
    pub player1_scored: bool,
    /// Left through the left wall (player 2's point), sticky until reset
    pub player2_scored: bool,
}

impl Ball {
    /// A motionless ball at the origin; call `reset` before play
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            bounds: Rect::with_size(tuning.ball_size, tuning.ball_size),
            velocity: Vec2::ZERO,
            hit_wall: false,
            player1_scored: false,
            player2_scored: false,
        }
    }

    /// Advance by `dt` seconds and detect wall contact
    pub fn update(&mut self, dt: f32, viewport: Viewport) {
        let delta = (self.velocity * dt).round().as_ivec2();
        self.bounds.translate(delta);

        if self.bounds.right() >= viewport.width && self.velocity.x > 0.0 {
            self.player1_scored = true;
        }
        if self.bounds.left() <= 0 && self.velocity.x < 0.0 {
            self.player2_scored = true;
        }

        let leaving_bottom = self.bounds.bottom() >= viewport.height && self.velocity.y > 0.0;
        let leaving_top = self.bounds.top() <= 0 && self.velocity.y < 0.0;
        self.hit_wall = leaving_bottom || leaving_top;
        if self.hit_wall {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Center the ball and serve it in a random diagonal direction
    pub fn reset<R: Rng + ?Sized>(&mut self, viewport: Viewport, tuning: &Tuning, rng: &mut R) {
        let center = viewport.as_rect().center();
        let half = self.bounds.size() / 2;
        self.bounds.x = center.x - half.x;
        self.bounds.y = center.y - half.y;

        let speed_x = rng.random_range(tuning.ball_min_speed..=tuning.ball_max_speed) as f32;
        let sign_x = random_sign(rng);
        let speed_y = rng.random_range(tuning.ball_min_speed..=tuning.ball_max_speed) as f32;
        let sign_y = random_sign(rng);
        self.velocity = Vec2::new(speed_x * sign_x, speed_y * sign_y);

        self.hit_wall = false;
        self.player1_scored = false;
        self.player2_scored = false;
    }

    pub fn stop_motion(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    pub fn did_player_score(&self, player: Player) -> bool {
        match player {
            Player::One => self.player1_scored,
            Player::Two => self.player2_scored,
        }
    }

    /// Who the ball has scored for, player 1 first
    pub fn scorer(&self) -> Option<Player> {
        if self.player1_scored {
            Some(Player::One)
        } else if self.player2_scored {
            Some(Player::Two)
        } else {
            None
        }
    }
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

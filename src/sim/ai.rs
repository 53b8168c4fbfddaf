//! Paddle-tracking AI
//!
//! Deliberately beatable: the paddle only chases balls heading for its own
//! wall, and it freezes for one second out of every `ai_delay_secs`.

use rand::Rng;

use super::ball::Ball;
use super::paddle::Paddle;
use crate::tuning::Tuning;

/// True during the seconds the AI spends not paying attention
pub fn distraction_active(total_secs: f64, ai_delay_secs: u32) -> bool {
    if ai_delay_secs == 0 {
        return false;
    }
    (total_secs.max(0.0).floor() as u64) % u64::from(ai_delay_secs) == 0
}

/// Update an AI paddle's vertical velocity from the ball's position.
///
/// Only the velocity changes; the paddle moves on its next `update`.
pub fn track_ball<R: Rng + ?Sized>(
    paddle: &mut Paddle,
    ball: &Ball,
    total_secs: f64,
    tuning: &Tuning,
    rng: &mut R,
) {
    let ball_above = ball.bounds.bottom() < paddle.bounds.top();
    let ball_below = ball.bounds.top() > paddle.bounds.bottom();
    let moving_away = ball.velocity.x * paddle.player.wall_direction() < 0.0;

    if moving_away || distraction_active(total_secs, tuning.ai_delay_secs) {
        paddle.velocity.y = 0.0;
    } else if ball_below && paddle.velocity.y <= 0.0 {
        paddle.reset_velocity(tuning, rng);
        log::debug!("AI paddle {} tracking down", paddle.player.number());
    } else if ball_above && paddle.velocity.y >= 0.0 {
        paddle.reset_velocity(tuning, rng);
        paddle.velocity.y = -paddle.velocity.y;
        log::debug!("AI paddle {} tracking up", paddle.player.number());
    }
}

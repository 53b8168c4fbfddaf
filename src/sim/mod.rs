//! Gameplay simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform code:
//! - Time, viewport, input and audio are passed in per call
//! - Randomness comes from the match's own seeded source
//! - Integer pixel positions, float velocities

pub mod ai;
pub mod ball;
pub mod paddle;
pub mod rect;
pub mod state;
pub mod tick;

pub use ai::{distraction_active, track_ball};
pub use ball::Ball;
pub use paddle::{ControlMode, Paddle, Player};
pub use rect::Rect;
pub use state::{GamePhase, MatchState, Score};
pub use tick::{START_KEY, TickOutcome, tick};

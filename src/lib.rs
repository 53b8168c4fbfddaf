//! Paddle Pong - a two-paddle arcade game core
//!
//! Core modules:
//! - `sim`: Gameplay simulation (ball, paddles, AI, match state machine)
//! - `platform`: Input, viewport and frame time supplied by the host
//! - `audio`: Sound cues and the volume gate in front of the host's mixer
//! - `renderer`: Draw-pass contract and frame composition
//! - `ui`: HUD text layout
//! - `tuning` / `settings`: Data-driven game balance and user preferences

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use audio::{AudioManager, AudioSink, SoundEffect};
pub use game::Game;
pub use platform::{GameTime, Key, Keyboard, KeyboardState, Viewport};
pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the native host (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default viewport
    pub const VIEWPORT_WIDTH: i32 = 800;
    pub const VIEWPORT_HEIGHT: i32 = 600;

    /// Points needed to win a match
    pub const MAX_SCORE: u32 = 3;

    /// Ball defaults (speeds in pixels/s, drawn per axis)
    pub const BALL_SIZE: i32 = 16;
    pub const BALL_MIN_SPEED: i32 = 200;
    pub const BALL_MAX_SPEED: i32 = 400;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 16;
    pub const PADDLE_HEIGHT: i32 = 96;
    /// Speed a paddle starts a rally with
    pub const PADDLE_SPEED: f32 = 250.0;
    /// Range the AI draws a fresh pursuit speed from
    pub const PADDLE_MIN_SPEED: i32 = 200;
    pub const PADDLE_MAX_SPEED: i32 = 400;
    /// Distance from each side wall to the paddle's left edge
    pub const WALL_OFFSET: i32 = 100;

    /// AI stops tracking during every `AI_DELAY_SECS`-th second
    pub const AI_DELAY_SECS: u32 = 3;

    /// Score text layout
    pub const SCORE_TEXT_OFFSET: f32 = 150.0;
    pub const SCORE_TEXT_Y: f32 = 50.0;
}

//! Platform abstraction layer
//!
//! What the host hands the simulation each frame:
//! - Frame time (elapsed and total)
//! - Keyboard state
//! - Viewport dimensions

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Space,
    Escape,
}

impl Key {
    fn index(self) -> usize {
        match self {
            Key::Up => 0,
            Key::Down => 1,
            Key::Space => 2,
            Key::Escape => 3,
        }
    }
}

/// Keyboard queries the simulation makes
pub trait Keyboard {
    /// Key is held this frame
    fn is_key_down(&self, key: Key) -> bool;

    /// Key went down this frame (was up last frame)
    fn was_key_pressed_this_frame(&self, key: Key) -> bool;
}

/// Two-frame keyboard snapshot
///
/// Hosts feed key events in with `set`/`press`/`release` and call
/// `end_frame` once the update pass has consumed the frame.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    current: [bool; 4],
    previous: [bool; 4],
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, down: bool) {
        self.current[key.index()] = down;
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    /// Roll the current frame into the previous one
    pub fn end_frame(&mut self) {
        self.previous = self.current;
    }
}

impl Keyboard for KeyboardState {
    fn is_key_down(&self, key: Key) -> bool {
        self.current[key.index()]
    }

    fn was_key_pressed_this_frame(&self, key: Key) -> bool {
        self.current[key.index()] && !self.previous[key.index()]
    }
}

/// Drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::with_size(self.width, self.height)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
        Self::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }
}

/// Frame timing supplied by the host loop
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameTime {
    /// Seconds since the previous update
    pub elapsed: f32,
    /// Seconds since the game started
    pub total: f64,
}

impl GameTime {
    pub fn new(elapsed: f32, total: f64) -> Self {
        Self { elapsed, total }
    }

    /// Advance by one frame of `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.elapsed = dt;
        self.total += dt as f64;
    }
}

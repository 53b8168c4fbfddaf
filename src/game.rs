//! Host-facing game object
//!
//! One `update` followed by one `draw` per frame. The host supplies time,
//! viewport, keyboard, audio and font metrics on every call.

use crate::audio::{AudioManager, AudioSink};
use crate::platform::{GameTime, Keyboard, Viewport};
use crate::renderer::{RenderError, Renderer, TextMeasure, draw_frame};
use crate::settings::Settings;
use crate::sim::{MatchState, TickOutcome, tick};
use crate::tuning::Tuning;
use crate::ui::Hud;

pub struct Game {
    state: MatchState,
    hud: Hud,
}

impl Game {
    /// An invalid `tuning` is replaced by the defaults
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport) -> Self {
        Self {
            state: MatchState::new(seed, tuning, viewport),
            hud: Hud::new(),
        }
    }

    /// Build from user settings, falling back to `fallback_seed` when the
    /// settings do not pin one
    pub fn from_settings(settings: &Settings, fallback_seed: u64, viewport: Viewport) -> Self {
        let seed = settings.seed.unwrap_or(fallback_seed);
        log::info!("Game initialized with seed: {}", seed);
        Self::new(seed, settings.tuning.clone(), viewport)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Update pass: simulation tick, then HUD layout
    pub fn update<K, S, T>(
        &mut self,
        time: GameTime,
        viewport: Viewport,
        keyboard: &K,
        audio: &mut AudioManager<S>,
        metrics: &T,
    ) -> TickOutcome
    where
        K: Keyboard + ?Sized,
        S: AudioSink,
        T: TextMeasure + ?Sized,
    {
        let outcome = tick(&mut self.state, time, viewport, keyboard, audio);
        if outcome == TickOutcome::Continue {
            self.hud.refresh(&self.state, viewport, metrics);
        }
        outcome
    }

    /// Draw pass
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), RenderError> {
        draw_frame(self, renderer)
    }
}

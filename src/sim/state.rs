//! Match state
//!
//! Everything the update pass mutates lives here: the phase, the score, the
//! entities and the match's random source.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Paddle, Player};
use crate::audio::{AudioManager, AudioSink, SoundEffect};
use crate::platform::Viewport;
use crate::tuning::Tuning;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start key
    Initial,
    /// Rally in progress
    Playing,
    /// Someone reached the winning score; everything is frozen
    GameOver,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player1: u32,
    pub player2: u32,
}

impl Score {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    /// Add a point and return the new total
    pub fn increment(&mut self, player: Player) -> u32 {
        let slot = match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        };
        *slot += 1;
        *slot
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct MatchState<R = Pcg32> {
    pub phase: GamePhase,
    pub score: Score,
    pub ball: Ball,
    /// Indexed by `Player::index`
    pub paddles: [Paddle; 2],
    pub tuning: Tuning,
    /// Ball overlapped each paddle on the previous frame
    pub(crate) paddle_contact: [bool; 2],
    pub(crate) rng: R,
}

impl MatchState<Pcg32> {
    /// New match on the title screen, seeded for reproducibility
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), tuning, viewport)
    }
}

impl<R> MatchState<R> {
    pub fn paddle(&self, player: Player) -> &Paddle {
        &self.paddles[player.index()]
    }

    /// Whoever has reached the winning score
    pub fn winner(&self) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|&player| self.score.get(player) >= self.tuning.max_score)
    }
}

impl<R: Rng> MatchState<R> {
    /// New match on the title screen drawing from `rng`.
    ///
    /// A `tuning` that fails `Tuning::validate` is replaced by the defaults.
    pub fn with_rng(rng: R, tuning: Tuning, viewport: Viewport) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Invalid tuning ({e}), using defaults");
                Tuning::default()
            }
        };
        let mut state = Self {
            phase: GamePhase::Initial,
            score: Score::default(),
            ball: Ball::new(&tuning),
            paddles: [
                Paddle::new(Player::One, &tuning),
                Paddle::new(Player::Two, &tuning),
            ],
            tuning,
            paddle_contact: [false; 2],
            rng,
        };
        state.reset_court(viewport);
        state
    }

    /// Zero the score, re-serve and enter `Playing`
    pub fn start_match(&mut self, viewport: Viewport) {
        self.score = Score::default();
        self.reset_court(viewport);
        self.phase = GamePhase::Playing;
        log::info!("Match started (first to {})", self.tuning.max_score);
    }

    /// Freeze everything and enter `GameOver`
    pub fn end_match<S: AudioSink>(&mut self, audio: &mut AudioManager<S>) {
        self.ball.stop_motion();
        for paddle in &mut self.paddles {
            paddle.stop_motion();
        }
        self.phase = GamePhase::GameOver;
        audio.play(SoundEffect::GameOver);
        log::info!(
            "Game over: {} - {}",
            self.score.player1,
            self.score.player2
        );
    }

    /// Re-serve the ball after a point
    pub fn serve(&mut self, viewport: Viewport) {
        self.ball.reset(viewport, &self.tuning, &mut self.rng);
    }

    fn reset_court(&mut self, viewport: Viewport) {
        self.serve(viewport);
        for paddle in &mut self.paddles {
            paddle.reset(viewport, &self.tuning);
        }
        self.paddle_contact = [false; 2];
    }
}

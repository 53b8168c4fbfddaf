//! Paddle Pong entry point
//!
//! Headless native host. Drives one match with a fixed-step clock, an
//! autopilot on the keyboard paddle, and a renderer and audio sink that only
//! log. Usage: `paddle-pong [settings.json]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use glam::Vec2;

use paddle_pong::consts::SIM_DT;
use paddle_pong::renderer::{FontId, RenderError, Renderer, SpriteId, TextMeasure};
use paddle_pong::sim::{GamePhase, Player, START_KEY, TickOutcome};
use paddle_pong::ui::winner_text;
use paddle_pong::{
    AudioManager, AudioSink, Game, GameTime, Key, KeyboardState, Settings, SoundEffect, Viewport,
};

/// Give up after ten simulated minutes
const MAX_FRAMES: u64 = 60 * 60 * 10;

/// Renderer that logs draw calls and measures text with fixed-width glyphs
struct LogRenderer {
    glyph: Vec2,
}

impl TextMeasure for LogRenderer {
    fn measure_text(&self, _font: FontId, text: &str) -> Vec2 {
        Vec2::new(self.glyph.x * text.chars().count() as f32, self.glyph.y)
    }
}

impl Renderer for LogRenderer {
    fn draw_sprite(&mut self, sprite: SpriteId, position: Vec2) -> Result<(), RenderError> {
        log::trace!("sprite {:?} at ({}, {})", sprite, position.x, position.y);
        Ok(())
    }

    fn draw_text(&mut self, font: FontId, text: &str, position: Vec2) -> Result<(), RenderError> {
        log::trace!("{:?} text {:?} at ({}, {})", font, text, position.x, position.y);
        Ok(())
    }
}

struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sound {:?} at volume {:.2}", effect, volume);
    }
}

/// Hold Up/Down to keep player 1's paddle level with the ball
fn autopilot(game: &Game, keys: &mut KeyboardState) {
    let state = game.state();
    let paddle = state.paddle(Player::One).bounds;
    let ball_y = state.ball.bounds.center().y;
    let dead_zone = paddle.height / 4;
    keys.set(Key::Up, ball_y < paddle.center().y - dead_zone);
    keys.set(Key::Down, ball_y > paddle.center().y + dead_zone);
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Paddle Pong (headless) starting...");

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load_from_path(&path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let fallback_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let viewport = Viewport::default();
    let mut game = Game::from_settings(&settings, fallback_seed, viewport);

    let mut audio = AudioManager::new(LogAudio);
    settings.apply_audio(&mut audio);
    let mut renderer = LogRenderer {
        glyph: Vec2::new(18.0, 36.0),
    };
    let mut keys = KeyboardState::new();
    let mut time = GameTime::default();

    for frame in 0..MAX_FRAMES {
        keys.set(START_KEY, frame == 0);
        autopilot(&game, &mut keys);

        time.advance(SIM_DT);
        let outcome = game.update(time, viewport, &keys, &mut audio, &renderer);
        keys.end_frame();
        if outcome == TickOutcome::Quit {
            break;
        }

        if let Err(e) = game.draw(&mut renderer) {
            log::warn!("Render error: {e}, skipping frame {frame}");
            continue;
        }

        if game.state().phase == GamePhase::GameOver {
            break;
        }
    }

    let state = game.state();
    match state.winner() {
        Some(winner) => println!(
            "{} ({} - {}) after {:.1}s",
            winner_text(winner),
            state.score.player1,
            state.score.player2,
            time.total
        ),
        None => println!(
            "No winner after {:.1}s ({} - {})",
            time.total, state.score.player1, state.score.player2
        ),
    }

    Ok(())
}

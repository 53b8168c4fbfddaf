//! HUD text layout
//!
//! Rebuilt after every update from the match state and the host's font
//! metrics, then drawn as-is by the draw pass.

use glam::Vec2;

use crate::platform::Viewport;
use crate::renderer::{FontId, TextMeasure};
use crate::sim::{GamePhase, MatchState, Player};

pub const TITLE_TEXT: &str = "PONG";
pub const START_TEXT: &str = "Press Space to start";
pub const QUIT_TEXT: &str = "Press Escape to quit";
pub const GAME_OVER_TEXT: &str = "Game Over!";
pub const RESTART_TEXT: &str = "Press Space to play again";

/// Vertical gap between banner lines
const LINE_GAP: f32 = 16.0;

/// A positioned string
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub font: FontId,
    pub text: String,
    /// Top-left corner
    pub position: Vec2,
}

impl TextLine {
    fn empty(font: FontId) -> Self {
        Self {
            font,
            text: String::new(),
            position: Vec2::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Hud {
    pub player1_score: TextLine,
    pub player2_score: TextLine,
    /// Title or game-over lines, empty while playing
    pub banner: Vec<TextLine>,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            player1_score: TextLine::empty(FontId::Score),
            player2_score: TextLine::empty(FontId::Score),
            banner: Vec::new(),
        }
    }

    pub fn refresh<R, T>(&mut self, state: &MatchState<R>, viewport: Viewport, metrics: &T)
    where
        T: TextMeasure + ?Sized,
    {
        let screen = viewport.size();
        let offset = state.tuning.score_text_offset;
        let y = state.tuning.score_text_y;

        self.player1_score = score_line(state.score.player1, -offset, y, screen, metrics);
        self.player2_score = score_line(state.score.player2, offset, y, screen, metrics);

        self.banner = match state.phase {
            GamePhase::Initial => banner(
                &[TITLE_TEXT.to_string(), START_TEXT.to_string(), QUIT_TEXT.to_string()],
                screen,
                metrics,
            ),
            GamePhase::Playing => Vec::new(),
            GamePhase::GameOver => {
                let mut lines = vec![GAME_OVER_TEXT.to_string()];
                if let Some(winner) = state.winner() {
                    lines.push(winner_text(winner));
                }
                lines.push(RESTART_TEXT.to_string());
                banner(&lines, screen, metrics)
            }
        };
    }
}

pub fn winner_text(player: Player) -> String {
    format!("Player {} wins", player.number())
}

/// Centered on screen, shifted sideways by `x_offset`, pinned at `y`
fn score_line<T: TextMeasure + ?Sized>(
    score: u32,
    x_offset: f32,
    y: f32,
    screen: Vec2,
    metrics: &T,
) -> TextLine {
    let text = score.to_string();
    let size = metrics.measure_text(FontId::Score, &text);
    let mut position = (screen - size) / 2.0;
    position.x += x_offset;
    position.y = y;
    TextLine {
        font: FontId::Score,
        text,
        position,
    }
}

/// Lines centered horizontally, stacked down from a third of the screen
fn banner<T: TextMeasure + ?Sized>(lines: &[String], screen: Vec2, metrics: &T) -> Vec<TextLine> {
    let mut y = screen.y / 3.0;
    lines
        .iter()
        .map(|text| {
            let size = metrics.measure_text(FontId::Message, text);
            let line = TextLine {
                font: FontId::Message,
                text: text.clone(),
                position: Vec2::new((screen.x - size.x) / 2.0, y),
            };
            y += size.y + LINE_GAP;
            line
        })
        .collect()
}

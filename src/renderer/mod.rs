//! Draw-pass contract
//!
//! The host owns textures, fonts and the swap chain. The game only says
//! which sprite or string goes where.

use std::fmt;

use glam::Vec2;

use crate::game::Game;
use crate::sim::{GamePhase, MatchState};
use crate::ui::{Hud, TextLine};

/// Sprites the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Ball,
    Paddle,
}

/// Fonts the game draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontId {
    /// Large digits for the score
    Score,
    /// Title, banners and instructions
    Message,
}

/// A failure the renderer reports for the current frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The device or surface went away; the frame is lost
    DeviceLost,
    /// Anything else the backend wants to report
    Backend(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::DeviceLost => write!(f, "rendering device lost"),
            RenderError::Backend(msg) => write!(f, "renderer error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// String measurement, needed by the update pass for layout
pub trait TextMeasure {
    /// Pixel size of `text` rendered in `font`
    fn measure_text(&self, font: FontId, text: &str) -> Vec2;
}

/// Drawing primitives
pub trait Renderer: TextMeasure {
    fn draw_sprite(&mut self, sprite: SpriteId, position: Vec2) -> Result<(), RenderError>;

    fn draw_text(&mut self, font: FontId, text: &str, position: Vec2) -> Result<(), RenderError>;
}

/// Draw one frame of `game`.
///
/// Stops at the first renderer error; the host decides whether to skip the
/// frame or recover.
pub fn draw_frame<R: Renderer + ?Sized>(
    game: &Game,
    renderer: &mut R,
) -> Result<(), RenderError> {
    let state = game.state();
    let hud = game.hud();

    match state.phase {
        GamePhase::Initial => draw_banner(hud, renderer),
        GamePhase::Playing => {
            draw_court(state, renderer)?;
            draw_scores(hud, renderer)
        }
        GamePhase::GameOver => {
            draw_court(state, renderer)?;
            draw_scores(hud, renderer)?;
            draw_banner(hud, renderer)
        }
    }
}

fn draw_court<R: Renderer + ?Sized>(
    state: &MatchState,
    renderer: &mut R,
) -> Result<(), RenderError> {
    for paddle in &state.paddles {
        renderer.draw_sprite(SpriteId::Paddle, paddle.bounds.draw_position())?;
    }
    renderer.draw_sprite(SpriteId::Ball, state.ball.bounds.draw_position())
}

fn draw_scores<R: Renderer + ?Sized>(hud: &Hud, renderer: &mut R) -> Result<(), RenderError> {
    draw_line(&hud.player1_score, renderer)?;
    draw_line(&hud.player2_score, renderer)
}

fn draw_banner<R: Renderer + ?Sized>(hud: &Hud, renderer: &mut R) -> Result<(), RenderError> {
    for line in &hud.banner {
        draw_line(line, renderer)?;
    }
    Ok(())
}

fn draw_line<R: Renderer + ?Sized>(line: &TextLine, renderer: &mut R) -> Result<(), RenderError> {
    renderer.draw_text(line.font, &line.text, line.position)
}

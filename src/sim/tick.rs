//! Per-frame update
//!
//! Dispatches on the match phase and, while playing, advances the entities,
//! resolves paddle contacts and scoring, and steers the AI.

use rand::Rng;

use super::ai;
use super::paddle::{ControlMode, Player};
use super::state::{GamePhase, MatchState};
use crate::audio::{AudioManager, AudioSink, SoundEffect};
use crate::platform::{GameTime, Key, Keyboard, Viewport};

/// Key that starts or restarts a match
pub const START_KEY: Key = Key::Space;

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Escape was pressed; shut down
    Quit,
}

/// Advance the match by one frame
pub fn tick<R, K, S>(
    state: &mut MatchState<R>,
    time: GameTime,
    viewport: Viewport,
    keyboard: &K,
    audio: &mut AudioManager<S>,
) -> TickOutcome
where
    R: Rng,
    K: Keyboard + ?Sized,
    S: AudioSink,
{
    if keyboard.was_key_pressed_this_frame(Key::Escape) {
        log::info!("Quit requested");
        return TickOutcome::Quit;
    }

    match state.phase {
        GamePhase::Initial | GamePhase::GameOver => {
            if keyboard.was_key_pressed_this_frame(START_KEY) {
                state.start_match(viewport);
            }
        }
        GamePhase::Playing => play_frame(state, time, viewport, keyboard, audio),
    }

    TickOutcome::Continue
}

fn play_frame<R, K, S>(
    state: &mut MatchState<R>,
    time: GameTime,
    viewport: Viewport,
    keyboard: &K,
    audio: &mut AudioManager<S>,
) where
    R: Rng,
    K: Keyboard + ?Sized,
    S: AudioSink,
{
    let dt = time.elapsed;

    state.ball.update(dt, viewport);
    for paddle in &mut state.paddles {
        paddle.update(dt, keyboard, viewport);
    }

    resolve_paddle_contacts(state, audio);

    if state.ball.hit_wall {
        log::trace!("Wall bounce at y={}", state.ball.bounds.y);
        audio.play(SoundEffect::WallHit);
    }

    if let Some(scorer) = state.ball.scorer() {
        award_point(state, scorer, viewport, audio);
    }

    // A point may have just ended the match; frozen paddles stay frozen
    if state.phase != GamePhase::Playing {
        return;
    }

    for paddle in &mut state.paddles {
        if paddle.control == ControlMode::Ai {
            ai::track_ball(paddle, &state.ball, time.total, &state.tuning, &mut state.rng);
        }
    }
}

/// Reflect off a paddle once per overlap; the contact flag clears when the
/// rectangles separate.
fn resolve_paddle_contacts<R, S>(state: &mut MatchState<R>, audio: &mut AudioManager<S>)
where
    S: AudioSink,
{
    for (paddle, in_contact) in state.paddles.iter().zip(state.paddle_contact.iter_mut()) {
        let overlapping = state.ball.bounds.intersects(&paddle.bounds);
        if overlapping && !*in_contact {
            state.ball.velocity.x = -state.ball.velocity.x;
            audio.play(SoundEffect::PaddleHit);
            log::trace!("Ball hit paddle {}", paddle.player.number());
        }
        *in_contact = overlapping;
    }
}

fn award_point<R, S>(
    state: &mut MatchState<R>,
    scorer: Player,
    viewport: Viewport,
    audio: &mut AudioManager<S>,
) where
    R: Rng,
    S: AudioSink,
{
    audio.play(SoundEffect::Score);
    let points = state.score.increment(scorer);
    log::debug!(
        "Player {} scores ({} - {})",
        scorer.number(),
        state.score.player1,
        state.score.player2
    );

    if points < state.tuning.max_score {
        state.serve(viewport);
    } else {
        state.end_match(audio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::KeyboardState;
    use crate::sim::state::Score;
    use crate::tuning::Tuning;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn viewport() -> Viewport {
        Viewport::new(800, 600)
    }

    fn pressed(key: Key) -> KeyboardState {
        let mut keys = KeyboardState::new();
        keys.press(key);
        keys
    }

    fn playing_state(seed: u64) -> MatchState {
        let mut state = MatchState::new(seed, Tuning::default(), viewport());
        state.start_match(viewport());
        state
    }

    /// Park the ball mid-court, level with nothing, moving horizontally
    fn park_ball(state: &mut MatchState, x: i32, vx: f32) {
        state.ball.bounds.x = x;
        state.ball.bounds.y = 40;
        state.ball.velocity = Vec2::new(vx, 0.0);
    }

    #[test]
    fn test_start_from_initial() {
        let mut state = MatchState::new(12345, Tuning::default(), viewport());
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());

        // No input, stays on title
        let idle = KeyboardState::new();
        tick(&mut state, GameTime::new(DT, 0.0), viewport(), &idle, &mut audio);
        assert_eq!(state.phase, GamePhase::Initial);

        tick(&mut state, GameTime::new(DT, 0.0), viewport(), &pressed(START_KEY), &mut audio);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_start_while_playing_is_noop() {
        let mut state = playing_state(1);
        state.score.player1 = 2;
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());

        tick(&mut state, GameTime::new(DT, 1.5), viewport(), &pressed(START_KEY), &mut audio);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score.player1, 2);
    }

    #[test]
    fn test_escape_quits_in_every_phase() {
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        for phase in [GamePhase::Initial, GamePhase::Playing, GamePhase::GameOver] {
            let mut state = MatchState::new(1, Tuning::default(), viewport());
            state.phase = phase;
            let escape = pressed(Key::Escape);
            let outcome = tick(&mut state, GameTime::default(), viewport(), &escape, &mut audio);
            assert_eq!(outcome, TickOutcome::Quit);
            assert_eq!(state.phase, phase);
        }
    }

    #[test]
    fn test_point_reserves_ball() {
        let mut state = playing_state(7);
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        park_ball(&mut state, 790, 250.0);

        tick(&mut state, GameTime::new(0.1, 1.5), viewport(), &KeyboardState::new(), &mut audio);
        assert_eq!(state.score.player1, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.scorer(), None);
        assert_eq!(state.ball.bounds.center().x, 400);
        assert!(audio.sink().contains(&SoundEffect::Score));
    }

    #[test]
    fn test_reaching_max_score_ends_match() {
        let mut state = playing_state(7);
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        state.score.player2 = 2;
        park_ball(&mut state, 5, -250.0);

        tick(&mut state, GameTime::new(0.1, 1.5), viewport(), &KeyboardState::new(), &mut audio);
        assert_eq!(state.score.player2, 3);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.ball.velocity, Vec2::ZERO);
        assert!(state.paddles.iter().all(|p| p.velocity == Vec2::ZERO));
        assert_eq!(
            audio.sink(),
            &vec![SoundEffect::Score, SoundEffect::GameOver]
        );

        // Frozen afterwards
        let frozen = state.ball.bounds;
        tick(&mut state, GameTime::new(0.1, 1.6), viewport(), &KeyboardState::new(), &mut audio);
        assert_eq!(state.ball.bounds, frozen);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = playing_state(7);
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        state.score.player1 = 2;
        park_ball(&mut state, 790, 250.0);
        tick(&mut state, GameTime::new(0.1, 1.5), viewport(), &KeyboardState::new(), &mut audio);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.winner(), Some(Player::One));

        tick(&mut state, GameTime::new(DT, 2.0), viewport(), &pressed(START_KEY), &mut audio);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, Score::default());
        assert_ne!(state.ball.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_paddle_contact_reflects_once() {
        let mut state = playing_state(3);
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        let idle = KeyboardState::new();

        // Ball just left of the AI paddle, heading right, slowly
        let paddle = state.paddles[1].bounds;
        state.ball.bounds.x = paddle.left() - state.ball.bounds.width;
        state.ball.bounds.y = paddle.center().y;
        state.ball.velocity = Vec2::new(60.0, 0.0);
        state.paddles[1].velocity.y = 0.0;

        // Enters overlap, reflects
        tick(&mut state, GameTime::new(0.05, 1.5), viewport(), &idle, &mut audio);
        assert_eq!(state.ball.velocity.x, -60.0);
        assert_eq!(state.paddle_contact, [false, true]);

        // Push the ball deeper so it stays overlapped while moving away
        state.ball.bounds.x = paddle.left() + 2;
        tick(&mut state, GameTime::new(0.05, 1.5), viewport(), &idle, &mut audio);
        assert!(state.ball.bounds.intersects(&state.paddles[1].bounds));
        assert_eq!(state.ball.velocity.x, -60.0);

        let hits = audio
            .sink()
            .iter()
            .filter(|&&e| e == SoundEffect::PaddleHit)
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_contact_flag_clears_after_separation() {
        let mut state = playing_state(3);
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        let idle = KeyboardState::new();
        state.paddle_contact = [true, true];
        park_ball(&mut state, 400, 100.0);

        tick(&mut state, GameTime::new(DT, 1.5), viewport(), &idle, &mut audio);
        assert_eq!(state.paddle_contact, [false, false]);
        assert!(!audio.sink().contains(&SoundEffect::PaddleHit));
    }

    #[test]
    fn test_second_overlap_reflects_again() {
        let mut state = playing_state(3);
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        let idle = KeyboardState::new();
        let paddle = state.paddles[1].bounds;
        state.paddles[1].velocity.y = 0.0;

        // Into the AI paddle
        state.ball.bounds.x = paddle.left() - state.ball.bounds.width;
        state.ball.bounds.y = paddle.center().y;
        state.ball.velocity = Vec2::new(60.0, 0.0);
        tick(&mut state, GameTime::new(0.05, 1.5), viewport(), &idle, &mut audio);
        assert_eq!(state.ball.velocity.x, -60.0);
        assert_eq!(state.paddle_contact, [false, true]);

        // Back out of it
        tick(&mut state, GameTime::new(0.1, 1.6), viewport(), &idle, &mut audio);
        assert!(!state.ball.bounds.intersects(&state.paddles[1].bounds));
        assert_eq!(state.paddle_contact, [false, false]);

        // Turned around and in again
        state.ball.velocity.x = 60.0;
        tick(&mut state, GameTime::new(0.1, 1.7), viewport(), &idle, &mut audio);
        assert!(state.ball.bounds.intersects(&state.paddles[1].bounds));
        assert_eq!(state.ball.velocity.x, -60.0);

        let hits = audio
            .sink()
            .iter()
            .filter(|&&e| e == SoundEffect::PaddleHit)
            .count();
        assert_eq!(hits, 2);
    }

    #[test]
    fn test_wall_bounce_plays_cue() {
        let mut state = playing_state(5);
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        state.ball.bounds.x = 400;
        state.ball.bounds.y = 2;
        state.ball.velocity = Vec2::new(200.0, -300.0);

        tick(&mut state, GameTime::new(DT, 1.5), viewport(), &KeyboardState::new(), &mut audio);
        assert!(state.ball.velocity.y > 0.0);
        assert_eq!(audio.sink(), &vec![SoundEffect::WallHit]);
    }

    #[test]
    fn test_ai_reacts_during_play() {
        let mut state = playing_state(9);
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        state.paddles[1].velocity.y = 0.0;
        state.ball.bounds.x = 400;
        state.ball.bounds.y = 520;
        state.ball.velocity = Vec2::new(200.0, 0.0);

        tick(&mut state, GameTime::new(DT, 1.5), viewport(), &KeyboardState::new(), &mut audio);
        assert!(state.paddles[1].velocity.y > 0.0);

        // Inside the freeze window it stops
        tick(&mut state, GameTime::new(DT, 3.2), viewport(), &KeyboardState::new(), &mut audio);
        assert_eq!(state.paddles[1].velocity.y, 0.0);
    }

    #[test]
    fn test_human_paddle_follows_keys() {
        let mut state = playing_state(9);
        let mut audio = AudioManager::new(Vec::<SoundEffect>::new());
        park_ball(&mut state, 400, 100.0);
        let start = state.paddles[0].bounds.y;

        let up = pressed(Key::Up);
        tick(&mut state, GameTime::new(0.1, 1.5), viewport(), &up, &mut audio);
        assert_eq!(state.paddles[0].bounds.y, start - 25);
    }

    #[test]
    fn test_determinism() {
        let mut a = MatchState::new(4242, Tuning::default(), viewport());
        let mut b = MatchState::new(4242, Tuning::default(), viewport());
        let mut audio_a = AudioManager::new(Vec::<SoundEffect>::new());
        let mut audio_b = AudioManager::new(Vec::<SoundEffect>::new());
        let mut keys = KeyboardState::new();
        let mut time = GameTime::default();

        for frame in 0..600 {
            keys.set(START_KEY, frame == 0);
            keys.set(Key::Up, frame % 90 < 30);
            time.advance(DT);
            tick(&mut a, time, viewport(), &keys, &mut audio_a);
            tick(&mut b, time, viewport(), &keys, &mut audio_b);
            keys.end_frame();
        }

        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.ball.bounds, b.ball.bounds);
        assert_eq!(a.paddles[1].bounds, b.paddles[1].bounds);
        assert_eq!(audio_a.sink(), audio_b.sink());
    }
}

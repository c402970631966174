//! Fixed timestep simulation tick
//!
//! `tick` is the game state machine: it applies clicks, moves the paddle and
//! runs `step`, which advances the ball by exactly one tick.

use super::collision::{ball_below_floor, ball_paddle_collision, first_brick_hit, wall_contact};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::POINTS_PER_BRICK;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer x in playfield coordinates (None if the pointer is unknown)
    pub pointer_x: Option<f32>,
    /// Pointer pressed at least once since the previous tick
    pub press: bool,
}

/// Advance the game by one tick and report what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.press
        && let Some(event) = apply_press(state)
    {
        events.push(event);
    }

    if state.phase == GamePhase::Playing {
        if let Some(x) = input.pointer_x {
            let width = state.screen.x;
            state.paddle.track(x, width);
        }
        step(state, &mut events);
    }

    events
}

/// Handle a pointer press for the current phase
///
/// Starts the game from the start screen and serves a fresh ball after a lost
/// life. Presses in any other phase do nothing.
pub fn apply_press(state: &mut GameState) -> Option<GameEvent> {
    match state.phase {
        GamePhase::AwaitingStart => {
            state.phase = GamePhase::Playing;
            log::info!("Game started (seed {})", state.seed);
            Some(GameEvent::Started)
        }
        GamePhase::PausedLifeLost => {
            state.reset_ball();
            state.phase = GamePhase::Playing;
            log::info!("Resumed with {} lives", state.lives);
            Some(GameEvent::Resumed)
        }
        GamePhase::Playing | GamePhase::Won | GamePhase::GameOver => None,
    }
}

/// Run one simulation step
///
/// Order matters when several things happen in the same tick:
/// walls, then paddle, then bricks, then the win check, then the floor.
/// Does nothing unless the game is Playing.
pub fn step(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    let ball = &mut state.ball;
    ball.integrate();

    // Walls
    let walls = wall_contact(ball.pos, ball.vel, ball.radius, state.screen.x);
    if walls.ceiling {
        ball.vel.y = -ball.vel.y;
    }
    if walls.side {
        ball.vel.x = -ball.vel.x;
    }

    // Paddle
    if ball_paddle_collision(ball.pos, ball.radius, &state.paddle.rect()) {
        ball.vel.y = -ball.vel.y;
        log::debug!("Paddle hit at x={:.1}", ball.pos.x);
        events.push(GameEvent::PaddleHit);
    }

    // Bricks (one per tick)
    if let Some(index) = first_brick_hit(ball.pos, ball.radius, &state.bricks) {
        let brick = state.bricks.remove(index);
        ball.vel.y = -ball.vel.y;
        state.score += POINTS_PER_BRICK;
        log::debug!(
            "Brick {} destroyed, score {}, {} left",
            brick.id,
            state.score,
            state.bricks.len()
        );
        events.push(GameEvent::BrickDestroyed {
            id: brick.id,
            score: state.score,
        });
    }

    if state.bricks.is_empty() {
        state.phase = GamePhase::Won;
        log::info!("All bricks cleared, final score {}", state.score);
        events.push(GameEvent::Won);
        return;
    }

    if ball_below_floor(state.ball.pos, state.screen.y) {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!("Game over, final score {}", state.score);
            events.push(GameEvent::GameOver);
        } else {
            state.phase = GamePhase::PausedLifeLost;
            log::info!("Life lost, {} remaining", state.lives);
            events.push(GameEvent::LifeLost { lives: state.lives });
        }
    }
}

//! Game state and core simulation types
//!
//! Everything the simulation touches lives in one owned [`GameState`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen, waiting for the first click
    AwaitingStart,
    /// Active gameplay
    Playing,
    /// Ball fell out, waiting for a click to serve again
    PausedLifeLost,
    /// Every brick destroyed (terminal)
    Won,
    /// Out of lives (terminal)
    GameOver,
}

impl GamePhase {
    /// Won and GameOver end the session
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::GameOver)
    }
}

/// Things that happened during a tick, for presentation to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First click on the start screen
    Started,
    /// Click after losing a life; ball served again
    Resumed,
    /// Ball bounced off the paddle
    PaddleHit,
    /// Brick removed from the set
    BrickDestroyed { id: u32, score: u32 },
    /// Ball left through the floor with lives remaining
    LifeLost { lives: u8 },
    /// Ball left through the floor on the last life
    GameOver,
    /// Brick set emptied
    Won,
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// A ball at the serve position with a random horizontal direction
    pub fn served(rng: &mut impl Rng, screen: Vec2) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        };
        ball.serve(rng, screen);
        ball
    }

    /// Move to center-bottom and head up, left or right at random
    pub fn serve(&mut self, rng: &mut impl Rng, screen: Vec2) {
        self.pos = serve_position(screen);
        let vx = if rng.random_bool(0.5) {
            BALL_SPEED
        } else {
            -BALL_SPEED
        };
        self.vel = Vec2::new(vx, -BALL_SPEED);
    }

    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// Where the ball is served from
pub fn serve_position(screen: Vec2) -> Vec2 {
    Vec2::new(screen.x / 2.0, screen.y - BALL_START_OFFSET_Y)
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Center position (y never changes)
    pub pos: Vec2,
    /// Sprite size in pixels
    pub size: Vec2,
}

impl Paddle {
    pub fn new(screen: Vec2, size: Vec2) -> Self {
        Self {
            pos: Vec2::new(screen.x / 2.0, screen.y - PADDLE_OFFSET_Y),
            size,
        }
    }

    /// Bounding rect centered on the paddle position
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Follow the pointer, keeping the whole paddle on screen
    pub fn track(&mut self, pointer_x: f32, screen_width: f32) {
        let half = self.size.x / 2.0;
        let max = (screen_width - half).max(half);
        self.pos.x = pointer_x.clamp(half, max);
    }
}

/// A brick (never changes once built, only removed)
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub id: u32,
    pub rect: Rect,
}

impl Brick {
    pub fn new(id: u32, rect: Rect) -> Self {
        Self { id, rect }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the serve RNG started from
    pub seed: u64,
    /// Serve direction RNG
    pub rng: Pcg32,
    /// Playfield size
    pub screen: Vec2,
    /// Player lives
    pub lives: u8,
    /// Score
    pub score: u32,
    /// Ticks spent in Playing
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Active bricks in row-major order (top row first, left to right)
    pub bricks: Vec<Brick>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game with the default paddle size
    pub fn new(seed: u64) -> Self {
        Self::with_paddle_size(seed, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT))
    }

    /// Create a new game whose paddle matches the paddle sprite
    pub fn with_paddle_size(seed: u64, paddle_size: Vec2) -> Self {
        let screen = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::served(&mut rng, screen);

        let mut state = Self {
            seed,
            rng,
            screen,
            lives: STARTING_LIVES,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::AwaitingStart,
            paddle: Paddle::new(screen, paddle_size),
            ball,
            bricks: Vec::with_capacity(BRICK_ROWS * BRICK_COLS),
            next_id: 1,
        };

        state.build_bricks();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Lay out the brick grid
    fn build_bricks(&mut self) {
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                let x = BRICK_OFFSET_LEFT + col as f32 * (BRICK_WIDTH + BRICK_PADDING);
                let y = BRICK_OFFSET_TOP + row as f32 * (BRICK_HEIGHT + BRICK_PADDING);
                let id = self.next_entity_id();
                self.bricks
                    .push(Brick::new(id, Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT)));
            }
        }
    }

    /// Put the ball back at the serve position with a fresh direction
    pub fn reset_ball(&mut self) {
        let screen = self.screen;
        self.ball.serve(&mut self.rng, screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::AwaitingStart);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.len(), 21);
        assert_eq!(state.paddle.pos, Vec2::new(240.0, 315.0));
        assert_eq!(state.ball.pos, Vec2::new(240.0, 295.0));
        assert_eq!(state.ball.vel.y, -4.0);
        assert_eq!(state.ball.vel.x.abs(), 4.0);
    }

    #[test]
    fn test_brick_grid_row_major() {
        let state = GameState::new(7);
        assert_eq!(state.bricks[0].rect, Rect::new(60.0, 50.0, 50.0, 20.0));
        assert_eq!(state.bricks[1].rect, Rect::new(120.0, 50.0, 50.0, 20.0));
        assert_eq!(state.bricks[7].rect, Rect::new(60.0, 80.0, 50.0, 20.0));
        assert_eq!(state.bricks[20].rect, Rect::new(420.0, 110.0, 50.0, 20.0));
    }

    #[test]
    fn test_brick_ids_unique() {
        let state = GameState::new(7);
        let mut ids: Vec<u32> = state.bricks.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), state.bricks.len());
    }

    #[test]
    fn test_paddle_track_clamps() {
        let mut paddle = Paddle::new(Vec2::new(480.0, 320.0), Vec2::new(100.0, 10.0));
        paddle.track(-50.0, 480.0);
        assert_eq!(paddle.pos.x, 50.0);
        paddle.track(1000.0, 480.0);
        assert_eq!(paddle.pos.x, 430.0);
        paddle.track(123.0, 480.0);
        assert_eq!(paddle.pos.x, 123.0);
        // y is fixed
        assert_eq!(paddle.pos.y, 315.0);
    }

    #[test]
    fn test_paddle_size_from_sprite() {
        let state = GameState::with_paddle_size(1, Vec2::new(80.0, 12.0));
        let rect = state.paddle.rect();
        assert_eq!(rect.width, 80.0);
        assert_eq!(rect.height, 12.0);
        assert_eq!(rect.left(), 200.0);
    }

    #[test]
    fn test_reset_ball_serves_from_center_bottom() {
        let mut state = GameState::new(3);
        state.ball.pos = Vec2::new(17.0, 330.0);
        state.ball.vel = Vec2::new(-4.0, 4.0);
        state.reset_ball();
        assert_eq!(state.ball.pos, Vec2::new(240.0, 295.0));
        assert_eq!(state.ball.vel.y, -4.0);
        assert!(state.ball.vel.x == 4.0 || state.ball.vel.x == -4.0);
    }

    #[test]
    fn test_serve_direction_varies() {
        let mut rng = Pcg32::seed_from_u64(42);
        let screen = Vec2::new(480.0, 320.0);
        let directions: Vec<f32> = (0..64)
            .map(|_| Ball::served(&mut rng, screen).vel.x)
            .collect();
        assert!(directions.contains(&4.0));
        assert!(directions.contains(&-4.0));
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GamePhase::Won.is_terminal());
        assert!(GamePhase::GameOver.is_terminal());
        assert!(!GamePhase::Playing.is_terminal());
        assert!(!GamePhase::PausedLifeLost.is_terminal());
        assert!(!GamePhase::AwaitingStart.is_terminal());
    }
}

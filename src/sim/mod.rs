//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform code:
//! - One tick per call, velocities in pixels per tick
//! - State is a single owned `GameState`, mutated through `&mut`
//! - Side effects for presentation are reported as `GameEvent`s

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{WallContact, ball_paddle_collision, first_brick_hit, wall_contact};
pub use rect::Rect;
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, apply_press, step, tick};

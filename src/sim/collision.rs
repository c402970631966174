//! Collision detection for the ball
//!
//! The ball is never treated as a circle. Each check probes a single point on
//! its rim: the top of the ball for the ceiling and bricks, the bottom of the
//! ball for the paddle, and the center for the floor.

use glam::Vec2;

use super::rect::Rect;
use super::state::Brick;

/// Point at the top of the ball (used against the ceiling and bricks)
#[inline]
pub fn top_probe(pos: Vec2, radius: f32) -> Vec2 {
    Vec2::new(pos.x, pos.y - radius)
}

/// Point at the bottom of the ball (used against the paddle)
#[inline]
pub fn bottom_probe(pos: Vec2, radius: f32) -> Vec2 {
    Vec2::new(pos.x, pos.y + radius)
}

/// Which walls the ball is pressing into this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Top edge at or above the ceiling while moving up
    pub ceiling: bool,
    /// Left or right edge at or past a side bound while moving toward it
    pub side: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.ceiling || self.side
    }
}

/// Check the ball against the ceiling and side walls
///
/// A contact only counts while the ball is still heading into the wall, so a
/// ball that lingers past a bound for several ticks is reflected once.
pub fn wall_contact(pos: Vec2, vel: Vec2, radius: f32, screen_width: f32) -> WallContact {
    let ceiling = pos.y - radius <= 0.0 && vel.y < 0.0;
    let left = pos.x - radius <= 0.0 && vel.x < 0.0;
    let right = pos.x + radius >= screen_width && vel.x > 0.0;
    WallContact {
        ceiling,
        side: left || right,
    }
}

/// Check if the bottom of the ball is inside the paddle rect
#[inline]
pub fn ball_paddle_collision(pos: Vec2, radius: f32, paddle: &Rect) -> bool {
    paddle.contains(bottom_probe(pos, radius))
}

/// Index of the first brick (in set order) containing the top of the ball
pub fn first_brick_hit(pos: Vec2, radius: f32, bricks: &[Brick]) -> Option<usize> {
    let probe = top_probe(pos, radius);
    bricks.iter().position(|brick| brick.rect.contains(probe))
}

/// Check if the ball center has dropped past the bottom of the screen
#[inline]
pub fn ball_below_floor(pos: Vec2, screen_height: f32) -> bool {
    pos.y >= screen_height
}

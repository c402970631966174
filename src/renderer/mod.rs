//! Rendering module
//!
//! The game draws through the [`Canvas`] trait. The native build backs it with a
//! CPU [`Framebuffer`] that is uploaded and presented through wgpu each frame.

pub mod framebuffer;
pub mod palette;
pub mod pipeline;
#[cfg(test)]
pub(crate) mod test_support;

pub use framebuffer::{Color, Framebuffer};
pub use palette::BackgroundPalette;
pub use pipeline::Presenter;

use glam::Vec2;

use crate::assets::{Image, Sprites};
use crate::sim::{GamePhase, GameState};

pub const TITLE_TEXT: &str = "Brick Breaker";
pub const START_TEXT: &str = "Click to Start";
pub const LIFE_LOST_TEXT: &str = "You lost a life! Click to continue";
pub const GAME_OVER_TEXT: &str = "Game Over";
pub const WON_TEXT: &str = "You won the game, Congratulations!";

/// Start screen text sits this far above/below the center line
const START_SCREEN_SPREAD: f32 = 50.0;
/// HUD placement
const HUD_MARGIN: f32 = 10.0;
const LIVES_FROM_RIGHT: f32 = 100.0;

/// A render surface accepting draw commands
pub trait Canvas {
    /// Surface size in playfield pixels
    fn size(&self) -> Vec2;

    /// Fill the whole surface with one color
    fn fill(&mut self, color: Color);

    /// Draw an image with its top-left corner at `pos`
    fn draw_image(&mut self, image: &Image, pos: Vec2);

    /// Pixel size the text would occupy
    fn measure_text(&self, text: &str) -> Vec2;

    /// Draw a single line of text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color);

    /// Publish the finished frame
    fn present(&mut self) -> anyhow::Result<()>;
}

/// Draw the current state of the game (does not present)
pub fn draw_frame(
    canvas: &mut impl Canvas,
    state: &GameState,
    palette: &BackgroundPalette,
    sprites: &Sprites,
) {
    if state.phase == GamePhase::AwaitingStart {
        draw_start_screen(canvas);
        return;
    }

    canvas.fill(palette.current());

    draw_centered_sprite(canvas, &sprites.ball, state.ball.pos);
    draw_centered_sprite(canvas, &sprites.paddle, state.paddle.pos);
    for brick in &state.bricks {
        canvas.draw_image(&sprites.brick, brick.rect.origin());
    }

    let width = canvas.size().x;
    canvas.draw_text(
        &format!("Score: {}", state.score),
        Vec2::splat(HUD_MARGIN),
        Color::WHITE,
    );
    canvas.draw_text(
        &format!("Lives: {}", state.lives),
        Vec2::new(width - LIVES_FROM_RIGHT, HUD_MARGIN),
        Color::WHITE,
    );

    if let Some(text) = overlay_text(state.phase) {
        draw_centered_text(canvas, text, 0.0);
    }
}

/// Message shown over the playfield for a phase
pub fn overlay_text(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::PausedLifeLost => Some(LIFE_LOST_TEXT),
        GamePhase::GameOver => Some(GAME_OVER_TEXT),
        GamePhase::Won => Some(WON_TEXT),
        GamePhase::AwaitingStart | GamePhase::Playing => None,
    }
}

fn draw_start_screen(canvas: &mut impl Canvas) {
    canvas.fill(Color::BLACK);
    draw_centered_text(canvas, TITLE_TEXT, -START_SCREEN_SPREAD);
    draw_centered_text(canvas, START_TEXT, START_SCREEN_SPREAD);
}

/// Draw text centered on the surface, shifted vertically by `dy`
fn draw_centered_text(canvas: &mut impl Canvas, text: &str, dy: f32) {
    let center = canvas.size() / 2.0;
    let extent = canvas.measure_text(text);
    let pos = (center - extent / 2.0).floor() + Vec2::new(0.0, dy);
    canvas.draw_text(text, pos, Color::WHITE);
}

/// Draw a sprite whose logical position is its center
fn draw_centered_sprite(canvas: &mut impl Canvas, image: &Image, center: Vec2) {
    let pos = (center - image.size() / 2.0).floor();
    canvas.draw_image(image, pos);
}

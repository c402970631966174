//! Hit & Run - a single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Simulation (collisions, game state machine), no rendering or platform code
//! - `renderer`: Framebuffer canvas, background palette and wgpu presentation
//! - `platform`: Input sources, frame clock and the native winit shell
//! - `assets`: Sprite and font loading
//! - `driver`: Per-tick glue between input, simulation and rendering

pub mod assets;
pub mod driver;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{FrameControl, FrameDriver};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield size in pixels
    pub const SCREEN_WIDTH: f32 = 480.0;
    pub const SCREEN_HEIGHT: f32 = 320.0;

    /// Nominal tick rate
    pub const TICK_RATE: u32 = 60;

    /// Ball sprite is 20x20, collision probes sit one radius from the center
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_RADIUS: f32 = BALL_SIZE / 2.0;
    /// Per-axis speed in pixels per tick
    pub const BALL_SPEED: f32 = 4.0;
    /// Serve position, measured up from the bottom edge
    pub const BALL_START_OFFSET_Y: f32 = 25.0;

    /// Fallback paddle size (the real one comes from the paddle image)
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Paddle center, measured up from the bottom edge
    pub const PADDLE_OFFSET_Y: f32 = 5.0;

    /// Brick grid layout
    pub const BRICK_WIDTH: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_COLS: usize = 7;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 50.0;
    pub const BRICK_OFFSET_LEFT: f32 = 60.0;

    /// Scoring
    pub const POINTS_PER_BRICK: u32 = 10;
    pub const STARTING_LIVES: u8 = 3;
}

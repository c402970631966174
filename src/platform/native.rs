//! Native window shell
//!
//! winit owns the event loop. Window events are translated into the
//! [`EventQueue`] and [`FixedRateClock`] decides when the next tick runs.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::input::{EventQueue, InputEvent};
use super::time::FixedRateClock;
use crate::assets::{Font, Image, Sprites};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::driver::{FrameControl, FrameDriver};
use crate::renderer::{Canvas, Color, Framebuffer, Presenter};
use crate::settings::Settings;
use crate::sim::GameState;

pub const WINDOW_TITLE: &str = "HIT & RUN";

/// Canvas that rasterizes into a framebuffer and presents it through wgpu
pub struct WindowCanvas {
    framebuffer: Framebuffer,
    font: Font,
    presenter: Presenter,
}

impl WindowCanvas {
    pub fn new(framebuffer: Framebuffer, font: Font, presenter: Presenter) -> Self {
        Self {
            framebuffer,
            font,
            presenter,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.presenter.resize(width, height);
    }
}

impl Canvas for WindowCanvas {
    fn size(&self) -> Vec2 {
        self.framebuffer.size()
    }

    fn fill(&mut self, color: Color) {
        self.framebuffer.fill(color);
    }

    fn draw_image(&mut self, image: &Image, pos: Vec2) {
        self.framebuffer.blit(image, pos);
    }

    fn measure_text(&self, text: &str) -> Vec2 {
        self.font.measure(text)
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color) {
        let bitmap = self.font.render(text);
        self.framebuffer.blend_coverage(&bitmap, pos, color);
    }

    fn present(&mut self) -> Result<()> {
        self.presenter.present(&self.framebuffer)
    }
}

/// Map a physical cursor position into playfield coordinates
pub fn window_to_playfield(cursor: Vec2, window_size: Vec2, playfield: Vec2) -> Vec2 {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return cursor;
    }
    cursor * playfield / window_size
}

/// winit application: owns the window, the canvas and the frame driver
struct NativeApp {
    settings: Settings,
    driver: FrameDriver,
    /// Taken when the window is created
    font: Option<Font>,
    window: Option<Arc<Window>>,
    canvas: Option<WindowCanvas>,
    input: EventQueue,
    clock: FixedRateClock,
    error: Option<anyhow::Error>,
}

impl NativeApp {
    fn new(settings: Settings, driver: FrameDriver, font: Font) -> Self {
        let clock = FixedRateClock::new(settings.tick_rate);
        Self {
            settings,
            driver,
            font: Some(font),
            window: None,
            canvas: None,
            input: EventQueue::new(),
            clock,
            error: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let scale = self.settings.window_scale as f64;
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                SCREEN_WIDTH as f64 * scale,
                SCREEN_HEIGHT as f64 * scale,
            ))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let fb_width = SCREEN_WIDTH as u32;
        let fb_height = SCREEN_HEIGHT as u32;
        let presenter = Presenter::new(window.clone(), fb_width, fb_height)?;
        let font = self
            .font
            .take()
            .ok_or_else(|| anyhow::anyhow!("window created twice"))?;

        self.canvas = Some(WindowCanvas::new(
            Framebuffer::new(fb_width, fb_height),
            font,
            presenter,
        ));
        self.window = Some(window);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for NativeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create_window(event_loop) {
            self.fail(event_loop, err.context("failed to open the game window"));
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested");
                self.input.push(InputEvent::Quit);
            }

            WindowEvent::Resized(size) => {
                if let Some(canvas) = &mut self.canvas {
                    canvas.resize(size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    let pos = window_to_playfield(
                        Vec2::new(position.x as f32, position.y as f32),
                        Vec2::new(size.width as f32, size.height as f32),
                        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                    );
                    self.input.set_pointer(pos);
                }
            }

            // Any button counts
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => {
                self.input.push(InputEvent::PointerPressed);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.clock.is_due(now) {
            self.run_frame(event_loop, now);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}

impl NativeApp {
    fn run_frame(&mut self, event_loop: &ActiveEventLoop, now: Instant) {
        let Some(canvas) = &mut self.canvas else {
            // No window yet
            self.clock.advance(now);
            return;
        };
        match self.driver.frame(&mut self.input, canvas) {
            Ok(FrameControl::Continue) => self.clock.advance(now),
            Ok(FrameControl::Exit) => event_loop.exit(),
            Err(err) => self.fail(event_loop, err.context("frame failed")),
        }
    }
}

/// Load assets, open the window and play until the window closes
pub fn run(settings: Settings) -> Result<()> {
    let assets: PathBuf = settings.assets_dir.clone();
    let sprites = Sprites::load(&assets)?;
    let font = Font::load(&assets.join(&settings.font_file), settings.font_size)?;

    let seed = settings.resolve_seed();
    let state = GameState::with_paddle_size(seed, sprites.paddle.size());
    let palette = settings.palette();
    log::info!(
        "New game: seed {}, {} bricks, {} lives",
        seed,
        state.bricks.len(),
        state.lives
    );
    let driver = FrameDriver::new(state, palette, sprites);

    let event_loop = EventLoop::new()?;
    let mut app = NativeApp::new(settings, driver, font);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => {
            log::info!("Exited after {} frames", app.driver.frames());
            Ok(())
        }
    }
}

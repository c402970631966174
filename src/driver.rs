//! Frame driver
//!
//! One call to [`FrameDriver::frame`] is one tick: drain input, advance the
//! game, let presentation react, draw and present. [`run`] wraps it in a
//! blocking loop paced by a [`Clock`].

use anyhow::Result;

use crate::assets::Sprites;
use crate::platform::{Clock, InputEvent, InputSource};
use crate::renderer::{self, BackgroundPalette, Canvas};
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Whether the loop should keep going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Exit,
}

/// Owns the game and everything needed to draw it
pub struct FrameDriver {
    state: GameState,
    palette: BackgroundPalette,
    sprites: Sprites,
    frames: u64,
}

impl FrameDriver {
    pub fn new(state: GameState, palette: BackgroundPalette, sprites: Sprites) -> Self {
        Self {
            state,
            palette,
            sprites,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn palette(&self) -> &BackgroundPalette {
        &self.palette
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run a single tick
    ///
    /// A quit request ends the session before anything is simulated or drawn.
    pub fn frame(
        &mut self,
        input: &mut impl InputSource,
        canvas: &mut impl Canvas,
    ) -> Result<FrameControl> {
        let mut press = false;
        for event in input.drain_events() {
            match event {
                InputEvent::Quit => {
                    log::info!("Quit requested after {} frames", self.frames);
                    return Ok(FrameControl::Exit);
                }
                InputEvent::PointerPressed => press = true,
            }
        }

        let tick_input = TickInput {
            pointer_x: input.pointer().map(|p| p.x),
            press,
        };
        let events = tick(&mut self.state, &tick_input);
        self.present_events(&events);

        renderer::draw_frame(canvas, &self.state, &self.palette, &self.sprites);
        canvas.present()?;
        self.frames += 1;

        Ok(FrameControl::Continue)
    }

    /// Presentation-side reactions to simulation events
    fn present_events(&mut self, events: &[GameEvent]) {
        self.palette.react(events);
    }
}

/// Drive frames until the input asks to quit
pub fn run(
    driver: &mut FrameDriver,
    input: &mut impl InputSource,
    canvas: &mut impl Canvas,
    clock: &mut impl Clock,
) -> Result<()> {
    while driver.frame(input, canvas)? == FrameControl::Continue {
        clock.wait_for_next_tick();
    }
    Ok(())
}

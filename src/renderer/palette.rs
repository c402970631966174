//! Background color cycling
//!
//! Purely cosmetic: the background steps to the next color whenever the ball
//! bounces off the paddle or breaks a brick.

use super::framebuffer::Color;
use crate::sim::GameEvent;

/// Default background cycle (browns to pinks)
pub const DEFAULT_BACKGROUND_HEX: [&str; 11] = [
    "#6f4e37", "#89664e", "#a47f66", "#c0997f", "#dcba99", "#ff8b00", "#f9cfb4", "#ffecd0",
    "#fb5aaa", "#fba0b5", "#fec5ea",
];

/// The list of background colors and the one currently shown
#[derive(Debug, Clone)]
pub struct BackgroundPalette {
    colors: Vec<Color>,
    index: usize,
}

impl Default for BackgroundPalette {
    fn default() -> Self {
        Self::from_hex(&DEFAULT_BACKGROUND_HEX)
    }
}

impl BackgroundPalette {
    /// Build from hex strings, skipping any that don't parse
    ///
    /// Falls back to the default cycle if nothing usable is left.
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Self {
        let colors: Vec<Color> = hex
            .iter()
            .filter_map(|h| {
                let parsed = Color::from_hex(h.as_ref());
                if parsed.is_none() {
                    log::warn!("Ignoring invalid background color {:?}", h.as_ref());
                }
                parsed
            })
            .collect();

        if colors.is_empty() {
            log::warn!("Background palette is empty, using defaults");
            return Self::default_colors();
        }

        Self { colors, index: 0 }
    }

    fn default_colors() -> Self {
        let colors = DEFAULT_BACKGROUND_HEX
            .iter()
            .filter_map(|h| Color::from_hex(h))
            .collect();
        Self { colors, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Color to clear the playfield with
    pub fn current(&self) -> Color {
        self.colors[self.index]
    }

    /// Step to the next color, wrapping around
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.colors.len();
    }

    /// Advance once per paddle hit and once per destroyed brick
    pub fn react(&mut self, events: &[GameEvent]) {
        for event in events {
            if matches!(
                event,
                GameEvent::PaddleHit | GameEvent::BrickDestroyed { .. }
            ) {
                self.advance();
            }
        }
    }
}

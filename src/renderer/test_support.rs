//! Canvas double for tests that don't need real pixels

use glam::Vec2;

use super::{Canvas, Color};
use crate::assets::{Image, Sprites};

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    Fill(Color),
    Image { size: Vec2, pos: Vec2 },
    Text { text: String, pos: Vec2 },
}

/// Records draw calls instead of rasterizing them
#[derive(Default)]
pub(crate) struct RecordingCanvas {
    pub commands: Vec<Command>,
    pub presented: usize,
    /// Fail the next present with this message
    pub fail_present: Option<String>,
}

impl RecordingCanvas {
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Image { .. }))
            .count()
    }

    /// Forget everything drawn so far
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Vec2 {
        Vec2::new(480.0, 320.0)
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(Command::Fill(color));
    }

    fn draw_image(&mut self, image: &Image, pos: Vec2) {
        self.commands.push(Command::Image {
            size: image.size(),
            pos,
        });
    }

    fn measure_text(&self, text: &str) -> Vec2 {
        // 10px per char, 20px tall
        Vec2::new(text.len() as f32 * 10.0, 20.0)
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, _color: Color) {
        self.commands.push(Command::Text {
            text: text.to_string(),
            pos,
        });
    }

    fn present(&mut self) -> anyhow::Result<()> {
        if let Some(message) = self.fail_present.take() {
            anyhow::bail!(message);
        }
        self.presented += 1;
        Ok(())
    }
}

/// Plain sprites at the bundled asset sizes
pub(crate) fn sprites() -> Sprites {
    Sprites {
        ball: Image::solid(20, 20, Color::WHITE),
        paddle: Image::solid(100, 10, Color::WHITE),
        brick: Image::solid(50, 20, Color::WHITE),
    }
}

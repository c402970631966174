//! CPU framebuffer at playfield resolution
//!
//! Sprites and text are composited here, then the whole buffer is uploaded to
//! the GPU once per frame.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::assets::{Image, TextBitmap};

/// An 8-bit RGBA color (layout matches `Rgba8UnormSrgb`)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Blend `self` over `dst` with an extra coverage factor (0-255)
    #[inline]
    fn over(self, dst: Color, coverage: u8) -> Color {
        let alpha = self.a as u32 * coverage as u32 / 255;
        if alpha == 0 {
            return dst;
        }
        if alpha == 255 {
            return Color { a: 255, ..self };
        }
        let inv = 255 - alpha;
        let mix = |s: u8, d: u8| ((s as u32 * alpha + d as u32 * inv) / 255) as u8;
        Color {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: 255,
        }
    }
}

/// An RGBA pixel buffer
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Raw RGBA bytes, row-major, for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Alpha-blend an image with its top-left corner at `pos` (clipped to the buffer)
    pub fn blit(&mut self, image: &Image, pos: Vec2) {
        let (ox, oy) = (pos.x.floor() as i64, pos.y.floor() as i64);
        self.composite(ox, oy, image.width(), image.height(), |ix, iy| {
            (image.pixel(ix, iy), 255)
        });
    }

    /// Paint `color` through a coverage mask (rasterized text)
    pub fn blend_coverage(&mut self, bitmap: &TextBitmap, pos: Vec2, color: Color) {
        let (ox, oy) = (pos.x.floor() as i64, pos.y.floor() as i64);
        self.composite(ox, oy, bitmap.width, bitmap.height, |ix, iy| {
            (color, bitmap.coverage[(iy * bitmap.width + ix) as usize])
        });
    }

    /// Blend a `w`x`h` source at (`ox`, `oy`), skipping anything off the buffer
    fn composite(
        &mut self,
        ox: i64,
        oy: i64,
        w: u32,
        h: u32,
        source: impl Fn(u32, u32) -> (Color, u8),
    ) {
        let x0 = ox.max(0);
        let y0 = oy.max(0);
        let x1 = (ox + w as i64).min(self.width as i64);
        let y1 = (oy + h as i64).min(self.height as i64);

        for y in y0..y1 {
            let row = (y as u32 * self.width) as usize;
            for x in x0..x1 {
                let (src, coverage) = source((x - ox) as u32, (y - oy) as u32);
                let dst = &mut self.pixels[row + x as usize];
                *dst = src.over(*dst, coverage);
            }
        }
    }
}

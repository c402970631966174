//! Sprite and font loading
//!
//! Layout under the assets directory:
//! - `img/ball.png`, `img/paddle.png`, `img/brick.png`
//! - `font.ttf`
//!
//! Every load failure is fatal; the game never starts with missing assets.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use glam::Vec2;

use crate::renderer::Color;

/// A decoded RGBA image
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// Build from raw RGBA8 bytes (row-major, `width * height * 4` long)
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(anyhow!(
                "image data is {} bytes, expected {} for {}x{}",
                rgba.len(),
                expected,
                width,
                height
            ));
        }
        Ok(Self {
            width,
            height,
            pixels: bytemuck::cast_slice::<u8, Color>(rgba).to_vec(),
        })
    }

    /// A single-color image
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Decode a PNG from disk
    pub fn load(path: &Path) -> Result<Self> {
        let decoded = image::open(path)
            .with_context(|| format!("failed to load image {}", path.display()))?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        log::info!("Loaded {} ({}x{})", path.display(), width, height);
        Self::from_rgba(width, height, decoded.as_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }
}

/// The three game sprites
#[derive(Debug, Clone)]
pub struct Sprites {
    pub ball: Image,
    pub paddle: Image,
    pub brick: Image,
}

impl Sprites {
    pub fn load(assets_dir: &Path) -> Result<Self> {
        let img = assets_dir.join("img");
        Ok(Self {
            ball: Image::load(&img.join("ball.png"))?,
            paddle: Image::load(&img.join("paddle.png"))?,
            brick: Image::load(&img.join("brick.png"))?,
        })
    }
}

/// A rasterized line of text: one coverage byte per pixel
#[derive(Debug, Clone, Default)]
pub struct TextBitmap {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

/// A TTF font at a fixed pixel size
pub struct Font {
    inner: fontdue::Font,
    px: f32,
    ascent: f32,
    line_height: f32,
}

impl Font {
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self> {
        let inner = fontdue::Font::from_bytes(
            bytes,
            fontdue::FontSettings {
                scale: px,
                ..Default::default()
            },
        )
        .map_err(|e| anyhow!("failed to parse font: {e}"))?;

        let (ascent, line_height) = match inner.horizontal_line_metrics(px) {
            Some(metrics) => (metrics.ascent, metrics.ascent - metrics.descent),
            None => (px, px * 1.2),
        };

        Ok(Self {
            inner,
            px,
            ascent,
            line_height,
        })
    }

    pub fn load(path: &Path, px: f32) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read font {}", path.display()))?;
        let font =
            Self::from_bytes(&bytes, px).with_context(|| format!("in {}", path.display()))?;
        log::info!("Loaded font {} at {}px", path.display(), px);
        Ok(font)
    }

    /// Pixel size of a single line of text
    pub fn measure(&self, text: &str) -> Vec2 {
        let width: f32 = text
            .chars()
            .map(|ch| self.inner.metrics(ch, self.px).advance_width)
            .sum();
        Vec2::new(width.ceil(), self.line_height.ceil())
    }

    /// Rasterize a single line of text into a coverage mask
    pub fn render(&self, text: &str) -> TextBitmap {
        let extent = self.measure(text);
        let width = extent.x as u32;
        let height = extent.y as u32;
        let mut coverage = vec![0u8; (width * height) as usize];

        let mut pen_x = 0.0f32;
        for ch in text.chars() {
            let (metrics, glyph) = self.inner.rasterize(ch, self.px);
            // fontdue: ymin is the bottom of the glyph relative to the baseline (y up)
            let left = (pen_x + metrics.xmin as f32).round() as i64;
            let top = (self.ascent - metrics.height as f32 - metrics.ymin as f32).round() as i64;

            for gy in 0..metrics.height {
                let y = top + gy as i64;
                if y < 0 || y >= height as i64 {
                    continue;
                }
                for gx in 0..metrics.width {
                    let x = left + gx as i64;
                    if x < 0 || x >= width as i64 {
                        continue;
                    }
                    let dst = &mut coverage[(y as u32 * width + x as u32) as usize];
                    *dst = (*dst).max(glyph[gy * metrics.width + gx]);
                }
            }

            pen_x += metrics.advance_width;
        }

        TextBitmap {
            width,
            height,
            coverage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba() {
        let rgba = [255, 0, 0, 255, 0, 255, 0, 128];
        let image = Image::from_rgba(2, 1, &rgba).unwrap();
        assert_eq!(image.size(), Vec2::new(2.0, 1.0));
        assert_eq!(image.pixel(0, 0), Color::rgb(255, 0, 0));
        assert_eq!(image.pixel(1, 0), Color::rgba(0, 255, 0, 128));
    }

    #[test]
    fn test_from_rgba_rejects_bad_length() {
        assert!(Image::from_rgba(2, 2, &[0; 12]).is_err());
    }

    #[test]
    fn test_missing_image_is_error() {
        let err = Image::load(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(format!("{err:#}").contains("definitely/not/here.png"));
    }

    #[test]
    fn test_bundled_sprites_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let sprites = Sprites::load(&dir).unwrap();
        assert_eq!(sprites.ball.size(), Vec2::new(20.0, 20.0));
        assert_eq!(sprites.paddle.size(), Vec2::new(100.0, 10.0));
        assert_eq!(sprites.brick.size(), Vec2::new(50.0, 20.0));
        // Ball corners are transparent
        assert_eq!(sprites.ball.pixel(0, 0).a, 0);
        assert_eq!(sprites.ball.pixel(10, 10).a, 255);
    }

    #[test]
    fn test_missing_sprites_dir_is_error() {
        assert!(Sprites::load(Path::new("definitely/not/here")).is_err());
    }

    #[test]
    fn test_missing_font_is_error() {
        let err = Font::load(Path::new("definitely/not/here.ttf"), 24.0)
            .err()
            .unwrap();
        assert!(format!("{err:#}").contains("here.ttf"));
    }

    fn bundled_font() -> Font {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/font.ttf");
        Font::load(&path, 24.0).unwrap()
    }

    #[test]
    fn test_measure_grows_with_text() {
        let font = bundled_font();
        let short = font.measure("Score: 0");
        let long = font.measure("Score: 1000");
        assert!(short.x > 0.0);
        assert!(long.x > short.x);
        assert_eq!(short.y, long.y);
        assert!(font.measure("").x == 0.0);
    }

    #[test]
    fn test_render_matches_measure_and_has_ink() {
        let font = bundled_font();
        let extent = font.measure("Game Over");
        let bitmap = font.render("Game Over");
        assert_eq!(bitmap.width, extent.x as u32);
        assert_eq!(bitmap.height, extent.y as u32);
        assert_eq!(bitmap.coverage.len(), (bitmap.width * bitmap.height) as usize);
        assert!(bitmap.coverage.iter().any(|&c| c > 128));

        // Spaces take room but leave no ink
        let blank = font.render("   ");
        assert!(blank.width > 0);
        assert!(blank.coverage.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_garbage_font_is_error() {
        assert!(Font::from_bytes(b"not a font", 24.0).is_err());
    }
}

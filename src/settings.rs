//! Game settings
//!
//! Read from an optional JSON file. Every field has a default, so a partial
//! file only overrides what it names. Command-line flags are applied on top.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE;
use crate::renderer::BackgroundPalette;
use crate::renderer::palette::DEFAULT_BACKGROUND_HEX;

/// Window scale bounds (multiples of the 480x320 playfield)
pub const MIN_WINDOW_SCALE: f32 = 0.5;
pub const MAX_WINDOW_SCALE: f32 = 6.0;
/// Tick rate bounds
pub const MIN_TICK_RATE: u32 = 10;
pub const MAX_TICK_RATE: u32 = 240;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `img/` and the font
    pub assets_dir: PathBuf,
    /// Font file, relative to `assets_dir`
    pub font_file: String,
    /// Text size in pixels
    pub font_size: f32,
    /// Window size as a multiple of the playfield
    pub window_scale: f32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Background colors cycled on paddle and brick hits (`#rrggbb`)
    pub background_palette: Vec<String>,
    /// Fixed seed for the serve direction (random when unset)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            font_file: "font.ttf".to_string(),
            font_size: 24.0,
            window_scale: 2.0,
            tick_rate: TICK_RATE,
            background_palette: DEFAULT_BACKGROUND_HEX
                .iter()
                .map(|hex| hex.to_string())
                .collect(),
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// A missing file gives the defaults. So does an unreadable or malformed
    /// one, with a warning.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }

        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to read {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Malformed settings in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings JSON and clamp out-of-range values
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Pull numeric fields back into their supported ranges
    pub fn sanitize(&mut self) {
        let scale = if self.window_scale.is_finite() {
            self.window_scale
        } else {
            2.0
        };
        self.window_scale = scale.clamp(MIN_WINDOW_SCALE, MAX_WINDOW_SCALE);
        self.tick_rate = self.tick_rate.clamp(MIN_TICK_RATE, MAX_TICK_RATE);
        if !self.font_size.is_finite() || self.font_size < 1.0 {
            self.font_size = 24.0;
        }
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Background palette built from the configured hex colors
    pub fn palette(&self) -> BackgroundPalette {
        BackgroundPalette::from_hex(&self.background_palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tick_rate, 60);
        assert_eq!(settings.window_scale, 2.0);
        assert_eq!(settings.background_palette.len(), 11);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.palette().len(), 11);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "window_scale": 3.0 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.window_scale, 3.0);
        assert_eq!(settings.tick_rate, 60);
        assert_eq!(settings.font_file, "font.ttf");
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let settings =
            Settings::from_json(r#"{ "window_scale": 100.0, "tick_rate": 0, "font_size": -3 }"#)
                .unwrap();
        assert_eq!(settings.window_scale, MAX_WINDOW_SCALE);
        assert_eq!(settings.tick_rate, MIN_TICK_RATE);
        assert_eq!(settings.font_size, 24.0);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "tick_rate": "fast" }"#).is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load(Path::new("definitely/not/here/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = std::env::temp_dir().join(format!(
            "hit-and-run-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ \"seed\": ").unwrap();
        let settings = Settings::load(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_fixed_seed_is_used() {
        let settings = Settings {
            seed: Some(9),
            ..Default::default()
        };
        assert_eq!(settings.resolve_seed(), 9);
    }

    #[test]
    fn test_custom_palette() {
        let settings = Settings::from_json(r##"{ "background_palette": ["#ff0000", "#00ff00"] }"##)
            .unwrap();
        assert_eq!(settings.palette().len(), 2);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            seed: Some(5),
            tick_rate: 30,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}

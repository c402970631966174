//! Hit & Run entry point
//!
//! Parses the command line, loads settings and hands off to the native shell.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use hit_and_run::Settings;
use hit_and_run::platform::native;

#[derive(Parser, Debug)]
#[command(about = "Single-screen brick breaker", version)]
struct Args {
    /// Settings JSON file (missing file means defaults)
    #[arg(long, default_value = "settings.json")]
    settings: PathBuf,
    /// Asset directory (overrides the settings file)
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Seed for the serve direction
    #[arg(long)]
    seed: Option<u64>,
    /// Window size as a multiple of 480x320
    #[arg(long)]
    scale: Option<f32>,
}

impl Args {
    /// Command-line values win over the settings file
    fn apply(&self, settings: &mut Settings) {
        if let Some(assets) = &self.assets {
            settings.assets_dir = assets.clone();
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(scale) = self.scale {
            settings.window_scale = scale;
        }
        settings.sanitize();
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = Settings::load(&args.settings);
    args.apply(&mut settings);
    log::info!("Hit & Run starting ({:?})", settings);

    native::run(settings)
}

mod cli;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let start = Instant::now();

    let mut desc = glint_core::load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;
    args.apply(&mut desc);
    desc.validate().context("Invalid command-line overrides")?;

    let setup = glint_renderer::build(&desc).context("Failed to build scene")?;
    let image = setup.render();

    let output = args.output_path();
    image
        .to_rgb_image()
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!("Wrote {} in {:.2?}", output.display(), start.elapsed());
    Ok(())
}

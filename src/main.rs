use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use solar_map::{MapConfig, SolarMap, TextureSet};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "solar-map")]
#[command(about = "Render the 16-bit grayscale solar system map")]
struct Cli {
    /// Directory holding the equirectangular heightmaps
    #[arg(short, long, default_value = "assets")]
    assets: PathBuf,

    /// Where to write the PNG
    #[arg(
        short,
        long,
        default_value = "solar_system_16384x8192_tripled_rockies_moons_shifted_belt.png"
    )]
    output: PathBuf,

    /// Override the belt seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = MapConfig::new();
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    let map = SolarMap::new(config);

    let textures = TextureSet::load(&cli.assets, &map.catalog().textures)
        .with_context(|| format!("loading textures from {}", cli.assets.display()))?;
    info!(count = textures.len(), "textures loaded");

    let rendered = map.render(&textures).context("rendering map")?;
    info!(
        asteroids = rendered.asteroids.len(),
        moons = rendered.moons.len(),
        "render complete"
    );

    rendered
        .canvas
        .save(&cli.output)
        .with_context(|| format!("saving {}", cli.output.display()))?;
    println!("Saved: {}", cli.output.display());
    Ok(())
}

mod cli;

use anyhow::{Context, Result};
use carom_core::{load_scene, save_image, Camera, Scene};
use carom_renderer::{render_with_config, RenderConfig};
use clap::Parser;
use log::{info, LevelFilter};

use cli::Args;

/// Initialize the logger with the specified level
fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let (mut camera, scene) = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            info!("No scene file given, using the built-in billiard scene");
            (Camera::default(), Scene::carom())
        }
    };

    if let Some(width) = args.width {
        camera.width = width;
    }
    if let Some(height) = args.height {
        camera.height = height;
    }
    camera.validate().context("Invalid camera settings")?;

    let config = RenderConfig {
        parallel: args.parallel,
        bucket_size: args.bucket_size,
    };
    let framebuffer = render_with_config(&camera, &scene, &config);

    save_image(&framebuffer, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "carom")]
#[command(about = "Render a sphere scene with a one-ray-per-pixel ray-caster")]
pub struct Args {
    /// JSON scene file; the built-in billiard scene is used when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output image path (.ppm or .png)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Override the image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Render buckets in parallel on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Bucket edge length in pixels for parallel rendering
    #[arg(long, default_value_t = carom_renderer::DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Logging level (RUST_LOG still applies on top)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

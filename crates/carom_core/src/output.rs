//! Image writers for rendered framebuffers.
//!
//! Channel values are written exactly as rendered: no gamma, no color-space
//! conversion.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::info;
use thiserror::Error;

use crate::framebuffer::Framebuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Framebuffer holds {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Unsupported image format: {0} (expected .ppm or .png)")]
    UnsupportedFormat(String),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Write a binary PPM (`P6`) image to any writer.
pub fn write_ppm<W: Write>(framebuffer: &Framebuffer, mut writer: W) -> OutputResult<()> {
    write!(
        writer,
        "P6\n{} {}\n255\n",
        framebuffer.width(),
        framebuffer.height()
    )?;
    writer.write_all(framebuffer.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Save a framebuffer as a binary PPM file.
pub fn save_ppm(framebuffer: &Framebuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_ppm(framebuffer, BufWriter::new(file))?;
    info!("Image saved as {}", path.display());
    Ok(())
}

/// Save a framebuffer as a PNG file.
pub fn save_png(framebuffer: &Framebuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    let path = path.as_ref();
    let bytes = framebuffer.as_bytes().to_vec();
    let actual = bytes.len();
    let image = RgbImage::from_raw(framebuffer.width(), framebuffer.height(), bytes).ok_or(
        OutputError::SizeMismatch {
            expected: framebuffer.width() as usize * framebuffer.height() as usize * 3,
            actual,
        },
    )?;
    image.save_with_format(path, ImageFormat::Png)?;
    info!("Image saved as {}", path.display());
    Ok(())
}

/// Save a framebuffer, picking the format from the file extension.
pub fn save_image(framebuffer: &Framebuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => save_ppm(framebuffer, path),
        "png" => save_png(framebuffer, path),
        _ => Err(OutputError::UnsupportedFormat(path.display().to_string())),
    }
}

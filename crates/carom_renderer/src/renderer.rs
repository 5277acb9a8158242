//! Whole-image render loops.

use std::time::Instant;

use carom_core::{Camera, Color, Framebuffer, Scene};
use log::info;

use crate::bucket::{render_parallel, DEFAULT_BUCKET_SIZE};
use crate::tracer::trace_ray;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Render buckets on the rayon thread pool instead of a single thread
    pub parallel: bool,
    /// Bucket edge length in pixels for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Resolve the color of a single pixel.
#[inline]
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32) -> Color {
    trace_ray(scene, &camera.primary_ray(x, y))
}

/// Render the entire scene to a framebuffer.
///
/// Single-threaded, row by row from the top-left. Each pixel is written
/// exactly once.
pub fn render(camera: &Camera, scene: &Scene) -> Framebuffer {
    info!(
        "Rendering {}x{} ({} spheres, {} lights)",
        camera.width,
        camera.height,
        scene.spheres.len(),
        scene.lights.len()
    );
    let start = Instant::now();

    let mut framebuffer = Framebuffer::new(camera.width, camera.height);
    for y in 0..camera.height {
        for (x, pixel) in (0..camera.width).zip(framebuffer.row_mut(y)) {
            *pixel = render_pixel(camera, scene, x, y);
        }
    }

    info!("Image generated in {:.2?}", start.elapsed());
    framebuffer
}

/// Render with the given configuration.
pub fn render_with_config(camera: &Camera, scene: &Scene, config: &RenderConfig) -> Framebuffer {
    if config.parallel {
        render_parallel(camera, scene, config.bucket_size)
    } else {
        render(camera, scene)
    }
}

//! Parallel tile rendering. Buckets are traced on the rayon pool and then
//! copied into the framebuffer.

use std::time::Instant;

use carom_core::{Camera, Color, Framebuffer, Scene};
use log::{debug, info};
use rayon::prelude::*;

use crate::renderer::render_pixel;

/// A rectangular tile of the image, clipped to the image edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Tile the image, nearest the center first. A `bucket_size` of 0 is
/// treated as 1.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(bucket_size as usize)
        .flat_map(|y| {
            (0..width).step_by(bucket_size as usize).map(move |x| {
                let w = bucket_size.min(width - x);
                let h = bucket_size.min(height - y);
                Bucket::new(x, y, w, h, 0)
            })
        })
        .collect();

    sort_spiral(&mut buckets, width, height);
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let distance = |b: &Bucket| {
        let bx = b.x as f32 + b.width as f32 / 2.0;
        let by = b.y as f32 + b.height as f32 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    // Stable sort keeps row-major order among equidistant buckets
    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Pixels of one bucket, row-major within the bucket.
pub fn render_bucket(bucket: &Bucket, camera: &Camera, scene: &Scene) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            pixels.push(render_pixel(
                camera,
                scene,
                bucket.x + local_x,
                bucket.y + local_y,
            ));
        }
    }

    pixels
}

#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy this bucket's pixels into place.
    pub fn write_into(&self, framebuffer: &mut Framebuffer) {
        let width = self.bucket.width as usize;
        for (local_y, row) in self.pixels.chunks_exact(width).enumerate() {
            let y = self.bucket.y + local_y as u32;
            let start = self.bucket.x as usize;
            framebuffer.row_mut(y)[start..start + width].copy_from_slice(row);
        }
    }
}

/// Render the scene on the rayon thread pool, one bucket per task.
///
/// Produces exactly the same framebuffer as [`crate::render`].
pub fn render_parallel(camera: &Camera, scene: &Scene, bucket_size: u32) -> Framebuffer {
    let buckets = generate_buckets(camera.width, camera.height, bucket_size);
    info!(
        "Rendering {}x{} in {} buckets using {} threads",
        camera.width,
        camera.height,
        buckets.len(),
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, camera, scene)))
        .collect();

    let mut framebuffer = Framebuffer::new(camera.width, camera.height);
    for result in &results {
        result.write_into(&mut framebuffer);
    }
    debug!("Assembled {} buckets", results.len());

    info!("Image generated in {:.2?}", start.elapsed());
    framebuffer
}

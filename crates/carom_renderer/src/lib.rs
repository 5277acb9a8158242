//! Carom Renderer - one-ray-per-pixel CPU ray-caster.
//!
//! Casts a primary ray through every pixel, finds the nearest sphere and
//! shades it with ambient, diffuse and specular terms. No shadows, no
//! bounces, no anti-aliasing.

mod bucket;
mod lighting;
mod renderer;
mod sphere;
mod tracer;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use lighting::compute_lighting;
pub use renderer::{render, render_pixel, render_with_config, RenderConfig};
pub use sphere::{intersect, CONTACT_EPSILON};
pub use tracer::{closest_hit, trace_ray, HitRecord};

/// Re-export the scene model and math types
pub use carom_core::{Camera, Color, Framebuffer, Light, Scene, Sphere};
pub use carom_math::{Ray, Vec2, Vec3};

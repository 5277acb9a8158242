//! Carom Core - scene model, camera and image I/O for the Carom ray-caster.
//!
//! This crate provides:
//!
//! - **Scene types**: `Sphere`, `Light`, `Scene`, `Color`
//! - **Camera**: the fixed pinhole camera and its pixel-to-ray mapping
//! - **Framebuffer**: the row-major grid of rendered pixels
//! - **Scene files**: JSON scene loading with validation
//! - **Output**: PPM and PNG writers
//!
//! # Example
//!
//! ```ignore
//! use carom_core::{load_scene, save_image};
//!
//! let (camera, scene) = load_scene("scene.json")?;
//! println!("Loaded {} spheres, {} lights", scene.spheres.len(), scene.lights.len());
//! ```

pub mod camera;
pub mod color;
pub mod config;
pub mod framebuffer;
pub mod output;
pub mod scene;

// Re-export commonly used types
pub use camera::Camera;
pub use color::Color;
pub use config::{load_scene, load_scene_str, SceneError, SceneFile};
pub use framebuffer::Framebuffer;
pub use output::{save_image, save_png, save_ppm, write_ppm, OutputError};
pub use scene::{Light, Scene, Sphere};

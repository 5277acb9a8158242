//! JSON scene files.
//!
//! A scene file bundles the camera, background, spheres and lights:
//!
//! ```json
//! {
//!   "camera": { "eye": [0, 0, 0], "distance": 1.0, "viewport": [1, 1],
//!               "width": 800, "height": 800 },
//!   "background": [10, 10, 10],
//!   "spheres": [ { "center": [0, 1, 3], "radius": 1, "color": [255, 0, 0],
//!                  "specular": 500 } ],
//!   "lights": [ { "type": "ambient", "intensity": 0.2 } ]
//! }
//! ```
//!
//! `camera` and `background` are optional.

use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::Camera;
use crate::color::Color;
use crate::scene::{Light, Scene, Sphere, DEFAULT_BACKGROUND};

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scene: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Invalid sphere #{index}: {reason}")]
    InvalidSphere { index: usize, reason: String },

    #[error("Invalid light #{index}: {reason}")]
    InvalidLight { index: usize, reason: String },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// On-disk layout of a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub camera: Camera,

    #[serde(default = "default_background")]
    pub background: Color,

    #[serde(default)]
    pub spheres: Vec<Sphere>,

    #[serde(default)]
    pub lights: Vec<Light>,
}

fn default_background() -> Color {
    DEFAULT_BACKGROUND
}

impl SceneFile {
    /// Validate and split into the camera and scene used for rendering.
    pub fn into_parts(self) -> SceneResult<(Camera, Scene)> {
        self.camera.validate()?;

        for (index, sphere) in self.spheres.iter().enumerate() {
            validate_sphere(sphere).map_err(|reason| SceneError::InvalidSphere { index, reason })?;
        }
        for (index, light) in self.lights.iter().enumerate() {
            validate_light(light).map_err(|reason| SceneError::InvalidLight { index, reason })?;
        }

        let scene = Scene {
            spheres: self.spheres,
            lights: self.lights,
            background: self.background,
        };

        let total = scene.total_intensity();
        if (total - 1.0).abs() > 0.01 {
            warn!(
                "Light intensities sum to {:.3}; expect over- or under-exposure",
                total
            );
        }
        debug!(
            "Scene: {} spheres, {} lights, camera {}x{}",
            scene.spheres.len(),
            scene.lights.len(),
            self.camera.width,
            self.camera.height
        );

        Ok((self.camera, scene))
    }
}

fn validate_sphere(sphere: &Sphere) -> Result<(), String> {
    if !sphere.center.is_finite() {
        return Err(format!("center must be finite, got {}", sphere.center));
    }
    if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
        return Err(format!("radius must be positive, got {}", sphere.radius));
    }
    if !sphere.specular.is_finite() || sphere.specular < 0.0 {
        return Err(format!(
            "specular exponent must be >= 0, got {}",
            sphere.specular
        ));
    }
    Ok(())
}

fn validate_light(light: &Light) -> Result<(), String> {
    if !light.intensity().is_finite() {
        return Err(format!("intensity must be finite, got {}", light.intensity()));
    }
    match light {
        Light::Ambient { .. } => Ok(()),
        Light::Point { position, .. } if !position.is_finite() => {
            Err(format!("position must be finite, got {position}"))
        }
        Light::Directional { direction, .. } if !direction.is_finite() => {
            Err(format!("direction must be finite, got {direction}"))
        }
        _ => Ok(()),
    }
}

/// Parse and validate a scene from JSON text.
pub fn load_scene_str(text: &str) -> SceneResult<(Camera, Scene)> {
    let file: SceneFile = serde_json::from_str(text)?;
    file.into_parts()
}

/// Load and validate a scene file.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<(Camera, Scene)> {
    let path = path.as_ref();
    debug!("Loading scene from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    load_scene_str(&text)
}

//! Scene types for Carom.
//!
//! A scene is an ordered list of spheres, an ordered list of lights and a
//! background color. It is built once and only read while rendering.

use carom_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A sphere with a flat base color and a Phong specular exponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center in world space
    pub center: Vec3,

    /// Radius, expected > 0
    pub radius: f32,

    /// Diffuse base color
    pub color: Color,

    /// Specular exponent; 0 disables the highlight
    #[serde(default)]
    pub specular: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, color: Color, specular: f32) -> Self {
        Self {
            center,
            radius,
            color,
            specular,
        }
    }
}

/// A light source.
///
/// Directional lights store the direction from the surface toward the light.
/// It does not need to be unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Light {
    Ambient { intensity: f32 },
    Point { intensity: f32, position: Vec3 },
    Directional { intensity: f32, direction: Vec3 },
}

impl Light {
    pub fn ambient(intensity: f32) -> Self {
        Light::Ambient { intensity }
    }

    pub fn point(intensity: f32, position: Vec3) -> Self {
        Light::Point {
            intensity,
            position,
        }
    }

    pub fn directional(intensity: f32, direction: Vec3) -> Self {
        Light::Directional {
            intensity,
            direction,
        }
    }

    /// Scalar intensity of this light, regardless of kind.
    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }
}

/// Background color of the built-in scene: a very dark grey.
pub const DEFAULT_BACKGROUND: Color = Color::new(10, 10, 10);

/// Everything a render pass needs besides the camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Spheres in scene order. The first one wins exact distance ties.
    pub spheres: Vec<Sphere>,

    /// Lights. Order has no effect on the result.
    pub lights: Vec<Light>,

    /// Color of pixels whose ray hits nothing
    pub background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND)
    }
}

impl Scene {
    /// Create an empty scene with the given background.
    pub fn new(background: Color) -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            background,
        }
    }

    /// Add a sphere.
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Add a light.
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Sum of all light intensities.
    ///
    /// Scenes whose lights add up to about 1.0 are neither over- nor
    /// under-exposed.
    pub fn total_intensity(&self) -> f32 {
        self.lights.iter().map(Light::intensity).sum()
    }

    /// The built-in demo scene: three billiard balls resting on a huge
    /// green ground sphere.
    ///
    /// +y points down the image, so the ground sits at large positive y.
    pub fn carom() -> Self {
        Scene::new(DEFAULT_BACKGROUND)
            .with_sphere(Sphere::new(
                Vec3::new(0.0, 1.0, 3.0),
                1.0,
                Color::new(255, 0, 0),
                500.0,
            ))
            .with_sphere(Sphere::new(
                Vec3::new(2.0, 0.0, 4.0),
                1.0,
                Color::new(255, 255, 0),
                500.0,
            ))
            .with_sphere(Sphere::new(
                Vec3::new(-2.0, 0.0, 4.0),
                1.0,
                Color::new(255, 255, 255),
                10.0,
            ))
            .with_sphere(Sphere::new(
                Vec3::new(0.0, 5001.0, 0.0),
                5000.0,
                Color::new(0, 255, 0),
                1000.0,
            ))
            .with_light(Light::ambient(0.2))
            .with_light(Light::point(0.6, Vec3::new(2.0, 1.0, 0.0)))
            .with_light(Light::directional(0.2, Vec3::new(1.0, 4.0, 4.0)))
    }
}

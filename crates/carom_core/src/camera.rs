//! Fixed pinhole camera and the pixel-to-ray mapping.

use carom_math::{normalize, Ray, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::SceneError;

/// Camera looking down +z from `eye` through a virtual image plane.
///
/// The camera never rotates. Pixel (0, 0) is the top-left of the output grid
/// and pixel y grows with world y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    /// Eye position, the origin of every primary ray
    pub eye: Vec3,

    /// Distance from the eye to the image plane
    pub distance: f32,

    /// Physical size of the image plane
    pub viewport: Vec2,

    /// Output grid width in pixels
    pub width: u32,

    /// Output grid height in pixels
    pub height: u32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            distance: 1.0,
            viewport: Vec2::ONE,
            width: 800,
            height: 800,
        }
    }
}

impl Camera {
    /// Create a camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the image plane's size and distance from the eye.
    pub fn with_viewport(mut self, viewport: Vec2, distance: f32) -> Self {
        self.viewport = viewport;
        self.distance = distance;
        self
    }

    /// Set the eye position.
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Number of pixels in the output grid.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Unit direction from the eye through pixel (x, y).
    ///
    /// The grid is centred on the optical axis, so the pixel at
    /// (width/2, height/2) looks straight down +z.
    pub fn pixel_to_ray(&self, x: u32, y: u32) -> Vec3 {
        let width = self.width as f32;
        let height = self.height as f32;

        let viewport_x = (x as f32 - width / 2.0) * self.viewport.x / width;
        let viewport_y = (y as f32 - height / 2.0) * self.viewport.y / height;

        normalize(Vec3::new(viewport_x, viewport_y, self.distance))
    }

    /// Primary ray for pixel (x, y), starting at the eye.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        Ray::new(self.eye, self.pixel_to_ray(x, y))
    }

    /// Check that the camera can produce well-formed rays.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidCamera(format!(
                "output grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(SceneError::InvalidCamera(format!(
                "distance to image plane must be positive, got {}",
                self.distance
            )));
        }
        if !self.viewport.is_finite() || self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return Err(SceneError::InvalidCamera(format!(
                "viewport size must be positive, got {}x{}",
                self.viewport.x, self.viewport.y
            )));
        }
        if !self.eye.is_finite() {
            return Err(SceneError::InvalidCamera(format!(
                "eye position must be finite, got {}",
                self.eye
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carom_math::length;

    #[test]
    fn test_center_pixel_looks_down_z() {
        let camera = Camera::new().with_resolution(100, 100);
        let dir = camera.pixel_to_ray(50, 50);
        assert_eq!(dir, Vec3::Z);
    }

    #[test]
    fn test_corner_pixel() {
        // Top-left pixel maps to (-0.5, -0.5, 1) before normalisation
        let camera = Camera::new().with_resolution(4, 4);
        let dir = camera.pixel_to_ray(0, 0);
        let expected = Vec3::new(-0.5, -0.5, 1.0).normalize();
        assert!((dir - expected).length() < 1e-6);
    }

    #[test]
    fn test_directions_are_unit() {
        let camera = Camera::new()
            .with_resolution(16, 9)
            .with_viewport(Vec2::new(1.6, 0.9), 1.0);
        for y in 0..camera.height {
            for x in 0..camera.width {
                let dir = camera.pixel_to_ray(x, y);
                assert!((length(dir) - 1.0).abs() < 1e-5);
                assert!(dir.z > 0.0);
            }
        }
    }

    #[test]
    fn test_y_grows_downward() {
        let camera = Camera::new().with_resolution(10, 10);
        assert!(camera.pixel_to_ray(5, 0).y < 0.0);
        assert!(camera.pixel_to_ray(5, 9).y > 0.0);
        assert!(camera.pixel_to_ray(0, 5).x < 0.0);
        assert!(camera.pixel_to_ray(9, 5).x > 0.0);
    }

    #[test]
    fn test_primary_ray_starts_at_eye() {
        let eye = Vec3::new(1.0, 2.0, -3.0);
        let camera = Camera::new().with_eye(eye);
        let ray = camera.primary_ray(0, 0);
        assert_eq!(ray.origin, eye);
    }

    #[test]
    fn test_validate() {
        assert!(Camera::new().validate().is_ok());
        assert!(Camera::new().with_resolution(0, 10).validate().is_err());
        assert!(Camera::new()
            .with_viewport(Vec2::ONE, 0.0)
            .validate()
            .is_err());
        assert!(Camera::new()
            .with_viewport(Vec2::new(1.0, -1.0), 1.0)
            .validate()
            .is_err());
        assert!(Camera::new()
            .with_viewport(Vec2::ONE, f32::NAN)
            .validate()
            .is_err());
    }
}

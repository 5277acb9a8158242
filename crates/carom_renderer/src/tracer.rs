//! Closest-hit search and color resolution for a single ray.

use carom_core::{Color, Scene, Sphere};
use carom_math::{normalize, Ray, Vec3};

use crate::lighting::compute_lighting;
use crate::sphere::intersect;

/// Record of the nearest ray-sphere intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Distance along the ray
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit normal at the intersection
    pub normal: Vec3,
    /// Sphere that was hit
    pub sphere: &'a Sphere,
}

/// Find the nearest sphere along `ray`.
///
/// Every sphere is tested. Exact distance ties go to the sphere that comes
/// first in scene order.
pub fn closest_hit<'a>(scene: &'a Scene, ray: &Ray) -> Option<HitRecord<'a>> {
    let mut closest: Option<(f32, &'a Sphere)> = None;

    for sphere in &scene.spheres {
        if let Some(t) = intersect(ray, sphere) {
            if closest.map_or(true, |(closest_so_far, _)| t < closest_so_far) {
                closest = Some((t, sphere));
            }
        }
    }

    closest.map(|(t, sphere)| {
        let point = ray.at(t);
        HitRecord {
            t,
            point,
            normal: normalize(point - sphere.center),
            sphere,
        }
    })
}

/// Compute the color seen along `ray`.
///
/// Misses return the scene background unchanged. Hits are shaded with the
/// scene's lights and the sphere's base color, saturated per channel.
pub fn trace_ray(scene: &Scene, ray: &Ray) -> Color {
    let Some(hit) = closest_hit(scene, ray) else {
        return scene.background;
    };

    // `reflect` yields the outgoing mirror direction, so the highlight test
    // needs the way back to the eye. Primary rays start at the eye, so that
    // is the reversed ray. Passing the ray direction itself would only light
    // the far side of each sphere.
    let to_viewer = -normalize(ray.direction());
    let lighting = compute_lighting(
        &scene.lights,
        hit.point,
        hit.normal,
        to_viewer,
        hit.sphere.specular,
    );

    hit.sphere.color.scaled(lighting)
}

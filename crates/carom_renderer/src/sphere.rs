//! Ray-sphere intersection.

use carom_core::Sphere;
use carom_math::{dot, Interval, Ray};

/// How far from the surface, measured along the ray, the origin may be and
/// still count as sitting on it.
pub const CONTACT_EPSILON: f32 = 1e-4;

/// Distance along `ray` to the first surface of `sphere` it meets.
///
/// Only hits strictly in front of the origin count. When the origin is inside
/// the sphere the exit point is returned. An origin lying on the surface and
/// heading inward reports the near root (clamped to 0), never the far side.
/// A zero-length direction never hits anything.
pub fn intersect(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    let direction = ray.direction();
    let oc = ray.origin() - sphere.center;

    let a = dot(direction, direction);
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * dot(oc, direction);
    let c = dot(oc, oc) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    let t1 = (-b - sqrtd) / (2.0 * a);
    let t2 = (-b + sqrtd) / (2.0 * a);

    // Origin on the surface, entering the sphere. Roots are in units of the
    // direction's length, so scale them back to distances.
    let speed = a.sqrt();
    if t1.abs() * speed <= CONTACT_EPSILON && t2 * speed > CONTACT_EPSILON {
        return Some(t1.max(0.0));
    }

    let candidate = if t1 > 0.0 && t2 > 0.0 {
        t1.min(t2)
    } else {
        t1.max(t2)
    };

    Interval::POSITIVE.surrounds(candidate).then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carom_core::Color;
    use carom_math::Vec3;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 1.0, Color::WHITE, 0.0)
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 3.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let t = intersect(&ray, &sphere).unwrap();
        assert!((t - 2.0).abs() < 1e-5); // Near side of the sphere
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 3.0));

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(intersect(&ray, &sphere), None);

        // Ray passing just outside
        let ray = Ray::new(Vec3::new(1.01, 0.0, 0.0), Vec3::Z);
        assert_eq!(intersect(&ray, &sphere), None);
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -3.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(intersect(&ray, &sphere), None);
    }

    #[test]
    fn test_origin_inside_sphere() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, Color::WHITE, 0.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let t = intersect(&ray, &sphere).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_origin_on_surface_aimed_at_center() {
        let center = Vec3::new(0.0, 0.0, 3.0);
        let sphere = unit_sphere_at(center);
        let origin = Vec3::new(0.0, 0.0, 2.0);
        let ray = Ray::new(origin, (center - origin).normalize());

        let t = intersect(&ray, &sphere).unwrap();
        assert!(t.abs() < 1e-3, "expected the near root, got {t}");
    }

    #[test]
    fn test_origin_just_inside_ignores_direction_scale() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 3.0));
        let origin = Vec3::new(0.0, 0.0, 2.05);

        for scale in [1.0, 1000.0] {
            let ray = Ray::new(origin, Vec3::new(0.0, 0.0, scale));
            let t = intersect(&ray, &sphere).unwrap();
            let point = ray.at(t);
            assert!(
                (point - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-3,
                "scale {scale}: exit point {point}"
            );
        }
    }

    #[test]
    fn test_origin_on_surface_with_long_direction() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 3.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, 1000.0));

        let t = intersect(&ray, &sphere).unwrap();
        assert!(t.abs() < 1e-6, "expected the near root, got {t}");
    }

    #[test]
    fn test_origin_on_surface_aimed_away() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 3.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 2.0), -Vec3::Z);
        assert_eq!(intersect(&ray, &sphere), None);
    }

    #[test]
    fn test_tangent_ray() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 3.0));
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Z);

        let t = intersect(&ray, &sphere).unwrap();
        assert!((t - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_unnormalized_direction() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 3.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));

        // t is measured in direction lengths
        let t = intersect(&ray, &sphere).unwrap();
        assert!((t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_direction_never_hits() {
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert_eq!(intersect(&ray, &unit_sphere_at(Vec3::new(0.0, 0.0, 3.0))), None);

        // Even from inside a sphere
        let big = Sphere::new(Vec3::ZERO, 10.0, Color::WHITE, 0.0);
        assert_eq!(intersect(&ray, &big), None);
    }
}

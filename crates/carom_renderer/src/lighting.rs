//! Local Phong-style lighting.
//!
//! Every light contributes regardless of occlusion: there is no shadow test.

use carom_core::Light;
use carom_math::{dot, normalize, reflect, Vec3};

/// Total light intensity reaching `point`.
///
/// `normal` is the unit surface normal and `to_viewer` the unit direction
/// from the point back toward the eye. A `specular` exponent of 0 disables
/// highlights. The result is not clamped; it usually lands in [0, 1] when
/// the light intensities sum to 1.
pub fn compute_lighting(
    lights: &[Light],
    point: Vec3,
    normal: Vec3,
    to_viewer: Vec3,
    specular: f32,
) -> f32 {
    lights
        .iter()
        .map(|light| light_contribution(light, point, normal, to_viewer, specular))
        .sum()
}

fn light_contribution(
    light: &Light,
    point: Vec3,
    normal: Vec3,
    to_viewer: Vec3,
    specular: f32,
) -> f32 {
    let (intensity, to_light) = match *light {
        Light::Ambient { intensity } => return intensity,
        Light::Point {
            intensity,
            position,
        } => (intensity, normalize(position - point)),
        Light::Directional {
            intensity,
            direction,
        } => (intensity, normalize(direction)),
    };

    let mut contribution = 0.0;

    // Diffuse
    let n_dot_l = dot(normal, to_light);
    if n_dot_l > 0.0 {
        contribution += intensity * n_dot_l;
    }

    // Specular
    if specular > 0.0 {
        let reflected = normalize(reflect(to_light, normal));
        let r_dot_v = dot(reflected, to_viewer);
        if r_dot_v > 0.0 {
            contribution += intensity * r_dot_v.powf(specular);
        }
    }

    contribution
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_ambient_only() {
        let lights = [Light::ambient(0.3), Light::ambient(0.2)];
        // Ambient ignores geometry entirely
        let lighting = compute_lighting(&lights, Vec3::ZERO, -Vec3::Z, Vec3::X, 100.0);
        assert!((lighting - 0.5).abs() < EPS);
    }

    #[test]
    fn test_no_lights_is_dark() {
        assert_eq!(compute_lighting(&[], Vec3::ZERO, Vec3::Y, Vec3::Y, 10.0), 0.0);
    }

    #[test]
    fn test_directional_head_on() {
        let lights = [Light::directional(0.8, Vec3::new(0.0, 0.0, -4.0))];
        let lighting = compute_lighting(&lights, Vec3::ZERO, -Vec3::Z, -Vec3::Z, 0.0);
        assert!((lighting - 0.8).abs() < EPS);
    }

    #[test]
    fn test_diffuse_falls_off_with_angle() {
        // Light 60 degrees off the normal: cos = 0.5
        let to_light = Vec3::new(3.0_f32.sqrt() / 2.0, 0.5, 0.0);
        let lights = [Light::directional(1.0, to_light)];
        let lighting = compute_lighting(&lights, Vec3::ZERO, Vec3::Y, Vec3::Y, 0.0);
        assert!((lighting - 0.5).abs() < EPS);
    }

    #[test]
    fn test_light_behind_surface() {
        let lights = [
            Light::directional(1.0, -Vec3::Y),
            Light::point(1.0, Vec3::new(0.0, -5.0, 0.0)),
        ];
        let lighting = compute_lighting(&lights, Vec3::ZERO, Vec3::Y, Vec3::Y, 0.0);
        assert_eq!(lighting, 0.0);
    }

    #[test]
    fn test_point_light_direction() {
        let lights = [Light::point(0.6, Vec3::new(0.0, 10.0, 0.0))];
        let point = Vec3::new(0.0, 1.0, 0.0);
        let lighting = compute_lighting(&lights, point, Vec3::Y, Vec3::Y, 0.0);
        assert!((lighting - 0.6).abs() < EPS);
    }

    #[test]
    fn test_specular_mirror_direction() {
        // Viewer exactly along the mirrored light direction gets the full highlight
        let lights = [Light::directional(0.5, Vec3::Y)];
        let lighting = compute_lighting(&lights, Vec3::ZERO, Vec3::Y, Vec3::Y, 10.0);
        assert!((lighting - 1.0).abs() < EPS); // 0.5 diffuse + 0.5 specular
    }

    #[test]
    fn test_specular_follows_reflection() {
        // Light from the +x side at 45 degrees reflects toward -x
        let lights = [Light::directional(1.0, Vec3::new(1.0, 1.0, 0.0))];
        let normal = Vec3::Y;
        let diffuse = std::f32::consts::FRAC_1_SQRT_2;

        let mirrored = Vec3::new(-1.0, 1.0, 0.0).normalize();
        let lit = compute_lighting(&lights, Vec3::ZERO, normal, mirrored, 50.0);
        assert!((lit - (diffuse + 1.0)).abs() < 1e-4);

        // Viewer on the same side as the light sees no highlight
        let same_side = Vec3::new(1.0, 1.0, 0.0).normalize();
        let unlit = compute_lighting(&lights, Vec3::ZERO, normal, same_side, 50.0);
        assert!((unlit - diffuse).abs() < 1e-4);
    }

    #[test]
    fn test_specular_disabled_at_zero() {
        let lights = [Light::directional(0.5, Vec3::Y)];
        let lighting = compute_lighting(&lights, Vec3::ZERO, Vec3::Y, Vec3::Y, 0.0);
        assert!((lighting - 0.5).abs() < EPS);
    }

    #[test]
    fn test_higher_exponent_tightens_highlight() {
        let lights = [Light::directional(1.0, Vec3::Y)];
        let view = Vec3::new(0.2, 1.0, 0.0).normalize();
        let broad = compute_lighting(&lights, Vec3::ZERO, Vec3::Y, view, 2.0);
        let tight = compute_lighting(&lights, Vec3::ZERO, Vec3::Y, view, 200.0);
        assert!(broad > tight);
        assert!(tight > 1.0); // diffuse term is still there
    }
}

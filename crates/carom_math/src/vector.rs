//! Free-standing vector helpers.
//!
//! glam covers the arithmetic. These add the zero-safe normalisation the
//! renderer relies on and the reflection used for specular highlights.

use crate::Vec3;

/// Dot product of two vectors.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Euclidean length, `sqrt(dot(v, v))`.
#[inline]
pub fn length(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Scale `v` to unit length.
///
/// A vector of exactly zero length has no direction and comes back as the
/// zero vector instead of dividing by zero. Callers must treat a zero result
/// as "no well-defined direction".
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = length(v);
    if len == 0.0 {
        Vec3::ZERO
    } else {
        v / len
    }
}

/// Reflect `l` about the axis `n`: `2 * dot(n, l) * n - l`.
///
/// With `l` pointing from a surface toward a light and `n` the unit surface
/// normal, the result points along the mirrored outgoing direction.
#[inline]
pub fn reflect(l: Vec3, n: Vec3) -> Vec3 {
    2.0 * dot(n, l) * n - l
}

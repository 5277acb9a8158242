// Re-export glam for convenience
pub use glam::*;

// Carom math types
mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{dot, length, normalize, reflect};

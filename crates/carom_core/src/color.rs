//! 8-bit RGB colors.

use bytemuck::{Pod, Zeroable};
use carom_math::Interval;
use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
///
/// `#[repr(C)]` with no padding, so a slice of colors can be viewed as the
/// raw `RGBRGB...` byte stream image writers expect.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a new color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by a lighting intensity.
    ///
    /// Results saturate to [0, 255] and are truncated toward zero, so an
    /// intensity of 1.0 leaves the color unchanged.
    pub fn scaled(self, intensity: f32) -> Color {
        Color {
            r: scale_channel(self.r, intensity),
            g: scale_channel(self.g, intensity),
            b: scale_channel(self.b, intensity),
        }
    }
}

#[inline]
fn scale_channel(channel: u8, intensity: f32) -> u8 {
    Interval::CHANNEL.clamp(channel as f32 * intensity) as u8
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

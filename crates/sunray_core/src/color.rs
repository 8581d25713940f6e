//! Display-ready 8-bit RGB color.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use sunray_math::Vec3;

/// An 8-bit RGB color.
///
/// Used for surface albedo and for final tone-mapped pixels. Light transport
/// itself runs on linear `Vec3` radiance. The layout is three tightly packed
/// bytes so a pixel slice can be handed out as raw RGB.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a new color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Reflectance fractions in [0, 1] per channel.
    pub fn to_reflectance(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32) / 255.0
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

//! Linear tone mapping from radiance to 8-bit color.

use sunray_core::Color;
use sunray_math::Vec3;

/// A tone-mapped pixel plus whether any channel had to be clamped at 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneMapped {
    pub color: Color,
    pub saturated: bool,
}

/// Scale by `exposure`, round to nearest, and clamp each channel to [0, 255].
///
/// Overexposure is not an error; it is reported through `saturated` so the
/// caller can count it.
pub fn tone_map(radiance: Vec3, exposure: f32) -> ToneMapped {
    let scaled = (radiance * exposure).round();
    let saturated = scaled.max_element() >= 255.0;
    let clamped = scaled.clamp(Vec3::ZERO, Vec3::splat(255.0));

    ToneMapped {
        color: Color::new(clamped.x as u8, clamped.y as u8, clamped.z as u8),
        saturated,
    }
}

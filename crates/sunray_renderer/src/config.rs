//! Render configuration.

use serde::{Deserialize, Serialize};
use sunray_math::Vec3;

/// Render configuration.
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Edge length of the square tiles the image is split into
    pub tile_size: u32,
    /// Hemisphere samples per indirect bounce
    pub indirect_samples: u32,
    /// Number of indirect bounces; recursion stops at this depth
    pub max_bounces: u32,
    /// Scale applied to radiance before rounding to 8-bit channels
    pub exposure: f32,
    /// Radiance returned by rays that escape the scene
    pub sky_radiance: Vec3,
    /// Base seed for the per-tile random streams
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_size: 16,
            indirect_samples: 32,
            max_bounces: 1,
            exposure: 40.0,
            sky_radiance: Vec3::new(1.0, 1.3, 1.8),
            seed: 0,
        }
    }
}

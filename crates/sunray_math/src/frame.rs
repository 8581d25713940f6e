//! Local shading frames and hemisphere sampling.

use std::f32::consts::PI;

use crate::{Mat3, Vec3};

/// Fixed world direction orthogonalized against the normal.
const REFERENCE_AXIS: Vec3 = Vec3::Z;
/// Used instead of [`REFERENCE_AXIS`] when the normal is nearly parallel to it.
const FALLBACK_AXIS: Vec3 = Vec3::X;

/// An orthonormal basis whose "up" (local +Y) axis is a surface normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub tangent: Vec3,
    pub normal: Vec3,
    pub bitangent: Vec3,
}

impl Frame {
    /// Build a frame around a unit normal.
    ///
    /// The tangent is a fixed world axis with its normal component removed
    /// (one Gram-Schmidt step), and the bitangent is `tangent × normal`.
    pub fn from_normal(normal: Vec3) -> Self {
        let axis = if normal.dot(REFERENCE_AXIS).abs() > 0.9 {
            FALLBACK_AXIS
        } else {
            REFERENCE_AXIS
        };

        let tangent = (axis - normal * axis.dot(normal)).normalize();
        let bitangent = tangent.cross(normal);

        Self {
            tangent,
            normal,
            bitangent,
        }
    }

    /// Rotation taking local coordinates (tangent, normal, bitangent) to world space.
    pub fn to_world_matrix(&self) -> Mat3 {
        Mat3::from_cols(self.tangent, self.normal, self.bitangent)
    }

    /// Rotate a local-space direction into world space.
    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.to_world_matrix() * local
    }
}

/// Map two uniform numbers in [0, 1) to a direction uniformly distributed
/// over the +Y hemisphere.
///
/// `xi1` is the cosine of the polar angle, `xi2` the fraction of a full turn
/// in azimuth.
pub fn uniform_hemisphere(xi1: f32, xi2: f32) -> Vec3 {
    let r = (1.0 - xi1 * xi1).max(0.0).sqrt();
    let phi = 2.0 * PI * xi2;
    Vec3::new(r * phi.cos(), xi1, r * phi.sin())
}

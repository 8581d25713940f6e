use sunray_math::Vec3;

/// Pinhole camera used to generate primary rays.
///
/// There is no roll: the vertical image axis is always world +Y. `direction`
/// and `right` must be unit length and orthogonal to each other; this is not
/// checked, and breaking it skews the projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Unit forward vector
    pub direction: Vec3,
    /// Unit vector pointing to the right of the image
    pub right: Vec3,
    /// Horizontal field of view in radians
    pub fov: f32,
}

impl Camera {
    /// World axis used for image rows.
    pub const UP: Vec3 = Vec3::Y;

    /// Create a new camera
    pub fn new(position: Vec3, direction: Vec3, right: Vec3, fov: f32) -> Self {
        Self {
            position,
            direction,
            right,
            fov,
        }
    }

    /// Create a camera looking along `direction`, deriving `right` from world up.
    ///
    /// `direction` is normalized. It must not be parallel to world up.
    pub fn looking_along(position: Vec3, direction: Vec3, fov: f32) -> Self {
        let direction = direction.normalize();
        let right = Self::UP.cross(direction).normalize();
        Self::new(position, direction, right, fov)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z, Vec3::X, 60.0_f32.to_radians())
    }
}

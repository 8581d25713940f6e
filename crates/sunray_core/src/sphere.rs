//! Sphere primitive, optionally emissive.

use sunray_math::{Ray, Vec3, EPSILON};

use crate::{Color, ObjectId};

/// A diffuse sphere that also acts as an area light when `intensity` is non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    id: ObjectId,
    center: Vec3,
    radius: f32,
    intensity: Vec3,
    albedo: Color,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(id: ObjectId, center: Vec3, radius: f32, intensity: Vec3, albedo: Color) -> Self {
        Self {
            id,
            center,
            radius,
            intensity,
            albedo,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Emitted radiance, zero for non-emissive spheres.
    pub fn intensity(&self) -> Vec3 {
        self.intensity
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn is_emissive(&self) -> bool {
        self.intensity != Vec3::ZERO
    }

    /// Distance along `ray` to the nearest surface crossing beyond `EPSILON`.
    ///
    /// A tangent ray (zero discriminant) counts as a miss. When the ray starts
    /// inside the sphere only the far root is ahead, and that one is returned.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let local_origin = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = 2.0 * local_origin.dot(ray.direction);
        let c = local_origin.length_squared() - self.radius * self.radius;

        let (root1, root2) = solve_quadratic(a, b, c)?;
        let (near, far) = if root1 <= root2 {
            (root1, root2)
        } else {
            (root2, root1)
        };

        if near > EPSILON {
            Some(near)
        } else if far > EPSILON {
            Some(far)
        } else {
            None
        }
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}

/// Real roots of `a·t² + b·t + c = 0`, unordered.
///
/// Uses the cancellation-free form `q = -(b ± √disc) / 2`, roots `q/a` and `c/q`.
/// Returns `None` unless the discriminant is strictly positive.
fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let q = if b < 0.0 {
        -0.5 * (b - sqrt_disc)
    } else {
        -0.5 * (b + sqrt_disc)
    };

    Some((q / a, c / q))
}

//! Triangle primitive.
//!
//! Uses a Möller-Trumbore style determinant test that also culls back faces.

use sunray_math::{Ray, Vec3, EPSILON};

use crate::{Color, ObjectId};

/// A single-sided triangle.
///
/// The front face is the side the normal points to, and the normal follows
/// from vertex winding as `(v2 - v0) × (v1 - v0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    id: ObjectId,
    vertices: [Vec3; 3],
    albedo: Color,
}

impl Triangle {
    /// Create a new triangle from three ordered vertices.
    pub fn new(id: ObjectId, v0: Vec3, v1: Vec3, v2: Vec3, albedo: Color) -> Self {
        Self {
            id,
            vertices: [v0, v1, v2],
            albedo,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    /// Distance along `ray` to the front face, if it is hit.
    ///
    /// Rejects back-face and grazing hits (determinant not below `-EPSILON`),
    /// points outside the triangle, and hits closer than `EPSILON`.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let [v0, v1, v2] = self.vertices;
        let edge0 = v1 - v0;
        let edge1 = v2 - v0;

        let p = ray.direction.cross(edge1);
        let det = p.dot(edge0);
        if det > -EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = ray.origin - v0;
        let u = inv_det * p.dot(s);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge0);
        let v = inv_det * ray.direction.dot(q);
        if !(0.0..=1.0).contains(&v) || u + v > 1.0 {
            return None;
        }

        let t = inv_det * q.dot(edge1);
        if t < EPSILON {
            return None;
        }

        Some(t)
    }

    /// Unit face normal, fixed by vertex order.
    pub fn normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        let edge0 = v1 - v0;
        let edge1 = v2 - v0;
        edge1.cross(edge0).normalize()
    }
}

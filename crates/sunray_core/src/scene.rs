//! Scene store.
//!
//! A `Scene` owns the camera, the sun, and the primitive collections. It is
//! filled through the `add_*` calls before rendering and only read afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};
use sunray_math::Vec3;
use thiserror::Error;

use crate::{Camera, Color, Sphere, Triangle};

/// Identifier unique to one primitive within a scene, across all primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kinds of primitive a scene stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Triangle,
    Sphere,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveKind::Triangle => f.write_str("triangle"),
            PrimitiveKind::Sphere => f.write_str("sphere"),
        }
    }
}

/// Errors that can occur while building a scene.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("{kind} capacity of {capacity} exceeded")]
    CapacityExceeded { kind: PrimitiveKind, capacity: usize },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Maximum number of primitives of each kind a scene accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneCapacity {
    pub triangles: usize,
    pub spheres: usize,
}

impl Default for SceneCapacity {
    fn default() -> Self {
        Self {
            triangles: 50,
            spheres: 10,
        }
    }
}

/// The always-present light.
///
/// Contributes `irradiance × cos θ` with no distance falloff, as if it were
/// infinitely far away, while still being aimed at from its `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sun {
    pub position: Vec3,
    pub irradiance: f32,
}

impl Sun {
    pub fn new(position: Vec3, irradiance: f32) -> Self {
        Self {
            position,
            irradiance,
        }
    }
}

/// A complete scene: camera, sun and primitives.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub sun: Sun,
    capacity: SceneCapacity,
    next_id: u32,
    triangles: Vec<Triangle>,
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create an empty scene with the default capacity.
    pub fn new(camera: Camera, sun: Sun) -> Self {
        Self::with_capacity(camera, sun, SceneCapacity::default())
    }

    /// Create an empty scene with an explicit capacity.
    pub fn with_capacity(camera: Camera, sun: Sun, capacity: SceneCapacity) -> Self {
        Self {
            camera,
            sun,
            capacity,
            next_id: 0,
            triangles: Vec::with_capacity(capacity.triangles),
            spheres: Vec::with_capacity(capacity.spheres),
        }
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a triangle and return its ID.
    pub fn add_triangle(
        &mut self,
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        albedo: Color,
    ) -> SceneResult<ObjectId> {
        if self.triangles.len() >= self.capacity.triangles {
            return Err(SceneError::CapacityExceeded {
                kind: PrimitiveKind::Triangle,
                capacity: self.capacity.triangles,
            });
        }

        let id = self.allocate_id();
        self.triangles.push(Triangle::new(id, v0, v1, v2, albedo));
        Ok(id)
    }

    /// Add a sphere and return its ID.
    ///
    /// A non-zero `intensity` makes the sphere a light source.
    pub fn add_sphere(
        &mut self,
        center: Vec3,
        radius: f32,
        intensity: Vec3,
        albedo: Color,
    ) -> SceneResult<ObjectId> {
        if self.spheres.len() >= self.capacity.spheres {
            return Err(SceneError::CapacityExceeded {
                kind: PrimitiveKind::Sphere,
                capacity: self.capacity.spheres,
            });
        }

        let id = self.allocate_id();
        if intensity != Vec3::ZERO {
            log::debug!("Sphere {} added as a light, intensity {}", id, intensity);
        }
        self.spheres.push(Sphere::new(id, center, radius, intensity, albedo));
        Ok(id)
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Spheres with non-zero emitted intensity.
    pub fn lights(&self) -> impl Iterator<Item = &Sphere> {
        self.spheres.iter().filter(|s| s.is_emissive())
    }

    pub fn capacity(&self) -> SceneCapacity {
        self.capacity
    }

    /// Get total primitive count.
    pub fn primitive_count(&self) -> usize {
        self.triangles.len() + self.spheres.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}

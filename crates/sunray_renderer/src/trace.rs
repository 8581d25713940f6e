//! Nearest-hit queries.
//!
//! Every query is a linear scan over all triangles, then all spheres. There is
//! no acceleration structure; scenes are expected to hold a few dozen
//! primitives at most.

use sunray_core::{ObjectId, Scene};
use sunray_math::{Ray, Vec3};

/// Which primitive a ray hit, by position in its scene collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveRef {
    Triangle(usize),
    Sphere(usize),
}

impl PrimitiveRef {
    /// Scene-wide ID of the referenced primitive.
    ///
    /// Panics if the index does not belong to `scene`.
    pub fn id(self, scene: &Scene) -> ObjectId {
        match self {
            PrimitiveRef::Triangle(i) => scene.triangles()[i].id(),
            PrimitiveRef::Sphere(i) => scene.spheres()[i].id(),
        }
    }
}

/// Closest intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub primitive: PrimitiveRef,
    pub distance: f32,
}

/// Shading information at the closest intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub id: ObjectId,
    pub distance: f32,
    pub point: Vec3,
    /// Geometric unit normal, not flipped towards the ray
    pub normal: Vec3,
    /// Diffuse reflectance in [0, 1] per channel
    pub albedo: Vec3,
    /// Emitted radiance, zero for non-emissive surfaces
    pub emission: Vec3,
}

/// Find the closest primitive hit by `ray`.
///
/// On equal distances the primitive scanned first wins.
pub fn trace_object(scene: &Scene, ray: &Ray) -> Option<Hit> {
    let mut closest: Option<Hit> = None;

    let mut consider = |primitive: PrimitiveRef, distance: Option<f32>| {
        if let Some(distance) = distance {
            if closest.map_or(true, |hit| distance < hit.distance) {
                closest = Some(Hit {
                    primitive,
                    distance,
                });
            }
        }
    };

    for (i, triangle) in scene.triangles().iter().enumerate() {
        consider(PrimitiveRef::Triangle(i), triangle.intersect(ray));
    }
    for (i, sphere) in scene.spheres().iter().enumerate() {
        consider(PrimitiveRef::Sphere(i), sphere.intersect(ray));
    }

    closest
}

/// ID of the closest primitive hit by `ray`, for visibility tests.
pub fn trace_id(scene: &Scene, ray: &Ray) -> Option<ObjectId> {
    trace_object(scene, ray).map(|hit| hit.primitive.id(scene))
}

/// Full shading information for the closest primitive hit by `ray`.
pub fn trace_detail(scene: &Scene, ray: &Ray) -> Option<SurfaceHit> {
    let hit = trace_object(scene, ray)?;
    let point = ray.at(hit.distance);

    let surface = match hit.primitive {
        PrimitiveRef::Triangle(i) => {
            let triangle = &scene.triangles()[i];
            SurfaceHit {
                id: triangle.id(),
                distance: hit.distance,
                point,
                normal: triangle.normal(),
                albedo: triangle.albedo().to_reflectance(),
                emission: Vec3::ZERO,
            }
        }
        PrimitiveRef::Sphere(i) => {
            let sphere = &scene.spheres()[i];
            SurfaceHit {
                id: sphere.id(),
                distance: hit.distance,
                point,
                normal: sphere.normal(point),
                albedo: sphere.albedo().to_reflectance(),
                emission: sphere.intensity(),
            }
        }
    };

    Some(surface)
}

//! Sunray Core - Scene storage and primitive geometry.
//!
//! This crate provides:
//!
//! - **Primitives**: `Triangle` and `Sphere`, each with ray intersection
//!   and surface normal queries
//! - **Scene store**: `Scene` holding the camera, the sun, and capacity-bounded
//!   primitive collections with unique IDs
//!
//! # Example
//!
//! ```
//! use sunray_core::{Camera, Color, Scene, Sun};
//! use sunray_math::Vec3;
//!
//! let mut scene = Scene::new(Camera::default(), Sun::new(Vec3::new(5.0, 5.0, -20.0), 15.0));
//! let id = scene
//!     .add_triangle(
//!         Vec3::new(0.0, 0.0, -20.0),
//!         Vec3::new(100.0, 0.0, 50.0),
//!         Vec3::new(-100.0, 0.0, 50.0),
//!         Color::WHITE,
//!     )
//!     .unwrap();
//! assert_eq!(scene.triangles().len(), 1);
//! assert_eq!(scene.triangles()[0].id(), id);
//! ```

pub mod camera;
pub mod color;
pub mod scene;
pub mod sphere;
pub mod triangle;

// Re-export commonly used types
pub use camera::Camera;
pub use color::Color;
pub use scene::{ObjectId, PrimitiveKind, Scene, SceneCapacity, SceneError, SceneResult, Sun};
pub use sphere::Sphere;
pub use triangle::Triangle;

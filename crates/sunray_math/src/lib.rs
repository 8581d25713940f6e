// Re-export glam for convenience
pub use glam::*;

// Sunray math types
mod frame;
mod ray;
pub use frame::{uniform_hemisphere, Frame};
pub use ray::Ray;

/// Distance below which an intersection counts as a self-hit at the ray origin.
pub const EPSILON: f32 = 1e-4;

//! Primary ray generation.

use sunray_core::Camera;
use sunray_math::{Ray, Vec3};

use crate::Resolution;

/// The camera's image plane, laid out for one output resolution.
///
/// The plane sits one unit in front of the camera. Its width spans the
/// horizontal field of view, and pixels are square.
#[derive(Debug, Clone, Copy)]
pub struct ImagePlane {
    origin: Vec3,
    center: Vec3,
    right: Vec3,
    up: Vec3,
    /// World units per pixel
    pixel_size: f32,
    half_width: f32,
    half_height: f32,
}

impl ImagePlane {
    pub fn new(camera: &Camera, resolution: Resolution) -> Self {
        let plane_width = 2.0 * (camera.fov / 2.0).tan();

        Self {
            origin: camera.position,
            center: camera.position + camera.direction,
            right: camera.right,
            up: Camera::UP,
            pixel_size: plane_width / resolution.width as f32,
            half_width: resolution.width as f32 / 2.0,
            half_height: resolution.height as f32 / 2.0,
        }
    }

    /// World-space position of the center of pixel (x, y); row 0 is the top.
    pub fn pixel_position(&self, x: u32, y: u32) -> Vec3 {
        let column = x as f32 + 0.5 - self.half_width;
        let row = self.half_height - (y as f32 + 0.5);
        self.center + self.right * (column * self.pixel_size) + self.up * (row * self.pixel_size)
    }

    /// Unit-direction ray from the camera through the center of pixel (x, y).
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        Ray::towards(self.origin, self.pixel_position(x, y))
    }
}

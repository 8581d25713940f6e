//! Sunray Renderer - tile-based CPU path tracing.
//!
//! Estimates radiance per pixel from direct sun and sphere-light
//! illumination plus one bounce of Monte Carlo indirect light, then tone maps
//! it to 8-bit color. The image is split into independent tiles that can be
//! rendered in any order or in parallel.
//!
//! # Example
//!
//! ```
//! use sunray_core::{Camera, Scene, Sun};
//! use sunray_math::Vec3;
//! use sunray_renderer::{FrameBuffer, RenderConfig, RenderSession, Resolution};
//!
//! let scene = Scene::new(Camera::default(), Sun::new(Vec3::new(5.0, 5.0, -20.0), 15.0));
//! let resolution = Resolution::new(32, 24);
//! let session = RenderSession::new(resolution, RenderConfig::default()).unwrap();
//!
//! let mut buffer = FrameBuffer::new(resolution);
//! for tile in 0..session.tile_count() {
//!     session.render_tile(&mut buffer, &scene, tile).unwrap();
//! }
//! assert_eq!(buffer.as_bytes().len(), 32 * 24 * 3);
//! ```

mod camera;
mod config;
mod error;
mod frame_buffer;
mod integrator;
mod session;
mod tile;
mod tonemap;
mod trace;

pub use camera::ImagePlane;
pub use config::RenderConfig;
pub use error::{RenderError, RenderResult};
pub use frame_buffer::{FrameBuffer, Resolution};
pub use integrator::radiance;
pub use session::{RenderSession, RenderStats};
pub use tile::{generate_tiles, tile_count, Tile, TileResult};
pub use tonemap::{tone_map, ToneMapped};
pub use trace::{trace_detail, trace_id, trace_object, Hit, PrimitiveRef, SurfaceHit};

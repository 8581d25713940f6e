//! Render sessions.
//!
//! A `RenderSession` owns the tile table for one output resolution. Tiles are
//! independent: each reads the shared scene, writes only its own pixels, and
//! draws from its own random stream seeded from the config seed and the tile
//! index. Rendering a tile twice with the same config gives identical pixels,
//! regardless of which thread ran it.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use sunray_core::Scene;

use crate::camera::ImagePlane;
use crate::integrator::radiance;
use crate::tile::{generate_tiles, Tile, TileResult};
use crate::tonemap::tone_map;
use crate::{FrameBuffer, RenderConfig, RenderError, RenderResult, Resolution};

/// Summary of a full-image render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub tiles: usize,
    /// Pixels with at least one channel clamped at 255
    pub saturated_pixels: u64,
    pub elapsed: Duration,
}

/// Tile table plus settings for rendering one image size.
#[derive(Debug)]
pub struct RenderSession {
    resolution: Resolution,
    config: RenderConfig,
    tiles: Vec<Tile>,
}

impl RenderSession {
    /// Split `resolution` into tiles of `config.tile_size`.
    pub fn new(resolution: Resolution, config: RenderConfig) -> RenderResult<Self> {
        if resolution.pixel_count() == 0 {
            return Err(RenderError::EmptyResolution {
                width: resolution.width,
                height: resolution.height,
            });
        }
        if config.tile_size == 0 {
            return Err(RenderError::InvalidTileSize);
        }
        if config.max_bounces > 0 && config.indirect_samples == 0 {
            log::warn!(
                "Indirect bounces enabled with zero samples; only direct light will be rendered"
            );
        }
        if config.exposure <= 0.0 {
            log::warn!("Non-positive exposure {}; every pixel will be black", config.exposure);
        }

        let tiles = generate_tiles(resolution.width, resolution.height, config.tile_size);
        log::debug!(
            "Render session {}x{}: {} tiles of {}px, {} indirect samples, {} bounce(s)",
            resolution.width,
            resolution.height,
            tiles.len(),
            config.tile_size,
            config.indirect_samples,
            config.max_bounces
        );

        Ok(Self {
            resolution,
            config,
            tiles,
        })
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Get a tile by index.
    pub fn tile(&self, index: usize) -> RenderResult<&Tile> {
        self.tiles.get(index).ok_or(RenderError::TileOutOfRange {
            index,
            count: self.tiles.len(),
        })
    }

    /// The deterministic random stream for a tile.
    pub fn tile_rng(&self, index: usize) -> StdRng {
        StdRng::seed_from_u64(tile_seed(self.config.seed, index))
    }

    /// Render one tile into `buffer`, using the tile's own random stream.
    pub fn render_tile(
        &self,
        buffer: &mut FrameBuffer,
        scene: &Scene,
        index: usize,
    ) -> RenderResult<()> {
        let mut rng = self.tile_rng(index);
        self.render_tile_with_rng(buffer, scene, index, &mut rng)
    }

    /// Render one tile into `buffer`, drawing samples from `rng`.
    ///
    /// Only pixels inside the tile are written.
    pub fn render_tile_with_rng(
        &self,
        buffer: &mut FrameBuffer,
        scene: &Scene,
        index: usize,
        rng: &mut dyn RngCore,
    ) -> RenderResult<()> {
        self.check_buffer(buffer)?;
        let result = self.render_tile_pixels_with_rng(scene, index, rng)?;
        buffer.write_tile(&result)
    }

    /// Render one tile to its own pixel list, using the tile's own random stream.
    pub fn render_tile_pixels(&self, scene: &Scene, index: usize) -> RenderResult<TileResult> {
        let mut rng = self.tile_rng(index);
        self.render_tile_pixels_with_rng(scene, index, &mut rng)
    }

    /// Render one tile to its own pixel list, drawing samples from `rng`.
    pub fn render_tile_pixels_with_rng(
        &self,
        scene: &Scene,
        index: usize,
        rng: &mut dyn RngCore,
    ) -> RenderResult<TileResult> {
        let tile = *self.tile(index)?;
        let plane = ImagePlane::new(&scene.camera, self.resolution);
        Ok(self.shade_tile(scene, &plane, tile, rng))
    }

    /// Render every tile in parallel and assemble the image.
    pub fn render(&self, buffer: &mut FrameBuffer, scene: &Scene) -> RenderResult<RenderStats> {
        self.check_buffer(buffer)?;
        let start = Instant::now();
        let plane = ImagePlane::new(&scene.camera, self.resolution);

        let results: Vec<TileResult> = self
            .tiles
            .par_iter()
            .map(|tile| {
                let mut rng = self.tile_rng(tile.index);
                self.shade_tile(scene, &plane, *tile, &mut rng)
            })
            .collect();

        let mut saturated_pixels = 0;
        for result in &results {
            saturated_pixels += result.saturated as u64;
            buffer.write_tile(result)?;
        }

        let stats = RenderStats {
            tiles: results.len(),
            saturated_pixels,
            elapsed: start.elapsed(),
        };
        log::info!(
            "Rendered {}x{} ({} tiles, {} primitives) in {:.2?}",
            self.resolution.width,
            self.resolution.height,
            stats.tiles,
            scene.primitive_count(),
            stats.elapsed
        );
        if saturated_pixels > 0 {
            log::info!("{} pixel(s) clamped at full intensity", saturated_pixels);
        }

        Ok(stats)
    }

    fn shade_tile(
        &self,
        scene: &Scene,
        plane: &ImagePlane,
        tile: Tile,
        rng: &mut dyn RngCore,
    ) -> TileResult {
        let mut pixels = Vec::with_capacity(tile.pixel_count() as usize);
        let mut saturated = 0;

        for (x, y) in tile.pixels() {
            let ray = plane.ray(x, y);
            let estimate = radiance(scene, &ray, 0, &self.config, rng);
            let mapped = tone_map(estimate, self.config.exposure);
            if mapped.saturated {
                saturated += 1;
            }
            pixels.push(mapped.color);
        }

        if saturated > 0 {
            log::debug!("Tile {}: {} pixel(s) overexposed", tile.index, saturated);
        }

        TileResult::new(tile, pixels, saturated)
    }

    fn check_buffer(&self, buffer: &FrameBuffer) -> RenderResult<()> {
        if buffer.resolution() != self.resolution {
            return Err(RenderError::BufferMismatch {
                expected: self.resolution,
                actual: buffer.resolution(),
            });
        }
        Ok(())
    }
}

impl Drop for RenderSession {
    fn drop(&mut self) {
        log::debug!("Render session released {} tiles", self.tiles.len());
    }
}

/// Seed for a tile's random stream, spreading indices across the seed space.
fn tile_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

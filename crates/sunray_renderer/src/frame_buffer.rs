//! Output pixel storage.

use serde::{Deserialize, Serialize};
use sunray_core::Color;

use crate::tile::TileResult;
use crate::{RenderError, RenderResult};

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Row-major RGB image, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    resolution: Resolution,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            pixels: vec![Color::BLACK; resolution.pixel_count()],
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Raw RGB bytes, `width × height × 3` long, with no row padding.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy a rendered tile into place.
    ///
    /// Fails without writing anything if the tile lies outside the buffer or
    /// its pixel list does not match its size.
    pub fn write_tile(&mut self, result: &TileResult) -> RenderResult<()> {
        let tile = &result.tile;
        let right = tile.x as u64 + tile.width as u64;
        let bottom = tile.y as u64 + tile.height as u64;
        let fits = right <= self.resolution.width as u64
            && bottom <= self.resolution.height as u64
            && result.pixels.len() as u64 == tile.width as u64 * tile.height as u64;
        if !fits {
            return Err(RenderError::TileOutOfBounds {
                index: tile.index,
                resolution: self.resolution,
            });
        }

        for (row, chunk) in result.pixels.chunks_exact(tile.width as usize).enumerate() {
            let start = self.offset(tile.x, tile.y + row as u32);
            self.pixels[start..start + chunk.len()].copy_from_slice(chunk);
        }
        Ok(())
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.resolution.width as usize + x as usize
    }
}

//! Tile decomposition of the image.
//!
//! Divides the image into square tiles that can be rendered independently
//! and in parallel. Tiles on the right and bottom edges are clipped to the
//! image, so the set covers every pixel exactly once.

use sunray_core::Color;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// X coordinate of the tile's top-left corner
    pub x: u32,
    /// Y coordinate of the tile's top-left corner
    pub y: u32,
    /// Width of the tile in pixels
    pub width: u32,
    /// Height of the tile in pixels
    pub height: u32,
    /// Index of this tile in render order
    pub index: usize,
}

impl Tile {
    /// Create a new tile.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this tile.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Absolute pixel coordinates covered by this tile, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| (x, y)))
    }
}

/// Number of tiles `generate_tiles` produces for an image.
pub fn tile_count(width: u32, height: u32, tile_size: u32) -> usize {
    width.div_ceil(tile_size) as usize * height.div_ceil(tile_size) as usize
}

/// Generate tiles for an image, row-major from the top-left corner.
///
/// `tile_size` must be non-zero.
pub fn generate_tiles(width: u32, height: u32, tile_size: u32) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(tile_count(width, height, tile_size));
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let tw = tile_size.min(width - x);
            let th = tile_size.min(height - y);
            tiles.push(Tile::new(x, y, tw, th, index));
            index += 1;
            x += tile_size;
        }
        y += tile_size;
    }

    tiles
}

/// Result of rendering a tile.
#[derive(Debug, Clone)]
pub struct TileResult {
    /// The tile that was rendered
    pub tile: Tile,
    /// Pixel colors in row-major order within the tile
    pub pixels: Vec<Color>,
    /// Number of pixels with at least one clamped channel
    pub saturated: u32,
}

impl TileResult {
    /// Create a new tile result.
    pub fn new(tile: Tile, pixels: Vec<Color>, saturated: u32) -> Self {
        Self {
            tile,
            pixels,
            saturated,
        }
    }
}

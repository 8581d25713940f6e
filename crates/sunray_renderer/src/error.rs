use thiserror::Error;

use crate::Resolution;

/// Errors that can occur while setting up or driving a render session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Resolution {width}x{height} has no pixels")]
    EmptyResolution { width: u32, height: u32 },

    #[error("Tile size must be non-zero")]
    InvalidTileSize,

    #[error("Tile index {index} out of range ({count} tiles)")]
    TileOutOfRange { index: usize, count: usize },

    #[error(
        "Frame buffer is {}x{}, session renders {}x{}",
        .actual.width,
        .actual.height,
        .expected.width,
        .expected.height
    )]
    BufferMismatch {
        expected: Resolution,
        actual: Resolution,
    },

    #[error(
        "Tile {index} does not fit a {}x{} frame buffer",
        .resolution.width,
        .resolution.height
    )]
    TileOutOfBounds { index: usize, resolution: Resolution },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

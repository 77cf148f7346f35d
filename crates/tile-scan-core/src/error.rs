//! Error types for tile-scan-core

use thiserror::Error;

/// Main error type for board scanning
#[derive(Error, Debug)]
pub enum Error {
    #[error("Screen access unavailable: {0}")]
    Capability(String),

    #[error("Failed to move pointer to ({x}, {y}): {message}")]
    Pointer { x: i32, y: i32, message: String },

    #[error("Failed to read pixel at ({x}, {y}): {message}")]
    PixelRead { x: i32, y: i32, message: String },

    #[error("Sample point ({x}, {y}) is outside the {width}x{height} screen")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scan operations
pub type Result<T> = std::result::Result<T, Error>;

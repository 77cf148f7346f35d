//! # tile-scan-core
//!
//! Core library for reading the state of a 2048-style board off the screen.
//!
//! The board is never parsed from an image as a whole. Instead a fixed set of
//! sample points (one per cell) is visited with the pointer and the pixel under
//! each point is matched against a fixed tile palette.
//!
//! ## Modules
//!
//! - [`config`] - Board geometry, palette and scan delays
//! - [`error`] - Error types and Result alias
//! - [`grid`] - The 4x4 board model and its text rendering
//! - [`scanner`] - The sampling loop
//! - [`screen`] - Pointer/pixel access and its backends
//!
//! ## Example
//!
//! ```no_run
//! use tile_scan_core::{BoardScanner, DesktopScreen, ScanConfig};
//!
//! let scanner = BoardScanner::new(ScanConfig::default());
//! let grid = scanner.scan(DesktopScreen::acquire).expect("scan failed");
//! print!("{}", grid.render());
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod scanner;
pub mod screen;

// Error types
pub use error::{Error, Result};

// Configuration
pub use config::{Palette, PaletteEntry, SamplePoint, ScanConfig, GRID_SIZE};

// Board model
pub use grid::Grid;

// Scanning
pub use scanner::BoardScanner;

// Screen access
pub use screen::{DesktopScreen, ImageScreen, ScreenAccess};

// Colors are plain `image` pixels
pub use image::Rgb;

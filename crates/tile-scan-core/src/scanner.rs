//! The sampling loop that turns screen pixels into a [`Grid`]

use std::thread;

use crate::config::{ScanConfig, GRID_SIZE};
use crate::error::Result;
use crate::grid::Grid;
use crate::screen::ScreenAccess;

/// Reads a board by visiting one sample point per cell
#[derive(Debug, Clone, Default)]
pub struct BoardScanner {
    config: ScanConfig,
}

impl BoardScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Wait out the warm-up delay, acquire screen access, then sample.
    ///
    /// `acquire` is only called after the warm-up, so the operator has time
    /// to bring the game window to the front. An acquisition error aborts the
    /// scan before any pointer movement.
    pub fn scan<S, F>(&self, acquire: F) -> Result<Grid>
    where
        S: ScreenAccess,
        F: FnOnce() -> Result<S>,
    {
        tracing::info!("Waiting {:?} before scanning", self.config.warmup);
        thread::sleep(self.config.warmup);

        let mut screen = acquire()?;
        self.scan_with(&mut screen)
    }

    /// Sample every cell through an already acquired screen.
    ///
    /// Cells are visited column by column. A color missing from the palette
    /// leaves the cell at 0, the same as an empty tile.
    pub fn scan_with<S: ScreenAccess + ?Sized>(&self, screen: &mut S) -> Result<Grid> {
        let palette = &self.config.palette;
        let mut grid = Grid::new();

        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                thread::sleep(self.config.settle);

                let point = self.config.sample_point(x, y);
                screen.move_pointer(point)?;
                let pixel = screen.pixel_color(point)?;

                match palette.classify(pixel) {
                    Some(value) => {
                        tracing::debug!("Cell ({}, {}) at {}: {:?} -> {}", x, y, point, pixel.0, value);
                        grid.set(y, x, value);
                    }
                    None => {
                        tracing::warn!(
                            "Cell ({}, {}) at {}: unknown color {:?}, treating as empty",
                            x,
                            y,
                            point,
                            pixel.0
                        );
                    }
                }
            }
        }

        tracing::info!("Scan complete");
        Ok(grid)
    }
}

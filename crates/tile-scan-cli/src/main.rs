//! tile-scan - reads a 2048 board off the screen
//!
//! Usage:
//!   tile-scan    Wait two seconds, sample the board, print it
//!
//! Bring the game window to the front during the initial pause. The pointer
//! is moved across the board while sampling.

use std::io::{self, Write};

use anyhow::Context;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use tile_scan_core::{BoardScanner, DesktopScreen, ScanConfig};

fn main() -> anyhow::Result<()> {
    init_logging();

    let scanner = BoardScanner::new(ScanConfig::default());
    let grid = scanner
        .scan(DesktopScreen::acquire)
        .context("Failed to scan the board")?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(grid.render().as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn init_logging() {
    // stdout carries the board, diagnostics go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

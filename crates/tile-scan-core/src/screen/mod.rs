//! Pointer and pixel access.
//!
//! The scanner never talks to the display directly. It goes through
//! [`ScreenAccess`], which has two backends:
//!
//! - [`DesktopScreen`] - the real pointer and screen (`desktop` feature)
//! - [`ImageScreen`] - a screenshot held in memory
//!
//! ## Usage
//!
//! ```ignore
//! use tile_scan_core::screen::{ImageScreen, ScreenAccess};
//! use tile_scan_core::SamplePoint;
//!
//! let mut screen = ImageScreen::open("board.png")?;
//! let point = SamplePoint::new(490, 380);
//! screen.move_pointer(point)?;
//! let color = screen.pixel_color(point)?;
//! ```

mod desktop;
mod snapshot;

pub use desktop::DesktopScreen;
pub use snapshot::ImageScreen;

use image::Rgb;

use crate::config::SamplePoint;
use crate::error::Result;

/// Something that can move the pointer and report the color under a point
pub trait ScreenAccess {
    /// Move the pointer to an absolute screen position
    fn move_pointer(&mut self, point: SamplePoint) -> Result<()>;

    /// Color of the pixel at an absolute screen position
    fn pixel_color(&mut self, point: SamplePoint) -> Result<Rgb<u8>>;
}

impl<S: ScreenAccess + ?Sized> ScreenAccess for &mut S {
    fn move_pointer(&mut self, point: SamplePoint) -> Result<()> {
        (**self).move_pointer(point)
    }

    fn pixel_color(&mut self, point: SamplePoint) -> Result<Rgb<u8>> {
        (**self).pixel_color(point)
    }
}

impl<S: ScreenAccess + ?Sized> ScreenAccess for Box<S> {
    fn move_pointer(&mut self, point: SamplePoint) -> Result<()> {
        (**self).move_pointer(point)
    }

    fn pixel_color(&mut self, point: SamplePoint) -> Result<Rgb<u8>> {
        (**self).pixel_color(point)
    }
}

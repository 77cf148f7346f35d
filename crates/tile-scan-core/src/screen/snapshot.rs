//! Screen access backed by a screenshot.

use image::{Rgb, RgbImage};
use std::path::Path;

use super::ScreenAccess;
use crate::config::SamplePoint;
use crate::error::{Error, Result};

/// A frozen screen: pixel reads come from an image, pointer moves are recorded
#[derive(Debug, Clone)]
pub struct ImageScreen {
    image: RgbImage,
    pointer: Option<SamplePoint>,
    moves: Vec<SamplePoint>,
}

impl ImageScreen {
    pub fn new(image: RgbImage) -> Self {
        Self {
            image,
            pointer: None,
            moves: Vec::new(),
        }
    }

    /// Load a screenshot from disk (any format the `image` crate decodes)
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let image = image::open(path.as_ref())?.into_rgb8();
        tracing::debug!(
            "Loaded screenshot {} ({}x{})",
            path.as_ref().display(),
            image.width(),
            image.height()
        );
        Ok(Self::new(image))
    }

    /// Where the pointer was last moved to
    pub fn pointer(&self) -> Option<SamplePoint> {
        self.pointer
    }

    /// Every pointer move, oldest first
    pub fn moves(&self) -> &[SamplePoint] {
        &self.moves
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    fn bounds_check(&self, point: SamplePoint) -> Result<(u32, u32)> {
        let (width, height) = self.image.dimensions();
        match (u32::try_from(point.x), u32::try_from(point.y)) {
            (Ok(x), Ok(y)) if x < width && y < height => Ok((x, y)),
            _ => Err(Error::OutOfBounds {
                x: point.x,
                y: point.y,
                width,
                height,
            }),
        }
    }
}

impl ScreenAccess for ImageScreen {
    fn move_pointer(&mut self, point: SamplePoint) -> Result<()> {
        self.pointer = Some(point);
        self.moves.push(point);
        Ok(())
    }

    fn pixel_color(&mut self, point: SamplePoint) -> Result<Rgb<u8>> {
        let (x, y) = self.bounds_check(point)?;
        Ok(*self.image.get_pixel(x, y))
    }
}

//! Real pointer and screen access.
//!
//! Pointer moves go through `enigo`, pixel reads capture the primary monitor
//! with `captrs` and index the frame as an `image::RgbImage`.
//!
//! # Platform Support
//!
//! - **`desktop` feature on**: Windows, macOS and X11 (the latter two may need
//!   accessibility or screen recording permission)
//! - **`desktop` feature off**: not supported (acquire returns an error)

use image::Rgb;

use super::ScreenAccess;
use crate::config::SamplePoint;
use crate::error::{Error, Result};

// ============================================================================
// Desktop Implementation
// ============================================================================

#[cfg(feature = "desktop")]
mod desktop_impl {
    use super::*;
    use captrs::{Bgr8, Capturer};
    use enigo::{Coordinate, Enigo, Mouse, Settings};
    use image::RgbImage;

    /// Frames that come back all black are retried this many times
    const CAPTURE_ATTEMPTS: u8 = 10;

    /// Handle on the system pointer and the primary monitor
    pub struct DesktopScreen {
        enigo: Enigo,
        capturer: Capturer,
    }

    impl DesktopScreen {
        /// Open pointer control and screen capture.
        ///
        /// Fails when there is no display server or the process lacks the
        /// permission to synthesize input or record the screen.
        pub fn acquire() -> Result<Self> {
            let enigo = Enigo::new(&Settings::default())
                .map_err(|e| Error::Capability(format!("Failed to open pointer control: {}", e)))?;
            let capturer = Capturer::new(0)
                .map_err(|e| Error::Capability(format!("Failed to open screen capture: {}", e)))?;

            let (width, height) = capturer.geometry();
            tracing::info!("Acquired screen access ({}x{})", width, height);

            Ok(Self { enigo, capturer })
        }

        /// Grab the current frame of the primary monitor
        fn capture(&mut self, point: SamplePoint) -> Result<RgbImage> {
            let (width, height) = self.capturer.geometry();

            for attempt in 1..=CAPTURE_ATTEMPTS {
                let frame = match self.capturer.capture_frame() {
                    Ok(frame) => frame,
                    Err(_) => {
                        tracing::debug!("Capture attempt {} failed", attempt);
                        continue;
                    }
                };

                let mut rgb = Vec::with_capacity(frame.len() * 3);
                for Bgr8 { r, g, b, .. } in frame {
                    rgb.extend_from_slice(&[r, g, b]);
                }

                // A fresh capturer sometimes hands out an all-black first frame
                if rgb.iter().all(|&c| c == 0) {
                    tracing::debug!("Capture attempt {} returned a black frame", attempt);
                    continue;
                }

                return RgbImage::from_raw(width, height, rgb).ok_or_else(|| Error::PixelRead {
                    x: point.x,
                    y: point.y,
                    message: "captured frame does not match screen geometry".into(),
                });
            }

            Err(Error::PixelRead {
                x: point.x,
                y: point.y,
                message: format!("no usable frame after {} attempts", CAPTURE_ATTEMPTS),
            })
        }
    }

    impl ScreenAccess for DesktopScreen {
        fn move_pointer(&mut self, point: SamplePoint) -> Result<()> {
            self.enigo
                .move_mouse(point.x, point.y, Coordinate::Abs)
                .map_err(|e| Error::Pointer {
                    x: point.x,
                    y: point.y,
                    message: e.to_string(),
                })
        }

        fn pixel_color(&mut self, point: SamplePoint) -> Result<Rgb<u8>> {
            let frame = self.capture(point)?;
            let (width, height) = frame.dimensions();
            match (u32::try_from(point.x), u32::try_from(point.y)) {
                (Ok(x), Ok(y)) if x < width && y < height => Ok(*frame.get_pixel(x, y)),
                _ => Err(Error::OutOfBounds {
                    x: point.x,
                    y: point.y,
                    width,
                    height,
                }),
            }
        }
    }
}

// ============================================================================
// Stub without the desktop feature
// ============================================================================

#[cfg(not(feature = "desktop"))]
mod stub_impl {
    use super::*;

    const DISABLED: &str = "built without the `desktop` feature";

    /// Placeholder that can never be acquired
    pub struct DesktopScreen {
        _private: (),
    }

    impl DesktopScreen {
        /// Screen access is not available in this build
        pub fn acquire() -> Result<Self> {
            Err(Error::Capability(DISABLED.into()))
        }
    }

    impl ScreenAccess for DesktopScreen {
        fn move_pointer(&mut self, _point: SamplePoint) -> Result<()> {
            Err(Error::Capability(DISABLED.into()))
        }

        fn pixel_color(&mut self, _point: SamplePoint) -> Result<Rgb<u8>> {
            Err(Error::Capability(DISABLED.into()))
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

#[cfg(feature = "desktop")]
pub use desktop_impl::DesktopScreen;

#[cfg(not(feature = "desktop"))]
pub use stub_impl::DesktopScreen;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(feature = "desktop"))]
    fn test_acquire_without_feature_fails() {
        match DesktopScreen::acquire() {
            Err(Error::Capability(message)) => assert!(message.contains("desktop")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("acquire should fail without the desktop feature"),
        }
    }

    #[test]
    #[ignore] // Requires a display and input permissions
    fn test_acquire_and_sample() {
        let mut screen = DesktopScreen::acquire().expect("screen access");
        let point = SamplePoint::new(0, 0);
        screen.move_pointer(point).unwrap();
        let _ = screen.pixel_color(point).unwrap();
    }
}

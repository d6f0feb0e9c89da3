//! Logo raster decoded from a PNG.
//!
//! Decoding goes through the `image` crate with dimension limits, so a
//! hostile header fails before any pixel buffer is allocated.

use std::io::Cursor;

use image::{ImageReader, Limits};
use skyline_core::{SkylineError, SkylineResult};

/// Largest accepted logo side, in pixels.
pub const MAX_LOGO_SIDE: u32 = 1024;

/// One RGBA pixel, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba {
    /// Channel cutoff: strictly more than half of the channel maximum.
    pub const CUTOFF: u8 = u8::MAX / 2;

    /// True when both alpha and red exceed [`Rgba::CUTOFF`].
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        self.a > Self::CUTOFF && self.r > Self::CUTOFF
    }
}

/// Decoded logo pixels, row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoRaster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl LogoRaster {
    /// Decodes PNG bytes into a raster.
    ///
    /// # Errors
    ///
    /// [`SkylineError::Asset`] when the bytes are not a decodable image or
    /// either side exceeds [`MAX_LOGO_SIDE`].
    pub fn decode_png(name: &str, bytes: &[u8]) -> SkylineResult<Self> {
        let bad = |reason: String| SkylineError::asset(name, reason);

        let mut reader = ImageReader::with_format(Cursor::new(bytes), image::ImageFormat::Png);
        let mut limits = Limits::default();
        limits.max_image_width = Some(MAX_LOGO_SIDE);
        limits.max_image_height = Some(MAX_LOGO_SIDE);
        reader.limits(limits);

        let decoded = reader
            .decode()
            .map_err(|e| bad(format!("failed to decode PNG: {e}")))?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 || width > MAX_LOGO_SIDE || height > MAX_LOGO_SIDE {
            return Err(bad(format!(
                "logo must be 1 to {MAX_LOGO_SIDE} pixels per side, got {width}x{height}"
            )));
        }

        let pixels = decoded
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                Rgba { r, g, b, a }
            })
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, `y` growing downwards. Out-of-range reads are
    /// transparent.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return Rgba::default();
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Number of pixels passing the solidity cutoff.
    #[must_use]
    pub fn solid_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_solid()).count()
    }
}

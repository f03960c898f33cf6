use glam::UVec2;
use image::RgbaImage;

use crate::{
    color::Color,
    error::{Error, Result},
    Dimensions,
};

const CHANNELS: usize = 4;

/// A borrowed, read-only view over row-major RGBA8 pixels.
///
/// The shape is checked once on construction so the analysis passes can index
/// without bounds bookkeeping of their own.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    bytes: &'a [u8],
    dimensions: Dimensions,
}

impl<'a> PixelBuffer<'a> {
    pub fn new(bytes: &'a [u8], width: u32, height: u32) -> Result<Self> {
        let dimensions = Dimensions::new(width, height);
        if dimensions.is_empty() {
            return Err(Error::EmptyImage { width, height });
        }
        let expected = dimensions
            .area()
            .and_then(|area| area.checked_mul(CHANNELS))
            .ok_or(Error::TooLarge { width, height })?;
        if bytes.len() != expected {
            return Err(Error::BufferShape {
                len: bytes.len(),
                width,
                height,
                expected,
            });
        }
        return Ok(Self { bytes, dimensions });
    }

    pub fn dimensions(&self) -> Dimensions {
        return self.dimensions;
    }

    pub fn width(&self) -> u32 {
        return self.dimensions.x;
    }

    pub fn height(&self) -> u32 {
        return self.dimensions.y;
    }

    /// Color of the pixel at `loc`.
    ///
    /// Panics if `loc` is outside the buffer.
    pub fn color_at(&self, loc: UVec2) -> Color {
        assert!(
            loc.x < self.width() && loc.y < self.height(),
            "pixel {loc:?} is outside a {}x{} buffer",
            self.width(),
            self.height()
        );
        let idx = CHANNELS * (loc.y as usize * self.width() as usize + loc.x as usize);
        let px = &self.bytes[idx..idx + CHANNELS];
        return Color::new(px[0], px[1], px[2], px[3]);
    }
}

impl<'a> TryFrom<&'a RgbaImage> for PixelBuffer<'a> {
    type Error = Error;

    fn try_from(image: &'a RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        return Self::new(image.as_raw(), width, height);
    }
}

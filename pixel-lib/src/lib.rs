pub mod analysis;
pub mod buffer;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod palette_image;
pub mod quantizer;
pub mod tile;
pub mod tile_size;

pub use analysis::{analyze, AnalysisResult};
pub use buffer::PixelBuffer;
pub use color::Color;
pub use config::Config;
pub use error::{Error, Result};
pub use quantizer::{quantize, Palette};
pub use tile::{ColorIndex, TilePosition};
pub use tile_size::detect_tile_size;

use derive_more::{Deref, DerefMut, From};
use glam::UVec2;

/// Width and height of an image in pixels
#[derive(Deref, DerefMut, From, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dimensions(pub UVec2);

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        return Self(UVec2::new(width, height));
    }

    /// Pixel count, `None` if it doesn't fit in a `usize`
    pub fn area(&self) -> Option<usize> {
        return (self.x as usize).checked_mul(self.y as usize);
    }

    pub fn is_empty(&self) -> bool {
        return self.x == 0 || self.y == 0;
    }

    /// Every location in row-major order (y outer, x inner)
    pub fn iter_locs(&self) -> UVec2Iter {
        return self.iter_locs_step(1);
    }

    /// Row-major locations starting at the origin, advancing `step` pixels on both axes
    pub fn iter_locs_step(&self, step: u32) -> UVec2Iter {
        return UVec2Iter::new(UVec2::ZERO, self.0, step);
    }
}

#[derive(Clone, Debug)]
pub struct UVec2Iter {
    pub cur: UVec2,
    pub end: UVec2,
    pub step: u32,
}

impl UVec2Iter {
    pub fn new(start: UVec2, end: UVec2, step: u32) -> Self {
        return Self {
            cur: start,
            end,
            step: step.max(1),
        };
    }
}

impl Iterator for UVec2Iter {
    type Item = UVec2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur.y >= self.end.y || self.cur.x >= self.end.x {
            return None;
        }
        let ret = self.cur;
        self.cur.x = self.cur.x.saturating_add(self.step);
        if self.cur.x >= self.end.x {
            self.cur.x = 0;
            self.cur.y = self.cur.y.saturating_add(self.step);
        }
        return Some(ret);
    }
}

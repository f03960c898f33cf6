use std::collections::HashMap;

use crate::{
    buffer::PixelBuffer,
    color::Color,
    tile::{ColorIndex, TilePosition},
};

/// Distinct colors in the order they were first sampled
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
    ids: HashMap<Color, ColorIndex>,
}

impl Palette {
    pub fn new() -> Self {
        return Self::default();
    }

    /// Index of `color`, appending it as a new entry if it hasn't been seen
    pub fn insert(&mut self, color: Color) -> ColorIndex {
        if let Some(id) = self.index_of(&color) {
            return id;
        }
        let id = self.colors.len();
        self.colors.push(color);
        self.ids.insert(color, id);
        return id;
    }

    pub fn index_of(&self, color: &Color) -> Option<ColorIndex> {
        return self.ids.get(color).copied();
    }

    pub fn get(&self, id: ColorIndex) -> Option<&Color> {
        return self.colors.get(id);
    }

    pub fn colors(&self) -> &[Color] {
        return &self.colors;
    }

    pub fn len(&self) -> usize {
        return self.colors.len();
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<Color> {
        return self.colors.iter();
    }
}

impl<'p> IntoIterator for &'p Palette {
    type Item = &'p Color;
    type IntoIter = std::slice::Iter<'p, Color>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

/// Step between sampled pixels for a detected tile size.
///
/// [`detect_tile_size`](crate::tile_size::detect_tile_size) reports one less
/// than the side it stopped growing at, and that same value is the sampling
/// step, so a tile is sampled once per reported tile size.
pub fn sampling_stride(tile_size: u32) -> u32 {
    return tile_size.max(1);
}

/// Sample one pixel per tile and collect the palette and tile positions.
///
/// Transparent samples are dropped. Palette indices follow the first-seen
/// order of the sampled grid and positions keep the row-major scan order.
pub fn quantize(buffer: &PixelBuffer, tile_size: u32) -> (Palette, Vec<TilePosition>) {
    let stride = sampling_stride(tile_size);
    let mut palette = Palette::new();
    let mut tiles = Vec::new();

    for loc in buffer.dimensions().iter_locs_step(stride) {
        let color = buffer.color_at(loc);
        if color.is_transparent() {
            continue;
        }
        let color_index = palette.insert(color);
        tiles.push(TilePosition { loc, color_index });
    }
    log::debug!(
        "stride {stride}: {} tiles, {} colors",
        tiles.len(),
        palette.len()
    );
    return (palette, tiles);
}

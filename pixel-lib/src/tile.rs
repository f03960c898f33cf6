use glam::UVec2;

/// Index of a color in a [`Palette`](crate::quantizer::Palette)
pub type ColorIndex = usize;

/// A sampled tile: its top-left pixel and the palette entry it was drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePosition {
    pub loc: UVec2,
    pub color_index: ColorIndex,
}

impl TilePosition {
    pub fn new(x: u32, y: u32, color_index: ColorIndex) -> Self {
        return Self {
            loc: UVec2 { x, y },
            color_index,
        };
    }
}

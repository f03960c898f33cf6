//! Tile size inference.
//!
//! The side length of the repeating tile is read off a single square grown
//! from the first non-transparent pixel (the anchor). Images whose regions use
//! different tile sizes get one global estimate taken from the anchor's
//! neighborhood; nothing past the anchor's square is looked at.

use glam::UVec2;

use crate::{buffer::PixelBuffer, color::Color};

/// First pixel in row-major order whose alpha isn't zero
pub fn find_anchor(buffer: &PixelBuffer) -> Option<UVec2> {
    return buffer
        .dimensions()
        .iter_locs()
        .find(|&loc| !buffer.color_at(loc).is_transparent());
}

/// Infer the side length of the uniform tiles making up `buffer`.
///
/// Always at least 1 and never more than the square that fits between the
/// anchor and the buffer edge. A fully transparent buffer yields 1.
pub fn detect_tile_size(buffer: &PixelBuffer) -> u32 {
    let Some(anchor) = find_anchor(buffer) else {
        log::debug!("no opaque pixel found, falling back to tile size 1");
        return 1;
    };
    let dims = buffer.dimensions();
    let max_group = (dims.x - anchor.x).min(dims.y - anchor.y);
    let color = buffer.color_at(anchor);

    // side of the next square to try; stops one past the last uniform square
    let mut size = 1;
    while size <= max_group && grown_edge_matches(buffer, anchor, size, color) {
        log::trace!("{size}x{size} square at {anchor} is uniform");
        size += 1;
    }
    let tile_size = (size - 1).max(1);
    log::debug!("anchor {anchor} ({color}), max group {max_group}, tile size {tile_size}");
    return tile_size;
}

/// Whether the right column and bottom row of the `size` square at `anchor`
/// all equal `color`. The `size - 1` square inside them was checked on the
/// previous step.
fn grown_edge_matches(buffer: &PixelBuffer, anchor: UVec2, size: u32, color: Color) -> bool {
    let last = size - 1;
    return (0..size).all(|i| {
        buffer.color_at(anchor + UVec2::new(last, i)) == color
            && buffer.color_at(anchor + UVec2::new(i, last)) == color
    });
}

use std::collections::HashSet;

use crate::{
    buffer::PixelBuffer,
    error::{Error, Result},
    quantizer::{quantize, Palette},
    tile::TilePosition,
    tile_size::detect_tile_size,
    Dimensions,
};

/// Everything extracted from one source image
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub dimensions: Dimensions,
    pub tile_size: u32,
    pub tiles: Vec<TilePosition>,
    pub palette: Palette,
}

impl AnalysisResult {
    pub fn width(&self) -> u32 {
        return self.dimensions.x;
    }

    pub fn height(&self) -> u32 {
        return self.dimensions.y;
    }

    /// Check the result is safe to hand to the renderers and writers
    pub fn validate(&self) -> Result<()> {
        let max_tile_size = self.width().min(self.height());
        if self.tile_size < 1 || self.tile_size > max_tile_size {
            return Err(Error::Invariant(format!(
                "tile size {} outside 1..={max_tile_size}",
                self.tile_size
            )));
        }

        let mut seen = HashSet::with_capacity(self.palette.len());
        for color in &self.palette {
            if !seen.insert(color) {
                return Err(Error::Invariant(format!("duplicate palette color {color}")));
            }
            if color.is_transparent() {
                return Err(Error::Invariant(format!("transparent palette color {color}")));
            }
        }

        for tile in &self.tiles {
            if tile.color_index >= self.palette.len() {
                return Err(Error::Invariant(format!(
                    "tile at {} references color {} of {}",
                    tile.loc,
                    tile.color_index,
                    self.palette.len()
                )));
            }
        }
        return Ok(());
    }
}

/// Infer the tile size of `buffer` and quantize it at that size
pub fn analyze(buffer: &PixelBuffer) -> AnalysisResult {
    let tile_size = detect_tile_size(buffer);
    let (palette, tiles) = quantize(buffer, tile_size);
    log::info!(
        "analyzed {}x{} image: tile size {tile_size}, {} colors, {} tiles",
        buffer.width(),
        buffer.height(),
        palette.len(),
        tiles.len()
    );
    return AnalysisResult {
        dimensions: buffer.dimensions(),
        tile_size,
        tiles,
        palette,
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::Color;
    use image::{Rgba, RgbaImage};

    const RED: Color = Color::new(255, 0, 0, 255);
    const GREEN: Color = Color::new(0, 255, 0, 255);
    const BLUE: Color = Color::new(0, 0, 255, 255);
    const YELLOW: Color = Color::new(255, 255, 0, 255);

    fn analyze_image(image: &RgbaImage) -> AnalysisResult {
        let buffer = PixelBuffer::try_from(image).unwrap();
        let result = analyze(&buffer);
        result.validate().expect("analysis result is valid");
        return result;
    }

    fn four_blocks() -> RgbaImage {
        return RgbaImage::from_fn(4, 4, |x, y| {
            let color = match (x / 2, y / 2) {
                (0, 0) => RED,
                (1, 0) => GREEN,
                (0, 1) => BLUE,
                _ => YELLOW,
            };
            color.into()
        });
    }

    #[test]
    fn four_uniform_blocks() {
        let result = analyze_image(&four_blocks());
        assert_eq!(result.tile_size, 2);
        assert_eq!(result.palette.colors(), &[RED, GREEN, BLUE, YELLOW]);
        assert_eq!(
            result.tiles,
            vec![
                TilePosition::new(0, 0, 0),
                TilePosition::new(2, 0, 1),
                TilePosition::new(0, 2, 2),
                TilePosition::new(2, 2, 3),
            ]
        );
    }

    #[test]
    fn single_color_image() {
        let result = analyze_image(&RgbaImage::from_pixel(3, 3, Rgba([12, 34, 56, 255])));
        assert_eq!(result.tile_size, 3);
        assert_eq!(result.palette.colors(), &[Color::new(12, 34, 56, 255)]);
        assert_eq!(result.tiles, vec![TilePosition::new(0, 0, 0)]);
    }

    #[test]
    fn fully_transparent_image() {
        let result = analyze_image(&RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0])));
        assert_eq!(result.tile_size, 1);
        assert!(result.palette.is_empty());
        assert!(result.tiles.is_empty());
    }

    #[test]
    fn single_pixel_image() {
        let result = analyze_image(&RgbaImage::from_pixel(1, 1, RED.into()));
        assert_eq!(result.tile_size, 1);
        assert_eq!(result.palette.len(), 1);
        assert_eq!(result.tiles, vec![TilePosition::new(0, 0, 0)]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let image = RgbaImage::from_fn(24, 18, |x, y| {
            Rgba([(x / 3 * 40) as u8, (y / 3 * 40) as u8, 90, 255])
        });
        let first = analyze_image(&image);
        let second = analyze_image(&image);
        assert_eq!(first, second);
        assert_eq!(first.tile_size, 3);
        assert_eq!(first.tiles.len(), 8 * 6);
        assert_eq!(first.palette.len(), 8 * 6);
    }

    #[test]
    fn transparent_background_is_excluded() {
        let image = RgbaImage::from_fn(6, 6, |x, y| {
            if (2..4).contains(&x) && (2..4).contains(&y) {
                GREEN.into()
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        let result = analyze_image(&image);
        assert_eq!(result.tile_size, 2);
        assert_eq!(result.tiles, vec![TilePosition::new(2, 2, 0)]);
    }

    #[test]
    fn validate_rejects_bad_index() {
        let mut result = analyze_image(&four_blocks());
        result.tiles.push(TilePosition::new(0, 0, 4));
        assert!(matches!(result.validate(), Err(Error::Invariant(_))));
    }

    #[test]
    fn validate_rejects_oversized_tile() {
        let mut result = analyze_image(&four_blocks());
        result.tile_size = 5;
        assert!(result.validate().is_err());
        result.tile_size = 0;
        assert!(result.validate().is_err());
    }

    #[test]
    fn validate_rejects_transparent_palette_entry() {
        let mut result = analyze_image(&four_blocks());
        result.palette.insert(Color::new(1, 2, 3, 0));
        assert!(result.validate().is_err());
    }
}

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageOutputFormat, RgbaImage};

use crate::{error::Result, quantizer::Palette};

/// Lay the palette out left to right as `swatch_size` squares, one per color
pub fn render_palette(palette: &Palette, swatch_size: u32) -> RgbaImage {
    let swatch_size = swatch_size.max(1);
    let width = palette.len() as u32 * swatch_size;
    let mut image = RgbaImage::new(width, swatch_size);
    for (i, &color) in palette.iter().enumerate() {
        let left = i as u32 * swatch_size;
        for y in 0..swatch_size {
            for x in left..left + swatch_size {
                image.put_pixel(x, y, color.into());
            }
        }
    }
    return image;
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    return Ok(bytes);
}

/// Base64 of the palette strip encoded as PNG. Empty for an empty palette
pub fn palette_base64(palette: &Palette, swatch_size: u32) -> Result<String> {
    if palette.is_empty() {
        return Ok(String::new());
    }
    let png = encode_png(&render_palette(palette, swatch_size))?;
    return Ok(STANDARD.encode(png));
}

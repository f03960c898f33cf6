//! Serialized forms of an [`AnalysisResult`]: the palette as CSV and the
//! tile grid as a JSON document carrying the rendered palette strip.

use std::io::Write;

use serde::Serialize;

use crate::{
    analysis::AnalysisResult, config::Config, error::Result, palette_image::palette_base64,
    quantizer::Palette,
};

pub const CSV_HEADER: &str = "r,g,b,a";

/// One sampled tile keyed by its `r,g,b,a` color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixelEntry {
    pub x: u32,
    pub y: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelDocument {
    pub width: u32,
    pub height: u32,
    pub pixel_size: u32,
    pub pixels: Vec<PixelEntry>,
    /// base64 PNG of the palette strip
    pub palette: String,
}

impl PixelDocument {
    pub fn new(result: &AnalysisResult, config: &Config) -> Result<Self> {
        result.validate()?;
        let pixels = result
            .tiles
            .iter()
            .filter_map(|tile| {
                let color = result.palette.get(tile.color_index)?;
                Some(PixelEntry {
                    x: tile.loc.x,
                    y: tile.loc.y,
                    color: color.to_string(),
                })
            })
            .collect();
        return Ok(Self {
            width: result.width(),
            height: result.height(),
            pixel_size: result.tile_size,
            pixels,
            palette: palette_base64(&result.palette, config.swatch_size)?,
        });
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        return Ok(json);
    }
}

pub fn write_json<W: Write>(result: &AnalysisResult, config: &Config, mut writer: W) -> Result<()> {
    let json = PixelDocument::new(result, config)?.to_json(config.pretty)?;
    writer.write_all(json.as_bytes())?;
    return Ok(());
}

/// Header row then one `r,g,b,a` row per palette entry, newline separated
pub fn write_palette_csv<W: Write>(palette: &Palette, mut writer: W) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    let rows: Vec<String> = palette.iter().map(|color| color.to_string()).collect();
    writer.write_all(rows.join("\n").as_bytes())?;
    return Ok(());
}

/// Side of each square in the palette strip, in pixels
pub const SWATCH_SIZE_DEFAULT: u32 = 16;

/// Output settings for the rendered palette and the JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    pub swatch_size: u32,
    /// indent the JSON document
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        return Self {
            swatch_size: SWATCH_SIZE_DEFAULT,
            pretty: true,
        };
    }
}

impl Config {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        return Ok(serde_json::from_str(json)?);
    }
}

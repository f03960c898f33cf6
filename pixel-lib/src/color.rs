use std::fmt::{self, Display};

use image::Rgba;

/// An exact 8-bit RGBA value. Two colors are the same only if every channel matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        return Self { r, g, b, a };
    }

    pub fn is_transparent(&self) -> bool {
        return self.a == 0;
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        return Self { r, g, b, a };
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        return [c.r, c.g, c.b, c.a];
    }
}

impl From<Rgba<u8>> for Color {
    fn from(px: Rgba<u8>) -> Self {
        return px.0.into();
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        return Rgba(c.into());
    }
}

/// Formats as the `r,g,b,a` key used by the JSON and CSV writers
impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn color_key() {
        assert_eq!(Color::new(255, 0, 12, 255).to_string(), "255,0,12,255");
    }

    #[test]
    fn rgba_conversions() {
        let c = Color::new(1, 2, 3, 4);
        let px: Rgba<u8> = c.into();
        assert_eq!(px, Rgba([1, 2, 3, 4]));
        assert_eq!(Color::from(px), c);
    }

    #[test]
    fn equality_is_exact() {
        assert_ne!(Color::new(10, 10, 10, 255), Color::new(10, 10, 10, 254));
        assert!(Color::new(9, 9, 9, 0).is_transparent());
        assert!(!Color::new(0, 0, 0, 1).is_transparent());
    }
}

use crate::error::{Error, Result};

/// An sRGB color with a straight (non-premultiplied) alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    // #ffd700
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    // Overlay painted over the whole surface each frame to leave motion trails
    pub const TRAIL: Color = Color::rgba(0, 0, 0, 0.1);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from hue (degrees), saturation and lightness
    /// (both 0..=1), the same way CSS `hsl()` does.
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = lightness - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// Parses `RRGGBB` with an optional leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(hex.to_string()))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primaries() {
        assert_eq!(Color::hsl(0.0, 1.0, 0.5), Color::rgb(255, 0, 0));
        assert_eq!(Color::hsl(120.0, 1.0, 0.5), Color::rgb(0, 255, 0));
        assert_eq!(Color::hsl(240.0, 1.0, 0.5), Color::rgb(0, 0, 255));
    }

    #[test]
    fn hsl_half_saturation() {
        // hsl(0, 50%, 50%) == #bf4040
        assert_eq!(Color::hsl(0.0, 0.5, 0.5), Color::rgb(191, 64, 64));
        // hue wraps around
        assert_eq!(Color::hsl(360.0, 0.5, 0.5), Color::hsl(0.0, 0.5, 0.5));
    }

    #[test]
    fn parses_hex() {
        assert_eq!(Color::from_hex("1a1b26").unwrap(), Color::rgb(0x1a, 0x1b, 0x26));
        assert_eq!(Color::from_hex("#ffd700").unwrap(), Color::GOLD);
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(matches!(Color::from_hex("fff"), Err(Error::InvalidColor(_))));
        assert!(matches!(Color::from_hex("zzzzzz"), Err(Error::InvalidColor(_))));
        assert!(Color::from_hex("ééé").is_err());
    }
}

//! Colors as the drawing context consumes them.

use std::fmt;

use crate::config::ConfigError;

/// Straight (non-premultiplied) sRGB color with a fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parses `#rrggbb` or `#rgb` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self::opaque(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Self::opaque(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` string, alpha rounded to three decimals.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

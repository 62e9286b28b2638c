use std::str::FromStr;

use image::{Rgb, Rgba};
use thiserror::Error;

/// RGB565 color as understood by the LED matrix (16-bit: 5 red, 6 green, 5 blue)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);

    /// Create RGB565 from RGB888 components, truncating the low bits of each channel
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r5 = (r >> 3) as u16;
        let g6 = (g >> 2) as u16;
        let b5 = (b >> 3) as u16;
        Self((r5 << 11) | (g6 << 5) | b5)
    }

    /// Expand back to RGB888.
    ///
    /// The channel bits are shifted into place and the vacated low bits are
    /// left at zero, so white comes back as `(248, 252, 248)`. The matrix
    /// firmware expects exactly this expansion; do not replicate high bits.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        let r = (self.0 & 0xF800) >> 8;
        let g = (self.0 & 0x07E0) >> 3;
        let b = (self.0 & 0x001F) << 3;
        (r as u8, g as u8, b as u8)
    }
}

/// Pack 8-bit RGB into a matrix color word
pub const fn pack(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::from_rgb(r, g, b)
}

/// Unpack a matrix color word into 8-bit RGB
pub const fn unpack(color: Rgb565) -> (u8, u8, u8) {
    color.to_rgb()
}

impl From<Rgb<u8>> for Rgb565 {
    fn from(rgb: Rgb<u8>) -> Self {
        let [r, g, b] = rgb.0;
        Self::from_rgb(r, g, b)
    }
}

impl From<Rgba<u8>> for Rgb565 {
    fn from(rgba: Rgba<u8>) -> Self {
        // No transparency on the matrix
        let [r, g, b, _] = rgba.0;
        Self::from_rgb(r, g, b)
    }
}

impl From<Rgb565> for Rgba<u8> {
    fn from(color: Rgb565) -> Self {
        let (r, g, b) = color.to_rgb();
        Rgba([r, g, b, 0xFF])
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color '{0}': expected RRGGBB or #RRGGBB hex")]
pub struct ParseColorError(pub String);

impl FromStr for Rgb565 {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

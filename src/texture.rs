use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

use crate::color::Rgb565;

/// Row-major grid of packed RGB565 pixels.
///
/// Addressing is total: reads outside the grid return black and writes
/// outside it are dropped. Callers that want strict bounds checking must
/// do it themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pixels: Vec<Rgb565>,
    width: usize,
    height: usize,
}

impl Texture {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "texture dimensions must be positive");

        // Initialize with black
        let pixels = vec![Rgb565::BLACK; width * height];
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.index(x, y)
            .map(|idx| self.pixels[idx])
            .unwrap_or(Rgb565::BLACK)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    /// Stream the pixels as little-endian 16-bit words, row-major from (0,0)
    pub fn write_le<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for pixel in &self.pixels {
            writer.write_u16::<LittleEndian>(pixel.0)?;
        }
        Ok(())
    }

    /// Device wire format: exactly `width * height * 2` bytes
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 2);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.0.to_le_bytes());
        }
        bytes
    }
}

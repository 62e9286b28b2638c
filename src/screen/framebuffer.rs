//! 8×8 back buffer for the LED matrix, usable as a raster image.

use image::{ColorType, GenericImageView, Pixel, Rgba};

use crate::color::Rgb565;
use crate::texture::Texture;

pub const WIDTH: u32 = 8;
pub const HEIGHT: u32 = 8;

/// Back buffer for the screen.
///
/// Colors go in and come out as 8-bit RGB and are stored packed, so reads
/// return the quantized color rather than the one that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    texture: Texture,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create an all-black frame buffer
    pub fn new() -> Self {
        Self {
            texture: Texture::new(WIDTH as usize, HEIGHT as usize),
        }
    }

    /// Create a frame buffer holding a copy of `source`
    pub fn from_image<I>(source: &I) -> Self
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        let mut fb = Self::new();
        fb.set_image(source);
        fb
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn texture_mut(&mut self) -> &mut Texture {
        &mut self.texture
    }

    /// Always (0, 0, 8, 8)
    pub fn bounds(&self) -> (u32, u32, u32, u32) {
        (0, 0, WIDTH, HEIGHT)
    }

    /// Colors are exchanged as opaque 8-bit RGB
    pub fn color_model(&self) -> ColorType {
        ColorType::Rgb8
    }

    fn in_range(x: i32, y: i32) -> bool {
        (0..WIDTH as i32).contains(&x) && (0..HEIGHT as i32).contains(&y)
    }

    /// Color of the LED at x,y.
    ///
    /// Off-matrix coordinates yield fully transparent black, which is how
    /// they differ from an unlit LED (opaque black).
    pub fn color_at(&self, x: i32, y: i32) -> Rgba<u8> {
        if !Self::in_range(x, y) {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba::from(self.texture.get_pixel(x, y))
    }

    /// Set the LED at x,y. Alpha is discarded.
    pub fn set_color_at<P>(&mut self, x: i32, y: i32, color: P)
    where
        P: Pixel<Subpixel = u8>,
    {
        if !Self::in_range(x, y) {
            return;
        }
        self.texture.set_pixel(x, y, Rgb565::from(color.to_rgb()));
    }

    pub fn fill(&mut self, color: Rgb565) {
        self.texture.fill(color);
    }

    /// Copy `source` into the frame buffer, row by row.
    ///
    /// Only the 8×8 region at the origin is read; any part of it the
    /// source does not cover becomes black.
    pub fn set_image<I>(&mut self, source: &I)
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        let (src_width, src_height) = source.dimensions();
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let color = if x < src_width && y < src_height {
                    Rgb565::from(source.get_pixel(x, y).to_rgb())
                } else {
                    Rgb565::BLACK
                };
                self.texture.set_pixel(x as i32, y as i32, color);
            }
        }
    }
}

impl GenericImageView for FrameBuffer {
    type Pixel = Rgba<u8>;

    fn dimensions(&self) -> (u32, u32) {
        (WIDTH, HEIGHT)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Self::Pixel {
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => self.color_at(x, y),
            _ => Rgba([0, 0, 0, 0]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, RgbaImage};

    #[test]
    fn test_bounds_and_model() {
        let fb = FrameBuffer::new();
        assert_eq!(fb.bounds(), (0, 0, 8, 8));
        assert_eq!(fb.dimensions(), (8, 8));
        assert_eq!(fb.color_model(), ColorType::Rgb8);
    }

    #[test]
    fn test_color_at_in_and_out_of_range() {
        let fb = FrameBuffer::new();
        assert_eq!(fb.color_at(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(fb.color_at(7, 7), Rgba([0, 0, 0, 255]));
        for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 8), (-5, 12)] {
            assert_eq!(fb.color_at(x, y), Rgba([0, 0, 0, 0]));
        }
    }

    #[test]
    fn test_set_color_at_quantizes_and_drops_alpha() {
        let mut fb = FrameBuffer::new();
        fb.set_color_at(2, 3, Rgba([255, 255, 255, 0]));
        assert_eq!(fb.color_at(2, 3), Rgba([248, 252, 248, 255]));

        fb.set_color_at(4, 4, Rgb([0x12, 0x34, 0x56]));
        assert_eq!(fb.texture().get_pixel(4, 4), Rgb565::from_rgb(0x12, 0x34, 0x56));
        assert_eq!(fb.color_at(4, 4), Rgba([0x10, 0x34, 0x50, 255]));
    }

    #[test]
    fn test_set_color_at_out_of_range_is_noop() {
        let mut fb = FrameBuffer::new();
        fb.fill(Rgb565::GREEN);
        let before = fb.clone();
        for (x, y) in [(-1, -1), (8, 8), (0, 8), (8, 0), (i32::MIN, 3)] {
            fb.set_color_at(x, y, Rgb([255, 0, 0]));
        }
        assert_eq!(fb, before);
    }

    #[test]
    fn test_set_image_white_is_lossy() {
        let white = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
        let fb = FrameBuffer::from_image(&white);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(fb.color_at(x, y), Rgba([248, 252, 248, 255]));
            }
        }
    }

    #[test]
    fn test_set_image_copies_each_pixel() {
        let source = RgbaImage::from_fn(8, 8, |x, y| Rgba([(x * 32) as u8, (y * 32) as u8, 0x80, 0x10]));
        let mut fb = FrameBuffer::new();
        fb.fill(Rgb565::WHITE);
        fb.set_image(&source);

        for y in 0..8 {
            for x in 0..8 {
                let expected = Rgb565::from_rgb((x * 32) as u8, (y * 32) as u8, 0x80);
                assert_eq!(fb.texture().get_pixel(x as i32, y as i32), expected);
            }
        }
    }

    #[test]
    fn test_set_image_smaller_source_pads_black() {
        let source = RgbImage::from_pixel(4, 2, Rgb([255, 0, 0]));
        let mut fb = FrameBuffer::new();
        fb.fill(Rgb565::BLUE);
        fb.set_image(&source);

        assert_eq!(fb.texture().get_pixel(3, 1), Rgb565::RED);
        assert_eq!(fb.texture().get_pixel(4, 1), Rgb565::BLACK);
        assert_eq!(fb.texture().get_pixel(0, 2), Rgb565::BLACK);
    }

    #[test]
    fn test_frame_buffer_is_an_image_source() {
        let mut first = FrameBuffer::new();
        first.set_color_at(1, 6, Rgb([0, 255, 0]));
        let second = FrameBuffer::from_image(&first);
        assert_eq!(second, first);
        assert_eq!(first.get_pixel(1, 6), Rgba([0, 252, 0, 255]));
        assert_eq!(first.get_pixel(9, 0), Rgba([0, 0, 0, 0]));
    }
}

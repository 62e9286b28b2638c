//! Sense HAT LED matrix device.

mod framebuffer;

pub use framebuffer::{FrameBuffer, HEIGHT, WIDTH};

use image::{GenericImageView, Pixel};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, ScreenError};
use crate::locator::FramebufferLocator;

/// Name the Sense HAT driver registers its framebuffer under
pub const DEVICE_NAME: &str = "RPi-Sense FB";

/// Resolved LED matrix device.
///
/// The device path is resolved once when the screen is opened. A `Screen`
/// holds no locks; sharing one between threads that draw concurrently needs
/// external synchronization.
#[derive(Debug, Clone)]
pub struct Screen {
    path: PathBuf,
    blank: FrameBuffer,
}

impl Screen {
    /// Find the Sense HAT framebuffer through sysfs
    pub fn open() -> Result<Self> {
        Self::open_with(&FramebufferLocator::default(), DEVICE_NAME)
    }

    pub fn open_with(locator: &FramebufferLocator, name: &str) -> Result<Self> {
        let path = locator.find(name)?;
        Ok(Self::at_path(path))
    }

    /// Use a known device path without discovery
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            blank: FrameBuffer::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Draw a buffer to the LED matrix
    pub fn draw(&self, fb: &FrameBuffer) -> Result<()> {
        write_frame(&self.path, fb)
    }

    /// Draw an image to the LED matrix
    pub fn draw_image<I>(&self, source: &I) -> Result<()>
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        self.draw(&FrameBuffer::from_image(source))
    }

    /// Turn every LED off
    pub fn clear(&self) -> Result<()> {
        self.draw(&self.blank)
    }
}

fn write_frame(path: &Path, fb: &FrameBuffer) -> Result<()> {
    let io_error = |source| ScreenError::Io {
        path: path.to_path_buf(),
        source,
    };

    log::trace!("Writing frame to {}", path.display());

    let file = File::create(path).map_err(io_error)?;
    let texture = fb.texture();
    let mut writer = BufWriter::with_capacity(texture.pixels().len() * 2, file);
    texture.write_le(&mut writer).map_err(io_error)?;
    writer.flush().map_err(io_error)
}

//! Raspberry Pi Sense HAT LED matrix over the Linux framebuffer.
//!
//! ```text
//!   8-bit RGB ──pack──▶ Rgb565 ──▶ Texture (8×8, row-major)
//!                                      │
//!                                 FrameBuffer (raster view)
//!                                      │
//!                         Screen ──▶ /dev/fbN (128 bytes, LE)
//! ```
//!
//! The Sense HAT driver exposes the matrix as a framebuffer named
//! `RPi-Sense FB`. Writing 64 little-endian RGB565 words to it updates every
//! LED in one pass.

pub mod color;
pub mod error;
pub mod locator;
pub mod screen;
pub mod texture;

pub use color::{pack, unpack, ParseColorError, Rgb565};
pub use error::{Result, ScreenError};
pub use locator::FramebufferLocator;
pub use screen::{FrameBuffer, Screen, DEVICE_NAME};
pub use texture::Texture;

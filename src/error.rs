use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    /// No registered framebuffer reports the requested name
    #[error("no frame buffer device named '{name}' found")]
    DeviceNotFound { name: String },

    #[error("failed to write frame to {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),

    #[error("image is {width}x{height}, the LED matrix needs exactly 8x8")]
    ImageSize { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, ScreenError>;

use clap::{Parser, Subcommand};
use sense_screen::Rgb565;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sense-screen")]
#[command(version)]
#[command(about = "Draw on the Sense HAT 8x8 LED matrix", long_about = None)]
pub struct Args {
    /// Framebuffer device to write to (skips sysfs discovery)
    #[arg(short, long, global = true)]
    pub device: Option<PathBuf>,

    /// Registered framebuffer name to look for
    #[arg(short, long, global = true, default_value = sense_screen::DEVICE_NAME)]
    pub name: String,

    /// sysfs directory listing the registered framebuffers
    #[arg(long, global = true, default_value = sense_screen::locator::SYSFS_GRAPHICS)]
    pub sysfs: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Turn every LED off
    Clear,

    /// Light every LED with one color
    Fill {
        /// Color as RRGGBB hex
        color: Rgb565,
    },

    /// Draw an 8x8 image file
    Show {
        /// Image path (any format the image crate decodes)
        image: PathBuf,
    },

    /// Light a single LED, all others off
    Pixel {
        x: i32,
        y: i32,
        /// Color as RRGGBB hex
        color: Rgb565,
    },

    /// List registered framebuffers
    List,
}

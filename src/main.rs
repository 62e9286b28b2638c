use anyhow::{Context, Result};
use clap::Parser;
use image::{GenericImageView, Rgba};
use std::path::Path;

use sense_screen::screen::{HEIGHT, WIDTH};
use sense_screen::{FrameBuffer, FramebufferLocator, Screen, ScreenError};

mod cli;

use cli::{Args, Command};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let locator = FramebufferLocator::new(&args.sysfs, sense_screen::locator::DEV_DIR);

    match args.command {
        Command::List => list_framebuffers(&locator),
        command => {
            let screen = match args.device {
                Some(path) => Screen::at_path(path),
                None => Screen::open_with(&locator, &args.name).with_context(|| {
                    format!(
                        "Is the Sense HAT driver loaded? Searched {}",
                        locator.class_dir().display()
                    )
                })?,
            };
            log::info!("Using LED matrix at {}", screen.path().display());
            run(&screen, command)
        }
    }
}

fn run(screen: &Screen, command: Command) -> Result<()> {
    match command {
        Command::Clear => screen.clear()?,
        Command::Fill { color } => {
            let mut fb = FrameBuffer::new();
            fb.fill(color);
            screen.draw(&fb)?;
        }
        Command::Show { image } => show_image(screen, &image)?,
        Command::Pixel { x, y, color } => {
            let mut fb = FrameBuffer::new();
            fb.set_color_at(x, y, Rgba::from(color));
            if fb.color_at(x, y).0[3] == 0 {
                log::warn!("({}, {}) is outside the {}x{} matrix, drawing a blank frame", x, y, WIDTH, HEIGHT);
            }
            screen.draw(&fb)?;
        }
        Command::List => unreachable!("listing never opens a screen"),
    }
    Ok(())
}

fn list_framebuffers(locator: &FramebufferLocator) -> Result<()> {
    let framebuffers = locator.list();
    if framebuffers.is_empty() {
        println!("No framebuffers registered under {}", locator.class_dir().display());
        return Ok(());
    }

    for (path, name) in framebuffers {
        let marker = if name == sense_screen::DEVICE_NAME { "  <- Sense HAT" } else { "" };
        println!("  {}: {}{}", path.display(), name, marker);
    }
    Ok(())
}

fn show_image(screen: &Screen, path: &Path) -> Result<()> {
    let img = image::open(path)
        .map_err(ScreenError::from)
        .with_context(|| format!("Failed to load image: {}", path.display()))?;

    let (width, height) = img.dimensions();
    if (width, height) != (WIDTH, HEIGHT) {
        return Err(ScreenError::ImageSize { width, height }.into());
    }

    screen.draw_image(&img.to_rgba8())?;
    Ok(())
}

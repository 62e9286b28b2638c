//! Framebuffer discovery through sysfs.
//!
//! Every registered framebuffer appears as `/sys/class/graphics/fbN` with a
//! `name` attribute; the matching character device is `/dev/fbN`.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, ScreenError};

pub const SYSFS_GRAPHICS: &str = "/sys/class/graphics";
pub const DEV_DIR: &str = "/dev";

#[derive(Debug, Clone)]
pub struct FramebufferLocator {
    class_dir: PathBuf,
    dev_dir: PathBuf,
}

impl Default for FramebufferLocator {
    fn default() -> Self {
        Self::new(SYSFS_GRAPHICS, DEV_DIR)
    }
}

impl FramebufferLocator {
    pub fn new(class_dir: impl Into<PathBuf>, dev_dir: impl Into<PathBuf>) -> Self {
        Self {
            class_dir: class_dir.into(),
            dev_dir: dev_dir.into(),
        }
    }

    pub fn class_dir(&self) -> &Path {
        &self.class_dir
    }

    /// All readable framebuffer registrations as (device path, name), sorted by entry name
    pub fn list(&self) -> Vec<(PathBuf, String)> {
        let entries = WalkDir::new(&self.class_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok());

        let mut found = Vec::new();
        for entry in entries {
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            if !file_name.starts_with("fb") {
                continue;
            }

            let name_file = entry.path().join("name");
            match fs::read_to_string(&name_file) {
                Ok(name) => {
                    found.push((self.dev_dir.join(file_name), name.trim().to_string()));
                }
                Err(e) => {
                    log::warn!("Skipping {}: {}", name_file.display(), e);
                }
            }
        }
        found
    }

    /// Device path of the first framebuffer whose registered name equals `name`
    pub fn find(&self, name: &str) -> Result<PathBuf> {
        let device = self
            .list()
            .into_iter()
            .find(|(_, fb_name)| fb_name == name)
            .map(|(path, _)| path);

        match device {
            Some(path) => {
                log::debug!("Found frame buffer '{}' at {}", name, path.display());
                Ok(path)
            }
            None => Err(ScreenError::DeviceNotFound {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn register(class_dir: &Path, entry: &str, name: &str) {
        let dir = class_dir.join(entry);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("name"), name).unwrap();
    }

    #[test]
    fn test_find_matches_trimmed_name() {
        let sys = tempdir().unwrap();
        register(sys.path(), "fb0", "vc4drmfb\n");
        register(sys.path(), "fb1", "RPi-Sense FB\n");

        let locator = FramebufferLocator::new(sys.path(), "/dev");
        assert_eq!(locator.find("RPi-Sense FB").unwrap(), PathBuf::from("/dev/fb1"));
    }

    #[test]
    fn test_find_missing_device() {
        let sys = tempdir().unwrap();
        register(sys.path(), "fb0", "vc4drmfb");

        let locator = FramebufferLocator::new(sys.path(), "/dev");
        let err = locator.find("RPi-Sense FB").unwrap_err();
        assert!(matches!(err, ScreenError::DeviceNotFound { ref name } if name == "RPi-Sense FB"));
    }

    #[test]
    fn test_missing_class_dir_is_not_found() {
        let locator = FramebufferLocator::new("/nonexistent/graphics", "/dev");
        assert!(matches!(
            locator.find("RPi-Sense FB"),
            Err(ScreenError::DeviceNotFound { .. })
        ));
    }

    #[test]
    fn test_first_match_wins_and_non_fb_entries_ignored() {
        let sys = tempdir().unwrap();
        register(sys.path(), "fbcon", "RPi-Sense FB");
        register(sys.path(), "fb2", "RPi-Sense FB");
        register(sys.path(), "fb3", "RPi-Sense FB");
        register(sys.path(), "other", "RPi-Sense FB");
        // Unreadable registration: directory without a name file
        fs::create_dir_all(sys.path().join("fb1")).unwrap();

        let locator = FramebufferLocator::new(sys.path(), "/dev");
        assert_eq!(locator.find("RPi-Sense FB").unwrap(), PathBuf::from("/dev/fb2"));

        let listed: Vec<String> = locator
            .list()
            .into_iter()
            .map(|(path, _)| path.display().to_string())
            .collect();
        assert_eq!(listed, vec!["/dev/fb2", "/dev/fb3", "/dev/fbcon"]);
    }
}

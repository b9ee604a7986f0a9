//! Sysfs-backed LED devices.
//!
//! The kernel exposes every registered LED as a directory under
//! `/sys/class/leds`, with small integer attribute files:
//!
//! ```text
//! /sys/class/leds/
//!   input2::capslock/
//!     brightness        <- current brightness (e.g. "0")
//!     max_brightness    <- maximum brightness (e.g. "1")
//!   mmc0::/
//!     brightness
//!     max_brightness
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::LedDevice;
use crate::error::{ExporterError, Result};

/// Default sysfs directory exposing LED class devices.
pub const SYSFS_LED_ROOT: &str = "/sys/class/leds";

/// A single LED entry under the sysfs LED class.
///
/// Attribute reads open the corresponding sysfs file on every call, so each
/// scrape observes the live hardware state. Nothing is cached.
#[derive(Debug, Clone)]
pub struct SysfsLed {
    name: String,
    path: PathBuf,
}

impl SysfsLed {
    /// Create a handle for the LED directory at `path`.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Directory backing this LED.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_attribute(&self, attribute: &str) -> Result<i64> {
        let path = self.path.join(attribute);
        let raw = fs::read_to_string(&path)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|e| ExporterError::parse_error(format!("{}: {}", path.display(), e)))
    }
}

impl LedDevice for SysfsLed {
    fn name(&self) -> &str {
        &self.name
    }

    fn brightness(&self) -> Result<i64> {
        self.read_attribute("brightness")
    }

    fn max_brightness(&self) -> Result<i64> {
        self.read_attribute("max_brightness")
    }
}

/// Enumerate the LED devices present under the default sysfs root.
///
/// This is called once at startup; the returned list stays fixed for the
/// process lifetime. An unreadable root directory is a hard error that
/// prevents the exporter from starting.
pub fn discover_leds() -> Result<Vec<SysfsLed>> {
    scan(Path::new(SYSFS_LED_ROOT))
}

/// Enumerate LED entries under `root`.
pub(crate) fn scan(root: &Path) -> Result<Vec<SysfsLed>> {
    let entries = fs::read_dir(root)
        .map_err(|e| ExporterError::enumeration_error(format!("{}: {}", root.display(), e)))?;

    let mut leds = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| ExporterError::enumeration_error(format!("{}: {}", root.display(), e)))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        debug!("Discovered LED {}", name);
        leds.push(SysfsLed::new(name, entry.path()));
    }

    Ok(leds)
}

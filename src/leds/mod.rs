//! LED device access.
//!
//! This module provides the device layer of the exporter: a trait describing
//! read access to a single LED and a sysfs-backed implementation that reads
//! the kernel's LED class interface under `/sys/class/leds`.

pub mod sysfs;

// Re-export commonly used items
pub use sysfs::{discover_leds, SysfsLed};

use crate::error::Result;

/// Read access to a single LED device.
///
/// Any implementation exposing a name and the two brightness attributes can
/// back the collector; tests substitute in-memory fakes for the sysfs
/// implementation.
pub trait LedDevice: Send + Sync {
    /// Raw device name as reported by the source.
    fn name(&self) -> &str;

    /// Current brightness, read live on every call.
    fn brightness(&self) -> Result<i64>;

    /// Maximum brightness supported by the device, read live on every call.
    fn max_brightness(&self) -> Result<i64>;
}

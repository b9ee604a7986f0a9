//! # LED Exporter
//!
//! A Prometheus exporter for Linux LED class devices. The kernel exposes
//! every registered LED under `/sys/class/leds`; this crate enumerates those
//! devices once at startup and republishes their `brightness` and
//! `max_brightness` attributes as labeled gauges on each scrape.
//!
//! ## Exported metrics
//!
//! - `led_led_brightness{led="<name>"}` — current brightness
//! - `led_led_max_brightness{led="<name>"}` — maximum brightness
//!
//! Device names are sanitized for label safety (`:` and `-` become `_`).
//! A device whose attribute read fails simply contributes no sample for
//! that attribute on that pass; the scrape itself never fails.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use led_exporter::{start_web_server, LedCollector, WebConfig};
//! use prometheus::Registry;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let collector = LedCollector::new()?;
//!     let registry = Registry::new();
//!     registry.register(Box::new(collector))?;
//!
//!     start_web_server(WebConfig::default(), registry).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod leds;
pub mod metrics;
pub mod web;

// Re-export public API
pub use error::{ExporterError, Result};
pub use leds::{discover_leds, LedDevice, SysfsLed};
pub use metrics::{sanitize_label, LedCollector};
pub use web::{start_web_server, WebConfig};

/// The default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// The default HTTP port the exporter listens on.
pub const DEFAULT_PORT: u16 = 9342;

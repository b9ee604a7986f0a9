//! LED metrics collection.
//!
//! This module turns the fixed set of discovered LED devices into Prometheus
//! gauge samples: one `led_led_brightness` and one `led_led_max_brightness`
//! sample per device per scrape.

pub mod collector;

// Re-export commonly used items
pub use collector::{sanitize_label, LedCollector};

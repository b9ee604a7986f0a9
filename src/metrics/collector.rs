//! Prometheus collector for LED brightness gauges.

use std::collections::HashMap;

use prometheus::core::{Collector, Desc};
use prometheus::proto::{self, MetricFamily};

use crate::error::Result;
use crate::leds::{discover_leds, LedDevice};

/// Metric namespace shared by every exported family.
const NAMESPACE: &str = "led";
/// Subsystem component of the metric names.
const SUBSYSTEM: &str = "led";
/// Label carrying the sanitized device name.
const LED_LABEL: &str = "led";

/// Replace characters that are unsafe in a Prometheus label value.
///
/// Every `:` and `-` becomes `_`; all other characters are preserved, so the
/// result has the same length as the input and sanitizing twice is a no-op.
pub fn sanitize_label(name: &str) -> String {
    name.replace(':', "_").replace('-', "_")
}

/// Collects brightness gauges for a fixed set of LED devices.
///
/// The device list is captured once at construction and never changes
/// afterwards; attribute values are read live on every collect pass. The
/// collector holds no mutable state, so concurrent scrapes need no locking.
pub struct LedCollector {
    leds: Vec<Box<dyn LedDevice>>,
    brightness: Desc,
    max_brightness: Desc,
}

impl LedCollector {
    /// Create a collector over the LEDs currently present on the host.
    ///
    /// Fails when device enumeration fails; the exporter must not start
    /// serving in that case.
    pub fn new() -> Result<Self> {
        let leds = discover_leds()?
            .into_iter()
            .map(|led| Box::new(led) as Box<dyn LedDevice>)
            .collect();
        Self::with_devices(leds)
    }

    /// Create a collector over an explicit device list.
    pub fn with_devices(leds: Vec<Box<dyn LedDevice>>) -> Result<Self> {
        let brightness = Desc::new(
            format!("{}_{}_brightness", NAMESPACE, SUBSYSTEM),
            "LED brightness".to_string(),
            vec![LED_LABEL.to_string()],
            HashMap::new(),
        )?;
        let max_brightness = Desc::new(
            format!("{}_{}_max_brightness", NAMESPACE, SUBSYSTEM),
            "LED max brightness".to_string(),
            vec![LED_LABEL.to_string()],
            HashMap::new(),
        )?;

        Ok(Self {
            leds,
            brightness,
            max_brightness,
        })
    }

    /// Number of devices captured at construction.
    pub fn device_count(&self) -> usize {
        self.leds.len()
    }
}

fn gauge_metric(label_value: &str, value: f64) -> proto::Metric {
    let mut label = proto::LabelPair::default();
    label.set_name(LED_LABEL.to_string());
    label.set_value(label_value.to_string());

    let mut gauge = proto::Gauge::default();
    gauge.set_value(value);

    let mut metric = proto::Metric::default();
    metric.mut_label().push(label);
    metric.set_gauge(gauge);
    metric
}

fn gauge_family(desc: &Desc, metrics: Vec<proto::Metric>) -> MetricFamily {
    let mut family = MetricFamily::default();
    family.set_name(desc.fq_name.clone());
    family.set_help(desc.help.clone());
    family.set_field_type(proto::MetricType::GAUGE);
    for metric in metrics {
        family.mut_metric().push(metric);
    }
    family
}

impl Collector for LedCollector {
    fn desc(&self) -> Vec<&Desc> {
        vec![&self.brightness, &self.max_brightness]
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let mut brightness = Vec::with_capacity(self.leds.len());
        let mut max_brightness = Vec::with_capacity(self.leds.len());

        for led in &self.leds {
            let label = sanitize_label(led.name());
            // Each attribute is read independently; a failed read drops that
            // sample for this pass and never aborts the loop.
            if let Ok(value) = led.brightness() {
                brightness.push(gauge_metric(&label, value as f64));
            }
            if let Ok(value) = led.max_brightness() {
                max_brightness.push(gauge_metric(&label, value as f64));
            }
        }

        let mut families = Vec::with_capacity(2);
        if !brightness.is_empty() {
            families.push(gauge_family(&self.brightness, brightness));
        }
        if !max_brightness.is_empty() {
            families.push(gauge_family(&self.max_brightness, max_brightness));
        }
        families
    }
}

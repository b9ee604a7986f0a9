use led_exporter::error::{ExporterError, Result};
use led_exporter::{sanitize_label, LedCollector, LedDevice, WebConfig, DEFAULT_PORT};
use prometheus::{Encoder, Registry, TextEncoder};

/// Deterministic in-memory LED device; `None` readings simulate a failed
/// attribute read.
struct FakeLed {
    name: &'static str,
    brightness: Option<i64>,
    max_brightness: Option<i64>,
}

impl FakeLed {
    fn boxed(
        name: &'static str,
        brightness: Option<i64>,
        max_brightness: Option<i64>,
    ) -> Box<dyn LedDevice> {
        Box::new(FakeLed {
            name,
            brightness,
            max_brightness,
        })
    }
}

impl LedDevice for FakeLed {
    fn name(&self) -> &str {
        self.name
    }

    fn brightness(&self) -> Result<i64> {
        self.brightness
            .ok_or_else(|| ExporterError::parse_error("brightness unavailable"))
    }

    fn max_brightness(&self) -> Result<i64> {
        self.max_brightness
            .ok_or_else(|| ExporterError::parse_error("max_brightness unavailable"))
    }
}

fn registry_with(leds: Vec<Box<dyn LedDevice>>) -> Registry {
    let collector = LedCollector::with_devices(leds).expect("collector should build");
    let registry = Registry::new();
    registry
        .register(Box::new(collector))
        .expect("collector should register");
    registry
}

fn encode(registry: &Registry) -> String {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder
        .encode(&registry.gather(), &mut buffer)
        .expect("encoding should succeed");
    String::from_utf8(buffer).expect("exposition output should be UTF-8")
}

/// Count the sample lines in a text exposition payload (everything that is
/// not a comment or blank line).
fn sample_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| !line.starts_with('#') && !line.is_empty())
        .collect()
}

#[test]
fn test_scrape_all_devices_healthy() {
    let registry = registry_with(vec![
        FakeLed::boxed("input2::capslock", Some(0), Some(1)),
        FakeLed::boxed("red:power-led", Some(127), Some(255)),
        FakeLed::boxed("mmc0", Some(1), Some(255)),
    ]);

    let output = encode(&registry);

    assert!(output.contains("# TYPE led_led_brightness gauge"));
    assert!(output.contains("# TYPE led_led_max_brightness gauge"));
    assert!(output.contains("led_led_brightness{led=\"input2__capslock\"} 0"));
    assert!(output.contains("led_led_brightness{led=\"red_power_led\"} 127"));
    assert!(output.contains("led_led_brightness{led=\"mmc0\"} 1"));
    assert!(output.contains("led_led_max_brightness{led=\"red_power_led\"} 255"));
    assert_eq!(sample_lines(&output).len(), 6);
}

#[test]
fn test_scrape_with_one_failing_brightness_read() {
    let registry = registry_with(vec![
        FakeLed::boxed("led0", Some(0), Some(1)),
        FakeLed::boxed("led1", None, Some(255)),
        FakeLed::boxed("led2", Some(5), Some(10)),
    ]);

    let output = encode(&registry);

    // 5 samples, not 6: led1 contributes only its max_brightness sample.
    assert_eq!(sample_lines(&output).len(), 5);
    assert!(!output.contains("led_led_brightness{led=\"led1\"}"));
    assert!(output.contains("led_led_max_brightness{led=\"led1\"} 255"));
}

#[test]
fn test_scrape_with_no_devices() {
    let registry = registry_with(Vec::new());
    let output = encode(&registry);
    assert!(sample_lines(&output).is_empty());
}

#[test]
fn test_consecutive_scrapes_are_identical() {
    let registry = registry_with(vec![
        FakeLed::boxed("led0", Some(4), Some(8)),
        FakeLed::boxed("tpacpi::power", Some(1), Some(1)),
    ]);

    let first = encode(&registry);
    let second = encode(&registry);
    assert_eq!(first, second);
}

#[test]
fn test_sample_values_match_raw_readings() {
    let registry = registry_with(vec![FakeLed::boxed("led0", Some(42), Some(255))]);
    let output = encode(&registry);

    assert!(output.contains("led_led_brightness{led=\"led0\"} 42"));
    assert!(output.contains("led_led_max_brightness{led=\"led0\"} 255"));
}

#[test]
fn test_sanitize_properties() {
    assert_eq!(sanitize_label("red:power-led"), "red_power_led");

    // Idempotence over a spread of names.
    for name in ["red:power-led", "plain", "a-b-c", "x::y"] {
        let once = sanitize_label(name);
        assert_eq!(sanitize_label(&once), once);
    }

    // Identity when no trigger characters are present.
    for name in ["led0", "ACT", "pwm_fan"] {
        assert_eq!(sanitize_label(name), name);
    }
}

#[test]
fn test_web_config() {
    let config = WebConfig::default().with_host("127.0.0.1").with_port(9090);

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9090);
    assert_eq!(config.bind_address(), "127.0.0.1:9090");

    let default_config = WebConfig::default();
    assert_eq!(default_config.port, DEFAULT_PORT);
    assert_eq!(default_config.host, "0.0.0.0");
}

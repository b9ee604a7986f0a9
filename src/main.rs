//! LED Exporter binary.
//!
//! Standalone Prometheus exporter publishing LED brightness state from
//! `/sys/class/leds` over HTTP.

use clap::{Parser, Subcommand};
use led_exporter::{
    discover_leds, start_web_server, LedCollector, LedDevice, WebConfig, DEFAULT_HOST, DEFAULT_PORT,
};
use prometheus::Registry;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "led_exporter")]
#[command(about = "Prometheus exporter for Linux LED brightness")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Web server bind address
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Web server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the exporter HTTP server (default)
    Serve,

    /// Print the discovered LEDs with their current readings and exit
    List,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    match &cli.command {
        Some(Commands::List) => list_command()?,
        Some(Commands::Serve) | None => serve_command(&cli).await?,
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

async fn serve_command(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting LED exporter v{}...", env!("CARGO_PKG_VERSION"));

    let collector = LedCollector::new()?;
    info!("Discovered {} LED device(s)", collector.device_count());

    let registry = Registry::new();
    registry.register(Box::new(collector))?;

    let config = WebConfig::new(&cli.host, cli.port);
    start_web_server(config, registry).await?;

    Ok(())
}

fn list_command() -> Result<(), Box<dyn std::error::Error>> {
    let leds = discover_leds()?;

    if leds.is_empty() {
        println!("No LED devices found");
        return Ok(());
    }

    for led in &leds {
        let brightness = led
            .brightness()
            .map(|v| v.to_string())
            .unwrap_or_else(|_| "unreadable".to_string());
        let max_brightness = led
            .max_brightness()
            .map(|v| v.to_string())
            .unwrap_or_else(|_| "unreadable".to_string());

        println!(
            "{}: brightness={} max_brightness={}",
            led.name(),
            brightness,
            max_brightness
        );
    }

    Ok(())
}

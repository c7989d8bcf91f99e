//! inu-cfg - provisions an Inu device's NVS partition over serial
//!
//! # Usage
//!
//! ```bash
//! # Fully interactive: prompts for every missing field
//! inu-cfg
//!
//! # Non-interactive with auto-detected serial port
//! inu-cfg -d inu-07 -s MyNet -x hunter22
//!
//! # Explicit port and clock speed
//! inu-cfg -c 240 -d inu-07 -s MyNet -x hunter22 -p /dev/ttyUSB0
//! ```

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use inu_cfg_core::Provisioner;
use inu_cfg_flash::{candidate_ports, EspTool, NvsPartitionGen};

mod prompt;

/// Inu device configurator - writes identity and WiFi credentials to the
/// NVS partition of an ESP32 device over serial
#[derive(Parser)]
#[command(name = "inu-cfg")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// MCU clock speed in MHz: 80, 160, or 240 [default: 160]
    #[arg(short, long)]
    clock: Option<String>,

    /// Inu device ID (lowercase, a-z 0-9 - ., at least 3 characters)
    #[arg(short, long)]
    device_id: Option<String>,

    /// WiFi SSID (up to 32 characters)
    #[arg(short, long)]
    ssid: Option<String>,

    /// WiFi password (8 to 63 characters)
    #[arg(short = 'x', long)]
    password: Option<String>,

    /// Serial port of the ESP32 device (auto-detected if omitted)
    #[arg(short, long)]
    port: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);

        // Show cause chain in verbose mode
        if verbose {
            for cause in e.chain().skip(1) {
                eprintln!("  {} {}", style("Caused by:").yellow(), cause);
            }
        }

        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Validate: interactive loop until all four fields pass.
    // Nothing has been written yet, so Ctrl-C here has no side effects.
    let config = prompt::resolve_config(&prompt::RawFields {
        clock: cli.clock.as_deref(),
        device_id: cli.device_id.as_deref(),
        ssid: cli.ssid.as_deref(),
        password: cli.password.as_deref(),
    })?;

    let ports = candidate_ports(cli.port.as_deref());
    tracing::debug!("Candidate ports: {ports:?}");

    let encoder = NvsPartitionGen::new();
    let flasher = EspTool::new();
    Provisioner::new(&encoder, &flasher).run(&config, &ports)?;

    if !cli.quiet {
        println!(
            "{} {} provisioned",
            style("✓").green(),
            style(config.device_id()).cyan()
        );
    }
    Ok(())
}

//! Binding to the esptool flashing procedure.
//!
//! esptool owns the serial protocol: handshake, stub upload, chip
//! detection, and the block-wise write. This module drives one esptool
//! invocation per candidate port, distinguishing "no device there" from
//! a write failure on a connected device.

use std::path::Path;

use inu_cfg_core::{Error, Flasher, Result};
use tracing::{info, warn};

use crate::tool;

/// Initial serial baud rate
pub const BAUD: u32 = 115_200;
/// Connection attempts per port before moving on
pub const CONNECT_ATTEMPTS: u32 = 2;

const ESPTOOL_BINS: &[&str] = &["esptool", "esptool.py"];
const INSTALL_HINT: &str = "pip install esptool";

/// Production [`Flasher`] backed by the esptool CLI.
///
/// Uses auto chip detection, the default reset before the operation and
/// a hard reset after, with the fast-loader stub enabled.
#[derive(Debug)]
pub struct EspTool {
    baud: u32,
    connect_attempts: u32,
}

impl EspTool {
    /// Create the flasher binding with the default serial parameters
    pub fn new() -> Self {
        Self {
            baud: BAUD,
            connect_attempts: CONNECT_ATTEMPTS,
        }
    }

    fn args(&self, port: &str, image: &Path, offset: u32) -> Vec<String> {
        vec![
            "--chip".to_string(),
            "auto".to_string(),
            "--port".to_string(),
            port.to_string(),
            "--baud".to_string(),
            self.baud.to_string(),
            "--before".to_string(),
            "default_reset".to_string(),
            "--after".to_string(),
            "hard_reset".to_string(),
            "--connect-attempts".to_string(),
            self.connect_attempts.to_string(),
            "write_flash".to_string(),
            format!("{offset:#x}"),
            image.display().to_string(),
        ]
    }
}

impl Default for EspTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Flasher for EspTool {
    fn flash(&self, image: &Path, offset: u32, ports: &[String]) -> Result<()> {
        for port in ports {
            info!("Connecting on {port}");
            let output = tool::run(ESPTOOL_BINS, &self.args(port, image, offset), INSTALL_HINT)?;

            if output.status.success() {
                info!("Partition written at {offset:#x} via {port}");
                return Ok(());
            }

            let detail = tool::stderr_tail(&output, 5);
            if is_connection_failure(&detail) {
                warn!("No device on {port}");
                continue;
            }

            // The device answered but the write itself went wrong
            return Err(Error::FlashWrite {
                port: port.clone(),
                detail,
            });
        }

        Err(Error::NoDevice {
            tried: ports.to_vec(),
        })
    }
}

/// Does this esptool failure mean "nothing answered on that port"?
fn is_connection_failure(detail: &str) -> bool {
    detail.contains("Failed to connect")
        || detail.contains("Could not open")
        || detail.contains("could not open port")
        || detail.contains("No such file or directory")
}

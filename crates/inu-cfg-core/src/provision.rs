//! The provisioning pipeline.
//!
//! A linear run of `Render -> Encode -> Flash -> Cleanup` over an
//! already-validated configuration. The external NVS encoder and the
//! device flasher sit behind the [`Encoder`] and [`Flasher`] traits;
//! production bindings live in the `inu-cfg-flash` crate.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::DeviceConfig;
use crate::error::Result;
use crate::table::SettingsTable;

#[cfg(test)]
use mockall::automock;

/// Intermediate settings table filename
pub const TABLE_FILE: &str = "nvs.csv";
/// Intermediate partition image filename
pub const IMAGE_FILE: &str = "nvs.bin";
/// NVS partition size in bytes
pub const PARTITION_SIZE: u32 = 0x4000;
/// Byte offset of the NVS partition on the device flash
pub const PARTITION_OFFSET: u32 = 0x9000;

/// Encodes a settings table file into a binary partition image
#[cfg_attr(test, automock)]
pub trait Encoder {
    /// Produce `image` from `table`, padded to `size` bytes
    fn encode(&self, table: &Path, image: &Path, size: u32) -> Result<()>;
}

/// Writes a partition image to a device over serial
#[cfg_attr(test, automock)]
pub trait Flasher {
    /// Write `image` at `offset`, trying `ports` in order until one connects
    fn flash(&self, image: &Path, offset: u32, ports: &[String]) -> Result<()>;
}

/// Drives one provisioning run
pub struct Provisioner<'a> {
    encoder: &'a dyn Encoder,
    flasher: &'a dyn Flasher,
    work_dir: PathBuf,
}

impl<'a> Provisioner<'a> {
    /// Create a provisioner using the current directory for intermediates
    pub fn new(encoder: &'a dyn Encoder, flasher: &'a dyn Flasher) -> Self {
        Self {
            encoder,
            flasher,
            work_dir: PathBuf::from("."),
        }
    }

    /// Use `dir` for the intermediate table and image files
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    /// Run the pipeline for `config` against the candidate `ports`.
    ///
    /// An encoder failure aborts before any device I/O. Cleanup of the
    /// intermediate files runs exactly once per call, whatever the
    /// outcome; failures there are logged and never change the result.
    pub fn run(&self, config: &DeviceConfig, ports: &[String]) -> Result<()> {
        let table_path = self.work_dir.join(TABLE_FILE);
        let image_path = self.work_dir.join(IMAGE_FILE);

        let outcome = self.run_stages(config, ports, &table_path, &image_path);
        self.cleanup(&[&table_path, &image_path]);
        outcome
    }

    fn run_stages(
        &self,
        config: &DeviceConfig,
        ports: &[String],
        table_path: &Path,
        image_path: &Path,
    ) -> Result<()> {
        SettingsTable::from_config(config).write_to(table_path)?;

        info!("Encoding partition image ({PARTITION_SIZE:#x} bytes)");
        self.encoder.encode(table_path, image_path, PARTITION_SIZE)?;

        info!("Writing partition at offset {PARTITION_OFFSET:#x}");
        self.flasher.flash(image_path, PARTITION_OFFSET, ports)?;

        Ok(())
    }

    fn cleanup(&self, paths: &[&Path]) {
        for path in paths {
            match fs::remove_file(path) {
                Ok(()) => debug!("Removed {}", path.display()),
                // Absent is normal when an earlier stage failed
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => warn!("Cannot delete {}: {e}", path.display()),
            }
        }
    }
}

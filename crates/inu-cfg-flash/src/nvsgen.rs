//! Binding to the ESP-IDF NVS partition generator.
//!
//! The binary partition format is owned by the generator; this module
//! only shells out to it and maps failures onto [`Error::Encoding`].

use std::path::Path;

use inu_cfg_core::{Encoder, Error, Result};
use tracing::info;

use crate::tool;

/// NVS partition format version the device firmware expects
pub const NVS_FORMAT_VERSION: u8 = 2;

const GENERATOR_BINS: &[&str] = &["esp-idf-nvs-partition-gen", "nvs_partition_gen.py"];
const INSTALL_HINT: &str = "pip install esp-idf-nvs-partition-gen";

/// Production [`Encoder`] backed by `esp-idf-nvs-partition-gen`.
///
/// Always generates an unencrypted image.
#[derive(Debug, Default)]
pub struct NvsPartitionGen;

impl NvsPartitionGen {
    /// Create the generator binding
    pub fn new() -> Self {
        Self
    }

    fn args(table: &Path, image: &Path, size: u32) -> Vec<String> {
        vec![
            "generate".to_string(),
            table.display().to_string(),
            image.display().to_string(),
            format!("{size:#x}"),
            "--version".to_string(),
            NVS_FORMAT_VERSION.to_string(),
        ]
    }
}

impl Encoder for NvsPartitionGen {
    fn encode(&self, table: &Path, image: &Path, size: u32) -> Result<()> {
        let output = tool::run(GENERATOR_BINS, &Self::args(table, image, size), INSTALL_HINT)?;

        if !output.status.success() {
            return Err(Error::Encoding(tool::stderr_tail(&output, 5)));
        }

        info!("Partition image written to {}", image.display());
        Ok(())
    }
}

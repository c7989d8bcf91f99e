//! # inu-cfg Core
//!
//! Core library for the inu-cfg provisioning tool.
//!
//! ## Modules
//!
//! - `validate`: pure validation/normalization of the four operator fields
//! - `config`: the validated, immutable [`DeviceConfig`]
//! - `table`: rendering the NVS CSV settings table
//! - `provision`: the `Render -> Encode -> Flash -> Cleanup` pipeline and
//!   the [`Encoder`]/[`Flasher`] capability traits
//! - `error`: error types and result alias
//!
//! ## Example
//!
//! ```ignore
//! use inu_cfg_core::{validate, DeviceConfig, Provisioner};
//!
//! let clock = validate::clock(Some("160"))?;
//! let id = validate::device_id(Some("Device-01"))?; // -> "device-01"
//! let ssid = validate::ssid(Some("MyNet"))?;
//! let pw = validate::password(Some("hunter22"))?;
//! let config = DeviceConfig::new(clock, id, ssid, pw);
//!
//! Provisioner::new(&encoder, &flasher).run(&config, &ports)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod provision;
pub mod table;
pub mod validate;

pub use config::{ClockSpeed, DeviceConfig};
pub use error::{Error, FieldError, Result};
pub use provision::{
    Encoder, Flasher, Provisioner, IMAGE_FILE, PARTITION_OFFSET, PARTITION_SIZE, TABLE_FILE,
};
pub use table::{SettingsTable, NAMESPACE};

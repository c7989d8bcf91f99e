//! # inu-cfg Flash
//!
//! Bindings from the inu-cfg pipeline to the external ESP toolchain:
//! the NVS partition generator (encoder) and esptool (flasher), both
//! invoked as subprocesses, plus serial port discovery and ordering.
//!
//! The binary partition format and the flashing protocol are owned by
//! those tools; nothing here parses or reimplements either.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod esptool;
pub mod nvsgen;
pub mod ports;
mod tool;

pub use esptool::{EspTool, BAUD, CONNECT_ATTEMPTS};
pub use nvsgen::{NvsPartitionGen, NVS_FORMAT_VERSION};
pub use ports::{candidate_ports, PREFERRED_PORT};

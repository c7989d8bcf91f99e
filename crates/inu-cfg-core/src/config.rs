//! Validated device configuration

use std::fmt;

/// Supported MCU clock speeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockSpeed {
    /// 80 MHz
    Mhz80,
    /// 160 MHz (factory default)
    #[default]
    Mhz160,
    /// 240 MHz
    Mhz240,
}

impl ClockSpeed {
    /// Clock speed in MHz, as stored in the NVS partition
    pub const fn mhz(self) -> u16 {
        match self {
            Self::Mhz80 => 80,
            Self::Mhz160 => 160,
            Self::Mhz240 => 240,
        }
    }

    /// Map a raw MHz value onto a supported speed
    pub const fn from_mhz(mhz: u32) -> Option<Self> {
        match mhz {
            80 => Some(Self::Mhz80),
            160 => Some(Self::Mhz160),
            240 => Some(Self::Mhz240),
            _ => None,
        }
    }
}

impl fmt::Display for ClockSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} MHz", self.mhz())
    }
}

/// A fully validated device configuration.
///
/// Built once per run from the outputs of the [`crate::validate`]
/// functions; fields are private and there are no setters, so the
/// validation invariants hold for the lifetime of the value.
#[derive(Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    clock: ClockSpeed,
    device_id: String,
    ssid: String,
    password: String,
}

impl DeviceConfig {
    /// Assemble a configuration from already-validated fields
    pub fn new(clock: ClockSpeed, device_id: String, ssid: String, password: String) -> Self {
        Self {
            clock,
            device_id,
            ssid,
            password,
        }
    }

    /// MCU clock speed
    pub fn clock(&self) -> ClockSpeed {
        self.clock
    }

    /// Normalized device identifier (lowercase, `[a-z0-9\-.]`)
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// WiFi access point SSID
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    /// WiFi access point password
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Manual Debug so the password never lands in logs.
impl fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("clock", &self.clock)
            .field("device_id", &self.device_id)
            .field("ssid", &self.ssid)
            .field("password", &"****")
            .finish()
    }
}

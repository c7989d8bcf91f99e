//! NVS settings table rendering.
//!
//! The table is the CSV input format of the ESP-IDF NVS partition
//! generator: a header row, one namespace declaration, then the four
//! typed key/value entries this tool provisions.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::DeviceConfig;
use crate::error::Result;

/// NVS namespace all provisioned keys live under
pub const NAMESPACE: &str = "settings";

/// The rendered settings table for one device configuration.
///
/// Holds copies of the already-validated values; no validation happens
/// here. Rendering is deterministic: the same configuration always
/// produces byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsTable {
    clock_mhz: u16,
    device_id: String,
    ssid: String,
    password: String,
}

impl SettingsTable {
    /// Derive the table rows from a validated configuration
    pub fn from_config(config: &DeviceConfig) -> Self {
        Self {
            clock_mhz: config.clock().mhz(),
            device_id: config.device_id().to_string(),
            ssid: config.ssid().to_string(),
            password: config.password().to_string(),
        }
    }

    /// Render the table in the NVS CSV schema.
    ///
    /// String values are quoted as the generator requires; the u16 clock
    /// value is not.
    pub fn render(&self) -> String {
        format!(
            "key,type,encoding,value\n\
             {NAMESPACE},namespace,,\n\
             clock,data,u16,{}\n\
             device_id,data,string,\"{}\"\n\
             wifi_ap,data,string,\"{}\"\n\
             wifi_pw,data,string,\"{}\"\n",
            self.clock_mhz, self.device_id, self.ssid, self.password
        )
    }

    /// Write the rendered table to `path`, replacing any prior content
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        info!("Table data written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClockSpeed;

    fn sample_config() -> DeviceConfig {
        DeviceConfig::new(
            ClockSpeed::Mhz160,
            "device-01".to_string(),
            "MyNet".to_string(),
            "hunter22".to_string(),
        )
    }

    #[test]
    fn test_render_exact_output() {
        let table = SettingsTable::from_config(&sample_config());
        assert_eq!(
            table.render(),
            "key,type,encoding,value\n\
             settings,namespace,,\n\
             clock,data,u16,160\n\
             device_id,data,string,\"device-01\"\n\
             wifi_ap,data,string,\"MyNet\"\n\
             wifi_pw,data,string,\"hunter22\"\n"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let table = SettingsTable::from_config(&sample_config());
        assert_eq!(table.render(), table.render());
    }

    #[test]
    fn test_render_row_order() {
        let table = SettingsTable::from_config(&sample_config());
        let rendered = table.render();
        let keys: Vec<&str> = rendered
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(keys, ["settings", "clock", "device_id", "wifi_ap", "wifi_pw"]);
    }

    #[test]
    fn test_write_to_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nvs.csv");
        fs::write(&path, "stale").unwrap();

        let table = SettingsTable::from_config(&sample_config());
        table.write_to(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, table.render());
    }
}

//! Interactive retry-until-valid resolution of the four config fields.
//!
//! Each field starts from its CLI flag (if any) and is re-validated;
//! while it stays invalid the operator is prompted again. A reported
//! reason is printed before re-prompting; a `Missing` field prompts
//! silently. The loop is blocking and terminal-driven; with no terminal
//! attached a still-unresolved field aborts the run instead of looping
//! on EOF.

use anyhow::{bail, Context, Result};
use console::style;
use dialoguer::Input;

use inu_cfg_core::{validate, DeviceConfig, FieldError};

/// Raw field values as supplied on the command line
#[derive(Debug, Default)]
pub struct RawFields<'a> {
    /// `-c/--clock`
    pub clock: Option<&'a str>,
    /// `-d/--device-id`
    pub device_id: Option<&'a str>,
    /// `-s/--ssid`
    pub ssid: Option<&'a str>,
    /// `-x/--password`
    pub password: Option<&'a str>,
}

/// Resolve all four fields into a validated [`DeviceConfig`]
pub fn resolve_config(raw: &RawFields<'_>) -> Result<DeviceConfig> {
    let clock = resolve(raw.clock, "MCU clock speed (160)", validate::clock)?;
    let device_id = resolve(raw.device_id, "Device ID", validate::device_id)?;
    let ssid = resolve(raw.ssid, "AP SSID", validate::ssid)?;
    let password = resolve(raw.password, "AP password", validate::password)?;

    Ok(DeviceConfig::new(clock, device_id, ssid, password))
}

fn resolve<T>(
    initial: Option<&str>,
    prompt: &str,
    validate: impl Fn(Option<&str>) -> std::result::Result<T, FieldError>,
) -> Result<T> {
    let mut raw: Option<String> = initial.map(str::to_string);

    loop {
        match validate(raw.as_deref()) {
            Ok(value) => return Ok(value),
            Err(FieldError::Missing) => {}
            Err(FieldError::Invalid(reason)) => {
                eprintln!("{}", style(reason).yellow());
            }
        }

        if !console::user_attended_stderr() {
            bail!("{prompt}: a valid value is required and no terminal is attached to prompt for one");
        }

        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("failed to read {prompt}"))?;
        raw = Some(line);
    }
}

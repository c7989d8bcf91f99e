//! Field validation for operator-supplied configuration values.
//!
//! Each validator takes the raw optional input (CLI flag or prompt line)
//! and returns either the normalized value or a [`FieldError`] the caller
//! uses to drive its re-prompt loop. Lengths are counted in Unicode
//! scalar values.

use crate::config::ClockSpeed;
use crate::error::FieldError;

/// Validate the MCU clock speed.
///
/// An absent or empty value falls back to the 160 MHz default. Anything
/// else must parse to one of 80, 160, or 240; non-numeric input is
/// reported with the same reason as an out-of-range number.
pub fn clock(raw: Option<&str>) -> Result<ClockSpeed, FieldError> {
    let raw = raw.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Ok(ClockSpeed::default());
    }

    raw.parse::<u32>()
        .ok()
        .and_then(ClockSpeed::from_mhz)
        .ok_or(FieldError::Invalid("Clock speed must be 80, 160, or 240 MHz"))
}

/// Validate and normalize the device identifier.
///
/// Input is trimmed and lowercased; the result must be at least three
/// characters from `[a-z0-9\-.]`. An absent or empty value is `Missing`
/// so the caller prompts without printing a reason.
pub fn device_id(raw: Option<&str>) -> Result<String, FieldError> {
    let id = raw.map(str::trim).unwrap_or("");
    if id.is_empty() {
        return Err(FieldError::Missing);
    }

    let id = id.to_lowercase();

    if id.chars().count() < 3 {
        return Err(FieldError::Invalid("Device ID must be at least 3 characters"));
    }

    if !id.chars().all(is_device_id_char) {
        return Err(FieldError::Invalid(
            "Device ID can only contain characters a-z, 0-9, hyphen (-), and period (.)",
        ));
    }

    Ok(id)
}

fn is_device_id_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.'
}

/// Validate the access point SSID (at most 32 characters).
///
/// An absent or empty value is `Missing`.
pub fn ssid(raw: Option<&str>) -> Result<String, FieldError> {
    let ssid = raw.unwrap_or("");
    if ssid.is_empty() {
        return Err(FieldError::Missing);
    }

    if ssid.chars().count() > 32 {
        return Err(FieldError::Invalid("SSID cannot exceed 32 characters"));
    }

    Ok(ssid.to_string())
}

/// Validate the access point password (8 to 63 characters).
///
/// Only an *absent* value is `Missing`; an empty string is a real value
/// and fails the length check with a printed reason. The asymmetry with
/// [`ssid`] is deliberate.
pub fn password(raw: Option<&str>) -> Result<String, FieldError> {
    let Some(pw) = raw else {
        return Err(FieldError::Missing);
    };

    let len = pw.chars().count();
    if !(8..=63).contains(&len) {
        return Err(FieldError::Invalid(
            "AP password must be between 8 and 63 characters",
        ));
    }

    Ok(pw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults_when_absent() {
        assert_eq!(clock(None), Ok(ClockSpeed::Mhz160));
        assert_eq!(clock(Some("")), Ok(ClockSpeed::Mhz160));
        assert_eq!(clock(Some("   ")), Ok(ClockSpeed::Mhz160));
    }

    #[test]
    fn test_clock_allowed_set() {
        assert_eq!(clock(Some("80")), Ok(ClockSpeed::Mhz80));
        assert_eq!(clock(Some("160")), Ok(ClockSpeed::Mhz160));
        assert_eq!(clock(Some("240")), Ok(ClockSpeed::Mhz240));
    }

    #[test]
    fn test_clock_rejects_out_of_range() {
        for bad in ["90", "0", "1600", "-160"] {
            assert_eq!(
                clock(Some(bad)),
                Err(FieldError::Invalid("Clock speed must be 80, 160, or 240 MHz")),
                "input: {bad}"
            );
        }
    }

    #[test]
    fn test_clock_rejects_non_numeric() {
        assert!(matches!(clock(Some("fast")), Err(FieldError::Invalid(_))));
        assert!(matches!(clock(Some("160MHz")), Err(FieldError::Invalid(_))));
    }

    #[test]
    fn test_device_id_missing_is_silent() {
        assert_eq!(device_id(None), Err(FieldError::Missing));
        assert_eq!(device_id(Some("")), Err(FieldError::Missing));
        assert_eq!(device_id(Some("   ")), Err(FieldError::Missing));
    }

    #[test]
    fn test_device_id_normalizes() {
        assert_eq!(device_id(Some("Device-01")), Ok("device-01".to_string()));
        assert_eq!(device_id(Some("  inu.07  ")), Ok("inu.07".to_string()));
    }

    #[test]
    fn test_device_id_too_short() {
        assert_eq!(
            device_id(Some("ab")),
            Err(FieldError::Invalid("Device ID must be at least 3 characters"))
        );
        assert!(device_id(Some("abc")).is_ok());
    }

    #[test]
    fn test_device_id_charset() {
        for bad in ["dev_01", "dev 01", "dev#1", "héllo"] {
            assert!(
                matches!(device_id(Some(bad)), Err(FieldError::Invalid(_))),
                "input: {bad}"
            );
        }
        assert_eq!(device_id(Some("a-b.c9")), Ok("a-b.c9".to_string()));
    }

    #[test]
    fn test_ssid_missing_is_silent() {
        assert_eq!(ssid(None), Err(FieldError::Missing));
        assert_eq!(ssid(Some("")), Err(FieldError::Missing));
    }

    #[test]
    fn test_ssid_length_boundary() {
        let max = "a".repeat(32);
        assert_eq!(ssid(Some(&max)), Ok(max.clone()));

        let over = "a".repeat(33);
        assert_eq!(
            ssid(Some(&over)),
            Err(FieldError::Invalid("SSID cannot exceed 32 characters"))
        );
    }

    #[test]
    fn test_ssid_preserves_case_and_spaces() {
        assert_eq!(ssid(Some("My Net")), Ok("My Net".to_string()));
    }

    #[test]
    fn test_password_absent_vs_empty() {
        // Absent prompts silently; an empty string is a real (invalid) value.
        assert_eq!(password(None), Err(FieldError::Missing));
        assert_eq!(
            password(Some("")),
            Err(FieldError::Invalid(
                "AP password must be between 8 and 63 characters"
            ))
        );
    }

    #[test]
    fn test_password_length_boundaries() {
        assert!(password(Some(&"a".repeat(7))).is_err());
        assert!(password(Some(&"a".repeat(8))).is_ok());
        assert!(password(Some(&"a".repeat(63))).is_ok());
        assert!(password(Some(&"a".repeat(64))).is_err());
    }
}

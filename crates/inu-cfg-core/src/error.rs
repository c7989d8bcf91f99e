//! Error types for the inu-cfg core library

use thiserror::Error;

/// Main error type for provisioning operations
#[derive(Error, Debug)]
pub enum Error {
    /// The external partition encoder failed
    #[error("Partition encoding failed: {0}")]
    Encoding(String),

    /// No device could be reached on any candidate serial port
    #[error("Unable to connect to ESP device (ports tried: {})", .tried.join(", "))]
    NoDevice {
        /// Ports attempted, in connection order
        tried: Vec<String>,
    },

    /// The device connected but the flash write itself failed
    #[error("Flash write failed on {port}: {detail}")]
    FlashWrite {
        /// Port the device was connected on
        port: String,
        /// Failure detail from the flashing tool
        detail: String,
    },

    /// A required external tool is not installed
    #[error("{tool} not found on PATH (install with: {hint})")]
    ToolMissing {
        /// Name of the missing executable
        tool: &'static str,
        /// Installation hint shown to the operator
        hint: &'static str,
    },

    /// IO error while writing or reading intermediate files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the inu-cfg error type
pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of validating a single configuration field.
///
/// `Missing` means no value was supplied and the caller should prompt
/// without printing anything; `Invalid` carries the reason to show the
/// operator before re-prompting. Neither variant ever aborts a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// No value supplied; prompt silently
    #[error("value is missing")]
    Missing,

    /// Value supplied but outside the allowed domain
    #[error("{0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encoding("bad csv".to_string());
        assert!(err.to_string().contains("bad csv"));

        let err = Error::NoDevice {
            tried: vec!["/dev/ttyUSB0".to_string(), "/dev/ttyACM0".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("/dev/ttyUSB0, /dev/ttyACM0"));

        let err = Error::FlashWrite {
            port: "/dev/ttyUSB0".to_string(),
            detail: "timed out".to_string(),
        };
        assert!(err.to_string().contains("/dev/ttyUSB0"));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::Invalid("SSID cannot exceed 32 characters");
        assert_eq!(err.to_string(), "SSID cannot exceed 32 characters");
    }
}

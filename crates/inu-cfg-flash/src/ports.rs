//! Serial port discovery and candidate ordering

use tracing::{debug, warn};

/// Platform-default device node, tried last during auto-detection.
///
/// More specific USB-serial adapters usually show up under other names;
/// letting those go first means the generic default only gets probed as
/// the fallback.
pub const PREFERRED_PORT: &str = "/dev/ttyACM0";

/// Build the ordered candidate port list for connection attempts.
///
/// An explicitly supplied port is the entire candidate set. Otherwise
/// all available ports are enumerated and reordered so the preferred
/// default is tried last.
pub fn candidate_ports(explicit: Option<&str>) -> Vec<String> {
    match explicit {
        Some(port) => vec![port.to_string()],
        None => order_candidates(available_ports()),
    }
}

fn available_ports() -> Vec<String> {
    match serialport::available_ports() {
        Ok(ports) => {
            let names: Vec<String> = ports.into_iter().map(|p| p.port_name).collect();
            debug!("Available serial ports: {names:?}");
            names
        }
        Err(e) => {
            warn!("Serial port enumeration failed: {e}");
            Vec::new()
        }
    }
}

/// Move the preferred default to the end of the attempt order
pub fn order_candidates(mut ports: Vec<String>) -> Vec<String> {
    if let Some(pos) = ports.iter().position(|p| p == PREFERRED_PORT) {
        let preferred = ports.remove(pos);
        ports.push(preferred);
    }
    ports
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ports(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_explicit_port_is_sole_candidate() {
        assert_eq!(
            candidate_ports(Some("/dev/ttyUSB7")),
            ["/dev/ttyUSB7".to_string()]
        );
    }

    #[test]
    fn test_preferred_port_moves_to_end() {
        assert_eq!(
            order_candidates(ports(&["/dev/ttyACM0", "/dev/ttyUSB0"])),
            ports(&["/dev/ttyUSB0", "/dev/ttyACM0"])
        );
        assert_eq!(
            order_candidates(ports(&["/dev/ttyUSB0", "/dev/ttyACM0"])),
            ports(&["/dev/ttyUSB0", "/dev/ttyACM0"])
        );
    }

    #[test]
    fn test_order_without_preferred_is_unchanged() {
        assert_eq!(
            order_candidates(ports(&["/dev/ttyUSB0", "/dev/ttyUSB1"])),
            ports(&["/dev/ttyUSB0", "/dev/ttyUSB1"])
        );
    }

    #[test]
    fn test_order_empty_list() {
        assert_eq!(order_candidates(Vec::new()), Vec::<String>::new());
    }

    #[test]
    fn test_preferred_only() {
        assert_eq!(
            order_candidates(ports(&["/dev/ttyACM0"])),
            ports(&["/dev/ttyACM0"])
        );
    }
}

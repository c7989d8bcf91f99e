//! Subprocess invocation of the external toolchain

use std::process::{Command, Output};

use inu_cfg_core::{Error, Result};
use tracing::debug;

/// Run the first of `binaries` that exists on PATH with `args`.
///
/// Some toolchain installs expose different executable names for the
/// same tool, so each candidate is tried in order; only a spawn failure
/// other than not-found is surfaced as an IO error. A nonzero exit is
/// NOT an error here; callers inspect the returned [`Output`].
pub(crate) fn run(
    binaries: &[&'static str],
    args: &[String],
    install_hint: &'static str,
) -> Result<Output> {
    for bin in binaries {
        debug!("Running {bin} {}", args.join(" "));
        match Command::new(bin).args(args).output() {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(Error::Io(e)),
            Ok(output) => return Ok(output),
        }
    }

    Err(Error::ToolMissing {
        tool: binaries[0],
        hint: install_hint,
    })
}

/// Last few lines of a tool's stderr, for error messages
pub(crate) fn stderr_tail(output: &Output, lines: usize) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let tail: Vec<&str> = stderr
        .lines()
        .rev()
        .take(lines)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if tail.is_empty() {
        format!("exited with {}", output.status)
    } else {
        tail.join("\n")
    }
}

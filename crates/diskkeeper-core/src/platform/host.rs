//! Host identification for artifact naming.

use std::env;
use std::process::Command;

/// Resolve an identifier for the machine running the scan.
///
/// Checks the `COMPUTERNAME` (Windows) and `HOSTNAME` environment
/// variables first, then shells out to the `hostname` command. Falls back
/// to a fixed placeholder so artifact naming never fails.
pub fn host_identifier() -> String {
    for key in ["COMPUTERNAME", "HOSTNAME"] {
        if let Ok(value) = env::var(key) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    if let Ok(output) = Command::new("hostname").output() {
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !name.is_empty() {
            return name;
        }
    }

    "unknown-host".to_string()
}

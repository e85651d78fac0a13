//! UFW status query and classification.

use std::time::Duration;

use crate::error::Result;
use crate::system::command::{self, Capture};

/// Overall firewall state derived from `ufw status` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirewallStatus {
    /// Firewall enabled; `rules` are the raw lines after the status line.
    Active { rules: Vec<String> },
    Inactive,
    /// Status line matched neither keyword (permission errors end up here).
    Unknown { status_line: String },
}

impl FirewallStatus {
    /// Classify `ufw status` output.
    ///
    /// The first line of the trimmed output is the status line. It is searched
    /// case-insensitively for `inactive` first, since `active` is a substring
    /// of it.
    pub fn classify(output: &str) -> Self {
        let mut lines = output.trim().split('\n');
        let status_line = lines.next().unwrap_or_default();
        let lowered = status_line.to_lowercase();

        if lowered.contains("inactive") {
            FirewallStatus::Inactive
        } else if lowered.contains("active") {
            FirewallStatus::Active {
                rules: lines.map(str::to_string).collect(),
            }
        } else {
            FirewallStatus::Unknown {
                status_line: status_line.to_string(),
            }
        }
    }
}

/// Run `ufw status`, capturing stderr too so errors are reported as text.
///
/// With `use_sudo`, a non-root process goes through `sudo -n` so a missing
/// sudoers entry fails fast instead of waiting for a password.
pub async fn query_ufw_status(use_sudo: bool, timeout: Duration) -> Result<String> {
    let (program, args) = ufw_invocation(use_sudo, is_root());
    command::run(program, args, Capture::Merged, timeout).await
}

fn ufw_invocation(use_sudo: bool, root: bool) -> (&'static str, &'static [&'static str]) {
    if use_sudo && !root {
        ("sudo", &["-n", "ufw", "status"])
    } else {
        ("ufw", &["status"])
    }
}

fn is_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

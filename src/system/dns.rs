//! External DNS server discovery via the resolver configuration file.

use std::path::Path;
use std::time::Duration;

use crate::error::{Result, UfwstatError};
use crate::system::command::{self, Capture};

/// Read `nameserver` lines from `resolv_conf`, skipping the local stub resolver.
///
/// The file is scanned by a `grep` child rather than read in-process, so a
/// stuck read (FIFO, hung network mount) is killed when the timeout fires.
pub async fn discover_dns(
    resolv_conf: &Path,
    stub_resolver: &str,
    timeout: Duration,
) -> Result<String> {
    let path = resolv_conf.to_string_lossy();
    let matches = command::run(
        "grep",
        &["--", "nameserver", path.as_ref()],
        Capture::Stdout,
        timeout,
    )
    .await?;

    let servers = filter_nameservers(&matches, stub_resolver);
    if servers.is_empty() {
        return Err(UfwstatError::NoOutput {
            command: format!("grep nameserver {}", path),
        });
    }

    Ok(servers)
}

/// Keep lines mentioning `nameserver` that do not mention the stub address.
///
/// Lines are passed through untouched, so a commented-out entry is kept too.
fn filter_nameservers(contents: &str, stub_resolver: &str) -> String {
    contents
        .lines()
        .filter(|line| line.contains("nameserver"))
        .filter(|line| stub_resolver.is_empty() || !line.contains(stub_resolver))
        .collect::<Vec<_>>()
        .join("\n")
}

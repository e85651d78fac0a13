//! Host address and default route discovery.

use std::time::Duration;

use crate::error::{Result, UfwstatError};
use crate::system::command::{self, Capture};

/// Shown in place of the DNS list when no external resolver is configured.
pub const NO_EXTERNAL_DNS: &str = "⚠ No external DNS server found.";

/// Network configuration collected for the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Space-separated addresses from `hostname -I`, trimmed.
    pub ip_address: String,
    /// Default gateway(s), newline-separated. Collected but not rendered.
    pub gateway: String,
    /// `nameserver` lines or [`NO_EXTERNAL_DNS`]. Collected but not rendered.
    pub dns_servers: String,
}

impl NetworkInfo {
    /// Build from raw probe results. Failed probes count as empty output.
    pub fn from_results(ip: Result<String>, gateway: Result<String>, dns: Result<String>) -> Self {
        let ip_address = or_empty("host IP", ip).trim().to_string();
        let gateway = or_empty("default gateway", gateway).trim().to_string();

        let dns = or_empty("DNS servers", dns);
        let dns_servers = match dns.trim() {
            "" => NO_EXTERNAL_DNS.to_string(),
            servers => servers.to_string(),
        };

        Self {
            ip_address,
            gateway,
            dns_servers,
        }
    }
}

fn or_empty(what: &str, result: Result<String>) -> String {
    match result {
        Ok(text) => text,
        Err(UfwstatError::NoOutput { .. }) => String::new(),
        Err(e) => {
            tracing::warn!(error = %e, "{} lookup failed", what);
            String::new()
        }
    }
}

/// All addresses assigned to the host (`hostname -I`).
pub async fn query_host_ip(timeout: Duration) -> Result<String> {
    command::run("hostname", &["-I"], Capture::Stdout, timeout).await
}

/// Default gateway(s) taken from `ip route`.
pub async fn query_default_gateway(timeout: Duration) -> Result<String> {
    let routes = command::run("ip", &["route"], Capture::Stdout, timeout).await?;
    let gateway = parse_default_gateway(&routes);
    if gateway.is_empty() {
        return Err(UfwstatError::NoOutput {
            command: "ip route (default)".into(),
        });
    }
    Ok(gateway)
}

/// Extract the third field of every route line mentioning `default`.
///
/// Format: "default via 192.168.1.1 dev eth0 proto dhcp metric 100"
fn parse_default_gateway(output: &str) -> String {
    output
        .lines()
        .filter(|line| line.contains("default"))
        .filter_map(|line| line.split_whitespace().nth(2))
        .collect::<Vec<_>>()
        .join("\n")
}

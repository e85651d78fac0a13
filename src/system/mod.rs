//! System interaction: firewall status, host addresses, routes and DNS.

pub mod command;
pub mod dns;
pub mod firewall;
pub mod network;

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;

pub use firewall::FirewallStatus;
pub use network::NetworkInfo;

/// Raw text from one probe. `Err` means the output is absent.
pub type CommandResult = Result<String>;

/// Read-only access to the host's firewall and network state.
pub trait SystemProbe {
    fn firewall_status(&self) -> impl Future<Output = CommandResult>;
    fn host_ip(&self) -> impl Future<Output = CommandResult>;
    fn default_gateway(&self) -> impl Future<Output = CommandResult>;
    fn dns_servers(&self) -> impl Future<Output = CommandResult>;
}

/// Probe backed by the local host's tooling.
#[derive(Debug, Clone)]
pub struct HostProbe {
    timeout: Duration,
    use_sudo: bool,
    resolv_conf: PathBuf,
    stub_resolver: String,
}

impl HostProbe {
    pub fn new(config: &Config) -> Self {
        Self {
            timeout: config.command_timeout(),
            use_sudo: config.use_sudo,
            resolv_conf: config.resolv_conf.clone(),
            stub_resolver: config.stub_resolver.clone(),
        }
    }
}

impl SystemProbe for HostProbe {
    async fn firewall_status(&self) -> CommandResult {
        firewall::query_ufw_status(self.use_sudo, self.timeout).await
    }

    async fn host_ip(&self) -> CommandResult {
        network::query_host_ip(self.timeout).await
    }

    async fn default_gateway(&self) -> CommandResult {
        network::query_default_gateway(self.timeout).await
    }

    async fn dns_servers(&self) -> CommandResult {
        dns::discover_dns(&self.resolv_conf, &self.stub_resolver, self.timeout).await
    }
}

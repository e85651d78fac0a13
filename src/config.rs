//! Reporter preferences.
//!
//! Loads a small JSON config from `~/.config/ufwstat/config.json`.
//! Failures are never fatal: the reporter always has sensible defaults.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Persisted reporter preferences.
///
/// Every field has a serde default so partial config files keep working.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Upper bound for each external command, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub command_timeout_secs: u64,

    /// Prefix `ufw` with `sudo -n` when not running as root.
    #[serde(default = "default_true")]
    pub use_sudo: bool,

    /// Resolver configuration file scanned for nameservers.
    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: PathBuf,

    /// Local stub resolver address excluded from the DNS list.
    #[serde(default = "default_stub_resolver")]
    pub stub_resolver: String,

    /// Write a `Content-Type` header block before the fragment.
    #[serde(default = "default_true")]
    pub emit_header: bool,
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_resolv_conf() -> PathBuf {
    PathBuf::from("/etc/resolv.conf")
}

fn default_stub_resolver() -> String {
    "127.0.0.53".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_timeout_secs: default_timeout_secs(),
            use_sudo: true,
            resolv_conf: default_resolv_conf(),
            stub_resolver: default_stub_resolver(),
            emit_header: true,
        }
    }
}

impl Config {
    /// Config file path: `~/.config/ufwstat/config.json`.
    ///
    /// Returns `None` if the config directory can't be determined.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ufwstat").join("config.json"))
    }

    /// Load config from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };

        let Ok(contents) = fs::read_to_string(&path) else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        };

        Self::from_json(&contents)
    }

    /// Parse config JSON, falling back to defaults if it is malformed.
    pub fn from_json(contents: &str) -> Self {
        serde_json::from_str(contents).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring malformed config");
            Self::default()
        })
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_json(r#"{ "command_timeout_secs": 2, "use_sudo": false }"#);
        assert_eq!(config.command_timeout_secs, 2);
        assert!(!config.use_sudo);
        assert_eq!(config.stub_resolver, "127.0.0.53");
        assert_eq!(config.resolv_conf, PathBuf::from("/etc/resolv.conf"));
        assert!(config.emit_header);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        assert_eq!(Config::from_json("{ not json"), Config::default());
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let config = Config::from_json(r#"{ "command_timeout_secs": 0 }"#);
        assert_eq!(config.command_timeout(), Duration::from_secs(1));
    }
}

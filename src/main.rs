//! ufwstat - UFW firewall and network status reporter
//!
//! Queries the firewall status and basic network configuration, then writes an
//! HTML fragment to stdout for inclusion in a status page (CGI style).

mod config;
mod error;
mod report;
mod system;

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use config::Config;
use report::StatusReporter;
use system::HostProbe;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();

    let config = Config::load();
    tracing::debug!(?config, "loaded config");

    let reporter = StatusReporter::new(HostProbe::new(&config));
    let fragment = reporter.render().await;

    write_response(&mut io::stdout().lock(), config.emit_header, &fragment)
        .context("Failed to write status fragment")?;

    Ok(())
}

/// Write the optional CGI header block followed by the fragment.
fn write_response(out: &mut impl Write, emit_header: bool, fragment: &str) -> error::Result<()> {
    if emit_header {
        out.write_all(b"Content-Type: text/html\r\n\r\n")?;
    }
    out.write_all(fragment.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Log to stderr so nothing but markup reaches stdout.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

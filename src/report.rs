//! HTML status fragment rendering.
//!
//! The fragment is meant to be embedded inline in a larger page, so it carries
//! no document structure of its own. All dynamic text is escaped.

use crate::system::{FirewallStatus, NetworkInfo, SystemProbe};

const UNAVAILABLE: &str = "<p class='status-warning'>⚠ Unable to retrieve UFW status.</p>";
const TIMED_OUT: &str = "<p class='status-warning'>⚠ Timed out retrieving UFW status.</p>";
const NOT_RUNNING: &str = "<p class='status-bad'> UFW is not running.</p>";
const RUNNING: &str = "<p class='status-ok'> UFW is running.</p>";

/// Renders firewall and network state gathered from a [`SystemProbe`].
pub struct StatusReporter<P> {
    probe: P,
}

impl<P: SystemProbe> StatusReporter<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Query the probe and render the fragment.
    ///
    /// If the firewall status is unavailable only a warning is rendered and
    /// no further probes run.
    pub async fn render(&self) -> String {
        let output = match self.probe.firewall_status().await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(error = %e, "unable to retrieve UFW status");
                let warning = if e.is_timeout() { TIMED_OUT } else { UNAVAILABLE };
                return warning.to_string();
            }
        };

        let status = FirewallStatus::classify(&output);
        tracing::info!(?status, "firewall status classified");

        let mut html = render_firewall(&status);

        let info = NetworkInfo::from_results(
            self.probe.host_ip().await,
            self.probe.default_gateway().await,
            self.probe.dns_servers().await,
        );
        tracing::debug!(
            gateway = %info.gateway,
            dns = %info.dns_servers,
            "network details collected"
        );

        html.push_str(&render_network(&info));
        html
    }
}

fn render_firewall(status: &FirewallStatus) -> String {
    match status {
        FirewallStatus::Inactive => NOT_RUNNING.to_string(),
        FirewallStatus::Active { rules } => {
            let mut html = String::from(RUNNING);
            html.push_str("<p><strong>Open Firewall Ports:</strong></p>");
            html.push_str("<pre class='firewall-block'>");
            for rule in rules {
                html.push_str(&escape_html(rule));
                html.push('\n');
            }
            html.push_str("</pre>");
            html
        }
        FirewallStatus::Unknown { status_line } => format!(
            "<p class='status-warning'>Could not determine UFW status: {}</p>",
            escape_html(status_line)
        ),
    }
}

// Only the IP address is rendered; gateway and DNS stay in the log.
fn render_network(info: &NetworkInfo) -> String {
    format!(
        concat!(
            "<hr>",
            "<div class=\"net-info\">",
            "  <h3>Network Configuration Details:</h3>",
            "  <p> <strong>IP Address:</strong> {}</p>",
            "</div>",
        ),
        escape_html(&info.ip_address)
    )
}

/// Escape text for use in HTML element content or quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

//! Bounded external command execution.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::error::{Result, UfwstatError};

/// Which output streams end up in the captured text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    Stdout,
    /// stdout followed by stderr, so error messages are reported like output.
    Merged,
}

/// Run `program` with `args`, giving up after `timeout`.
///
/// The child is killed when the timeout fires. A non-zero exit status is not
/// an error: callers classify whatever text came back. Output that is empty
/// or whitespace only is reported as [`UfwstatError::NoOutput`].
pub async fn run(
    program: &str,
    args: &[&str],
    capture: Capture,
    timeout: Duration,
) -> Result<String> {
    let shown = command_line(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args).stdin(Stdio::null()).kill_on_drop(true);

    let output = match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(result) => result.map_err(|e| UfwstatError::CommandFailed {
            command: shown.clone(),
            message: e.to_string(),
        })?,
        Err(_) => {
            return Err(UfwstatError::Timeout {
                command: shown,
                millis: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            })
        }
    };

    if !output.status.success() {
        tracing::debug!(
            command = %shown,
            status = %output.status,
            "command exited unsuccessfully"
        );
    }

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if capture == Capture::Merged {
        text.push_str(&String::from_utf8_lossy(&output.stderr));
    }

    if text.trim().is_empty() {
        return Err(UfwstatError::NoOutput { command: shown });
    }

    Ok(text)
}

fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_captures_stdout() {
        let text = run("echo", &["Status: active"], Capture::Stdout, TIMEOUT)
            .await
            .unwrap();
        assert_eq!(text, "Status: active\n");
    }

    #[tokio::test]
    async fn test_merged_capture_includes_stderr() {
        let text = run(
            "sh",
            &["-c", "echo out; echo 'ERROR: You need to be root' >&2"],
            Capture::Merged,
            TIMEOUT,
        )
        .await
        .unwrap();
        assert_eq!(text, "out\nERROR: You need to be root\n");

        let stdout_only = run(
            "sh",
            &["-c", "echo 'ERROR: You need to be root' >&2"],
            Capture::Stdout,
            TIMEOUT,
        )
        .await;
        assert!(matches!(stdout_only, Err(UfwstatError::NoOutput { .. })));
    }

    #[tokio::test]
    async fn test_nonzero_exit_still_returns_text() {
        let text = run(
            "sh",
            &["-c", "echo 'Status: paused'; exit 3"],
            Capture::Stdout,
            TIMEOUT,
        )
        .await
        .unwrap();
        assert_eq!(text, "Status: paused\n");
    }

    #[tokio::test]
    async fn test_missing_program_is_command_failure() {
        let err = run("ufwstat-no-such-binary", &[], Capture::Stdout, TIMEOUT)
            .await
            .unwrap_err();
        assert!(matches!(err, UfwstatError::CommandFailed { .. }));
    }

    #[tokio::test]
    async fn test_slow_command_times_out() {
        let err = run("sleep", &["10"], Capture::Stdout, Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "Command timed out: sleep 10 after 100ms");
    }
}

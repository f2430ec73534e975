//! Console rendering of a probe run.

use std::fmt;
use std::io::Write;
use std::process::ExitCode;

use serde_json::Value;

use crate::error::ProbeError;
use crate::messages::{OutboundMessage, ProbeReport};
use crate::probe::ProbeObserver;

/// Writes human-readable progress lines to `out` as the probe advances.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    /// Wraps a writer, usually stdout.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Announces the connection attempt.
    pub fn connecting(&mut self, url: &str) {
        self.line(format_args!("🔌 Connecting to {url}..."));
    }

    /// Prints the pretty response frame and the pass verdict.
    pub fn passed(&mut self, report: &ProbeReport) {
        self.line(format_args!("📥 Response: {}", render_response(&report.response)));
        self.line(format_args!("\n✅ WebSocket test PASSED!"));
    }

    /// Prints the failure verdict with its reason.
    pub fn failed(&mut self, err: &ProbeError) {
        self.line(format_args!("❌ WebSocket test FAILED: {err}"));
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{args}") {
            tracing::warn!(error = %err, "failed to write probe output");
        }
    }
}

impl<W: Write> ProbeObserver for ConsoleReporter<W> {
    fn connected(&mut self, _url: &str) {
        self.line(format_args!("✅ Connected successfully!"));
    }

    fn sending(&mut self, outbound: &OutboundMessage) {
        self.line(format_args!("\n📤 Sending: '{}'", outbound.message));
    }

    fn status(&mut self, status: &Value) {
        self.line(format_args!("📥 Status: {}", render_status(status)));
    }
}

/// Status frames are shown as compact JSON.
#[must_use]
pub fn render_status(status: &Value) -> String {
    status.to_string()
}

/// Response frames are shown as JSON indented by two spaces.
#[must_use]
pub fn render_response(response: &Value) -> String {
    format!("{response:#}")
}

/// Maps a probe outcome to the process exit status: `0` on success, `1`
/// on any failure.
#[must_use]
pub fn exit_code(result: &Result<ProbeReport, ProbeError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    fn output(reporter: ConsoleReporter<Vec<u8>>) -> String {
        let Ok(text) = String::from_utf8(reporter.into_inner()) else {
            panic!("output was not utf-8");
        };
        text
    }

    #[test]
    fn response_uses_two_space_indent() {
        let rendered = render_response(&json!({"reply": "Namaste!"}));
        assert_eq!(rendered, "{\n  \"reply\": \"Namaste!\"\n}");
    }

    #[test]
    fn renderings_keep_wire_key_order() {
        let Ok(frame) = crate::messages::decode(
            "status",
            br#"{"type":"status","content":"thinking","agent":"sherpa"}"#,
        ) else {
            panic!("frame should decode");
        };
        assert_eq!(
            render_status(&frame),
            r#"{"type":"status","content":"thinking","agent":"sherpa"}"#
        );
        assert_eq!(
            render_response(&frame),
            "{\n  \"type\": \"status\",\n  \"content\": \"thinking\",\n  \"agent\": \"sherpa\"\n}"
        );
    }

    #[test]
    fn exit_code_follows_outcome() {
        let passed = Ok(ProbeReport {
            status: json!({"status": "ok"}),
            response: json!({"reply": "Namaste!"}),
        });
        let failed = Err(ProbeError::Closed { frame: "status" });
        assert_eq!(exit_code(&passed), ExitCode::SUCCESS);
        assert_eq!(exit_code(&failed), ExitCode::FAILURE);
    }

    #[test]
    fn successful_run_prints_in_order() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.connecting("ws://localhost:8000/ws");
        reporter.connected("ws://localhost:8000/ws");
        reporter.sending(&OutboundMessage::new("Namaste demo", "test_session"));
        reporter.status(&json!({"status": "ok"}));
        reporter.passed(&ProbeReport {
            status: json!({"status": "ok"}),
            response: json!({"reply": "Namaste!"}),
        });

        let text = output(reporter);
        let expected = "🔌 Connecting to ws://localhost:8000/ws...\n\
                        ✅ Connected successfully!\n\
                        \n📤 Sending: 'Namaste demo'\n\
                        📥 Status: {\"status\":\"ok\"}\n\
                        📥 Response: {\n  \"reply\": \"Namaste!\"\n}\n\
                        \n✅ WebSocket test PASSED!\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn failure_includes_reason() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.failed(&ProbeError::Closed { frame: "status" });
        assert_eq!(
            output(reporter),
            "❌ WebSocket test FAILED: connection closed while waiting for status frame\n"
        );
    }
}

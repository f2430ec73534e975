//! sherpa-probe entry point.
//!
//! Runs the probe once against the local backend and maps the outcome to
//! the process exit code.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use sherpa_probe::report::exit_code;
use sherpa_probe::{ConsoleReporter, ProbeConfig, run_probe};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = ProbeConfig::load();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut reporter = ConsoleReporter::new(std::io::stdout());
    reporter.connecting(&config.url);

    let result = run_probe(&config, &mut reporter).await;
    match &result {
        Ok(report) => reporter.passed(report),
        Err(err) => {
            tracing::debug!(error = ?err, "probe failed");
            reporter.failed(err);
        }
    }
    exit_code(&result)
}

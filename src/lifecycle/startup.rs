//! Startup orchestration.
//!
//! # Responsibilities
//! - Log the build version
//! - Validate the command line
//! - Start the optional metrics exporter
//! - Create the execution scope and the signal watcher
//! - Run the DAV server until it returns
//!
//! # Design Decisions
//! - Fail fast: a configuration error returns before any listener exists
//! - Metrics exporter failure is logged, never fatal

use std::process::ExitCode;

use crate::config::{Cli, ConfigError, StartupConfig};
use crate::http::{DavServer, ServiceOutcome};
use crate::lifecycle::{signals, ExecutionScope};
use crate::observability::metrics;

/// Build identifier, overridable at compile time via `WDS_BUILD_VERSION`.
pub const VERSION: &str = match option_env!("WDS_BUILD_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Run the process: validate, watch for signals, serve.
pub async fn run(cli: &Cli) -> Result<ServiceOutcome, ConfigError> {
    tracing::info!("version: {VERSION}");

    let config = cli.startup_config()?;

    if let Some(addr) = cli.metrics_addr {
        if let Err(e) = metrics::init_metrics(addr) {
            tracing::error!(address = %addr, error = %e, "Failed to start metrics exporter");
        }
    }

    let scope = ExecutionScope::new();
    let watcher = signals::spawn_signal_watcher(scope.clone());

    let outcome = serve(config, scope).await;
    watcher.abort();
    Ok(outcome)
}

/// Run one DAV server for `config` until `scope` is cancelled or it fails.
pub async fn serve(config: StartupConfig, scope: ExecutionScope) -> ServiceOutcome {
    DavServer::new(config).run(scope).await
}

/// Process exit status for a finished run.
///
/// Listener termination is an expected end of run and exits 0 like a
/// signal-driven shutdown; only configuration errors are failures.
pub fn exit_code(result: &Result<ServiceOutcome, ConfigError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::time::Duration;

    #[tokio::test]
    async fn file_root_fails_before_serving() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["wds", "-d", path, "-p", "0"]).unwrap();

        let result = tokio::time::timeout(Duration::from_secs(1), run(&cli))
            .await
            .expect("configuration error must not start a server");
        assert!(matches!(result, Err(ConfigError::NotADirectory { .. })));
    }

    #[tokio::test]
    async fn missing_root_fails_before_serving() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("served");
        let cli = Cli::try_parse_from(["wds", "-d", missing.to_str().unwrap()]).unwrap();

        let result = run(&cli).await;
        assert!(matches!(result, Err(ConfigError::NotADirectory { .. })));
    }

    #[tokio::test]
    async fn serve_returns_on_cancel() {
        let dir = tempfile::tempdir().unwrap();
        let config = crate::config::validate(dir.path(), 0, Duration::ZERO).unwrap();
        let scope = ExecutionScope::new();

        let task = tokio::spawn(serve(config, scope.clone()));
        tokio::time::sleep(Duration::from_millis(50)).await;
        scope.trigger();
        scope.trigger();

        let outcome = tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .expect("serve hung")
            .unwrap();
        assert!(outcome.is_cancelled());
        assert!(outcome.error().is_none());
    }

    fn same_code(a: ExitCode, b: ExitCode) -> bool {
        format!("{a:?}") == format!("{b:?}")
    }

    #[test]
    fn exit_code_per_outcome() {
        assert!(same_code(exit_code(&Ok(ServiceOutcome::Cancelled)), ExitCode::SUCCESS));

        let failed = ServiceOutcome::Failed(crate::http::ListenerError::Closed);
        assert!(same_code(exit_code(&Ok(failed)), ExitCode::SUCCESS));

        let config_err = Err(ConfigError::PortOutOfRange { port: 70000 });
        assert!(same_code(exit_code(&config_err), ExitCode::from(1)));
        assert!(!same_code(exit_code(&config_err), ExitCode::SUCCESS));
    }

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

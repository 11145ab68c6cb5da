//! OS signal handling.
//!
//! # Responsibilities
//! - Register SIGINT and SIGTERM handlers
//! - Translate the first one received into a scope trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Handlers are registered before the watcher task is spawned, so a signal
//!   arriving right after startup never falls through to the default action
//! - Both signals are treated the same; a second signal has no extra effect
//! - A handler that fails to install is logged and never fires

use std::fmt;

use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::lifecycle::ExecutionScope;

/// Termination request observed from the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    /// SIGINT / Ctrl+C.
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationSignal::Interrupt => write!(f, "SIGINT"),
            TerminationSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Installed termination handlers. Must be created inside a Tokio runtime.
#[cfg(unix)]
pub struct TerminationSignals {
    interrupt: Option<tokio::signal::unix::Signal>,
    terminate: Option<tokio::signal::unix::Signal>,
}

#[cfg(unix)]
impl TerminationSignals {
    /// Install the SIGINT and SIGTERM handlers now.
    pub fn register() -> Self {
        use tokio::signal::unix::{signal, SignalKind};

        let interrupt = signal(SignalKind::interrupt())
            .map_err(|e| tracing::error!(error = %e, "Failed to install SIGINT handler"))
            .ok();
        let terminate = signal(SignalKind::terminate())
            .map_err(|e| tracing::error!(error = %e, "Failed to install SIGTERM handler"))
            .ok();
        Self {
            interrupt,
            terminate,
        }
    }

    /// Wait for the first of the registered signals.
    pub async fn recv(self) -> TerminationSignal {
        async fn next(signal: Option<tokio::signal::unix::Signal>) {
            match signal {
                Some(mut signal) => {
                    signal.recv().await;
                }
                None => std::future::pending::<()>().await,
            }
        }

        tokio::select! {
            () = next(self.interrupt) => TerminationSignal::Interrupt,
            () = next(self.terminate) => TerminationSignal::Terminate,
        }
    }
}

/// Installed termination handlers. Must be created inside a Tokio runtime.
#[cfg(not(unix))]
pub struct TerminationSignals;

#[cfg(not(unix))]
impl TerminationSignals {
    pub fn register() -> Self {
        Self
    }

    pub async fn recv(self) -> TerminationSignal {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        TerminationSignal::Interrupt
    }
}

/// Spawn the watcher that cancels `scope` on the first termination signal.
///
/// Handlers are installed before this returns. The task runs in the caller's
/// span so its log lines share the prefix.
pub fn spawn_signal_watcher(scope: ExecutionScope) -> JoinHandle<()> {
    let signals = TerminationSignals::register();
    watch(scope, signals.recv())
}

/// Cancel `scope` once `signal` resolves.
pub(crate) fn watch<F>(scope: ExecutionScope, signal: F) -> JoinHandle<()>
where
    F: std::future::Future<Output = TerminationSignal> + Send + 'static,
{
    tokio::spawn(
        async move {
            let received = signal.await;
            if scope.trigger() {
                tracing::info!(signal = %received, "detect interrupt, terminate after few seconds...");
            }
        }
        .in_current_span(),
    )
}

//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection on 0.0.0.0:<port>
//!     → server.rs (axum-server accept loop, Axum router)
//!     → dav layer (access log, WebDAV handler)
//!     → response to client
//!
//! Run outcome:
//!     scope cancelled      → graceful shutdown → ServiceOutcome::Cancelled
//!     listener terminates  → ServiceOutcome::Failed(ListenerError)
//! ```

pub mod server;

use thiserror::Error;

pub use server::DavServer;

/// Why the listener stopped on its own.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Bind or accept failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The listener finished without an error and without being asked to.
    #[error("listener closed")]
    Closed,

    /// The serve task ended without reporting a result.
    #[error("listener task aborted")]
    Aborted,
}

/// How a server run ended. Exactly one per run.
#[derive(Debug)]
pub enum ServiceOutcome {
    /// The execution scope was cancelled and the server shut down.
    Cancelled,
    /// The listener terminated first.
    Failed(ListenerError),
}

impl ServiceOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ServiceOutcome::Cancelled)
    }

    /// The listener error, if the run ended with one.
    pub fn error(&self) -> Option<&ListenerError> {
        match self {
            ServiceOutcome::Cancelled => None,
            ServiceOutcome::Failed(e) => Some(e),
        }
    }
}

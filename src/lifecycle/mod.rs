//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Log version → Validate flags → Create scope → Watch signals → Run server
//!
//! Scope (scope.rs):
//!     One cancellable "keep running" token per process
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger scope once
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal before a listener exists
//! - Cancellation is one-shot; repeated signals do nothing further
//! - Shutdown is bounded by the configured grace period, zero by default

pub mod scope;
pub mod signals;
pub mod startup;

pub use scope::ExecutionScope;
pub use signals::TerminationSignal;

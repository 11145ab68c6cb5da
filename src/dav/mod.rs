//! WebDAV protocol wiring.
//!
//! # Data Flow
//! ```text
//! HTTP request (any method, any path)
//!     → access_log.rs (capture peer, agent, uri, method)
//!     → handler.rs (dav-server over LocalFs + MemLs)
//!     → access_log.rs (classify status, log line, metrics)
//!     → response back to client unchanged
//! ```
//!
//! # Design Decisions
//! - Protocol semantics belong to `dav-server`; this layer only wires and observes
//! - One in-memory lock manager per handler, never shared between servers
//! - 4xx/5xx responses are the handler's per-request error report

pub mod access_log;
pub mod handler;

pub use access_log::{access_log, AccessLog};
pub use handler::{build_handler, serve_dav, RequestOutcome};

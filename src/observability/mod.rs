//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (line-oriented log events under the `wds` span)
//!     → metrics.rs (request counters and latency histogram)
//!
//! Consumers:
//!     → stderr
//!     → Metrics endpoint (Prometheus scrape, only with --metrics-addr)
//! ```
//!
//! # Design Decisions
//! - Subscriber installed once in `main`, never reset
//! - No timestamps; the process supervisor adds them if it wants them
//! - Metric updates are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;

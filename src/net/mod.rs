//! Network helpers.
//!
//! # Data Flow
//! ```text
//! DAV server startup
//!     → discovery.rs (pick a LAN address for the startup log line)
//! ```
//!
//! # Design Decisions
//! - Discovery is cosmetic: it never fails and never blocks startup

pub mod discovery;

pub use discovery::local_address;

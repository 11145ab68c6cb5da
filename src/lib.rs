//! wds: serve a directory tree over WebDAV.

pub mod config;
pub mod dav;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::{Cli, StartupConfig};
pub use http::{DavServer, ServiceOutcome};
pub use lifecycle::ExecutionScope;

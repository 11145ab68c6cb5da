//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line
//!     → cli.rs (clap parse, defaults)
//!     → validation.rs (resolve root, check directory and port)
//!     → StartupConfig (validated, immutable)
//!     → owned by the DAV server for its whole run
//! ```
//!
//! # Design Decisions
//! - No config file and no environment variables; flags only
//! - Validation failure is fatal before any listener exists
//! - StartupConfig is never constructed in a partially valid state

pub mod cli;
pub mod validation;

pub use cli::Cli;
pub use validation::{validate, ConfigError, StartupConfig};

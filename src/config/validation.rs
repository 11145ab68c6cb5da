//! Startup configuration validation.
//!
//! # Responsibilities
//! - Resolve the served directory to an absolute path
//! - Check it exists and is a directory
//! - Check the port fits in `0..=65535`
//!
//! # Design Decisions
//! - Validation is a pure function of its inputs and the filesystem at call time
//! - The directory is checked once; later removal is the protocol handler's problem

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Validated configuration the DAV server is started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Absolute path of the served directory.
    pub root: PathBuf,
    /// Listen port on all interfaces.
    pub port: u16,
    /// Time in-flight requests get once shutdown starts.
    pub shutdown_grace: Duration,
}

/// Reasons the startup flags were rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The path could not be made absolute.
    #[error("broken dir path {:?}: {source}", .path)]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path does not exist or is not a directory.
    #[error("broken dir path {:?}: is not dir", .path)]
    NotADirectory {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("invalid port {port}: must be between 0 and 65535")]
    PortOutOfRange { port: i64 },
}

/// Turn raw flags into a [`StartupConfig`].
pub fn validate(
    raw_dir: &Path,
    raw_port: i64,
    shutdown_grace: Duration,
) -> Result<StartupConfig, ConfigError> {
    // An empty path means the working directory.
    let raw_dir = if raw_dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        raw_dir
    };
    let root = std::path::absolute(raw_dir).map_err(|source| ConfigError::InvalidPath {
        path: raw_dir.to_path_buf(),
        source,
    })?;

    match std::fs::metadata(&root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(ConfigError::NotADirectory { path: root, source: None }),
        Err(e) => {
            return Err(ConfigError::NotADirectory {
                path: root,
                source: Some(e),
            })
        }
    }

    let port = u16::try_from(raw_port).map_err(|_| ConfigError::PortOutOfRange { port: raw_port })?;

    Ok(StartupConfig {
        root,
        port,
        shutdown_grace,
    })
}

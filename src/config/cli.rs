//! Command line flags.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{CommandFactory, Parser};

use crate::config::validation::{validate, ConfigError, StartupConfig};

/// Serve a directory over WebDAV.
#[derive(Parser, Debug, Clone)]
#[command(name = "wds")]
#[command(about = "Serve a directory tree over WebDAV", long_about = None)]
#[command(version)]
pub struct Cli {
    /// WebDav server directory.
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// WebDav server port.
    #[arg(short, long, default_value_t = 80, allow_negative_numbers = true)]
    pub port: i64,

    /// Seconds in-flight requests may keep running after shutdown starts.
    #[arg(long, value_name = "SECS", default_value_t = 0)]
    pub shutdown_grace: u64,

    /// Expose Prometheus metrics on this address.
    #[arg(long, value_name = "ADDR")]
    pub metrics_addr: Option<SocketAddr>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate the raw flags into a [`StartupConfig`].
    pub fn startup_config(&self) -> Result<StartupConfig, ConfigError> {
        validate(
            &self.dir,
            self.port,
            Duration::from_secs(self.shutdown_grace),
        )
    }

    /// Full flag help, printed after a configuration error.
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_flags() {
        let cli = Cli::try_parse_from(["wds"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("."));
        assert_eq!(cli.port, 80);
        assert_eq!(cli.shutdown_grace, 0);
        assert!(cli.metrics_addr.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from(["wds", "-d", "/srv/share", "-p", "8080"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("/srv/share"));
        assert_eq!(cli.port, 8080);
    }

    #[test]
    fn negative_port_reaches_validation() {
        let cli = Cli::try_parse_from(["wds", "-p", "-1"]).unwrap();
        assert!(matches!(
            cli.startup_config(),
            Err(ConfigError::PortOutOfRange { port: -1 })
        ));
    }

    #[test]
    fn usage_lists_every_flag() {
        let usage = Cli::usage();
        assert!(usage.contains("wds"));
        for flag in ["--dir", "--port", "--shutdown-grace", "--metrics-addr", "--verbose"] {
            assert!(usage.contains(flag), "help is missing {flag}");
        }
        assert!(usage.contains("WebDav server directory"));
    }
}

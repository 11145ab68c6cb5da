//! wds: WebDAV directory server.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────┐
//!   │                          wds                             │
//!   │                                                          │
//!   │  flags ──▶ config::validation ──▶ StartupConfig          │
//!   │                                        │                 │
//!   │  SIGINT/SIGTERM ──▶ lifecycle::signals │                 │
//!   │                          │             ▼                 │
//!   │                          └──▶ ExecutionScope ──▶ http::DavServer
//!   │                                                  │       │
//!   │          client ◀──▶ axum-server ◀──▶ dav (access log,   │
//!   │                                         dav-server)      │
//!   └──────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::Instrument;

use wds::config::Cli;
use wds::lifecycle::startup;
use wds::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    let span = logging::root_span();

    let result = startup::run(&cli).instrument(span.clone()).await;

    if let Err(e) = &result {
        span.in_scope(|| tracing::error!("{e}"));
        eprintln!("{}", Cli::usage());
    }

    startup::exit_code(&result)
}

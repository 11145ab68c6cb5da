//! Log subscriber setup.
//!
//! # Design Decisions
//! - Uses tracing + tracing-subscriber fmt output on stderr
//! - Every line is emitted inside the `wds` root span, which renders as the
//!   `wds:` prefix
//! - `RUST_LOG` overrides the default filter

use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "wds=debug,tower_http=debug"
    } else {
        "wds=info"
    }
}

/// Install the global subscriber. Call once, first thing in `main`.
pub fn init(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// The span every component logs under.
pub fn root_span() -> Span {
    tracing::info_span!("wds")
}

//! Per-request access logging.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::Span;

use crate::dav::handler::RequestOutcome;
use crate::observability::metrics;

/// Logger handed to the access-log middleware.
///
/// Connection tasks are spawned by the server outside the caller's span, so the
/// span is carried here and entered explicitly for every log line.
#[derive(Debug, Clone)]
pub struct AccessLog {
    span: Span,
}

impl AccessLog {
    pub fn new(span: Span) -> Self {
        Self { span }
    }

    /// Log under whatever span is current when called.
    pub fn current() -> Self {
        Self::new(Span::current())
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// Observe a request and its response without altering either.
pub async fn access_log(State(log): State<AccessLog>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let uri = request.uri().clone();
    let method = request.method().clone();

    let response = next.run(request).await;
    let outcome = RequestOutcome::from_status(response.status());

    log.span.in_scope(|| match outcome {
        RequestOutcome::Handled => {
            tracing::info!("{remote} ({user_agent}) -> {uri} ({method})");
        }
        RequestOutcome::Failed(status) => {
            tracing::error!(status = status.as_u16(), "{remote} ({user_agent}) -> {uri} ({method})");
        }
    });
    metrics::record_request(method.as_str(), outcome, start);

    response
}

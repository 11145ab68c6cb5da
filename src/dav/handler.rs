//! WebDAV handler construction and dispatch.

use std::path::Path;

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    response::Response,
};
use dav_server::{localfs::LocalFs, memls::MemLs, DavHandler};

/// Build a handler serving `root` with a fresh in-memory lock manager.
pub fn build_handler(root: &Path) -> DavHandler {
    DavHandler::builder()
        .filesystem(LocalFs::new(root, false, false, false))
        .locksystem(MemLs::new())
        .build_handler()
}

/// Axum fallback that hands every request to the WebDAV handler.
pub async fn serve_dav(State(dav): State<DavHandler>, request: Request) -> Response {
    dav.handle(request).await.map(Body::new)
}

/// How the protocol handler judged a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Handled,
    Failed(StatusCode),
}

impl RequestOutcome {
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_client_error() || status.is_server_error() {
            RequestOutcome::Failed(status)
        } else {
            RequestOutcome::Handled
        }
    }

    /// Metric label.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestOutcome::Handled => "handled",
            RequestOutcome::Failed(_) => "failed",
        }
    }
}

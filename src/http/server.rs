//! DAV server runner.
//!
//! # Responsibilities
//! - Build the Axum router around the WebDAV handler
//! - Wire up middleware (access log, request spans)
//! - Bind the listener on all interfaces and serve in a background task
//! - Race scope cancellation against the listener's own termination
//! - Shut down with the configured grace period when cancelled

use std::net::SocketAddr;

use axum::{extract::Request, middleware, Router};
use axum_server::Handle;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::Instrument;

use crate::config::StartupConfig;
use crate::dav::{access_log, build_handler, serve_dav, AccessLog};
use crate::http::{ListenerError, ServiceOutcome};
use crate::lifecycle::ExecutionScope;
use crate::net::local_address;

/// WebDAV server bound to one directory and one port.
pub struct DavServer {
    router: Router,
    config: StartupConfig,
    handle: Handle,
}

impl DavServer {
    /// Create a server for the given configuration.
    ///
    /// Log lines from connection tasks are emitted under the span current at
    /// construction time.
    pub fn new(config: StartupConfig) -> Self {
        let router = Self::build_router(&config, AccessLog::current());
        Self {
            router,
            config,
            handle: Handle::new(),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &StartupConfig, log: AccessLog) -> Router {
        let parent = log.span().clone();
        Router::new()
            .fallback(serve_dav)
            .with_state(build_handler(&config.root))
            .layer(middleware::from_fn_with_state(log, access_log))
            .layer(TraceLayer::new_for_http().make_span_with(move |request: &Request| {
                tracing::debug_span!(
                    parent: &parent,
                    "request",
                    method = %request.method(),
                    uri = %request.uri()
                )
            }))
    }

    /// Handle for observing the bound address or stopping the server.
    pub fn handle(&self) -> Handle {
        self.handle.clone()
    }

    /// Serve until `scope` is cancelled or the listener stops on its own.
    pub async fn run(self, scope: ExecutionScope) -> ServiceOutcome {
        let port = self.config.port;
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();
        let server = axum_server::bind(addr).handle(self.handle.clone());

        let (result_tx, result_rx) = oneshot::channel();
        let serve_task = tokio::spawn(
            async move {
                let _ = result_tx.send(server.serve(app).await);
            }
            .in_current_span(),
        );

        tracing::info!(
            root = %self.config.root.display(),
            "server start on {}:{}",
            local_address(),
            port
        );

        tokio::select! {
            () = scope.cancelled() => {
                self.handle.graceful_shutdown(Some(self.config.shutdown_grace));
                if let Err(e) = serve_task.await {
                    tracing::debug!(error = %e, "Serve task did not finish cleanly");
                }
                tracing::info!("server terminated");
                ServiceOutcome::Cancelled
            }
            result = result_rx => {
                let err = match result {
                    Ok(Ok(())) => ListenerError::Closed,
                    Ok(Err(e)) => ListenerError::Io(e),
                    Err(_) => ListenerError::Aborted,
                };
                tracing::error!("server terminated by error: {err}");
                ServiceOutcome::Failed(err)
            }
        }
    }
}

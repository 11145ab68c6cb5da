//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use tokio::task::JoinHandle;
use wds::config::validate;
use wds::{DavServer, ExecutionScope, ServiceOutcome};

/// A DAV server running in the background on an ephemeral port.
pub struct RunningServer {
    pub addr: SocketAddr,
    pub scope: ExecutionScope,
    pub task: JoinHandle<ServiceOutcome>,
}

impl RunningServer {
    /// Base URL reachable from the test process.
    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.addr.port(), path)
    }

    /// Cancel the scope and wait for the runner to return.
    pub async fn stop(self) -> ServiceOutcome {
        self.scope.trigger();
        tokio::time::timeout(Duration::from_secs(5), self.task)
            .await
            .expect("server did not stop after cancellation")
            .expect("server task panicked")
    }
}

/// Start a server for `root` and wait until it is listening.
pub async fn start_server(root: &Path) -> RunningServer {
    let config = validate(root, 0, Duration::ZERO).expect("valid root");
    let server = DavServer::new(config);
    let handle = server.handle();
    let scope = ExecutionScope::new();
    let task = tokio::spawn(server.run(scope.clone()));

    let addr = tokio::time::timeout(Duration::from_secs(5), handle.listening())
        .await
        .expect("server did not start listening")
        .expect("server failed to bind");

    RunningServer { addr, scope, task }
}

/// HTTP client that never goes through a proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client builds")
}

/// Build a request with a WebDAV method such as PROPFIND or LOCK.
pub fn dav(client: &reqwest::Client, method: &str, url: &str) -> RequestBuilder {
    let method = Method::from_bytes(method.as_bytes()).expect("valid method");
    client.request(method, url)
}

/// Exclusive write lock request body.
#[allow(dead_code)]
pub const LOCK_BODY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<D:lockinfo xmlns:D="DAV:">
  <D:lockscope><D:exclusive/></D:lockscope>
  <D:locktype><D:write/></D:locktype>
  <D:owner>wds-tests</D:owner>
</D:lockinfo>"#;

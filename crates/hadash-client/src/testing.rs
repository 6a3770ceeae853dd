//! Socket-level test fixtures
//!
//! [`TestServer`] runs an axum router on `127.0.0.1:0`. Tests use it for
//! fake hubs (reaching them through the bundled [`HubClient`]) and for the
//! gateway router itself (reaching it through [`TestServer::base_url`]).

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::{HubClient, Result};

/// Client timeout used by [`TestServer::start`]
const DEFAULT_CLIENT_TIMEOUT: Duration = Duration::from_secs(5);

/// A router served on an ephemeral port until the value is dropped
pub struct TestServer {
    pub addr: SocketAddr,
    /// Unauthenticated hub client pointed at this server
    pub client: HubClient,
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl TestServer {
    /// Serve `router`, with a client that gives up after five seconds
    pub async fn start(router: axum::Router) -> Result<Self> {
        Self::start_with_timeout(router, DEFAULT_CLIENT_TIMEOUT).await
    }

    /// Serve `router`, with a client that gives up after `timeout`
    pub async fn start_with_timeout(router: axum::Router, timeout: Duration) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (stop, stopped) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let serve = axum::serve(listener, router).with_graceful_shutdown(async {
                let _ = stopped.await;
            });
            if let Err(e) = serve.await {
                tracing::warn!("Test server on {} failed: {}", addr, e);
            }
        });

        let client = HubClient::with_config(&format!("http://{}", addr), None, Some(timeout))?;

        Ok(Self {
            addr,
            client,
            stop: Some(stop),
            task,
        })
    }

    /// `http://<addr>`, without a trailing slash
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_targets_bound_addr() {
        let server = TestServer::start(axum::Router::new()).await.unwrap();
        assert_eq!(server.base_url(), format!("http://{}", server.addr));
        assert_eq!(
            server.client.base_url().as_str(),
            format!("http://{}/", server.addr)
        );
    }
}

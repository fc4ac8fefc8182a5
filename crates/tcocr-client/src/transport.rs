//! HTTP transport seam.
//!
//! The client talks to the network through the [`HttpTransport`] trait so
//! tests can substitute a mock; [`ReqwestTransport`] is the production
//! implementation. Timeouts surface as ordinary [`TransportError`]s, not a
//! distinct error kind.

use std::time::Duration;

use bytes::Bytes;

/// A transport-level failure: connect, read, write, or timeout.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct TransportError(#[from] pub anyhow::Error);

/// One-shot HTTP request execution.
///
/// Implementations must deliver exactly one result per call, successful or
/// not, and must not retry.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute the request and return the status and full body.
    async fn send(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, TransportError>;
}

/// Production transport backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport applying `timeout` to each of the connect, read,
    /// and total-request phases.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the underlying TLS backend cannot be
    /// initialized.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(anyhow::Error::from)?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, TransportError> {
        let request = reqwest::Request::try_from(request).map_err(anyhow::Error::from)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(anyhow::Error::from)?;

        let status = response.status();
        let body = response.bytes().await.map_err(anyhow::Error::from)?;

        http::Response::builder()
            .status(status)
            .body(body)
            .map_err(|e| TransportError(e.into()))
    }
}

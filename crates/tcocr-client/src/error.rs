//! Error types for the recognition client.
//!
//! Every failure mode a caller can observe is a distinct [`ClientError`]
//! variant with its own message, so credential misconfiguration is
//! distinguishable from a transient network problem. Nothing is retried;
//! retry policy belongs to the calling layer.

use tcocr_auth::AuthError;
use tcocr_model::ParseError;

use crate::transport::TransportError;

/// Errors surfaced by [`crate::OcrClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No usable credential pair was configured. This is a configuration
    /// problem, not an outage.
    #[error("credentials are missing or incomplete; check the credential configuration")]
    MissingCredentials,

    /// The request could not be signed.
    #[error("failed to sign request: {0}")]
    Signing(#[from] AuthError),

    /// The request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The HTTP request could not be assembled.
    #[error("failed to build HTTP request: {0}")]
    BuildRequest(#[from] http::Error),

    /// The request failed at the transport level (connect, read, write, or
    /// timeout).
    #[error("network failure: {0}")]
    Network(#[from] TransportError),

    /// The service answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// The service answered 200 with an empty body.
    #[error("response body is empty")]
    EmptyResponseBody,

    /// The response body could not be decoded.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The service reported an application-level error inside a 200 response.
    #[error("service error {code}: {message}")]
    Service {
        /// Machine-readable error code.
        code: String,
        /// Human-readable error message.
        message: String,
    },
}

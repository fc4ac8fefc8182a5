//! Error types for response parsing.

/// Errors that can occur while decoding the service's JSON envelope.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The response body is not valid JSON.
    #[error("malformed response body: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The envelope is valid JSON but carries no nested `Response` object.
    #[error("response envelope is missing the Response payload")]
    MissingPayload,
}

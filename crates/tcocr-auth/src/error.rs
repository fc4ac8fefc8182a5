//! Error types for TC3 request signing.
//!
//! All signing failures are represented by [`AuthError`]. Signing never
//! panics past this boundary; callers always receive an explicit value.

/// Errors that can occur while producing a TC3-HMAC-SHA256 signature.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The credential pair is unusable (secret id or secret key is empty).
    #[error("invalid credentials: secret id and secret key must both be non-empty")]
    InvalidCredentials,

    /// An HMAC primitive rejected the key material.
    #[error("HMAC initialization failed: {0}")]
    Mac(String),
}

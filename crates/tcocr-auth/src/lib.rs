//! TC3-HMAC-SHA256 request signing for the Tencent Cloud OCR API.
//!
//! This crate implements the client side of the TC3 signing scheme: given a
//! credential pair, a Unix timestamp, and the exact request body bytes, it
//! produces the `Authorization` header value the service verifies.
//!
//! # Overview
//!
//! TC3-HMAC-SHA256 is the standard authentication mechanism for Tencent Cloud
//! API requests. Signing proceeds in three steps:
//!
//! 1. Build the canonical request from the HTTP method, path, headers, and
//!    the SHA-256 digest of the request body.
//! 2. Build the string to sign from the algorithm name, timestamp, credential
//!    scope, and canonical request hash.
//! 3. Derive the signing key from the secret key via a chained HMAC-SHA256
//!    over the scope components, and HMAC the string to sign with it.
//!
//! The signature binds the exact body bytes: the body passed to [`tc3::sign`]
//! must be the body transmitted, byte for byte.
//!
//! # Usage
//!
//! ```
//! use tcocr_auth::credentials::Credentials;
//! use tcocr_auth::tc3;
//!
//! let creds = Credentials::new("AKIDxxx", "secretxxx");
//! let body = br#"{"ImageBase64":"...","CardSide":"FRONT"}"#;
//! let authorization = tc3::sign(&creds, 1_700_000_000, body).unwrap();
//! assert!(authorization.starts_with("TC3-HMAC-SHA256 Credential=AKIDxxx/"));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical request construction per the TC3 specification
//! - [`credentials`] - Credential pair and configuration-file loading
//! - [`error`] - Signing error types
//! - [`tc3`] - Key derivation and the full signing pipeline

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod tc3;

pub use credentials::Credentials;
pub use error::AuthError;
pub use tc3::sign;

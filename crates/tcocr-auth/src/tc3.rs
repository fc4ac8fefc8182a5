//! TC3-HMAC-SHA256 signing pipeline.
//!
//! The flow mirrors the scheme's specification:
//!
//! 1. Hash the request body and build the canonical request.
//! 2. Build the string to sign from the algorithm, timestamp, credential
//!    scope, and canonical request hash.
//! 3. Derive the signing key with a three-step HMAC-SHA256 chain over the
//!    scope components and sign the string to sign.
//!
//! The main entry point is [`sign`]. Signing is pure: for a fixed credential
//! pair, body, and timestamp the output is bit-for-bit reproducible. The
//! derived key lives only for the duration of one call and is never cached,
//! so a rotated secret takes effect on the next request.

use chrono::{DateTime, Utc};
use hmac::{Hmac, KeyInit, Mac};
use tracing::debug;

use crate::canonical::{build_canonical_request, build_signed_headers_string, hash_payload};
use crate::credentials::Credentials;
use crate::error::AuthError;

/// The only algorithm produced by this implementation.
pub const ALGORITHM: &str = "TC3-HMAC-SHA256";
/// Service component of the credential scope.
pub const SERVICE: &str = "ocr";
/// Scope terminator fixed by the TC3 scheme.
pub const TERMINATOR: &str = "tc3_request";
/// Host of the fixed endpoint; part of the signed headers.
pub const HOST: &str = "ocr.tencentcloudapi.com";
/// Content type of every request; part of the signed headers.
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

const HTTP_METHOD: &str = "POST";
const HTTP_URI: &str = "/";
const HTTP_QUERY: &str = "";

type HmacSha256 = Hmac<sha2::Sha256>;

/// Format a Unix timestamp (seconds) as a `yyyy-MM-dd` date in UTC.
///
/// The scope date must be derived in UTC, never local time; a local-time date
/// crossing midnight in either direction produces a signature the service
/// rejects. Out-of-range timestamps clamp to the epoch.
///
/// # Examples
///
/// ```
/// use tcocr_auth::tc3::utc_date;
///
/// assert_eq!(utc_date(1_700_000_000), "2023-11-14");
/// ```
#[must_use]
pub fn utc_date(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .format("%Y-%m-%d")
        .to_string()
}

/// Build the credential scope binding a signature to one day and service.
///
/// # Examples
///
/// ```
/// use tcocr_auth::tc3::credential_scope;
///
/// assert_eq!(credential_scope("2023-11-14"), "2023-11-14/ocr/tc3_request");
/// ```
#[must_use]
pub fn credential_scope(date: &str) -> String {
    format!("{date}/{SERVICE}/{TERMINATOR}")
}

/// Build the TC3 string to sign.
///
/// Format:
/// ```text
/// TC3-HMAC-SHA256\n
/// <unix timestamp, decimal seconds>\n
/// <credential scope>\n
/// <hex(SHA256(canonical_request))>
/// ```
#[must_use]
pub fn build_string_to_sign(
    timestamp: i64,
    credential_scope: &str,
    canonical_request_hash: &str,
) -> String {
    format!("{ALGORITHM}\n{timestamp}\n{credential_scope}\n{canonical_request_hash}")
}

/// Derive the TC3 signing key using the HMAC-SHA256 chain.
///
/// ```text
/// SecretDate    = HMAC-SHA256("TC3" + secret_key, date)
/// SecretService = HMAC-SHA256(SecretDate, "ocr")
/// SecretSigning = HMAC-SHA256(SecretService, "tc3_request")
/// ```
///
/// Each step keys the HMAC with the previous 32-byte output and takes a
/// UTF-8 string as the message.
///
/// # Errors
///
/// Returns [`AuthError::Mac`] if the HMAC primitive rejects the key material.
pub fn derive_signing_key(secret_key: &str, date: &str) -> Result<Vec<u8>, AuthError> {
    let secret_date = hmac_sha256(format!("TC3{secret_key}").as_bytes(), date.as_bytes())?;
    let secret_service = hmac_sha256(&secret_date, SERVICE.as_bytes())?;
    hmac_sha256(&secret_service, TERMINATOR.as_bytes())
}

/// Compute the HMAC-SHA256 signature of `data` with the given signing key,
/// as lowercase hex.
///
/// # Errors
///
/// Returns [`AuthError::Mac`] if the HMAC primitive rejects the key material.
pub fn compute_signature(signing_key: &[u8], data: &str) -> Result<String, AuthError> {
    Ok(hex::encode(hmac_sha256(signing_key, data.as_bytes())?))
}

/// Sign a request body and produce the `Authorization` header value.
///
/// `body` must be byte-identical to the body actually transmitted, and
/// `timestamp` must equal the `X-TC-Timestamp` header sent with the request;
/// any divergence invalidates the signature on the server side.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] if either secret is empty, or
/// [`AuthError::Mac`] if an HMAC primitive is unavailable.
///
/// # Examples
///
/// ```
/// use tcocr_auth::credentials::Credentials;
/// use tcocr_auth::tc3::sign;
///
/// let creds = Credentials::new("AKIDxxx", "secretxxx");
/// let auth = sign(&creds, 1_700_000_000, br#"{"ImageBase64":"...","CardSide":"FRONT"}"#).unwrap();
/// assert!(auth.contains("SignedHeaders=content-type;host"));
/// ```
pub fn sign(credentials: &Credentials, timestamp: i64, body: &[u8]) -> Result<String, AuthError> {
    if !credentials.is_valid() {
        return Err(AuthError::InvalidCredentials);
    }

    let payload_hash = hash_payload(body);
    let signed_headers = ["content-type", "host"];
    let canonical_request = build_canonical_request(
        HTTP_METHOD,
        HTTP_URI,
        HTTP_QUERY,
        &[("content-type", CONTENT_TYPE), ("host", HOST)],
        &signed_headers,
        &payload_hash,
    );

    debug!(canonical_request, "built canonical request");

    let canonical_hash = hash_payload(canonical_request.as_bytes());
    let date = utc_date(timestamp);
    let scope = credential_scope(&date);
    let string_to_sign = build_string_to_sign(timestamp, &scope, &canonical_hash);

    debug!(string_to_sign, "built string to sign");

    let signing_key = derive_signing_key(credentials.secret_key(), &date)?;
    let signature = compute_signature(&signing_key, &string_to_sign)?;

    Ok(format!(
        "{ALGORITHM} Credential={}/{scope}, SignedHeaders={}, Signature={signature}",
        credentials.secret_id(),
        build_signed_headers_string(&signed_headers),
    ))
}

/// Compute HMAC-SHA256 and return the raw bytes.
fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, AuthError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| AuthError::Mac(e.to_string()))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

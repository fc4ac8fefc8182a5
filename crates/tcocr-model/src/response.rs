//! Response envelope and parsing for the `IDCardOCR` operation.
//!
//! The service wraps every reply, including application-level failures, in a
//! top-level `Response` object. All payload fields are optional: a partial
//! recognition still surfaces whatever fields the service returned instead of
//! failing the whole parse.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The top-level envelope of every `IDCardOCR` reply.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ResponseEnvelope {
    /// The nested payload; absent or null on a malformed reply.
    #[serde(default)]
    response: Option<ResponsePayload>,
}

/// The nested `Response` object carrying recognition fields and, on
/// application-level failure, a [`ServiceError`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponsePayload {
    /// Name as printed on the card.
    #[serde(default)]
    pub name: Option<String>,

    /// Sex as printed on the card.
    #[serde(default)]
    pub sex: Option<String>,

    /// Ethnic group as printed on the card.
    #[serde(default)]
    pub nation: Option<String>,

    /// Birth date as printed on the card.
    #[serde(default)]
    pub birth: Option<String>,

    /// Address as printed on the card.
    #[serde(default)]
    pub address: Option<String>,

    /// Citizen ID number.
    #[serde(rename = "IdNum", default)]
    pub id_num: Option<String>,

    /// Unique id of this API call, for support diagnostics.
    #[serde(default)]
    pub request_id: Option<String>,

    /// Present when the service reports an error inside a 200 response.
    #[serde(default)]
    pub error: Option<ServiceError>,
}

/// An application-level error reported inside a successful HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceError {
    /// Machine-readable error code, e.g. `FailedOperation.ImageDecodeFailed`.
    #[serde(default)]
    pub code: String,

    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
}

/// The flat recognition result handed back to applications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCardInfo {
    /// Name as printed on the card.
    pub name: Option<String>,
    /// Sex as printed on the card.
    pub sex: Option<String>,
    /// Ethnic group as printed on the card.
    pub nation: Option<String>,
    /// Birth date as printed on the card.
    pub birth: Option<String>,
    /// Address as printed on the card.
    pub address: Option<String>,
    /// Citizen ID number.
    pub id_number: Option<String>,
}

impl From<ResponsePayload> for IdCardInfo {
    fn from(payload: ResponsePayload) -> Self {
        Self {
            name: payload.name,
            sex: payload.sex,
            nation: payload.nation,
            birth: payload.birth,
            address: payload.address,
            id_number: payload.id_num,
        }
    }
}

/// Decode the service's JSON envelope into its nested payload.
///
/// Unknown fields are ignored and missing fields stay `None`, so partial
/// results are surfaced rather than discarded.
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] for non-JSON bytes and
/// [`ParseError::MissingPayload`] when the envelope carries no `Response`
/// object.
///
/// # Examples
///
/// ```
/// use tcocr_model::response::parse_response;
///
/// let payload = parse_response(br#"{"Response":{"Name":"Zhang San"}}"#).unwrap();
/// assert_eq!(payload.name.as_deref(), Some("Zhang San"));
/// ```
pub fn parse_response(bytes: &[u8]) -> Result<ResponsePayload, ParseError> {
    let envelope: ResponseEnvelope =
        serde_json::from_slice(bytes).map_err(ParseError::Malformed)?;
    envelope.response.ok_or(ParseError::MissingPayload)
}

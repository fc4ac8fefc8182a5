//! Request body for the `IDCardOCR` operation.
//!
//! The serialized body participates in the request signature, so field order
//! and naming here are part of the wire contract: the struct serializes to
//! `{"ImageBase64": "...", "CardSide": "FRONT"}` exactly.

use serde::{Deserialize, Serialize};

/// Which face of the ID card the image shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardSide {
    /// The portrait face.
    #[default]
    Front,
    /// The national-emblem face.
    Back,
}

/// Input for the `IDCardOCR` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecognizeIdCardRequest {
    /// The image, already encoded as a base64 string by the caller.
    pub image_base64: String,

    /// Which card side the image shows.
    pub card_side: CardSide,
}

impl RecognizeIdCardRequest {
    /// Build a request for the given card side.
    pub fn new(image_base64: impl Into<String>, card_side: CardSide) -> Self {
        Self {
            image_base64: image_base64.into(),
            card_side,
        }
    }

    /// Build a front-side request, the common case.
    pub fn front(image_base64: impl Into<String>) -> Self {
        Self::new(image_base64, CardSide::Front)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_front_request_to_fixed_shape() {
        let request = RecognizeIdCardRequest::front("...");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"ImageBase64":"...","CardSide":"FRONT"}"#);
    }

    #[test]
    fn test_should_serialize_back_side() {
        let request = RecognizeIdCardRequest::new("abc", CardSide::Back);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"ImageBase64":"abc","CardSide":"BACK"}"#);
    }

    #[test]
    fn test_should_default_card_side_to_front() {
        assert_eq!(CardSide::default(), CardSide::Front);
    }
}

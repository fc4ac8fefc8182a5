//! Wire types for the Tencent Cloud `IDCardOCR` operation.
//!
//! All request and response types use `PascalCase` JSON field naming to match
//! the Tencent Cloud wire protocol. The types are hand-written since the JSON
//! protocol makes serde derives trivial.
//!
//! # Modules
//!
//! - [`request`] - The fixed-shape request body
//! - [`response`] - The response envelope and [`response::parse_response`]
//! - [`error`] - Parse error types

pub mod error;
pub mod request;
pub mod response;

pub use error::ParseError;
pub use request::{CardSide, RecognizeIdCardRequest};
pub use response::{IdCardInfo, ResponsePayload, ServiceError, parse_response};

//! Async client for the Tencent Cloud `IDCardOCR` operation.
//!
//! This crate ties the pieces together: it builds the fixed-shape JSON body,
//! obtains a TC3-HMAC-SHA256 `Authorization` header from [`tcocr_auth`],
//! issues a single HTTPS POST, and decodes the reply via [`tcocr_model`].
//!
//! # Usage
//!
//! ```no_run
//! use tcocr_auth::Credentials;
//! use tcocr_client::{OcrClient, OcrConfig};
//!
//! # async fn run() -> Result<(), tcocr_client::ClientError> {
//! let credentials = Credentials::from_env_file(".env");
//! let client = OcrClient::with_config(OcrConfig::from_env(), credentials)?;
//!
//! match client.recognize_id_card("<base64 image>").await {
//!     Ok(info) => println!("recognized: {:?}", info.name),
//!     Err(e) => eprintln!("recognition failed: {e}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`] - The [`OcrClient`] orchestration
//! - [`config`] - Endpoint and timeout configuration
//! - [`error`] - The client error taxonomy
//! - [`transport`] - The injectable HTTP transport seam

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::OcrClient;
pub use config::OcrConfig;
pub use error::ClientError;
pub use transport::{HttpTransport, ReqwestTransport, TransportError};

pub use tcocr_model::{CardSide, IdCardInfo};

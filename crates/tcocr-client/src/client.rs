//! The recognition client.
//!
//! [`OcrClient`] orchestrates one recognition call: it builds the JSON body,
//! signs it, issues a single HTTPS POST, and decodes the reply. The client is
//! an explicitly constructed value owning its credentials and transport;
//! there is no process-wide instance. It is cheap to clone and safe to share:
//! credentials are read-only after construction and signing is stateless.
//!
//! Overlapping calls are neither serialized, coalesced, nor cancelled; each
//! call is independent and resolves its own future exactly once.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use chrono::Utc;
use tracing::debug;

use tcocr_auth::{Credentials, tc3};
use tcocr_model::{CardSide, IdCardInfo, RecognizeIdCardRequest, parse_response};

use crate::config::OcrConfig;
use crate::error::ClientError;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Client for the Tencent Cloud `IDCardOCR` operation.
///
/// # Examples
///
/// ```no_run
/// use tcocr_auth::Credentials;
/// use tcocr_client::OcrClient;
///
/// # async fn run() -> Result<(), tcocr_client::ClientError> {
/// let credentials = Credentials::from_env();
/// let client = OcrClient::new(credentials)?;
/// let info = client.recognize_id_card("<base64 image>").await?;
/// println!("name: {:?}", info.name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OcrClient {
    config: OcrConfig,
    credentials: Credentials,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for OcrClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrClient")
            .field("config", &self.config)
            .field("credentials", &self.credentials.redacted())
            .finish_non_exhaustive()
    }
}

impl OcrClient {
    /// Build a client with the default configuration and transport.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the HTTP transport cannot be
    /// initialized.
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Self::with_config(OcrConfig::default(), credentials)
    }

    /// Build a client with an explicit configuration and the default
    /// transport.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the HTTP transport cannot be
    /// initialized.
    pub fn with_config(config: OcrConfig, credentials: Credentials) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_transport(config, credentials, Arc::new(transport)))
    }

    /// Build a client over an injected transport, e.g. a mock in tests.
    #[must_use]
    pub fn with_transport(
        config: OcrConfig,
        credentials: Credentials,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            config,
            credentials,
            transport,
        }
    }

    /// Recognize the front side of an ID card from an already-encoded
    /// base64 image.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] describing exactly which stage failed; see
    /// the variant list for the taxonomy. Nothing is retried.
    pub async fn recognize_id_card(&self, image_base64: &str) -> Result<IdCardInfo, ClientError> {
        self.recognize_id_card_side(image_base64, CardSide::Front)
            .await
    }

    /// Recognize a specific card side.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`OcrClient::recognize_id_card`].
    pub async fn recognize_id_card_side(
        &self,
        image_base64: &str,
        card_side: CardSide,
    ) -> Result<IdCardInfo, ClientError> {
        if !self.credentials.is_valid() {
            return Err(ClientError::MissingCredentials);
        }

        let timestamp = Utc::now().timestamp();
        let request = self.build_request(image_base64, card_side, timestamp)?;

        let response = self.transport.send(request).await?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(ClientError::HttpStatus(status.as_u16()));
        }

        let body = response.into_body();
        if body.is_empty() {
            return Err(ClientError::EmptyResponseBody);
        }

        let payload = parse_response(&body)?;
        if let Some(error) = payload.error {
            return Err(ClientError::Service {
                code: error.code,
                message: error.message,
            });
        }

        Ok(IdCardInfo::from(payload))
    }

    /// Assemble the signed HTTP request for one call.
    ///
    /// The body is serialized once and the same bytes are both signed and
    /// transmitted; `X-TC-Timestamp` carries the exact timestamp used for
    /// signing.
    fn build_request(
        &self,
        image_base64: &str,
        card_side: CardSide,
        timestamp: i64,
    ) -> Result<http::Request<Bytes>, ClientError> {
        let body = serde_json::to_vec(&RecognizeIdCardRequest::new(image_base64, card_side))
            .map_err(ClientError::Encode)?;

        let authorization = tc3::sign(&self.credentials, timestamp, &body)?;

        let request = http::Request::builder()
            .method(http::Method::POST)
            .uri(self.config.endpoint_url())
            .header(http::header::AUTHORIZATION, authorization)
            .header(http::header::CONTENT_TYPE, tc3::CONTENT_TYPE)
            .header(http::header::HOST, self.config.host.as_str())
            .header("X-TC-Action", self.config.action.as_str())
            .header("X-TC-Version", self.config.version.as_str())
            .header("X-TC-Timestamp", timestamp.to_string())
            .header("X-TC-Region", self.config.region.as_str())
            .body(Bytes::from(body))?;

        debug!(
            action = %self.config.action,
            region = %self.config.region,
            timestamp,
            "built signed request"
        );

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::transport::TransportError;

    const TEST_IMAGE: &str = "...";

    /// Mock transport returning a canned status and body, capturing the
    /// request it was given.
    struct MockTransport {
        status: u16,
        body: Vec<u8>,
        seen: Mutex<Option<http::Request<Bytes>>>,
    }

    impl MockTransport {
        fn new(status: u16, body: &[u8]) -> Self {
            Self {
                status,
                body: body.to_vec(),
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait::async_trait]
    impl HttpTransport for MockTransport {
        async fn send(
            &self,
            request: http::Request<Bytes>,
        ) -> Result<http::Response<Bytes>, TransportError> {
            *self.seen.lock().unwrap() = Some(request);
            Ok(http::Response::builder()
                .status(self.status)
                .body(Bytes::from(self.body.clone()))
                .unwrap())
        }
    }

    /// Mock transport that always fails at the network level.
    struct FailingTransport;

    #[async_trait::async_trait]
    impl HttpTransport for FailingTransport {
        async fn send(
            &self,
            _request: http::Request<Bytes>,
        ) -> Result<http::Response<Bytes>, TransportError> {
            Err(TransportError(anyhow::anyhow!("connection refused")))
        }
    }

    fn test_credentials() -> Credentials {
        Credentials::new("AKIDxxx", "secretxxx")
    }

    fn client_with(transport: Arc<dyn HttpTransport>) -> OcrClient {
        OcrClient::with_transport(OcrConfig::default(), test_credentials(), transport)
    }

    #[tokio::test]
    async fn test_should_fail_fast_without_credentials() {
        let transport = Arc::new(MockTransport::new(200, b"{}"));
        let client =
            OcrClient::with_transport(OcrConfig::default(), Credentials::empty(), transport.clone());

        let result = client.recognize_id_card(TEST_IMAGE).await;
        assert!(matches!(result, Err(ClientError::MissingCredentials)));
        // No network call is attempted for a configuration error.
        assert!(transport.seen.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_should_surface_http_status_failure_without_parsing() {
        let transport = Arc::new(MockTransport::new(500, b"ignored, not even json"));
        let client = client_with(transport);

        let result = client.recognize_id_card(TEST_IMAGE).await;
        assert!(matches!(result, Err(ClientError::HttpStatus(500))));
    }

    #[tokio::test]
    async fn test_should_surface_empty_response_body() {
        let transport = Arc::new(MockTransport::new(200, b""));
        let client = client_with(transport);

        let result = client.recognize_id_card(TEST_IMAGE).await;
        assert!(matches!(result, Err(ClientError::EmptyResponseBody)));
    }

    #[tokio::test]
    async fn test_should_surface_network_failure() {
        let client = client_with(Arc::new(FailingTransport));

        let result = client.recognize_id_card(TEST_IMAGE).await;
        assert!(matches!(result, Err(ClientError::Network(_))));
    }

    #[tokio::test]
    async fn test_should_return_all_fields_from_full_response() {
        let body = br#"{"Response":{"Name":"Zhang San","Sex":"Male","Nation":"Han","Birth":"1990/1/1","Address":"Some Street","IdNum":"440524199001010014","RequestId":"abc"}}"#;
        let client = client_with(Arc::new(MockTransport::new(200, body)));

        let info = client.recognize_id_card(TEST_IMAGE).await.unwrap();
        assert_eq!(info.name.as_deref(), Some("Zhang San"));
        assert_eq!(info.sex.as_deref(), Some("Male"));
        assert_eq!(info.nation.as_deref(), Some("Han"));
        assert_eq!(info.birth.as_deref(), Some("1990/1/1"));
        assert_eq!(info.address.as_deref(), Some("Some Street"));
        assert_eq!(info.id_number.as_deref(), Some("440524199001010014"));
    }

    #[tokio::test]
    async fn test_should_surface_service_reported_error() {
        let body = br#"{"Response":{"Error":{"Code":"FailedOperation.ImageDecodeFailed","Message":"image decode failed"},"RequestId":"abc"}}"#;
        let client = client_with(Arc::new(MockTransport::new(200, body)));

        let result = client.recognize_id_card(TEST_IMAGE).await;
        match result {
            Err(ClientError::Service { code, message }) => {
                assert_eq!(code, "FailedOperation.ImageDecodeFailed");
                assert_eq!(message, "image decode failed");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_surface_missing_payload() {
        let client = client_with(Arc::new(MockTransport::new(200, b"{}")));

        let result = client.recognize_id_card(TEST_IMAGE).await;
        assert!(matches!(
            result,
            Err(ClientError::Parse(tcocr_model::ParseError::MissingPayload))
        ));
    }

    #[test]
    fn test_should_build_request_with_all_required_headers() {
        let client = client_with(Arc::new(FailingTransport));
        let request = client
            .build_request(TEST_IMAGE, CardSide::Front, 1_700_000_000)
            .unwrap();

        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(request.uri(), "https://ocr.tencentcloudapi.com/");

        let headers = request.headers();
        assert_eq!(
            headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );
        assert_eq!(
            headers.get(http::header::HOST).unwrap(),
            "ocr.tencentcloudapi.com"
        );
        assert_eq!(headers.get("X-TC-Action").unwrap(), "IDCardOCR");
        assert_eq!(headers.get("X-TC-Version").unwrap(), "2018-11-19");
        assert_eq!(headers.get("X-TC-Timestamp").unwrap(), "1700000000");
        assert_eq!(headers.get("X-TC-Region").unwrap(), "ap-guangzhou");

        // The body used for signing is the body transmitted.
        assert_eq!(
            request.body().as_ref(),
            br#"{"ImageBase64":"...","CardSide":"FRONT"}"#
        );

        // Golden vector: fixed credentials, body, and timestamp produce a
        // fixed Authorization header.
        assert_eq!(
            headers.get(http::header::AUTHORIZATION).unwrap(),
            "TC3-HMAC-SHA256 Credential=AKIDxxx/2023-11-14/ocr/tc3_request, \
             SignedHeaders=content-type;host, \
             Signature=c6d2dc066fcc534f3a26b2aa36170f21e1c7ce109da48b43d8e3eb26e8ad9132"
        );
    }

    #[tokio::test]
    async fn test_should_send_timestamp_header_matching_signed_timestamp() {
        let transport = Arc::new(MockTransport::new(200, br#"{"Response":{"Name":"x"}}"#));
        let client = client_with(transport.clone());

        let before = Utc::now().timestamp();
        client.recognize_id_card(TEST_IMAGE).await.unwrap();
        let after = Utc::now().timestamp();

        let seen = transport.seen.lock().unwrap();
        let request = seen.as_ref().unwrap();
        let ts: i64 = request
            .headers()
            .get("X-TC-Timestamp")
            .unwrap()
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert!((before..=after).contains(&ts));
        assert!(request.headers().contains_key(http::header::AUTHORIZATION));
    }
}

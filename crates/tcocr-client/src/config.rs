//! Configuration for the recognition client.
//!
//! Defaults match the production `IDCardOCR` endpoint; individual values can
//! be overridden from environment variables.

/// Configuration for [`crate::OcrClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrConfig {
    /// Host of the OCR endpoint; also the signed `Host` header.
    pub host: String,
    /// API action identifier, passed as `X-TC-Action`.
    pub action: String,
    /// API version identifier, passed as `X-TC-Version`.
    pub version: String,
    /// Service region, passed as `X-TC-Region`.
    pub region: String,
    /// Timeout in seconds, applied to each of connect/read/total.
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            host: "ocr.tencentcloudapi.com".to_owned(),
            action: "IDCardOCR".to_owned(),
            version: "2018-11-19".to_owned(),
            region: "ap-guangzhou".to_owned(),
            timeout_secs: 30,
        }
    }
}

impl OcrConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("TCOCR_HOST") {
            config.host = v;
        }
        if let Ok(v) = std::env::var("TCOCR_REGION") {
            config.region = v;
        }
        if let Ok(v) = std::env::var("TCOCR_TIMEOUT_SECS")
            && let Ok(secs) = v.parse()
        {
            config.timeout_secs = secs;
        }

        config
    }

    /// The full endpoint URL derived from the host.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!("https://{}/", self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = OcrConfig::default();
        assert_eq!(config.host, "ocr.tencentcloudapi.com");
        assert_eq!(config.action, "IDCardOCR");
        assert_eq!(config.version, "2018-11-19");
        assert_eq!(config.region, "ap-guangzhou");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_should_derive_endpoint_url_from_host() {
        assert_eq!(
            OcrConfig::default().endpoint_url(),
            "https://ocr.tencentcloudapi.com/"
        );
    }
}

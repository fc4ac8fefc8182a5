//! Credential pair and configuration-file loading.
//!
//! Credentials are loaded once at startup and are read-only afterwards, so a
//! [`Credentials`] value can be shared freely across concurrent callers.
//! Loading never fails the caller: a missing or unreadable source yields an
//! empty, invalid pair, and validity must be checked with
//! [`Credentials::is_valid`] before use.

use std::path::Path;

/// Configuration key for the secret id in `KEY=VALUE` sources.
const SECRET_ID_KEY: &str = "TENCENT_SECRET_ID";
/// Configuration key for the secret key in `KEY=VALUE` sources.
const SECRET_KEY_KEY: &str = "TENCENT_SECRET_KEY";

/// A Tencent Cloud API credential pair.
///
/// Both fields are immutable once constructed. The pair is "valid" iff both
/// are non-empty; an invalid pair is still a usable value (it simply cannot
/// sign requests).
///
/// # Examples
///
/// ```
/// use tcocr_auth::credentials::Credentials;
///
/// let creds = Credentials::new("AKIDxxx", "secretxxx");
/// assert!(creds.is_valid());
///
/// let empty = Credentials::empty();
/// assert!(!empty.is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    secret_id: String,
    secret_key: String,
}

impl Credentials {
    /// Create a credential pair from explicit values.
    pub fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Create an empty, invalid credential pair.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load credentials from a line-oriented `KEY=VALUE` file.
    ///
    /// Recognized keys are `TENCENT_SECRET_ID` and `TENCENT_SECRET_KEY`;
    /// values are trimmed. Unrecognized lines and `#` comments are ignored.
    /// A missing or unreadable file yields an empty, invalid pair rather
    /// than an error.
    #[must_use]
    pub fn from_env_file(path: impl AsRef<Path>) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => {
                let creds = Self::parse(&contents);
                tracing::debug!(
                    path = %path.as_ref().display(),
                    valid = creds.is_valid(),
                    "loaded credentials from file"
                );
                creds
            }
            Err(e) => {
                tracing::debug!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "credential file unreadable, credentials left empty"
                );
                Self::empty()
            }
        }
    }

    /// Load credentials from the process environment.
    ///
    /// Reads the same two keys as [`Credentials::from_env_file`]. Missing
    /// variables leave the corresponding field empty.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            secret_id: std::env::var(SECRET_ID_KEY).unwrap_or_default(),
            secret_key: std::env::var(SECRET_KEY_KEY).unwrap_or_default(),
        }
    }

    /// Parse `KEY=VALUE` lines into a credential pair.
    fn parse(contents: &str) -> Self {
        let mut creds = Self::default();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key.trim() {
                SECRET_ID_KEY => creds.secret_id = value.trim().to_owned(),
                SECRET_KEY_KEY => creds.secret_key = value.trim().to_owned(),
                _ => {}
            }
        }
        creds
    }

    /// Whether both secrets are present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.secret_id.is_empty() && !self.secret_key.is_empty()
    }

    /// The secret id (the public half of the pair).
    #[must_use]
    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }

    /// The secret key.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// A redacted description of the pair for operator diagnostics.
    ///
    /// Shows at most the first 10 characters of each secret. Never log the
    /// full values.
    #[must_use]
    pub fn redacted(&self) -> String {
        fn prefix(s: &str) -> String {
            if s.is_empty() {
                "unset".to_owned()
            } else {
                let end = s.char_indices().nth(10).map_or(s.len(), |(i, _)| i);
                format!("set({}...)", &s[..end])
            }
        }
        format!(
            "{SECRET_ID_KEY}={}, {SECRET_KEY_KEY}={}",
            prefix(&self.secret_id),
            prefix(&self.secret_key)
        )
    }
}

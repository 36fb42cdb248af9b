//! Client configuration.
//!
//! [`ClientOptions`] is the serde-friendly form of everything
//! [`ClientBuilder`](crate::ClientBuilder) accepts, so the connection settings
//! can live in an application config file or in environment variables.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "apikey";

/// Timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("evolution-client/", env!("CARGO_PKG_VERSION"));

/// Connection settings for an Evolution API server.
///
/// # Examples
///
/// ```
/// use evolution_client::ClientOptions;
///
/// let options: ClientOptions = serde_json::from_str(r#"{
///     "base_url": "https://evo.example.com",
///     "api_key": "secret",
///     "timeout_secs": 10,
///     "headers": {"x-tenant": "acme"}
/// }"#).unwrap();
///
/// assert_eq!(options.timeout_secs, 10);
/// assert!(options.validate_ssl);
/// assert!(!format!("{:?}", options).contains("secret"));
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Server root, e.g. `https://evo.example.com` or `https://host/evolution/`.
    pub base_url: String,
    /// Global or instance API key, sent in the `apikey` header.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Overrides the default `User-Agent`.
    pub user_agent: Option<String>,
    /// Extra headers merged into every request.
    pub headers: BTreeMap<String, String>,
    /// Log every request line and response status at `info`.
    pub log_requests: bool,
    /// Log serialized request bodies.
    pub log_request_body: bool,
    /// Log raw response bodies.
    pub log_response_body: bool,
    /// Reject invalid TLS certificates. Disable only for self-signed test servers.
    pub validate_ssl: bool,
}

impl ClientOptions {
    /// Creates options with the given server and key and defaults for the rest.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Reads options from `EVOLUTION_API_*` environment variables.
    ///
    /// `EVOLUTION_API_URL` and `EVOLUTION_API_KEY` are required. Optional:
    /// `EVOLUTION_API_TIMEOUT_SECS`, `EVOLUTION_API_USER_AGENT`,
    /// `EVOLUTION_API_LOG_REQUESTS`, `EVOLUTION_API_LOG_REQUEST_BODY`,
    /// `EVOLUTION_API_LOG_RESPONSE_BODY`, `EVOLUTION_API_VALIDATE_SSL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::ConfigurationError(format!("{} is not set", key)))
        };
        let flag = |key: &str, default: bool| -> Result<bool> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => parse_flag(&raw).ok_or_else(|| {
                    Error::ConfigurationError(format!("{} must be a boolean, got `{}`", key, raw))
                }),
            }
        };

        let mut options = Self::new(required("EVOLUTION_API_URL")?, required("EVOLUTION_API_KEY")?);
        if let Some(raw) = lookup("EVOLUTION_API_TIMEOUT_SECS") {
            options.timeout_secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    Error::ConfigurationError(format!(
                        "EVOLUTION_API_TIMEOUT_SECS must be a positive number of seconds, got `{}`",
                        raw
                    ))
                })?;
        }
        options.user_agent = lookup("EVOLUTION_API_USER_AGENT");
        options.log_requests = flag("EVOLUTION_API_LOG_REQUESTS", false)?;
        options.log_request_body = flag("EVOLUTION_API_LOG_REQUEST_BODY", false)?;
        options.log_response_body = flag("EVOLUTION_API_LOG_RESPONSE_BODY", false)?;
        options.validate_ssl = flag("EVOLUTION_API_VALIDATE_SSL", true)?;
        Ok(options)
    }

    /// The configured timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            user_agent: None,
            headers: BTreeMap::new(),
            log_requests: false,
            log_request_body: false,
            log_response_body: false,
            validate_ssl: true,
        }
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("log_requests", &self.log_requests)
            .field("log_request_body", &self.log_request_body)
            .field("log_response_body", &self.log_response_body)
            .field("validate_ssl", &self.validate_ssl)
            .finish()
    }
}

/// Which parts of each exchange the transport logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSettings {
    /// Request line and response status at `info` instead of `debug`.
    pub requests: bool,
    /// Serialized request bodies.
    pub request_body: bool,
    /// Raw response bodies.
    pub response_body: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_requires_url_and_key() {
        let err = ClientOptions::from_lookup(lookup(&[("EVOLUTION_API_KEY", "k")])).unwrap_err();
        assert!(err.to_string().contains("EVOLUTION_API_URL"));

        let err = ClientOptions::from_lookup(lookup(&[
            ("EVOLUTION_API_URL", "http://localhost:8080"),
            ("EVOLUTION_API_KEY", "  "),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("EVOLUTION_API_KEY"));
    }

    #[test]
    fn env_reads_optional_settings() {
        let options = ClientOptions::from_lookup(lookup(&[
            ("EVOLUTION_API_URL", "http://localhost:8080"),
            ("EVOLUTION_API_KEY", "k"),
            ("EVOLUTION_API_TIMEOUT_SECS", "5"),
            ("EVOLUTION_API_LOG_REQUESTS", "yes"),
            ("EVOLUTION_API_VALIDATE_SSL", "false"),
        ]))
        .unwrap();

        assert_eq!(options.timeout(), Duration::from_secs(5));
        assert!(options.log_requests);
        assert!(!options.log_request_body);
        assert!(!options.validate_ssl);
    }

    #[test]
    fn env_rejects_zero_timeout() {
        for raw in ["0", " 0 ", "-3", "soon"] {
            let err = ClientOptions::from_lookup(lookup(&[
                ("EVOLUTION_API_URL", "http://localhost:8080"),
                ("EVOLUTION_API_KEY", "k"),
                ("EVOLUTION_API_TIMEOUT_SECS", raw),
            ]))
            .unwrap_err();
            assert!(matches!(err, Error::ConfigurationError(_)), "{}", raw);
            assert!(err.to_string().contains("EVOLUTION_API_TIMEOUT_SECS"));
        }
    }

    #[test]
    fn env_rejects_bad_flags() {
        let err = ClientOptions::from_lookup(lookup(&[
            ("EVOLUTION_API_URL", "http://localhost:8080"),
            ("EVOLUTION_API_KEY", "k"),
            ("EVOLUTION_API_LOG_REQUESTS", "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let options: ClientOptions =
            serde_json::from_str(r#"{"base_url":"http://h","api_key":"k"}"#).unwrap();
        assert_eq!(options.timeout(), DEFAULT_TIMEOUT);
        assert!(options.validate_ssl);
        assert!(options.headers.is_empty());
    }
}

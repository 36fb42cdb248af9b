//! Error types for Evolution API calls.
//!
//! Every failure is reported to the immediate caller. Validation errors are
//! raised before any network I/O, HTTP errors keep the raw response and the
//! parsed remote error envelope, and deserialization failures keep the body
//! that could not be parsed.

use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use serde_json::Value;

/// The main error type for Evolution API calls.
///
/// # Examples
///
/// ```no_run
/// use evolution_client::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder()
///     .base_url("http://localhost:8080")?
///     .api_key("secret")
///     .build()?;
///
/// match client.instances().connection_state("missing").await {
///     Ok(state) => println!("state: {}", state.instance.state),
///     Err(Error::NotFound { payload, .. }) => {
///         let reason = payload.map(|p| p.messages().join(", ")).unwrap_or_default();
///         eprintln!("instance does not exist: {}", reason);
///     }
///     Err(Error::HttpError { status, raw_response, .. }) => {
///         eprintln!("HTTP error {}: {}", status, raw_response);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required string argument was empty or whitespace.
    ///
    /// Raised before any request is sent. `argument` names the offending
    /// parameter using its wire name (for example `instanceName` or `groupJid`).
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// The wire name of the argument
        argument: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A required object or collection was not supplied.
    ///
    /// Raised before any request is sent.
    #[error("Required argument `{argument}` is missing")]
    MissingArgument {
        /// The wire name of the argument
        argument: &'static str,
    },

    /// The remote API answered 404.
    ///
    /// Kept apart from [`Error::HttpError`] so callers can special-case
    /// "instance does not exist".
    #[error("Not found: {raw_response}")]
    NotFound {
        /// The raw response body
        raw_response: String,
        /// The response headers
        headers: HeaderMap,
        /// The remote error envelope, when the body carried one
        payload: Option<ApiErrorPayload>,
    },

    /// The server returned a non-2xx HTTP status code other than 404.
    #[error("HTTP error {status}: {raw_response}")]
    HttpError {
        /// The HTTP status code
        status: StatusCode,
        /// The raw response body
        raw_response: String,
        /// The response headers
        headers: HeaderMap,
        /// The remote error envelope, when the body carried one
        payload: Option<ApiErrorPayload>,
    },

    /// Failed to deserialize the response body into the expected type.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body that failed to deserialize
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// Failed to serialize the request body.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),

    /// A network-level error occurred (connection refused, DNS failure, TLS...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request took longer than the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The cancellation token attached to the client fired.
    #[error("Request cancelled")]
    Cancelled,

    /// Invalid client configuration (missing base URL, bad header value...).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Network(err)
        }
    }

    /// Returns the HTTP status code if this error has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Error::HttpError { status, .. } => Some(*status),
            Error::DeserializationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::NotFound { raw_response, .. } => Some(raw_response),
            Error::HttpError { raw_response, .. } => Some(raw_response),
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns the parsed remote error envelope, if any.
    pub fn payload(&self) -> Option<&ApiErrorPayload> {
        match self {
            Error::NotFound { payload, .. } | Error::HttpError { payload, .. } => {
                payload.as_ref()
            }
            _ => None,
        }
    }

    /// Returns `true` for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Returns `true` for [`Error::Cancelled`].
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// Returns `true` when the call was rejected before reaching the network.
    ///
    /// ```
    /// use evolution_client::Error;
    ///
    /// let err = Error::InvalidArgument {
    ///     argument: "instanceName",
    ///     reason: "instanceName is required".to_string(),
    /// };
    /// assert!(err.is_validation());
    /// assert!(!Error::Timeout.is_validation());
    /// ```
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument { .. } | Error::MissingArgument { .. }
        )
    }
}

/// The error envelope the Evolution API returns with non-2xx responses.
///
/// ```json
/// {
///   "status": 404,
///   "error": "Not Found",
///   "response": {"message": ["The \"x\" instance does not exist"]}
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiErrorPayload {
    /// Status echoed in the body
    pub status: Option<u16>,
    /// Short reason phrase
    pub error: Option<String>,
    /// Free-form detail, usually `{"message": ...}`
    pub response: Option<Value>,
}

impl ApiErrorPayload {
    /// Parses an error body, returning `None` when it is not an envelope.
    pub fn parse(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Flattens `response.message` into a list of strings.
    ///
    /// The API reports messages as a string, an array of strings, or nested
    /// arrays depending on the endpoint.
    pub fn messages(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(message) = self.response.as_ref().and_then(|r| r.get("message")) {
            collect_messages(message, &mut out);
        }
        out
    }
}

fn collect_messages(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|item| collect_messages(item, out)),
        Value::Null => {}
        other => out.push(other.to_string()),
    }
}

/// A specialized `Result` type for Evolution API calls.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_messages_flatten_nested_arrays() {
        let payload = ApiErrorPayload::parse(
            r#"{"status":400,"error":"Bad Request",
                "response":{"message":[["number is required"],"text is required"]}}"#,
        )
        .unwrap();

        assert_eq!(payload.status, Some(400));
        assert_eq!(payload.error.as_deref(), Some("Bad Request"));
        assert_eq!(
            payload.messages(),
            vec!["number is required", "text is required"]
        );
    }

    #[test]
    fn payload_ignores_non_envelope_bodies() {
        assert!(ApiErrorPayload::parse("Internal Server Error").is_none());
        assert!(ApiErrorPayload::parse("[1,2]").is_none());
    }

    #[test]
    fn not_found_reports_404() {
        let err = Error::NotFound {
            raw_response: "{}".to_string(),
            headers: HeaderMap::new(),
            payload: None,
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.is_not_found());
        assert_eq!(err.raw_response(), Some("{}"));
    }
}

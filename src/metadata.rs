//! Request metadata and endpoint path construction.

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Joins path segments with `/`, percent-encoding each one.
///
/// Caller-supplied identifiers such as instance names may contain spaces or
/// reserved characters; encoding keeps each of them a single segment.
///
/// ```
/// use evolution_client::metadata::endpoint;
///
/// assert_eq!(endpoint(&["message", "sendText", "inst-1"]), "message/sendText/inst-1");
/// assert_eq!(endpoint(&["instance", "connect", "my inst"]), "instance/connect/my%20inst");
/// ```
pub fn endpoint(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Metadata for an individual HTTP request.
///
/// `path` is relative to the client's base URL. Query parameters are sent in
/// insertion order.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// The HTTP method (GET, POST, etc.).
    pub method: Method,

    /// The request path (relative to the base URL).
    pub path: String,

    /// Additional headers for this request.
    pub headers: HeaderMap,

    /// Query parameters for this request.
    pub query_params: Vec<(String, String)>,
}

impl RequestMetadata {
    /// Creates a new `RequestMetadata` with the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            query_params: Vec::new(),
        }
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, crate::Error> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Adds a query parameter to the request.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Adds a query parameter only when `value` is present.
    pub fn with_optional_query_param(self, key: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.with_query_param(key, value),
            None => self,
        }
    }

    /// Renders the path and query string as they are sent on the wire.
    ///
    /// ```
    /// use evolution_client::metadata::RequestMetadata;
    /// use http::Method;
    ///
    /// let metadata = RequestMetadata::new(Method::POST, "group/updateGroupPicture/inst-1")
    ///     .with_query_param("groupJid", "123@g.us");
    /// assert_eq!(
    ///     metadata.target(),
    ///     "group/updateGroupPicture/inst-1?groupJid=123%40g.us"
    /// );
    /// ```
    pub fn target(&self) -> String {
        if self.query_params.is_empty() {
            return self.path.clone();
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_params.iter())
            .finish();
        format!("{}?{}", self.path, query)
    }
}

impl Default for RequestMetadata {
    fn default() -> Self {
        Self::new(Method::GET, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_escapes_reserved_characters_per_segment() {
        assert_eq!(
            endpoint(&["typebot", "fetch", "bot/1", "inst?x"]),
            "typebot/fetch/bot%2F1/inst%3Fx"
        );
    }

    #[test]
    fn endpoint_leaves_jids_readable() {
        assert_eq!(
            endpoint(&["chat", "x", "5511999999999@s.whatsapp.net"]),
            "chat/x/5511999999999@s.whatsapp.net"
        );
    }

    #[test]
    fn query_params_keep_insertion_order() {
        let metadata = RequestMetadata::new(Method::GET, "group/participants/inst")
            .with_query_param("groupJid", "1@g.us")
            .with_optional_query_param("skip", None)
            .with_query_param("getParticipants", "true");

        assert_eq!(
            metadata.target(),
            "group/participants/inst?groupJid=1%40g.us&getParticipants=true"
        );
    }

    #[test]
    fn target_without_query_is_the_path() {
        let metadata = RequestMetadata::new(Method::DELETE, "instance/logout/inst");
        assert_eq!(metadata.target(), "instance/logout/inst");
    }
}

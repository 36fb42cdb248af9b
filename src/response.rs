//! Response wrapper that preserves both parsed data and raw response details.
//!
//! Resource modules unwrap [`Response`] and hand back only the parsed value.
//! Callers that go through [`HttpTransport`](crate::transport::HttpTransport)
//! directly get the timing and raw body as well.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A successful HTTP response.
///
/// # Examples
///
/// ```no_run
/// use evolution_client::Client;
///
/// # async fn example() -> Result<(), evolution_client::Error> {
/// let client = Client::builder()
///     .base_url("http://localhost:8080")?
///     .api_key("secret")
///     .build()?;
///
/// let response = client
///     .transport()
///     .get::<serde_json::Value>("instance/fetchInstances")
///     .await?;
///
/// println!("Status: {}", response.status);
/// println!("Request took {:?}", response.latency);
/// println!("Body: {}", response.raw_body);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The deserialized response data.
    pub data: T,

    /// The raw response body as a string.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from sending the request until the body was read.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Discards the metadata and returns the parsed value.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Returns a reference to a header value by name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use evolution_client::Response;
    /// # use http::{HeaderMap, StatusCode, HeaderValue};
    /// # use std::time::Duration;
    /// let mut headers = HeaderMap::new();
    /// headers.insert("content-type", HeaderValue::from_static("application/json"));
    ///
    /// let response = Response::new(
    ///     (),
    ///     String::new(),
    ///     StatusCode::OK,
    ///     headers,
    ///     Duration::from_millis(100),
    /// );
    ///
    /// assert_eq!(response.header("content-type"), Some("application/json"));
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

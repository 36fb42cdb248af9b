//! The HTTP transport shared by every resource module.
//!
//! [`HttpTransport`] owns the base URL, default headers (API key, custom
//! headers), timeout and TLS settings. It sends exactly one request per call,
//! (de)serializes JSON, and maps non-2xx responses to [`Error`] variants.
//! It never retries.

use crate::{
    config::{LogSettings, API_KEY_HEADER, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT},
    metadata::RequestMetadata,
    upload::MultipartUpload,
    ApiErrorPayload, Error, Response, Result,
};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use url::Url;

/// A cheaply clonable handle to one configured HTTP connection pool.
///
/// Clones share the pool and configuration. The transport holds no per-call
/// state, so any number of calls may run concurrently.
///
/// # Examples
///
/// ```no_run
/// use evolution_client::transport::HttpTransport;
///
/// # async fn example() -> Result<(), evolution_client::Error> {
/// let transport = HttpTransport::builder()
///     .base_url("http://localhost:8080")?
///     .api_key("secret")
///     .build()?;
///
/// let instances = transport
///     .get::<serde_json::Value>("instance/fetchInstances")
///     .await?;
/// println!("{}", instances.data);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpTransport {
    inner: Arc<TransportInner>,
    cancel: Option<CancellationToken>,
}

struct TransportInner {
    http_client: reqwest::Client,
    base_url: Url,
    default_headers: HeaderMap,
    logging: LogSettings,
}

enum Payload {
    Empty,
    Json(Value),
    Multipart(MultipartUpload),
}

impl HttpTransport {
    /// Creates a new `TransportBuilder`.
    pub fn builder() -> TransportBuilder {
        TransportBuilder::new()
    }

    /// The base URL every path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Returns a clone whose calls fail with [`Error::Cancelled`] once `token` fires.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cancel: Some(token),
        }
    }

    /// Sends one request and parses the JSON response.
    ///
    /// `body`, when present, is serialized to JSON.
    pub async fn call<Req, Res>(
        &self,
        metadata: RequestMetadata,
        body: Option<&Req>,
    ) -> Result<Response<Res>>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let payload = match body {
            Some(body) => Payload::Json(
                serde_json::to_value(body).map_err(|e| Error::SerializationFailed(e.to_string()))?,
            ),
            None => Payload::Empty,
        };
        self.dispatch(&metadata, payload).await
    }

    /// Sends a `multipart/form-data` POST and parses the JSON response.
    pub async fn send_multipart<Res>(
        &self,
        path: impl Into<String>,
        upload: MultipartUpload,
    ) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::POST, path);
        self.dispatch(&metadata, Payload::Multipart(upload)).await
    }

    async fn dispatch<Res>(
        &self,
        metadata: &RequestMetadata,
        payload: Payload,
    ) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let Some(token) = &self.cancel else {
            return self.exchange(metadata, payload).await;
        };
        if token.is_cancelled() {
            return Err(Error::Cancelled);
        }
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::warn!(
                    method = %metadata.method,
                    path = %metadata.target(),
                    "Request cancelled"
                );
                Err(Error::Cancelled)
            }
            result = self.exchange(metadata, payload) => result,
        }
    }

    async fn exchange<Res>(
        &self,
        metadata: &RequestMetadata,
        payload: Payload,
    ) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let start_time = Instant::now();
        let response = self.execute_request(metadata, payload).await?;
        self.parse_response(metadata, response, start_time).await
    }

    /// Builds and sends the request.
    async fn execute_request(
        &self,
        metadata: &RequestMetadata,
        payload: Payload,
    ) -> Result<reqwest::Response> {
        let mut url = self.inner.base_url.join(&metadata.path)?;
        if !metadata.query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(metadata.query_params.iter());
        }

        if self.inner.logging.requests {
            tracing::info!(method = %metadata.method, url = %url, "Sending request");
        } else {
            tracing::debug!(method = %metadata.method, url = %url, "Sending request");
        }

        let mut request = self
            .inner
            .http_client
            .request(metadata.method.clone(), url)
            .headers(self.inner.default_headers.clone());

        for (name, value) in &metadata.headers {
            request = request.header(name, value);
        }

        request = match payload {
            Payload::Empty => request,
            Payload::Json(json) => {
                if self.inner.logging.request_body {
                    tracing::info!(path = %metadata.path, body = %json, "Request body");
                }
                request.json(&json)
            }
            Payload::Multipart(upload) => {
                if self.inner.logging.request_body {
                    tracing::info!(
                        path = %metadata.path,
                        fields = ?upload.fields,
                        file = ?upload.file,
                        "Multipart request body"
                    );
                }
                request.multipart(upload.to_form()?)
            }
        };

        request.send().await.map_err(Error::from_transport)
    }

    /// Maps the status and parses the body.
    async fn parse_response<Res>(
        &self,
        metadata: &RequestMetadata,
        response: reqwest::Response,
        start_time: Instant,
    ) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let status = response.status();
        let headers = response.headers().clone();
        let raw_body = response.text().await.map_err(Error::from_transport)?;
        let latency = start_time.elapsed();

        if self.inner.logging.requests {
            tracing::info!(
                status = status.as_u16(),
                latency_ms = latency.as_millis(),
                path = %metadata.path,
                "Received response"
            );
        } else {
            tracing::debug!(
                status = status.as_u16(),
                latency_ms = latency.as_millis(),
                path = %metadata.path,
                "Received response"
            );
        }
        if self.inner.logging.response_body {
            tracing::info!(path = %metadata.path, body = %raw_body, "Response body");
        }

        if !status.is_success() {
            let payload = ApiErrorPayload::parse(&raw_body);

            if status.is_client_error() {
                tracing::error!(
                    status = status.as_u16(),
                    path = %metadata.target(),
                    response = %raw_body,
                    "Client error (4xx)"
                );
            } else {
                tracing::warn!(
                    status = status.as_u16(),
                    path = %metadata.target(),
                    response = %raw_body,
                    "Server error"
                );
            }

            if status == http::StatusCode::NOT_FOUND {
                return Err(Error::NotFound {
                    raw_response: raw_body,
                    headers,
                    payload,
                });
            }
            return Err(Error::HttpError {
                status,
                raw_response: raw_body,
                headers,
                payload,
            });
        }

        // Bodiless 2xx answers parse as JSON null.
        let text = if raw_body.trim().is_empty() {
            "null"
        } else {
            raw_body.as_str()
        };

        match serde_json::from_str::<Res>(text) {
            Ok(data) => Ok(Response::new(data, raw_body, status, headers, latency)),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    path = %metadata.path,
                    raw_response = %raw_body,
                    "Failed to deserialize response"
                );

                Err(Error::DeserializationFailed {
                    raw_response: raw_body,
                    serde_error: e.to_string(),
                    status,
                })
            }
        }
    }

    /// Makes a GET request to the specified path.
    pub async fn get<Res>(&self, path: impl Into<String>) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::GET, path);
        self.call::<(), Res>(metadata, None).await
    }

    /// Makes a POST request to the specified path with a JSON body.
    pub async fn post<Req, Res>(&self, path: impl Into<String>, body: &Req) -> Result<Response<Res>>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::POST, path);
        self.call(metadata, Some(body)).await
    }

    /// Makes a PUT request to the specified path with a JSON body.
    pub async fn put<Req, Res>(&self, path: impl Into<String>, body: &Req) -> Result<Response<Res>>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::PUT, path);
        self.call(metadata, Some(body)).await
    }

    /// Makes a PATCH request to the specified path with a JSON body.
    pub async fn patch<Req, Res>(
        &self,
        path: impl Into<String>,
        body: &Req,
    ) -> Result<Response<Res>>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::PATCH, path);
        self.call(metadata, Some(body)).await
    }

    /// Makes a DELETE request to the specified path.
    pub async fn delete<Res>(&self, path: impl Into<String>) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::DELETE, path);
        self.call::<(), Res>(metadata, None).await
    }

    /// Makes a DELETE request carrying a JSON body.
    pub async fn delete_with_body<Req, Res>(
        &self,
        path: impl Into<String>,
        body: &Req,
    ) -> Result<Response<Res>>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let metadata = RequestMetadata::new(Method::DELETE, path);
        self.call(metadata, Some(body)).await
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.inner.base_url.as_str())
            .field("logging", &self.inner.logging)
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

/// Builder for [`HttpTransport`].
///
/// # Examples
///
/// ```no_run
/// use evolution_client::transport::HttpTransport;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), evolution_client::Error> {
/// let transport = HttpTransport::builder()
///     .base_url("https://evo.example.com/api")?
///     .api_key("secret")
///     .timeout(Duration::from_secs(15))
///     .default_header("x-tenant", "acme")?
///     .log_requests(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TransportBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    default_headers: HeaderMap,
    user_agent: String,
    timeout: Duration,
    validate_ssl: bool,
    logging: LogSettings,
}

impl TransportBuilder {
    /// Creates a new `TransportBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            default_headers: HeaderMap::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            validate_ssl: true,
            logging: LogSettings::default(),
        }
    }

    /// Sets the base URL for all requests.
    ///
    /// A path prefix such as `https://host/evolution` is kept; endpoint paths
    /// are resolved below it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or cannot carry a path.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let mut url = Url::parse(url.as_ref())?;
        if url.cannot_be_a_base() {
            return Err(Error::ConfigurationError(format!(
                "Base URL `{}` cannot carry a path",
                url
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        self.base_url = Some(url);
        Ok(self)
    }

    /// Sets the API key sent in the `apikey` header.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Adds a default header that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the request timeout applied to every call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables or disables TLS certificate validation.
    pub fn validate_ssl(mut self, validate: bool) -> Self {
        self.validate_ssl = validate;
        self
    }

    /// Promotes request and status logging from `debug` to `info`.
    pub fn log_requests(mut self, enabled: bool) -> Self {
        self.logging.requests = enabled;
        self
    }

    /// Logs serialized request bodies.
    pub fn log_request_body(mut self, enabled: bool) -> Self {
        self.logging.request_body = enabled;
        self
    }

    /// Logs raw response bodies.
    pub fn log_response_body(mut self, enabled: bool) -> Self {
        self.logging.response_body = enabled;
        self
    }

    /// Builds the configured `HttpTransport`.
    ///
    /// # Errors
    ///
    /// Returns an error if no base URL was provided, the API key is not a
    /// valid header value, or the HTTP client cannot be created.
    pub fn build(self) -> Result<HttpTransport> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::ConfigurationError("Base URL is required".to_string()))?;

        let mut default_headers = self.default_headers;
        if let Some(key) = self.api_key {
            let mut value = HeaderValue::try_from(key.as_str())
                .map_err(|e| Error::ConfigurationError(format!("Invalid API key: {}", e)))?;
            value.set_sensitive(true);
            default_headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .danger_accept_invalid_certs(!self.validate_ssl)
            .build()
            .map_err(|e| {
                Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        tracing::debug!(
            base_url = %base_url,
            timeout_ms = self.timeout.as_millis(),
            validate_ssl = self.validate_ssl,
            "Evolution API transport configured"
        );

        Ok(HttpTransport {
            inner: Arc::new(TransportInner {
                http_client,
                base_url,
                default_headers,
                logging: self.logging,
            }),
            cancel: None,
        })
    }
}

impl Default for TransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let transport = HttpTransport::builder()
            .base_url("https://evo.example.com/api?x=1")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(transport.base_url().as_str(), "https://evo.example.com/api/");
        assert_eq!(
            transport.base_url().join("message/sendText/inst").unwrap().as_str(),
            "https://evo.example.com/api/message/sendText/inst"
        );
    }

    #[test]
    fn build_requires_base_url() {
        let err = HttpTransport::builder().build().unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));
    }

    #[test]
    fn api_key_must_be_a_header_value() {
        let err = HttpTransport::builder()
            .base_url("http://localhost")
            .unwrap()
            .api_key("bad\nkey")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("API key"));
    }
}

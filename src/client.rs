//! The Evolution API client.
//!
//! [`Client`] owns one [`HttpTransport`] and hands out a lightweight module
//! per resource area. Use [`ClientBuilder`] (or [`ClientOptions`]) to
//! configure it.

use crate::{
    api::{
        Bots, Chat, Chatwoot, Contacts, Dify, Evoai, EvolutionBot, Events, Flowise, Groups,
        Instances, Messages, N8n, OpenAi, Profile, Rabbitmq, Settings, Sqs, Typebot, Webhook,
        Websocket,
    },
    config::ClientOptions,
    transport::{HttpTransport, TransportBuilder},
    Error, Result,
};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// A client for one Evolution API server.
///
/// The client is cheap to clone and designed to be reused: every clone shares
/// the same connection pool and configuration.
///
/// # Examples
///
/// ```no_run
/// use evolution_client::Client;
/// use evolution_client::types::message::SendTextRequest;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), evolution_client::Error> {
/// let client = Client::builder()
///     .base_url("https://evo.example.com")?
///     .api_key("secret")
///     .timeout(Duration::from_secs(30))
///     .build()?;
///
/// let state = client.instances().connection_state("inst-1").await?;
/// if state.instance.is_open() {
///     client
///         .messages()
///         .send_text("inst-1", &SendTextRequest::new("5511999999999", "hello"))
///         .await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    transport: HttpTransport,
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Builds a client from serialized options.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL, a header or the API key is invalid.
    pub fn from_options(options: &ClientOptions) -> Result<Self> {
        ClientBuilder::new().options(options)?.build()
    }

    /// A clone of this client whose requests stop with [`Error::Cancelled`]
    /// once `token` fires.
    ///
    /// ```no_run
    /// use evolution_client::Client;
    /// use tokio_util::sync::CancellationToken;
    ///
    /// # async fn example(client: Client) {
    /// let token = CancellationToken::new();
    /// let scoped = client.with_cancellation(token.clone());
    /// token.cancel();
    /// let err = scoped.instances().fetch_instances(None).await.unwrap_err();
    /// assert!(err.is_cancelled());
    /// # }
    /// ```
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            transport: self.transport.with_cancellation(token),
        }
    }

    /// The underlying transport, for endpoints this crate does not wrap.
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Instance lifecycle: create, connect, restart, presence.
    pub fn instances(&self) -> Instances {
        Instances::new(self.transport.clone())
    }

    /// Outgoing messages of every kind.
    pub fn messages(&self) -> Messages {
        Messages::new(self.transport.clone())
    }

    /// Chats, stored messages, receipts and media download.
    pub fn chat(&self) -> Chat {
        Chat::new(self.transport.clone())
    }

    /// Stored contacts, profile pictures and blocking.
    pub fn contacts(&self) -> Contacts {
        Contacts::new(self.transport.clone())
    }

    /// Group management and invites.
    pub fn groups(&self) -> Groups {
        Groups::new(self.transport.clone())
    }

    /// Profile, business profile and privacy settings.
    pub fn profile(&self) -> Profile {
        Profile::new(self.transport.clone())
    }

    /// Per-instance behaviour settings.
    pub fn settings(&self) -> Settings {
        Settings::new(self.transport.clone())
    }

    /// Webhook event sink.
    pub fn webhook(&self) -> Events<Webhook> {
        Events::new(self.transport.clone())
    }

    /// WebSocket event sink.
    pub fn websocket(&self) -> Events<Websocket> {
        Events::new(self.transport.clone())
    }

    /// RabbitMQ event sink.
    pub fn rabbitmq(&self) -> Events<Rabbitmq> {
        Events::new(self.transport.clone())
    }

    /// Amazon SQS event sink.
    pub fn sqs(&self) -> Events<Sqs> {
        Events::new(self.transport.clone())
    }

    /// Chatwoot inbox integration.
    pub fn chatwoot(&self) -> Chatwoot {
        Chatwoot::new(self.transport.clone())
    }

    /// Typebot flows.
    pub fn typebot(&self) -> Bots<Typebot> {
        Bots::new(self.transport.clone())
    }

    /// OpenAI assistants and credentials.
    pub fn openai(&self) -> Bots<OpenAi> {
        Bots::new(self.transport.clone())
    }

    /// Dify apps.
    pub fn dify(&self) -> Bots<Dify> {
        Bots::new(self.transport.clone())
    }

    /// Flowise flows.
    pub fn flowise(&self) -> Bots<Flowise> {
        Bots::new(self.transport.clone())
    }

    /// Generic HTTP bots.
    pub fn evolution_bot(&self) -> Bots<EvolutionBot> {
        Bots::new(self.transport.clone())
    }

    /// n8n workflows.
    pub fn n8n(&self) -> Bots<N8n> {
        Bots::new(self.transport.clone())
    }

    /// EvoAI agents.
    pub fn evoai(&self) -> Bots<Evoai> {
        Bots::new(self.transport.clone())
    }
}

/// Builder for [`Client`].
///
/// # Examples
///
/// ```no_run
/// use evolution_client::Client;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), evolution_client::Error> {
/// let client = Client::builder()
///     .base_url("https://evo.example.com/evolution")?
///     .api_key("secret")
///     .timeout(Duration::from_secs(10))
///     .default_header("x-tenant", "acme")?
///     .log_requests(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    transport: TransportBuilder,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies every field of `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or a header is invalid, or the
    /// timeout is zero.
    pub fn options(self, options: &ClientOptions) -> Result<Self> {
        if options.timeout_secs == 0 {
            return Err(Error::ConfigurationError("timeout_secs must be at least 1".to_string()));
        }
        let mut builder = self
            .base_url(&options.base_url)?
            .timeout(options.timeout())
            .validate_ssl(options.validate_ssl)
            .log_requests(options.log_requests)
            .log_request_body(options.log_request_body)
            .log_response_body(options.log_response_body);
        if !options.api_key.is_empty() {
            builder = builder.api_key(options.api_key.as_str());
        }
        if let Some(user_agent) = &options.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        for (name, value) in &options.headers {
            builder = builder.default_header(name, value)?;
        }
        Ok(builder)
    }

    /// Sets the server root. A path prefix such as `https://host/evolution` is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(self, url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            transport: self.transport.base_url(url)?,
        })
    }

    /// Sets the global or instance API key.
    pub fn api_key(self, key: impl Into<String>) -> Self {
        Self {
            transport: self.transport.api_key(key),
        }
    }

    /// Adds a header sent with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            transport: self.transport.default_header(name, value)?,
        })
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(self, user_agent: impl Into<String>) -> Self {
        Self {
            transport: self.transport.user_agent(user_agent),
        }
    }

    /// Sets the per-request timeout. Defaults to 30 seconds.
    pub fn timeout(self, timeout: Duration) -> Self {
        Self {
            transport: self.transport.timeout(timeout),
        }
    }

    /// Set to `false` to accept self-signed certificates.
    pub fn validate_ssl(self, validate: bool) -> Self {
        Self {
            transport: self.transport.validate_ssl(validate),
        }
    }

    /// Logs request lines and response statuses at `info` instead of `debug`.
    pub fn log_requests(self, enabled: bool) -> Self {
        Self {
            transport: self.transport.log_requests(enabled),
        }
    }

    /// Logs JSON and multipart request bodies at `info`.
    pub fn log_request_body(self, enabled: bool) -> Self {
        Self {
            transport: self.transport.log_request_body(enabled),
        }
    }

    /// Logs raw response bodies at `info`.
    pub fn log_response_body(self, enabled: bool) -> Self {
        Self {
            transport: self.transport.log_response_body(enabled),
        }
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if no base URL was provided, the API key is not a
    /// valid header value, or the HTTP client cannot be created.
    pub fn build(self) -> Result<Client> {
        Ok(Client {
            transport: self.transport.build()?,
        })
    }
}

//! Event delivery sinks. Webhook, WebSocket, RabbitMQ and SQS share one
//! `set`/`find` pair and differ only in resource name and config shape.

use crate::{
    metadata::endpoint,
    transport::HttpTransport,
    types::events::{StreamConfig, WebhookConfig},
    validate::require_instance,
    Error, Response, Result,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::fmt::Debug;
use std::marker::PhantomData;

/// A destination the server can push events to.
pub trait EventSink: Send + Sync + 'static {
    /// Path segment and body wrapper key, e.g. `webhook`.
    const RESOURCE: &'static str;
    /// Settings accepted by `set` and returned by `find`.
    type Config: Serialize + DeserializeOwned + Debug + Send + Sync;
}

/// HTTP callbacks.
#[derive(Debug, Clone, Copy)]
pub struct Webhook;

impl EventSink for Webhook {
    const RESOURCE: &'static str = "webhook";
    type Config = WebhookConfig;
}

/// Socket.IO stream.
#[derive(Debug, Clone, Copy)]
pub struct Websocket;

impl EventSink for Websocket {
    const RESOURCE: &'static str = "websocket";
    type Config = StreamConfig;
}

#[derive(Debug, Clone, Copy)]
pub struct Rabbitmq;

impl EventSink for Rabbitmq {
    const RESOURCE: &'static str = "rabbitmq";
    type Config = StreamConfig;
}

/// Amazon SQS queue.
#[derive(Debug, Clone, Copy)]
pub struct Sqs;

impl EventSink for Sqs {
    const RESOURCE: &'static str = "sqs";
    type Config = StreamConfig;
}

/// `{sink}/set` and `{sink}/find` for one sink kind.
///
/// # Examples
///
/// ```no_run
/// use evolution_client::Client;
/// use evolution_client::types::events::{EventName, WebhookConfig};
///
/// # async fn example() -> Result<(), evolution_client::Error> {
/// let client = Client::builder().base_url("http://localhost:8080")?.api_key("secret").build()?;
///
/// let config = WebhookConfig::new("https://app.example.com/hook", [EventName::MessagesUpsert]);
/// client.webhook().set("inst-1", &config).await?;
///
/// if let Some(current) = client.webhook().find("inst-1").await? {
///     println!("webhook points at {}", current.url);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Events<S> {
    transport: HttpTransport,
    sink: PhantomData<S>,
}

impl<S: EventSink> Events<S> {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self {
            transport,
            sink: PhantomData,
        }
    }

    /// Replaces the sink settings. `POST {sink}/set/{instance}`
    ///
    /// The body is wrapped as `{"<sink>": config}`.
    pub async fn set(&self, instance_name: &str, config: &S::Config) -> Result<S::Config> {
        require_instance(instance_name)?;
        let config =
            serde_json::to_value(config).map_err(|e| Error::SerializationFailed(e.to_string()))?;
        let mut body = Map::new();
        body.insert(S::RESOURCE.to_string(), config);
        self.transport
            .post(endpoint(&[S::RESOURCE, "set", instance_name]), &Value::Object(body))
            .await
            .map(Response::into_data)
    }

    /// Current settings, `None` when the sink was never configured.
    /// `GET {sink}/find/{instance}`
    pub async fn find(&self, instance_name: &str) -> Result<Option<S::Config>> {
        require_instance(instance_name)?;
        self.transport
            .get(endpoint(&[S::RESOURCE, "find", instance_name]))
            .await
            .map(Response::into_data)
    }
}

impl<S> Clone for Events<S> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            sink: PhantomData,
        }
    }
}

impl<S: EventSink> Debug for Events<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Events")
            .field("sink", &S::RESOURCE)
            .field("transport", &self.transport)
            .finish()
    }
}

//! Event sink configuration: webhook, WebSocket, RabbitMQ and SQS.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Server events a sink can subscribe to.
///
/// Configuration uses the `MESSAGES_UPSERT` form; inbound webhook payloads
/// use `messages.upsert`. [`EventName::parse`] accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventName {
    ApplicationStartup,
    QrcodeUpdated,
    MessagesSet,
    MessagesUpsert,
    MessagesEdited,
    MessagesUpdate,
    MessagesDelete,
    SendMessage,
    SendMessageUpdate,
    ContactsSet,
    ContactsUpsert,
    ContactsUpdate,
    PresenceUpdate,
    ChatsSet,
    ChatsUpsert,
    ChatsUpdate,
    ChatsDelete,
    GroupsUpsert,
    GroupUpdate,
    GroupParticipantsUpdate,
    ConnectionUpdate,
    LabelsEdit,
    LabelsAssociation,
    Call,
    TypebotStart,
    TypebotChangeStatus,
    RemoveInstance,
    LogoutInstance,
    InstanceCreate,
    InstanceDelete,
    StatusInstance,
}

impl EventName {
    /// Parses either wire form of an event name.
    ///
    /// ```
    /// use evolution_client::types::events::EventName;
    ///
    /// assert_eq!(EventName::parse("messages.upsert"), Some(EventName::MessagesUpsert));
    /// assert_eq!(EventName::parse("QRCODE_UPDATED"), Some(EventName::QrcodeUpdated));
    /// assert_eq!(EventName::parse("something.else"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().replace(['.', '-'], "_").to_ascii_uppercase();
        serde_json::from_value(serde_json::Value::String(normalized)).ok()
    }

    /// The dotted form used in inbound payloads, e.g. `messages.upsert`.
    pub fn dotted(&self) -> String {
        let upper = serde_json::to_value(self)
            .ok()
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or_default();
        upper.to_ascii_lowercase().replace('_', ".")
    }
}

/// Webhook sink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookConfig {
    /// Deliver events.
    pub enabled: bool,
    /// Target URL.
    pub url: String,
    /// Headers sent with every delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// Append the event name to the URL path. Stored as `webhookByEvents`.
    #[serde(alias = "webhookByEvents", skip_serializing_if = "Option::is_none")]
    pub by_events: Option<bool>,
    /// Embed media as base64 in payloads. Stored as `webhookBase64`.
    #[serde(alias = "webhookBase64", skip_serializing_if = "Option::is_none")]
    pub base64: Option<bool>,
    /// Subscribed events.
    pub events: Vec<EventName>,
}

impl WebhookConfig {
    /// An enabled webhook for `url` with the given events.
    pub fn new(url: impl Into<String>, events: impl IntoIterator<Item = EventName>) -> Self {
        Self {
            enabled: true,
            url: url.into(),
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }
}

/// WebSocket, RabbitMQ and SQS sinks share this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StreamConfig {
    /// Publish events.
    pub enabled: bool,
    /// Subscribed events.
    pub events: Vec<EventName>,
}

impl StreamConfig {
    /// An enabled sink for the given events.
    pub fn new(events: impl IntoIterator<Item = EventName>) -> Self {
        Self {
            enabled: true,
            events: events.into_iter().collect(),
        }
    }
}

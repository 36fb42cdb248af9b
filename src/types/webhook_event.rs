//! Payloads the server POSTs to a configured webhook.
//!
//! The library does not run a receiver; these types let an application's own
//! HTTP handler decode what it receives.

use super::events::EventName;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// One delivery to a webhook.
///
/// # Examples
///
/// ```
/// use evolution_client::types::events::EventName;
/// use evolution_client::types::webhook_event::WebhookEvent;
///
/// let event = WebhookEvent::from_slice(br#"{
///     "event": "connection.update",
///     "instance": "inst-1",
///     "data": {"state": "open", "statusReason": 200}
/// }"#).unwrap();
///
/// assert_eq!(event.kind(), Some(EventName::ConnectionUpdate));
/// assert_eq!(event.data["state"], "open");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct WebhookEvent {
    /// Event name, dotted form (`messages.upsert`).
    pub event: String,
    /// Instance that produced the event.
    pub instance: String,
    /// Event-specific payload.
    pub data: Value,
    /// Webhook URL the event was sent to.
    pub destination: Option<String>,
    /// Emission time, ISO-8601.
    pub date_time: Option<String>,
    /// JID of the connected account.
    pub sender: Option<String>,
    /// Public URL of the Evolution server.
    pub server_url: Option<String>,
    /// Instance API key, when the server is configured to expose it.
    pub apikey: Option<String>,
}

impl WebhookEvent {
    /// Decodes a request body.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// The event as an [`EventName`], `None` for names this crate does not know.
    pub fn kind(&self) -> Option<EventName> {
        EventName::parse(&self.event)
    }

    /// Decodes `data` into a typed payload.
    pub fn data_as<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.data)
    }
}

/// `data` of `connection.update`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectionUpdate {
    /// `open`, `close` or `connecting`.
    pub state: String,
    /// Numeric reason reported by the socket.
    pub status_reason: Option<i64>,
    /// Connected account.
    pub wuid: Option<String>,
    /// Display name of the connected account.
    pub profile_name: Option<String>,
}

/// `data` of `qrcode.updated`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QrCodeUpdate {
    /// The new code.
    pub qrcode: super::instance::QrCode,
}

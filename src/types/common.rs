//! Types shared by several resource areas.

use super::timestamp::unix_seconds_opt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies one message inside a chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageKey {
    /// Chat JID the message belongs to.
    #[serde(default)]
    pub remote_jid: String,
    /// Whether the connected account sent it.
    #[serde(default)]
    pub from_me: bool,
    /// Message id.
    #[serde(default)]
    pub id: String,
    /// Sender JID inside a group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
}

impl MessageKey {
    /// Creates a key for a message in `remote_jid`.
    pub fn new(remote_jid: impl Into<String>, id: impl Into<String>, from_me: bool) -> Self {
        Self {
            remote_jid: remote_jid.into(),
            from_me,
            id: id.into(),
            participant: None,
        }
    }
}

/// A message being replied to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quoted {
    /// Key of the quoted message.
    pub key: MessageKey,
    /// Content of the quoted message, e.g. `{"conversation": "hi"}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

/// Optional fields accepted by every send endpoint.
///
/// Embedded with `#[serde(flatten)]` so unset fields never reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOptions {
    /// Typing delay in milliseconds before sending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    /// Message to reply to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted: Option<Quoted>,
    /// Render URL previews.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview: Option<bool>,
    /// Mention every group member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions_every_one: Option<bool>,
    /// JIDs or numbers to mention.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentioned: Option<Vec<String>>,
}

impl SendOptions {
    /// Sets the typing delay.
    pub fn delay(mut self, millis: u32) -> Self {
        self.delay = Some(millis);
        self
    }

    /// Replies to `key`.
    pub fn quote(mut self, key: MessageKey) -> Self {
        self.quoted = Some(Quoted { key, message: None });
        self
    }

    /// Mentions the given numbers.
    pub fn mention(mut self, numbers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.mentioned = Some(numbers.into_iter().map(Into::into).collect());
        self
    }
}

/// What every send endpoint returns.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SendMessageResponse {
    /// Key of the created message.
    pub key: MessageKey,
    /// Sender display name.
    pub push_name: Option<String>,
    /// Delivery status, e.g. `PENDING`.
    pub status: Option<String>,
    /// The message content as stored by the server.
    pub message: Option<Value>,
    /// Content type, e.g. `conversation` or `imageMessage`.
    pub message_type: Option<String>,
    /// Send time in Unix seconds.
    #[serde(deserialize_with = "unix_seconds_opt")]
    pub message_timestamp: Option<i64>,
    /// Owning instance id.
    pub instance_id: Option<String>,
    /// Client platform, e.g. `unknown` or `android`.
    pub source: Option<String>,
}

/// Generic `{status, error, response}` acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OperationStatus {
    /// `SUCCESS` on success.
    pub status: String,
    /// Set by the server when the operation failed.
    pub error: bool,
    /// Detail, usually `{"message": "..."}`.
    pub response: Option<Value>,
}

impl OperationStatus {
    /// `true` when the server flagged an error or sent no status at all.
    pub fn has_error(&self) -> bool {
        self.error || self.status.trim().is_empty()
    }

    /// The `response.message` text, when present.
    pub fn message(&self) -> Option<&str> {
        self.response.as_ref()?.get("message")?.as_str()
    }
}

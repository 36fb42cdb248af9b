//! Bodies of the `chat/*` endpoints: chats, messages lookup, contacts.

use super::common::MessageKey;
use super::timestamp::unix_seconds_opt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `chat/whatsappNumbers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WhatsappNumbersRequest {
    /// Phone numbers to look up.
    pub numbers: Vec<String>,
}

impl WhatsappNumbersRequest {
    /// Looks up the given numbers.
    pub fn new(numbers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            numbers: numbers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Whether one number has a WhatsApp account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WhatsappNumber {
    /// The account exists.
    pub exists: bool,
    /// JID of the account.
    pub jid: String,
    /// The number as queried.
    pub number: String,
    /// Business name, when known.
    pub name: Option<String>,
}

/// Body of `chat/markMessageAsRead`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAsReadRequest {
    /// Messages to mark.
    pub read_messages: Vec<MessageKey>,
}

/// Answer of `chat/markMessageAsRead`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkAsReadResponse {
    /// Server message.
    pub message: String,
    /// `success` when done.
    pub read: String,
}

/// Last message of a chat, used to anchor archive/unread operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMessage {
    /// Key of the message.
    pub key: MessageKey,
}

/// Body of `chat/archiveChat`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveChatRequest {
    /// Most recent message of the chat.
    pub last_message: LastMessage,
    /// Chat JID.
    pub chat: String,
    /// `true` to archive, `false` to unarchive.
    pub archive: bool,
}

/// Answer of `chat/archiveChat`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArchiveChatResponse {
    /// Chat JID.
    pub chat_id: String,
    /// New archive state.
    pub archived: bool,
}

/// Body of `chat/markChatUnread`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkChatUnreadRequest {
    /// Most recent message of the chat.
    pub last_message: LastMessage,
    /// Chat JID.
    pub chat: String,
}

/// Answer of `chat/markChatUnread`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkChatUnreadResponse {
    /// Chat JID.
    pub chat_id: String,
    /// `true` when marked.
    pub marked_chat_unread: bool,
}

/// Body of `chat/deleteMessageForEveryone`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMessageRequest {
    /// Message id.
    pub id: String,
    /// Chat JID.
    pub remote_jid: String,
    /// Whether the connected account sent it.
    pub from_me: bool,
    /// Sender inside a group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
}

/// Body of `chat/getBase64FromMediaMessage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Base64MediaRequest {
    /// The media message.
    pub message: MediaMessageRef,
    /// Transcode video to MP4.
    pub convert_to_mp4: bool,
}

impl Base64MediaRequest {
    /// Fetches the media of message `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            message: MediaMessageRef {
                key: MediaKey { id: id.into() },
            },
            convert_to_mp4: false,
        }
    }
}

/// Reference to a stored media message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaMessageRef {
    /// Key holding the message id.
    pub key: MediaKey,
}

/// Id-only message key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaKey {
    /// Message id.
    pub id: String,
}

/// Answer of `chat/getBase64FromMediaMessage`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Base64MediaResponse {
    /// `imageMessage`, `audioMessage`, ...
    pub media_type: String,
    /// Original file name.
    pub file_name: Option<String>,
    /// Caption.
    pub caption: Option<String>,
    /// Size metadata as sent by the server.
    pub size: Option<Value>,
    /// MIME type.
    pub mimetype: String,
    /// Content.
    pub base64: String,
}

/// Body of `chat/updateMessage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    /// Chat number or JID.
    pub number: String,
    /// Message to edit.
    pub key: MessageKey,
    /// New text.
    pub text: String,
}

/// Body of `chat/sendPresence`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendPresenceRequest {
    /// Chat number or JID.
    pub number: String,
    /// How long to show the presence, in milliseconds.
    pub delay: u32,
    /// `composing`, `recording` or `paused`.
    pub presence: String,
}

/// Body of the `chat/find*` lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindRequest {
    /// Filter, e.g. `{"key": {"remoteJid": "..."}}`.
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    /// 1-based page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl FindRequest {
    /// A lookup restricted by `filter`.
    pub fn filtered(filter: Value) -> Self {
        Self {
            filter: Some(filter),
            ..Self::default()
        }
    }

    /// Requests one page.
    pub fn page(mut self, page: u32, offset: u32) -> Self {
        self.page = Some(page);
        self.offset = Some(offset);
        self
    }
}

/// Answer of `chat/findMessages`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FindMessagesResponse {
    /// The page.
    pub messages: MessagePage,
}

/// One page of stored messages.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessagePage {
    /// Matching messages overall.
    pub total: u64,
    /// Number of pages.
    pub pages: u32,
    /// This page.
    pub current_page: u32,
    /// Messages on this page.
    pub records: Vec<MessageRecord>,
}

/// A stored message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageRecord {
    /// Server-side id.
    pub id: Option<String>,
    /// Message key.
    pub key: MessageKey,
    /// Sender display name.
    pub push_name: Option<String>,
    /// Content type.
    pub message_type: Option<String>,
    /// Content.
    pub message: Option<Value>,
    /// Send time in Unix seconds.
    #[serde(deserialize_with = "unix_seconds_opt")]
    pub message_timestamp: Option<i64>,
    /// Owning instance id.
    pub instance_id: Option<String>,
    /// Client platform.
    pub source: Option<String>,
}

/// Delivery status entry of `chat/findStatusMessage`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageStatusRecord {
    /// Server-side id.
    pub id: Option<String>,
    /// Message id.
    pub key_id: Option<String>,
    /// Chat JID.
    pub remote_jid: Option<String>,
    /// Whether the connected account sent it.
    pub from_me: Option<bool>,
    /// Sender inside a group.
    pub participant: Option<String>,
    /// `DELIVERY_ACK`, `READ`, `PLAYED`, ...
    pub status: Option<String>,
    /// Owning instance id.
    pub instance_id: Option<String>,
}

/// A chat returned by `chat/findChats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatRecord {
    /// Server-side id.
    pub id: Option<String>,
    /// Chat JID.
    pub remote_jid: String,
    /// Display name.
    pub push_name: Option<String>,
    /// Avatar URL.
    pub profile_pic_url: Option<String>,
    /// Unread message count.
    pub unread_count: Option<u32>,
    /// Creation time, ISO-8601.
    pub created_at: Option<String>,
    /// Last update time, ISO-8601.
    pub updated_at: Option<String>,
}

/// A contact returned by `chat/findContacts`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactRecord {
    /// Server-side id.
    pub id: Option<String>,
    /// Contact JID.
    pub remote_jid: String,
    /// Display name.
    pub push_name: Option<String>,
    /// Avatar URL.
    pub profile_pic_url: Option<String>,
    /// Creation time, ISO-8601.
    pub created_at: Option<String>,
    /// Last update time, ISO-8601.
    pub updated_at: Option<String>,
}

/// Body of the number-addressed lookups (`fetchProfilePictureUrl`, `fetchProfile`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NumberRequest {
    /// Number or JID.
    pub number: String,
}

impl NumberRequest {
    /// A lookup for `number`.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }
}

/// Answer of `chat/fetchProfilePictureUrl`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfilePictureResponse {
    /// WhatsApp id.
    pub wuid: String,
    /// Avatar URL; absent when hidden by privacy settings.
    pub profile_picture_url: Option<String>,
}

/// Block or unblock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStatus {
    Block,
    Unblock,
}

/// Body of `chat/updateBlockStatus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockStatusRequest {
    /// Number or JID.
    pub number: String,
    /// New state.
    pub status: BlockStatus,
}

/// Answer of `chat/updateBlockStatus`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BlockStatusResponse {
    /// `true` once applied.
    pub accepted: bool,
}

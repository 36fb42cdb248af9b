//! Bodies of the `message/*` send endpoints.
//!
//! Every request embeds [`SendOptions`] for the fields all send endpoints
//! share (delay, quoted message, mentions).

use super::common::{MessageKey, SendOptions};
use crate::upload::FileUpload;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `message/sendText`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTextRequest {
    /// Recipient number or JID.
    pub number: String,
    /// Message text.
    pub text: String,
    /// Shared send options.
    #[serde(flatten)]
    pub options: SendOptions,
}

impl SendTextRequest {
    /// A plain text message.
    ///
    /// ```
    /// use evolution_client::types::message::SendTextRequest;
    ///
    /// let request = SendTextRequest::new("5511999999999", "hi");
    /// assert_eq!(
    ///     serde_json::to_string(&request).unwrap(),
    ///     r#"{"number":"5511999999999","text":"hi"}"#
    /// );
    /// ```
    pub fn new(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: text.into(),
            options: SendOptions::default(),
        }
    }

    /// Replaces the send options.
    pub fn with_options(mut self, options: SendOptions) -> Self {
        self.options = options;
        self
    }
}

/// Kind of media in [`SendMediaRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Document,
    Audio,
}

impl MediaType {
    /// The wire name, as used in multipart fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Document => "document",
            MediaType::Audio => "audio",
        }
    }
}

/// Body of `message/sendMedia`.
///
/// `media` is either a public URL or base64 content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMediaRequest {
    /// Recipient number or JID.
    pub number: String,
    /// Kind of media.
    pub mediatype: MediaType,
    /// MIME type, required for base64 documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    /// Caption shown under the media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// URL or base64 content.
    pub media: String,
    /// File name shown for documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Shared send options.
    #[serde(flatten)]
    pub options: SendOptions,
}

impl SendMediaRequest {
    /// Media fetched by the server from `url`.
    pub fn from_url(
        number: impl Into<String>,
        mediatype: MediaType,
        url: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            mediatype,
            mimetype: None,
            caption: None,
            media: url.into(),
            file_name: None,
            options: SendOptions::default(),
        }
    }

    /// Media embedded as base64, taking MIME type and file name from `file`.
    pub fn from_file(number: impl Into<String>, mediatype: MediaType, file: &FileUpload) -> Self {
        Self {
            number: number.into(),
            mediatype,
            mimetype: Some(file.mime_type.clone()),
            caption: None,
            media: file.to_base64(),
            file_name: Some(file.file_name.clone()),
            options: SendOptions::default(),
        }
    }

    /// Sets the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Form fields sent with a multipart media upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMediaFileRequest {
    /// Recipient number or JID.
    pub number: String,
    /// Kind of media.
    pub mediatype: MediaType,
    /// Caption shown under the media.
    pub caption: Option<String>,
    /// Typing delay in milliseconds.
    pub delay: Option<u32>,
}

impl SendMediaFileRequest {
    /// Upload fields for `number`.
    pub fn new(number: impl Into<String>, mediatype: MediaType) -> Self {
        Self {
            number: number.into(),
            mediatype,
            caption: None,
            delay: None,
        }
    }
}

/// Body of `message/sendWhatsAppAudio` (voice note).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAudioRequest {
    /// Recipient number or JID.
    pub number: String,
    /// URL or base64 content.
    pub audio: String,
    /// Let the server transcode to Opus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<bool>,
    /// Shared send options.
    #[serde(flatten)]
    pub options: SendOptions,
}

impl SendAudioRequest {
    /// A voice note from a URL or base64 string.
    pub fn new(number: impl Into<String>, audio: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            audio: audio.into(),
            ..Self::default()
        }
    }
}

/// Body of `message/sendSticker`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendStickerRequest {
    /// Recipient number or JID.
    pub number: String,
    /// URL or base64 image.
    pub sticker: String,
    /// Shared send options.
    #[serde(flatten)]
    pub options: SendOptions,
}

impl SendStickerRequest {
    /// A sticker from a URL or base64 string.
    pub fn new(number: impl Into<String>, sticker: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            sticker: sticker.into(),
            options: SendOptions::default(),
        }
    }
}

/// Body of `message/sendLocation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendLocationRequest {
    /// Recipient number or JID.
    pub number: String,
    /// Place name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Shared send options.
    #[serde(flatten)]
    pub options: SendOptions,
}

/// One vCard in [`SendContactRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCard {
    /// Display name.
    pub full_name: String,
    /// WhatsApp id (digits only).
    pub wuid: String,
    /// Formatted phone number.
    pub phone_number: String,
    /// Company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// E-mail address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Web page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Body of `message/sendContact`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendContactRequest {
    /// Recipient number or JID.
    pub number: String,
    /// Cards to share.
    pub contact: Vec<ContactCard>,
    /// Shared send options.
    #[serde(flatten)]
    pub options: SendOptions,
}

/// Body of `message/sendReaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendReactionRequest {
    /// Message reacted to.
    pub key: MessageKey,
    /// Emoji; an empty string removes the reaction.
    pub reaction: String,
}

/// Body of `message/sendPoll`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendPollRequest {
    /// Recipient number or JID.
    pub number: String,
    /// Poll question.
    pub name: String,
    /// How many options a voter may pick.
    pub selectable_count: u32,
    /// Options.
    pub values: Vec<String>,
    /// Shared send options.
    #[serde(flatten)]
    pub options: SendOptions,
}

/// One row in a list section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRow {
    /// Row title.
    pub title: String,
    /// Row subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Id echoed back when the row is picked.
    pub row_id: String,
}

/// A titled group of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSection {
    /// Section title.
    pub title: String,
    /// Rows.
    pub rows: Vec<ListRow>,
}

/// Body of `message/sendList`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendListRequest {
    /// Recipient number or JID.
    pub number: String,
    /// Header.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Label of the button opening the list.
    pub button_text: String,
    /// Footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
    /// Sections.
    pub sections: Vec<ListSection>,
    /// Shared send options.
    #[serde(flatten)]
    pub options: SendOptions,
}

/// One button in [`SendButtonsRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    /// `reply`, `url`, `call`, `copy` or `pix`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Label.
    pub display_text: String,
    /// Reply id for `reply` buttons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Target of `url` buttons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Number dialled by `call` buttons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Text copied by `copy` buttons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_code: Option<String>,
}

impl Button {
    /// A quick-reply button.
    pub fn reply(id: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            kind: "reply".to_string(),
            display_text: display_text.into(),
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

/// Body of `message/sendButtons`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendButtonsRequest {
    /// Recipient number or JID.
    pub number: String,
    /// Header.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Buttons.
    pub buttons: Vec<Button>,
    /// Shared send options.
    #[serde(flatten)]
    pub options: SendOptions,
}

/// Kind of status (story) update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    Text,
    Image,
    Video,
    Audio,
}

/// Body of `message/sendStatus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendStatusRequest {
    /// Kind of status.
    #[serde(rename = "type")]
    pub kind: StatusType,
    /// Text or media URL.
    pub content: String,
    /// Caption for media statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Background colour for text statuses, e.g. `#008000`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Font index for text statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<u8>,
    /// Show to every contact.
    pub all_contacts: bool,
    /// Explicit audience when `all_contacts` is off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_jid_list: Option<Vec<String>>,
}

/// Body of `message/sendTemplate` (Business API instances only).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTemplateRequest {
    /// Recipient number.
    pub number: String,
    /// Approved template name.
    pub name: String,
    /// Template language, e.g. `en_US`.
    pub language: String,
    /// Template components as defined by the Cloud API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Value>,
    /// Shared send options.
    #[serde(flatten)]
    pub options: SendOptions,
}

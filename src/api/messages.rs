//! Sending messages: text, media, audio, stickers, locations, contacts,
//! reactions, polls, lists, buttons, statuses and templates.

use crate::{
    metadata::endpoint,
    transport::HttpTransport,
    types::{
        message::{
            SendAudioRequest, SendButtonsRequest, SendContactRequest, SendListRequest,
            SendLocationRequest, SendMediaFileRequest, SendMediaRequest, SendPollRequest,
            SendReactionRequest, SendStatusRequest, SendStickerRequest, SendTemplateRequest,
            SendTextRequest,
        },
        SendMessageResponse,
    },
    upload::{FileUpload, MultipartUpload},
    validate::{require, require_instance, require_items},
    Response, Result,
};
use serde::Serialize;

/// The `message/*` endpoints. Every call is `POST message/{action}/{instance}`.
///
/// # Examples
///
/// ```no_run
/// use evolution_client::Client;
/// use evolution_client::types::message::SendTextRequest;
///
/// # async fn example() -> Result<(), evolution_client::Error> {
/// let client = Client::builder()
///     .base_url("http://localhost:8080")?
///     .api_key("secret")
///     .build()?;
///
/// let sent = client
///     .messages()
///     .send_text("inst-1", &SendTextRequest::new("5511999999999", "hi"))
///     .await?;
/// println!("sent {}", sent.key.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Messages {
    transport: HttpTransport,
}

impl Messages {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    async fn send<Req>(
        &self,
        action: &str,
        instance_name: &str,
        request: &Req,
    ) -> Result<SendMessageResponse>
    where
        Req: Serialize,
    {
        self.transport
            .post(endpoint(&["message", action, instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// `POST message/sendText/{instance}`
    pub async fn send_text(
        &self,
        instance_name: &str,
        request: &SendTextRequest,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        self.send("sendText", instance_name, request).await
    }

    /// Sends media referenced by URL or embedded as base64. `POST message/sendMedia/{instance}`
    pub async fn send_media(
        &self,
        instance_name: &str,
        request: &SendMediaRequest,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        require("media", &request.media)?;
        self.send("sendMedia", instance_name, request).await
    }

    /// Uploads media as `multipart/form-data`. `POST message/sendMedia/{instance}`
    pub async fn send_media_file(
        &self,
        instance_name: &str,
        request: &SendMediaFileRequest,
        file: FileUpload,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        require("fileName", &file.file_name)?;
        let upload = MultipartUpload::new(file.with_field_name("file"))
            .field("number", request.number.as_str())
            .field("mediatype", request.mediatype.as_str())
            .optional_field("caption", request.caption.as_deref())
            .optional_field("delay", request.delay.map(|d| d.to_string()));
        self.transport
            .send_multipart(endpoint(&["message", "sendMedia", instance_name]), upload)
            .await
            .map(Response::into_data)
    }

    /// Sends a voice note. `POST message/sendWhatsAppAudio/{instance}`
    pub async fn send_audio(
        &self,
        instance_name: &str,
        request: &SendAudioRequest,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        require("audio", &request.audio)?;
        self.send("sendWhatsAppAudio", instance_name, request).await
    }

    /// Uploads a voice note as `multipart/form-data`. `POST message/sendWhatsAppAudio/{instance}`
    pub async fn send_audio_file(
        &self,
        instance_name: &str,
        number: &str,
        file: FileUpload,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("number", number)?;
        let upload = MultipartUpload::new(file.with_field_name("file")).field("number", number);
        self.transport
            .send_multipart(endpoint(&["message", "sendWhatsAppAudio", instance_name]), upload)
            .await
            .map(Response::into_data)
    }

    /// `POST message/sendSticker/{instance}`
    pub async fn send_sticker(
        &self,
        instance_name: &str,
        request: &SendStickerRequest,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        require("sticker", &request.sticker)?;
        self.send("sendSticker", instance_name, request).await
    }

    /// Uploads a sticker image as `multipart/form-data`. `POST message/sendSticker/{instance}`
    pub async fn send_sticker_file(
        &self,
        instance_name: &str,
        number: &str,
        file: FileUpload,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("number", number)?;
        let upload = MultipartUpload::new(file.with_field_name("sticker")).field("number", number);
        self.transport
            .send_multipart(endpoint(&["message", "sendSticker", instance_name]), upload)
            .await
            .map(Response::into_data)
    }

    /// `POST message/sendLocation/{instance}`
    pub async fn send_location(
        &self,
        instance_name: &str,
        request: &SendLocationRequest,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        self.send("sendLocation", instance_name, request).await
    }

    /// `POST message/sendContact/{instance}`
    pub async fn send_contact(
        &self,
        instance_name: &str,
        request: &SendContactRequest,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        require_items("contact", &request.contact)?;
        self.send("sendContact", instance_name, request).await
    }

    /// Reacts to a message; an empty reaction removes it. `POST message/sendReaction/{instance}`
    pub async fn send_reaction(
        &self,
        instance_name: &str,
        request: &SendReactionRequest,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("key.remoteJid", &request.key.remote_jid)?;
        require("key.id", &request.key.id)?;
        self.send("sendReaction", instance_name, request).await
    }

    /// `POST message/sendPoll/{instance}`
    pub async fn send_poll(
        &self,
        instance_name: &str,
        request: &SendPollRequest,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        require_items("values", &request.values)?;
        self.send("sendPoll", instance_name, request).await
    }

    /// `POST message/sendList/{instance}`
    pub async fn send_list(
        &self,
        instance_name: &str,
        request: &SendListRequest,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        require_items("sections", &request.sections)?;
        self.send("sendList", instance_name, request).await
    }

    /// `POST message/sendButtons/{instance}`
    pub async fn send_buttons(
        &self,
        instance_name: &str,
        request: &SendButtonsRequest,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        require_items("buttons", &request.buttons)?;
        self.send("sendButtons", instance_name, request).await
    }

    /// Posts a status (story). `POST message/sendStatus/{instance}`
    pub async fn send_status(
        &self,
        instance_name: &str,
        request: &SendStatusRequest,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("content", &request.content)?;
        self.send("sendStatus", instance_name, request).await
    }

    /// Business API instances only. `POST message/sendTemplate/{instance}`
    pub async fn send_template(
        &self,
        instance_name: &str,
        request: &SendTemplateRequest,
    ) -> Result<SendMessageResponse> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        require("name", &request.name)?;
        self.send("sendTemplate", instance_name, request).await
    }
}

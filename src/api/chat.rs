//! Chat-level operations: number lookup, read marks, archiving, message
//! edits and deletes, presence, and the `find*` queries.

use crate::{
    metadata::endpoint,
    transport::HttpTransport,
    types::chat::{
        ArchiveChatRequest, ArchiveChatResponse, Base64MediaRequest, Base64MediaResponse,
        ChatRecord, DeleteMessageRequest, FindMessagesResponse, FindRequest, MarkAsReadRequest,
        MarkAsReadResponse, MarkChatUnreadRequest, MarkChatUnreadResponse, MessageStatusRecord,
        SendPresenceRequest, UpdateMessageRequest, WhatsappNumber, WhatsappNumbersRequest,
    },
    validate::{require, require_instance, require_items},
    Response, Result,
};
use serde_json::Value;

/// The `chat/*` endpoints that act on conversations and messages.
#[derive(Debug, Clone)]
pub struct Chat {
    transport: HttpTransport,
}

impl Chat {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Checks which numbers have a WhatsApp account. `POST chat/whatsappNumbers/{instance}`
    pub async fn whatsapp_numbers(
        &self,
        instance_name: &str,
        request: &WhatsappNumbersRequest,
    ) -> Result<Vec<WhatsappNumber>> {
        require_instance(instance_name)?;
        require_items("numbers", &request.numbers)?;
        self.transport
            .post(endpoint(&["chat", "whatsappNumbers", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// `POST chat/markMessageAsRead/{instance}`
    pub async fn mark_message_as_read(
        &self,
        instance_name: &str,
        request: &MarkAsReadRequest,
    ) -> Result<MarkAsReadResponse> {
        require_instance(instance_name)?;
        require_items("readMessages", &request.read_messages)?;
        self.transport
            .post(endpoint(&["chat", "markMessageAsRead", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// `POST chat/archiveChat/{instance}`
    pub async fn archive_chat(
        &self,
        instance_name: &str,
        request: &ArchiveChatRequest,
    ) -> Result<ArchiveChatResponse> {
        require_instance(instance_name)?;
        require("chat", &request.chat)?;
        self.transport
            .post(endpoint(&["chat", "archiveChat", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// `POST chat/markChatUnread/{instance}`
    pub async fn mark_chat_unread(
        &self,
        instance_name: &str,
        request: &MarkChatUnreadRequest,
    ) -> Result<MarkChatUnreadResponse> {
        require_instance(instance_name)?;
        require("chat", &request.chat)?;
        self.transport
            .post(endpoint(&["chat", "markChatUnread", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// Revokes a message for all participants.
    /// `DELETE chat/deleteMessageForEveryone/{instance}` with a JSON body.
    pub async fn delete_message_for_everyone(
        &self,
        instance_name: &str,
        request: &DeleteMessageRequest,
    ) -> Result<Value> {
        require_instance(instance_name)?;
        require("id", &request.id)?;
        require("remoteJid", &request.remote_jid)?;
        self.transport
            .delete_with_body(
                endpoint(&["chat", "deleteMessageForEveryone", instance_name]),
                request,
            )
            .await
            .map(Response::into_data)
    }

    /// Downloads the media of a received message as base64.
    /// `POST chat/getBase64FromMediaMessage/{instance}`
    pub async fn get_base64_from_media_message(
        &self,
        instance_name: &str,
        request: &Base64MediaRequest,
    ) -> Result<Base64MediaResponse> {
        require_instance(instance_name)?;
        require("message.key.id", &request.message.key.id)?;
        self.transport
            .post(endpoint(&["chat", "getBase64FromMediaMessage", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// Edits the text of a sent message. `POST chat/updateMessage/{instance}`
    pub async fn update_message(
        &self,
        instance_name: &str,
        request: &UpdateMessageRequest,
    ) -> Result<Value> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        require("text", &request.text)?;
        self.transport
            .post(endpoint(&["chat", "updateMessage", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// Shows typing or recording in one chat. `POST chat/sendPresence/{instance}`
    pub async fn send_presence(
        &self,
        instance_name: &str,
        request: &SendPresenceRequest,
    ) -> Result<Value> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        require("presence", &request.presence)?;
        self.transport
            .post(endpoint(&["chat", "sendPresence", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// `POST chat/findMessages/{instance}`
    pub async fn find_messages(
        &self,
        instance_name: &str,
        request: &FindRequest,
    ) -> Result<FindMessagesResponse> {
        require_instance(instance_name)?;
        self.transport
            .post(endpoint(&["chat", "findMessages", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// Delivery and read receipts. `POST chat/findStatusMessage/{instance}`
    pub async fn find_status_message(
        &self,
        instance_name: &str,
        request: &FindRequest,
    ) -> Result<Vec<MessageStatusRecord>> {
        require_instance(instance_name)?;
        self.transport
            .post(endpoint(&["chat", "findStatusMessage", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// `POST chat/findChats/{instance}`
    pub async fn find_chats(
        &self,
        instance_name: &str,
        request: &FindRequest,
    ) -> Result<Vec<ChatRecord>> {
        require_instance(instance_name)?;
        self.transport
            .post(endpoint(&["chat", "findChats", instance_name]), request)
            .await
            .map(Response::into_data)
    }
}

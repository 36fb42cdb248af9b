//! Chatwoot integration settings.

use serde::{Deserialize, Serialize};

/// Settings of `chatwoot/set`, echoed by `chatwoot/find`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatwootConfig {
    /// Mirror conversations into Chatwoot.
    pub enabled: bool,
    /// Chatwoot account id.
    pub account_id: String,
    /// Chatwoot API access token.
    pub token: String,
    /// Chatwoot server URL.
    pub url: String,
    /// Prefix agent messages with the agent name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_msg: Option<bool>,
    /// Delimiter between signature and text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_delimiter: Option<String>,
    /// Reopen resolved conversations on new messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reopen_conversation: Option<bool>,
    /// Start new conversations as pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_pending: Option<bool>,
    /// Inbox name; defaults to the instance name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_inbox: Option<String>,
    /// Merge Brazilian numbers with and without the ninth digit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_brazil_contacts: Option<bool>,
    /// Import existing contacts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_contacts: Option<bool>,
    /// Import existing messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_messages: Option<bool>,
    /// How many days of history to import.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_limit_import_messages: Option<u32>,
    /// Create the inbox automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_create: Option<bool>,
    /// Organization name of the bot contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Logo URL of the bot contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// JIDs never mirrored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_jids: Option<Vec<String>>,
    /// Webhook Chatwoot should call back; set by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

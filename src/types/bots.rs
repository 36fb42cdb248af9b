//! Chatbot integration bodies: Typebot, OpenAI, Dify, Flowise, Evolution Bot,
//! n8n and EvoAI.
//!
//! All bots share trigger rules ([`TriggerSettings`]) and session behaviour
//! ([`BotBehaviour`]); each config embeds both with `#[serde(flatten)]`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// When a bot takes over a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    All,
    Keyword,
    None,
    Advanced,
}

/// How `trigger_value` is matched against incoming text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerOperator {
    Contains,
    Equals,
    StartsWith,
    EndsWith,
    Regex,
}

/// Trigger rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<TriggerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_operator: Option<TriggerOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_value: Option<String>,
}

impl TriggerSettings {
    /// Start on every message.
    pub fn all() -> Self {
        Self {
            trigger_type: Some(TriggerType::All),
            ..Self::default()
        }
    }

    /// Start when the text matches `value` under `operator`.
    pub fn keyword(operator: TriggerOperator, value: impl Into<String>) -> Self {
        Self {
            trigger_type: Some(TriggerType::Keyword),
            trigger_operator: Some(operator),
            trigger_value: Some(value.into()),
        }
    }
}

/// Session behaviour shared by every bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotBehaviour {
    /// Minutes of inactivity before a session closes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<u32>,
    /// Text that ends the session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_finish: Option<String>,
    /// Typing delay before each reply, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_message: Option<u32>,
    /// Reply when the bot does not understand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_message: Option<String>,
    /// React to messages sent by the account itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listening_from_me: Option<bool>,
    /// Pause the bot when the account sends a message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_bot_from_me: Option<bool>,
    /// Keep the session after the flow ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_open: Option<bool>,
    /// Seconds to batch consecutive messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debounce_time: Option<u32>,
    /// JIDs the bot never answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_jids: Option<Vec<String>>,
    /// Split long replies into several messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_messages: Option<bool>,
    /// Typing delay per character, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_per_char: Option<u32>,
}

/// A Typebot flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypebotConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Typebot viewer URL.
    #[serde(default)]
    pub url: String,
    /// Public flow id.
    #[serde(default)]
    pub typebot: String,
    #[serde(flatten)]
    pub trigger: TriggerSettings,
    #[serde(flatten)]
    pub behaviour: BotBehaviour,
}

/// Kind of OpenAI bot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpenaiBotType {
    #[default]
    Assistant,
    ChatCompletion,
}

/// An OpenAI assistant or chat-completion bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenaiBotConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Id of stored credentials (see `openai/creds`).
    #[serde(default)]
    pub openai_creds_id: String,
    #[serde(default)]
    pub bot_type: OpenaiBotType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,
    /// Endpoint called for assistant function calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_messages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_messages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_messages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(flatten)]
    pub trigger: TriggerSettings,
    #[serde(flatten)]
    pub behaviour: BotBehaviour,
}

/// Kind of Dify app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DifyBotType {
    #[default]
    ChatBot,
    TextGenerator,
    Agent,
    Workflow,
}

/// A Dify app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifyConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub bot_type: DifyBotType,
    #[serde(default)]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(flatten)]
    pub trigger: TriggerSettings,
    #[serde(flatten)]
    pub behaviour: BotBehaviour,
}

/// A Flowise chatflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowiseConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Prediction endpoint of the chatflow.
    #[serde(default)]
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(flatten)]
    pub trigger: TriggerSettings,
    #[serde(flatten)]
    pub behaviour: BotBehaviour,
}

/// A generic HTTP bot speaking the Evolution Bot protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionBotConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(flatten)]
    pub trigger: TriggerSettings,
    #[serde(flatten)]
    pub behaviour: BotBehaviour,
}

/// An n8n workflow behind a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct N8nConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_auth_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_auth_pass: Option<String>,
    #[serde(flatten)]
    pub trigger: TriggerSettings,
    #[serde(flatten)]
    pub behaviour: BotBehaviour,
}

/// An EvoAI agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvoaiConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub agent_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(flatten)]
    pub trigger: TriggerSettings,
    #[serde(flatten)]
    pub behaviour: BotBehaviour,
}

/// A stored bot: its config plus server bookkeeping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotRecord<C> {
    /// Bot id used by `fetch`, `update`, `delete` and `fetchSessions`.
    #[serde(default)]
    pub id: String,
    /// The stored configuration.
    #[serde(flatten)]
    pub config: C,
    /// Owning instance id.
    #[serde(default)]
    pub instance_id: Option<String>,
    /// ISO-8601.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO-8601.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Defaults applied to every bot of one kind on an instance.
///
/// `fallback_id` is sent under the kind-specific key (`typebotIdFallback`,
/// `openaiIdFallback`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotDefaultSettings {
    /// Bot used when no trigger matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_id: Option<String>,
    /// OpenAI only: credentials used for audio transcription.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_creds_id: Option<String>,
    /// OpenAI only: transcribe voice notes before handing them to bots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_to_text: Option<bool>,
    #[serde(flatten)]
    pub behaviour: BotBehaviour,
}

/// Bot session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Opened,
    Paused,
    Closed,
    Delete,
}

/// Body of `{bot}/changeStatus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusRequest {
    /// Conversation JID.
    pub remote_jid: String,
    /// New state.
    pub status: SessionStatus,
}

/// A conversation handled by a bot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BotSession {
    pub id: String,
    /// Id on the bot backend.
    pub session_id: Option<String>,
    pub remote_jid: String,
    pub push_name: Option<String>,
    /// `opened`, `paused` or `closed`.
    pub status: Option<String>,
    /// Waiting for the user's answer.
    pub await_user: bool,
    pub bot_id: Option<String>,
    /// Backend-specific context.
    pub context: Option<Value>,
    /// ISO-8601.
    pub created_at: Option<String>,
    /// ISO-8601.
    pub updated_at: Option<String>,
}

/// Add or remove a JID from a bot's ignore list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IgnoreAction {
    Add,
    Remove,
}

/// Body of `{bot}/ignoreJid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnoreJidRequest {
    pub remote_jid: String,
    pub action: IgnoreAction,
}

/// A prefilled Typebot variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypebotVariable {
    pub name: String,
    pub value: String,
}

/// Body of `typebot/start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypebotStartRequest {
    /// Typebot viewer URL.
    pub url: String,
    /// Public flow id.
    pub typebot: String,
    /// Conversation to start the flow in.
    pub remote_jid: String,
    /// Start a new session even if one is open.
    pub start_session: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<TypebotVariable>,
}

/// Body of `openai/creds`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenaiCredsRequest {
    /// Label.
    pub name: String,
    /// OpenAI API key.
    pub api_key: String,
}

/// Stored OpenAI credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenaiCreds {
    pub id: String,
    pub name: Option<String>,
    pub api_key: Option<String>,
    /// ISO-8601.
    pub created_at: Option<String>,
    /// ISO-8601.
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_flattens_trigger_and_behaviour() {
        let config = TypebotConfig {
            enabled: true,
            url: "https://bot.example.com".to_string(),
            typebot: "welcome".to_string(),
            trigger: TriggerSettings::keyword(TriggerOperator::StartsWith, "hi"),
            behaviour: BotBehaviour {
                expire: Some(20),
                keyword_finish: Some("#exit".to_string()),
                ..BotBehaviour::default()
            },
            ..TypebotConfig::default()
        };

        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            serde_json::json!({
                "enabled": true,
                "url": "https://bot.example.com",
                "typebot": "welcome",
                "triggerType": "keyword",
                "triggerOperator": "startsWith",
                "triggerValue": "hi",
                "expire": 20,
                "keywordFinish": "#exit"
            })
        );
    }

    #[test]
    fn record_reads_config_and_bookkeeping() {
        let record: BotRecord<DifyConfig> = serde_json::from_str(
            r#"{"id":"clx1","enabled":true,"botType":"agent","apiUrl":"https://dify.example.com/v1",
                "apiKey":"app-1","triggerType":"all","expire":0,"instanceId":"i-1",
                "createdAt":"2024-05-03T10:00:00.000Z"}"#,
        )
        .unwrap();

        assert_eq!(record.id, "clx1");
        assert_eq!(record.config.bot_type, DifyBotType::Agent);
        assert_eq!(record.config.trigger.trigger_type, Some(TriggerType::All));
        assert_eq!(record.config.behaviour.expire, Some(0));
        assert_eq!(record.created_at.as_deref(), Some("2024-05-03T10:00:00.000Z"));
    }
}

//! Per-instance behaviour settings.

use serde::{Deserialize, Serialize};

/// Behaviour switches for one instance.
///
/// Sent to `settings/set` and embedded in instance creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstanceSettings {
    /// Reject incoming calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_call: Option<bool>,
    /// Text sent to a rejected caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg_call: Option<String>,
    /// Drop group messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups_ignore: Option<bool>,
    /// Keep presence `available`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_online: Option<bool>,
    /// Send read receipts for incoming messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_messages: Option<bool>,
    /// Mark status updates as seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_status: Option<bool>,
    /// Import the full history on first connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_full_history: Option<bool>,
}

/// Body of a `settings/set` answer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsResponse {
    /// The stored settings.
    pub settings: StoredSettings,
}

/// Settings as echoed back by the server.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredSettings {
    /// Owning instance.
    pub instance_name: Option<String>,
    /// The values now in effect.
    pub settings: InstanceSettings,
}

//! Instance lifecycle bodies.

use super::events::WebhookConfig;
use super::settings::InstanceSettings;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Connector backing an instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Integration {
    /// WhatsApp Web through Baileys.
    #[default]
    #[serde(rename = "WHATSAPP-BAILEYS")]
    Baileys,
    /// The official WhatsApp Business Cloud API.
    #[serde(rename = "WHATSAPP-BUSINESS")]
    Business,
    /// Evolution's own channel.
    #[serde(rename = "EVOLUTION")]
    Evolution,
}

/// Body of `instance/create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceRequest {
    /// Caller-chosen instance name.
    pub instance_name: String,
    /// Instance API key; generated by the server when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Phone number to pair with a code instead of a QR code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Return a QR code right away.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qrcode: Option<bool>,
    /// Connector to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<Integration>,
    /// Behaviour settings applied at creation.
    #[serde(flatten)]
    pub settings: InstanceSettings,
    /// Webhook registered at creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<WebhookConfig>,
}

impl CreateInstanceRequest {
    /// A Baileys instance that returns a QR code.
    pub fn new(instance_name: impl Into<String>) -> Self {
        Self {
            instance_name: instance_name.into(),
            qrcode: Some(true),
            integration: Some(Integration::Baileys),
            ..Self::default()
        }
    }
}

/// Answer of `instance/create`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateInstanceResponse {
    /// The created instance.
    pub instance: InstanceInfo,
    /// The instance API key, either a string or `{"apikey": ..}`.
    pub hash: Option<Value>,
    /// Webhook as stored.
    pub webhook: Option<Value>,
    /// Settings as stored.
    pub settings: Option<InstanceSettings>,
    /// QR code, when requested.
    pub qrcode: Option<QrCode>,
}

impl CreateInstanceResponse {
    /// The instance API key regardless of which `hash` shape the server used.
    pub fn api_key(&self) -> Option<&str> {
        match self.hash.as_ref()? {
            Value::String(key) => Some(key),
            other => other.get("apikey")?.as_str(),
        }
    }
}

/// Summary of an instance.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstanceInfo {
    /// Name of the instance.
    pub instance_name: String,
    /// Server-side id.
    pub instance_id: Option<String>,
    /// Connector in use.
    pub integration: Option<String>,
    /// Connection status, e.g. `open`, `close`, `connecting`.
    pub status: Option<String>,
}

/// One entry of `instance/fetchInstances`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchedInstance {
    /// Server-side id.
    pub id: Option<String>,
    /// Instance name.
    pub name: String,
    /// `open`, `close` or `connecting`.
    pub connection_status: Option<String>,
    /// JID of the paired account.
    pub owner_jid: Option<String>,
    /// Display name of the paired account.
    pub profile_name: Option<String>,
    /// Avatar URL of the paired account.
    pub profile_pic_url: Option<String>,
    /// Connector in use.
    pub integration: Option<String>,
    /// Paired phone number.
    pub number: Option<String>,
    /// Instance API key.
    pub token: Option<String>,
    /// Creation time, ISO-8601.
    pub created_at: Option<String>,
    /// Last update time, ISO-8601.
    pub updated_at: Option<String>,
}

/// QR or pairing code for connecting an instance.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QrCode {
    /// Code to type on the phone when pairing by number.
    pub pairing_code: Option<String>,
    /// Raw QR payload.
    pub code: Option<String>,
    /// QR image as a data URI.
    pub base64: Option<String>,
    /// How many codes were issued so far.
    pub count: Option<u32>,
}

/// Answer of `instance/connectionState`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConnectionStateResponse {
    /// The state.
    pub instance: ConnectionState,
}

/// Connection state of one instance.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectionState {
    /// Instance name.
    pub instance_name: String,
    /// `open`, `close` or `connecting`.
    pub state: String,
}

impl ConnectionState {
    /// `true` once the session is paired and online.
    pub fn is_open(&self) -> bool {
        self.state == "open"
    }
}

/// Answer of `instance/restart`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RestartResponse {
    /// State after the restart.
    pub instance: ConnectionState,
}

/// Body of `instance/setPresence` and `chat/sendPresence`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPresenceRequest {
    /// `available`, `unavailable`, `composing`, `recording` or `paused`.
    pub presence: String,
}

impl SetPresenceRequest {
    /// Creates a request for `presence`.
    pub fn new(presence: impl Into<String>) -> Self {
        Self {
            presence: presence.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_flattens_settings() {
        let mut request = CreateInstanceRequest::new("inst-1");
        request.settings.reject_call = Some(true);
        request.settings.msg_call = Some("busy".to_string());

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "instanceName": "inst-1",
                "qrcode": true,
                "integration": "WHATSAPP-BAILEYS",
                "rejectCall": true,
                "msgCall": "busy"
            })
        );
    }

    #[test]
    fn api_key_accepts_both_hash_shapes() {
        let plain: CreateInstanceResponse =
            serde_json::from_str(r#"{"instance":{"instanceName":"a"},"hash":"K1"}"#).unwrap();
        assert_eq!(plain.api_key(), Some("K1"));

        let nested: CreateInstanceResponse =
            serde_json::from_str(r#"{"instance":{"instanceName":"a"},"hash":{"apikey":"K2"}}"#)
                .unwrap();
        assert_eq!(nested.api_key(), Some("K2"));
    }
}

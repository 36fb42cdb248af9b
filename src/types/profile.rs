//! Profile and privacy bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Answer of `chat/fetchBusinessProfile`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessProfile {
    /// WhatsApp id.
    pub wuid: Option<String>,
    /// Business description.
    pub description: Option<String>,
    /// Web sites.
    pub website: Vec<String>,
    /// Business category.
    pub category: Option<String>,
    /// Contact e-mail.
    pub email: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Opening hours as sent by the server.
    pub business_hours: Option<Value>,
}

/// Answer of `chat/fetchProfile`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    /// WhatsApp id.
    pub wuid: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Queried number.
    pub number_exists: Option<bool>,
    /// Avatar URL.
    pub picture: Option<String>,
    /// About text.
    pub status: Option<ProfileStatus>,
    /// Business account.
    pub is_business: Option<bool>,
    /// Business description.
    pub description: Option<String>,
    /// Business category.
    pub category: Option<String>,
    /// Web site.
    pub website: Option<Value>,
}

/// About text and when it was set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileStatus {
    /// The text.
    pub status: Option<String>,
    /// When it was set, ISO-8601.
    pub set_at: Option<String>,
}

/// Body of `chat/updateProfileName`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateProfileNameRequest {
    /// New display name.
    pub name: String,
}

/// Body of `chat/updateProfileStatus`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateProfileStatusRequest {
    /// New about text.
    pub status: String,
}

/// Body of `chat/updateProfilePicture`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateProfilePictureRequest {
    /// Image URL or base64.
    pub picture: String,
}

/// Who may see or do something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    All,
    Contacts,
    ContactBlacklist,
    MatchLastSeen,
    None,
}

/// Privacy settings, as read and written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacySettings {
    /// `all` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readreceipts: Option<Visibility>,
    /// Avatar visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Visibility>,
    /// Status visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Visibility>,
    /// Online visibility: `all` or `match_last_seen`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online: Option<Visibility>,
    /// Last-seen visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<Visibility>,
    /// Who may add the account to groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupadd: Option<Visibility>,
}

/// Answer of `chat/updatePrivacySettings`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdatePrivacyResponse {
    /// `success` when applied.
    pub update: String,
    /// Settings now in effect.
    pub data: PrivacySettings,
}

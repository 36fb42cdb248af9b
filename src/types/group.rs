//! Bodies of the `group/*` endpoints.

use super::timestamp::unix_seconds_opt;
use serde::{Deserialize, Serialize};

/// Body of `group/create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    /// Group name.
    pub subject: String,
    /// Group description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Initial members (numbers).
    pub participants: Vec<String>,
}

/// Group metadata as returned by `create`, `findGroupInfos` and `fetchAllGroups`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupInfo {
    /// Group JID (`...@g.us`).
    pub id: String,
    /// Group name.
    pub subject: String,
    /// Who last changed the name.
    pub subject_owner: Option<String>,
    /// When the name last changed, Unix seconds.
    #[serde(deserialize_with = "unix_seconds_opt")]
    pub subject_time: Option<i64>,
    /// Avatar URL.
    pub picture_url: Option<String>,
    /// Member count.
    pub size: Option<u32>,
    /// Creation time, Unix seconds.
    #[serde(deserialize_with = "unix_seconds_opt")]
    pub creation: Option<i64>,
    /// Creator JID.
    pub owner: Option<String>,
    /// Description.
    pub desc: Option<String>,
    /// Description revision id.
    pub desc_id: Option<String>,
    /// Only admins may edit group info.
    pub restrict: Option<bool>,
    /// Only admins may send messages.
    pub announce: Option<bool>,
    /// Members, when requested.
    pub participants: Vec<GroupParticipant>,
}

/// A group member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GroupParticipant {
    /// Member JID.
    pub id: String,
    /// `admin`, `superadmin` or absent.
    pub admin: Option<String>,
}

impl GroupParticipant {
    /// `true` for admins and the super admin.
    pub fn is_admin(&self) -> bool {
        self.admin.is_some()
    }
}

/// Answer of `group/participants`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParticipantsResponse {
    /// Members.
    pub participants: Vec<GroupParticipant>,
}

/// Body of `group/updateGroupPicture`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateGroupPictureRequest {
    /// Image URL or base64.
    pub image: String,
}

/// Body of `group/updateGroupSubject`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateGroupSubjectRequest {
    /// New name.
    pub subject: String,
}

/// Body of `group/updateGroupDescription`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateGroupDescriptionRequest {
    /// New description.
    pub description: String,
}

/// `{"update": "success"}` style acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateResponse {
    /// `success` when applied.
    pub update: String,
}

impl UpdateResponse {
    /// `true` when the server reported success.
    pub fn is_success(&self) -> bool {
        self.update.eq_ignore_ascii_case("success")
    }
}

/// Answer of `group/inviteCode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InviteCodeResponse {
    /// Full invite link.
    pub invite_url: String,
    /// Code part of the link.
    pub invite_code: String,
}

/// Answer of `group/revokeInviteCode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RevokeInviteCodeResponse {
    /// `true` once revoked.
    pub revoked: bool,
    /// The new code.
    pub code: String,
}

/// Body of `group/sendInvite`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInviteRequest {
    /// Group JID.
    pub group_jid: String,
    /// Text sent with the link.
    pub description: String,
    /// Recipients.
    pub numbers: Vec<String>,
}

/// Answer of `group/sendInvite`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SendInviteResponse {
    /// `true` once sent.
    pub send: bool,
    /// The link that was sent.
    pub invite_url: String,
}

/// Answer of `group/acceptInviteCode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AcceptInviteResponse {
    /// `true` once joined.
    pub accepted: bool,
    /// JID of the joined group.
    pub group_jid: Option<String>,
}

/// Membership change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantAction {
    Add,
    Remove,
    Promote,
    Demote,
}

/// Body of `group/updateParticipant`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateParticipantRequest {
    /// What to do.
    pub action: ParticipantAction,
    /// Affected numbers.
    pub participants: Vec<String>,
}

/// Answer of `group/updateParticipant`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateParticipantResponse {
    /// Per-member outcome.
    pub update_participants: Vec<ParticipantUpdate>,
}

/// Outcome for one member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParticipantUpdate {
    /// HTTP-like status, `200` on success.
    pub status: String,
    /// Member JID.
    pub jid: String,
}

/// Group-wide permission switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupSetting {
    /// Only admins send messages.
    Announcement,
    /// Everyone sends messages.
    NotAnnouncement,
    /// Only admins edit group info.
    Locked,
    /// Everyone edits group info.
    Unlocked,
}

/// Body of `group/updateSetting`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateSettingRequest {
    /// Setting to apply.
    pub action: GroupSetting,
}

/// Body of `group/toggleEphemeral`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToggleEphemeralRequest {
    /// Lifetime in seconds: 0 (off), 86400, 604800 or 7776000.
    pub expiration: u32,
}

/// Answer of `group/toggleEphemeral`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleEphemeralResponse {
    /// `true` once applied.
    pub success: bool,
}

/// Answer of `group/leaveGroup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeaveGroupResponse {
    /// Group left.
    pub group_jid: String,
    /// `true` once left.
    pub leave: bool,
}

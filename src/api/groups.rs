//! Group management. Operations on an existing group address it with a
//! `groupJid` query parameter.

use crate::{
    metadata::{endpoint, RequestMetadata},
    transport::HttpTransport,
    types::group::{
        AcceptInviteResponse, CreateGroupRequest, GroupInfo, InviteCodeResponse,
        LeaveGroupResponse, ParticipantsResponse, RevokeInviteCodeResponse, SendInviteRequest,
        SendInviteResponse, ToggleEphemeralRequest, ToggleEphemeralResponse,
        UpdateGroupDescriptionRequest, UpdateGroupPictureRequest, UpdateGroupSubjectRequest,
        UpdateParticipantRequest, UpdateParticipantResponse, UpdateResponse, UpdateSettingRequest,
    },
    validate::{require, require_instance, require_items},
    Response, Result,
};
use http::Method;
use serde::{de::DeserializeOwned, Serialize};

/// The `group/*` endpoints.
///
/// # Examples
///
/// ```no_run
/// use evolution_client::Client;
///
/// # async fn example() -> Result<(), evolution_client::Error> {
/// let client = Client::builder().base_url("http://localhost:8080")?.api_key("secret").build()?;
///
/// for group in client.groups().fetch_all_groups("inst-1", true).await? {
///     println!("{} ({} members)", group.subject, group.participants.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Groups {
    transport: HttpTransport,
}

impl Groups {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    fn scoped(
        method: Method,
        action: &str,
        instance_name: &str,
        group_jid: &str,
    ) -> Result<RequestMetadata> {
        require_instance(instance_name)?;
        require("groupJid", group_jid)?;
        Ok(RequestMetadata::new(method, endpoint(&["group", action, instance_name]))
            .with_query_param("groupJid", group_jid))
    }

    async fn send<Req, Res>(&self, metadata: RequestMetadata, body: Option<&Req>) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        self.transport.call(metadata, body).await.map(Response::into_data)
    }

    /// `POST group/create/{instance}`
    pub async fn create(
        &self,
        instance_name: &str,
        request: &CreateGroupRequest,
    ) -> Result<GroupInfo> {
        require_instance(instance_name)?;
        require("subject", &request.subject)?;
        require_items("participants", &request.participants)?;
        self.transport
            .post(endpoint(&["group", "create", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// `POST group/updateGroupPicture/{instance}?groupJid=`
    pub async fn update_group_picture(
        &self,
        instance_name: &str,
        group_jid: &str,
        request: &UpdateGroupPictureRequest,
    ) -> Result<UpdateResponse> {
        require("image", &request.image)?;
        let metadata = Self::scoped(Method::POST, "updateGroupPicture", instance_name, group_jid)?;
        self.send(metadata, Some(request)).await
    }

    /// `POST group/updateGroupSubject/{instance}?groupJid=`
    pub async fn update_group_subject(
        &self,
        instance_name: &str,
        group_jid: &str,
        request: &UpdateGroupSubjectRequest,
    ) -> Result<UpdateResponse> {
        require("subject", &request.subject)?;
        let metadata = Self::scoped(Method::POST, "updateGroupSubject", instance_name, group_jid)?;
        self.send(metadata, Some(request)).await
    }

    /// `POST group/updateGroupDescription/{instance}?groupJid=`
    pub async fn update_group_description(
        &self,
        instance_name: &str,
        group_jid: &str,
        request: &UpdateGroupDescriptionRequest,
    ) -> Result<UpdateResponse> {
        let metadata =
            Self::scoped(Method::POST, "updateGroupDescription", instance_name, group_jid)?;
        self.send(metadata, Some(request)).await
    }

    /// `GET group/inviteCode/{instance}?groupJid=`
    pub async fn invite_code(
        &self,
        instance_name: &str,
        group_jid: &str,
    ) -> Result<InviteCodeResponse> {
        let metadata = Self::scoped(Method::GET, "inviteCode", instance_name, group_jid)?;
        self.send::<(), _>(metadata, None).await
    }

    /// Invalidates the current invite link. `POST group/revokeInviteCode/{instance}?groupJid=`
    pub async fn revoke_invite_code(
        &self,
        instance_name: &str,
        group_jid: &str,
    ) -> Result<RevokeInviteCodeResponse> {
        let metadata = Self::scoped(Method::POST, "revokeInviteCode", instance_name, group_jid)?;
        self.send::<(), _>(metadata, None).await
    }

    /// Sends the invite link to `numbers`. `POST group/sendInvite/{instance}`
    pub async fn send_invite(
        &self,
        instance_name: &str,
        request: &SendInviteRequest,
    ) -> Result<SendInviteResponse> {
        require_instance(instance_name)?;
        require("groupJid", &request.group_jid)?;
        require_items("numbers", &request.numbers)?;
        self.transport
            .post(endpoint(&["group", "sendInvite", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// Describes the group behind an invite code. `GET group/inviteInfo/{instance}?inviteCode=`
    pub async fn invite_info(&self, instance_name: &str, invite_code: &str) -> Result<GroupInfo> {
        require_instance(instance_name)?;
        require("inviteCode", invite_code)?;
        let metadata =
            RequestMetadata::new(Method::GET, endpoint(&["group", "inviteInfo", instance_name]))
                .with_query_param("inviteCode", invite_code);
        self.send::<(), _>(metadata, None).await
    }

    /// `GET group/acceptInviteCode/{instance}?inviteCode=`
    pub async fn accept_invite_code(
        &self,
        instance_name: &str,
        invite_code: &str,
    ) -> Result<AcceptInviteResponse> {
        require_instance(instance_name)?;
        require("inviteCode", invite_code)?;
        let path = endpoint(&["group", "acceptInviteCode", instance_name]);
        let metadata =
            RequestMetadata::new(Method::GET, path).with_query_param("inviteCode", invite_code);
        self.send::<(), _>(metadata, None).await
    }

    /// `GET group/findGroupInfos/{instance}?groupJid=`
    pub async fn find_group_infos(
        &self,
        instance_name: &str,
        group_jid: &str,
    ) -> Result<GroupInfo> {
        let metadata = Self::scoped(Method::GET, "findGroupInfos", instance_name, group_jid)?;
        self.send::<(), _>(metadata, None).await
    }

    /// Lists every group the account is in.
    /// `GET group/fetchAllGroups/{instance}?getParticipants=true|false`
    pub async fn fetch_all_groups(
        &self,
        instance_name: &str,
        get_participants: bool,
    ) -> Result<Vec<GroupInfo>> {
        require_instance(instance_name)?;
        let metadata =
            RequestMetadata::new(Method::GET, endpoint(&["group", "fetchAllGroups", instance_name]))
                .with_query_param("getParticipants", get_participants.to_string());
        self.send::<(), _>(metadata, None).await
    }

    /// `GET group/participants/{instance}?groupJid=`
    pub async fn participants(
        &self,
        instance_name: &str,
        group_jid: &str,
    ) -> Result<ParticipantsResponse> {
        let metadata = Self::scoped(Method::GET, "participants", instance_name, group_jid)?;
        self.send::<(), _>(metadata, None).await
    }

    /// Adds, removes, promotes or demotes members.
    /// `POST group/updateParticipant/{instance}?groupJid=`
    pub async fn update_participant(
        &self,
        instance_name: &str,
        group_jid: &str,
        request: &UpdateParticipantRequest,
    ) -> Result<UpdateParticipantResponse> {
        require_items("participants", &request.participants)?;
        let metadata = Self::scoped(Method::POST, "updateParticipant", instance_name, group_jid)?;
        self.send(metadata, Some(request)).await
    }

    /// `POST group/updateSetting/{instance}?groupJid=`
    pub async fn update_setting(
        &self,
        instance_name: &str,
        group_jid: &str,
        request: &UpdateSettingRequest,
    ) -> Result<UpdateResponse> {
        let metadata = Self::scoped(Method::POST, "updateSetting", instance_name, group_jid)?;
        self.send(metadata, Some(request)).await
    }

    /// Turns disappearing messages on or off.
    /// `POST group/toggleEphemeral/{instance}?groupJid=`
    pub async fn toggle_ephemeral(
        &self,
        instance_name: &str,
        group_jid: &str,
        request: &ToggleEphemeralRequest,
    ) -> Result<ToggleEphemeralResponse> {
        let metadata = Self::scoped(Method::POST, "toggleEphemeral", instance_name, group_jid)?;
        self.send(metadata, Some(request)).await
    }

    /// `DELETE group/leaveGroup/{instance}?groupJid=`
    pub async fn leave_group(
        &self,
        instance_name: &str,
        group_jid: &str,
    ) -> Result<LeaveGroupResponse> {
        let metadata = Self::scoped(Method::DELETE, "leaveGroup", instance_name, group_jid)?;
        self.send::<(), _>(metadata, None).await
    }
}

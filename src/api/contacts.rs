use crate::{
    metadata::endpoint,
    transport::HttpTransport,
    types::chat::{
        BlockStatusRequest, BlockStatusResponse, ContactRecord, FindRequest, NumberRequest,
        ProfilePictureResponse,
    },
    validate::{require, require_instance},
    Response, Result,
};

/// Contact lookups under `chat/*`.
#[derive(Debug, Clone)]
pub struct Contacts {
    transport: HttpTransport,
}

impl Contacts {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// `POST chat/findContacts/{instance}`
    pub async fn find_contacts(
        &self,
        instance_name: &str,
        request: &FindRequest,
    ) -> Result<Vec<ContactRecord>> {
        require_instance(instance_name)?;
        self.transport
            .post(endpoint(&["chat", "findContacts", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// `POST chat/fetchProfilePictureUrl/{instance}`
    pub async fn fetch_profile_picture_url(
        &self,
        instance_name: &str,
        request: &NumberRequest,
    ) -> Result<ProfilePictureResponse> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        self.transport
            .post(endpoint(&["chat", "fetchProfilePictureUrl", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// Blocks or unblocks a number. `POST chat/updateBlockStatus/{instance}`
    pub async fn update_block_status(
        &self,
        instance_name: &str,
        request: &BlockStatusRequest,
    ) -> Result<BlockStatusResponse> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        self.transport
            .post(endpoint(&["chat", "updateBlockStatus", instance_name]), request)
            .await
            .map(Response::into_data)
    }
}

//! The connected account's own profile and privacy settings.

use crate::{
    metadata::endpoint,
    transport::HttpTransport,
    types::{
        chat::NumberRequest,
        profile::{
            BusinessProfile, PrivacySettings, Profile as ProfileInfo, UpdatePrivacyResponse,
            UpdateProfileNameRequest, UpdateProfilePictureRequest, UpdateProfileStatusRequest,
        },
    },
    validate::{require, require_instance},
    Response, Result,
};
use serde_json::Value;

/// Profile endpoints. They live under `chat/*` on the server.
#[derive(Debug, Clone)]
pub struct Profile {
    transport: HttpTransport,
}

impl Profile {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// `POST chat/fetchBusinessProfile/{instance}`
    pub async fn fetch_business_profile(
        &self,
        instance_name: &str,
        request: &NumberRequest,
    ) -> Result<BusinessProfile> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        self.transport
            .post(endpoint(&["chat", "fetchBusinessProfile", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// `POST chat/fetchProfile/{instance}`
    pub async fn fetch_profile(
        &self,
        instance_name: &str,
        request: &NumberRequest,
    ) -> Result<ProfileInfo> {
        require_instance(instance_name)?;
        require("number", &request.number)?;
        self.transport
            .post(endpoint(&["chat", "fetchProfile", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// `POST chat/updateProfileName/{instance}`
    pub async fn update_profile_name(
        &self,
        instance_name: &str,
        request: &UpdateProfileNameRequest,
    ) -> Result<Value> {
        require_instance(instance_name)?;
        require("name", &request.name)?;
        self.transport
            .post(endpoint(&["chat", "updateProfileName", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// `POST chat/updateProfileStatus/{instance}`
    pub async fn update_profile_status(
        &self,
        instance_name: &str,
        request: &UpdateProfileStatusRequest,
    ) -> Result<Value> {
        require_instance(instance_name)?;
        self.transport
            .post(endpoint(&["chat", "updateProfileStatus", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// `picture` is a URL or base64 image. `POST chat/updateProfilePicture/{instance}`
    pub async fn update_profile_picture(
        &self,
        instance_name: &str,
        request: &UpdateProfilePictureRequest,
    ) -> Result<Value> {
        require_instance(instance_name)?;
        require("picture", &request.picture)?;
        self.transport
            .post(endpoint(&["chat", "updateProfilePicture", instance_name]), request)
            .await
            .map(Response::into_data)
    }

    /// `DELETE chat/removeProfilePicture/{instance}`
    pub async fn remove_profile_picture(&self, instance_name: &str) -> Result<Value> {
        require_instance(instance_name)?;
        self.transport
            .delete(endpoint(&["chat", "removeProfilePicture", instance_name]))
            .await
            .map(Response::into_data)
    }

    /// `GET chat/fetchPrivacySettings/{instance}`
    pub async fn fetch_privacy_settings(&self, instance_name: &str) -> Result<PrivacySettings> {
        require_instance(instance_name)?;
        self.transport
            .get(endpoint(&["chat", "fetchPrivacySettings", instance_name]))
            .await
            .map(Response::into_data)
    }

    /// Only the `Some` fields are changed. `POST chat/updatePrivacySettings/{instance}`
    pub async fn update_privacy_settings(
        &self,
        instance_name: &str,
        request: &PrivacySettings,
    ) -> Result<UpdatePrivacyResponse> {
        require_instance(instance_name)?;
        self.transport
            .post(endpoint(&["chat", "updatePrivacySettings", instance_name]), request)
            .await
            .map(Response::into_data)
    }
}

use crate::{
    metadata::endpoint,
    transport::HttpTransport,
    types::settings::{InstanceSettings, SettingsResponse},
    validate::require_instance,
    Response, Result,
};

/// Per-instance behaviour switches (`settings/*`).
#[derive(Debug, Clone)]
pub struct Settings {
    transport: HttpTransport,
}

impl Settings {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// `POST settings/set/{instance}`
    pub async fn set(
        &self,
        instance_name: &str,
        settings: &InstanceSettings,
    ) -> Result<SettingsResponse> {
        require_instance(instance_name)?;
        self.transport
            .post(endpoint(&["settings", "set", instance_name]), settings)
            .await
            .map(Response::into_data)
    }

    /// `GET settings/find/{instance}`
    pub async fn find(&self, instance_name: &str) -> Result<InstanceSettings> {
        require_instance(instance_name)?;
        self.transport
            .get(endpoint(&["settings", "find", instance_name]))
            .await
            .map(Response::into_data)
    }
}

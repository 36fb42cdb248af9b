use crate::{
    metadata::endpoint,
    transport::HttpTransport,
    types::chatwoot::ChatwootConfig,
    validate::{require, require_instance},
    Response, Result,
};

/// Chatwoot mirroring (`chatwoot/*`). Unlike the event sinks the body is sent flat.
#[derive(Debug, Clone)]
pub struct Chatwoot {
    transport: HttpTransport,
}

impl Chatwoot {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// `POST chatwoot/set/{instance}`
    pub async fn set(
        &self,
        instance_name: &str,
        config: &ChatwootConfig,
    ) -> Result<ChatwootConfig> {
        require_instance(instance_name)?;
        if config.enabled {
            require("accountId", &config.account_id)?;
            require("token", &config.token)?;
            require("url", &config.url)?;
        }
        self.transport
            .post(endpoint(&["chatwoot", "set", instance_name]), config)
            .await
            .map(Response::into_data)
    }

    /// `None` when Chatwoot was never configured. `GET chatwoot/find/{instance}`
    pub async fn find(&self, instance_name: &str) -> Result<Option<ChatwootConfig>> {
        require_instance(instance_name)?;
        self.transport
            .get(endpoint(&["chatwoot", "find", instance_name]))
            .await
            .map(Response::into_data)
    }
}

//! Instance lifecycle: create, connect, inspect, restart, log out, delete.

use crate::{
    metadata::{endpoint, RequestMetadata},
    transport::HttpTransport,
    types::{
        instance::{
            ConnectionStateResponse, CreateInstanceRequest, CreateInstanceResponse,
            FetchedInstance, QrCode, RestartResponse, SetPresenceRequest,
        },
        OperationStatus,
    },
    validate::{require, require_instance},
    Response, Result,
};
use http::Method;
use serde_json::Value;

/// The `instance/*` endpoints.
#[derive(Debug, Clone)]
pub struct Instances {
    transport: HttpTransport,
}

impl Instances {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Creates an instance. `POST instance/create`
    pub async fn create(&self, request: &CreateInstanceRequest) -> Result<CreateInstanceResponse> {
        require_instance(&request.instance_name)?;
        self.transport
            .post("instance/create", request)
            .await
            .map(Response::into_data)
    }

    /// Lists instances, optionally only the one named `instance_name`.
    /// `GET instance/fetchInstances[?instanceName=]`
    pub async fn fetch_instances(
        &self,
        instance_name: Option<&str>,
    ) -> Result<Vec<FetchedInstance>> {
        let metadata = RequestMetadata::new(Method::GET, "instance/fetchInstances")
            .with_optional_query_param("instanceName", instance_name);
        self.transport
            .call::<(), _>(metadata, None)
            .await
            .map(Response::into_data)
    }

    /// Starts pairing and returns a QR or pairing code.
    /// `GET instance/connect/{instance}[?number=]`
    ///
    /// Passing `number` requests a pairing code for that phone instead of a QR code.
    pub async fn connect(&self, instance_name: &str, number: Option<&str>) -> Result<QrCode> {
        require_instance(instance_name)?;
        let metadata =
            RequestMetadata::new(Method::GET, endpoint(&["instance", "connect", instance_name]))
                .with_optional_query_param("number", number);
        self.transport
            .call::<(), _>(metadata, None)
            .await
            .map(Response::into_data)
    }

    /// Restarts the session. `POST instance/restart/{instance}`
    pub async fn restart(&self, instance_name: &str) -> Result<RestartResponse> {
        require_instance(instance_name)?;
        let metadata =
            RequestMetadata::new(Method::POST, endpoint(&["instance", "restart", instance_name]));
        self.transport
            .call::<(), _>(metadata, None)
            .await
            .map(Response::into_data)
    }

    /// `GET instance/connectionState/{instance}`
    pub async fn connection_state(&self, instance_name: &str) -> Result<ConnectionStateResponse> {
        require_instance(instance_name)?;
        self.transport
            .get(endpoint(&["instance", "connectionState", instance_name]))
            .await
            .map(Response::into_data)
    }

    /// Unpairs the device but keeps the instance. `DELETE instance/logout/{instance}`
    pub async fn logout(&self, instance_name: &str) -> Result<OperationStatus> {
        require_instance(instance_name)?;
        self.transport
            .delete(endpoint(&["instance", "logout", instance_name]))
            .await
            .map(Response::into_data)
    }

    /// Removes the instance. `DELETE instance/delete/{instance}`
    pub async fn delete(&self, instance_name: &str) -> Result<OperationStatus> {
        require_instance(instance_name)?;
        self.transport
            .delete(endpoint(&["instance", "delete", instance_name]))
            .await
            .map(Response::into_data)
    }

    /// Sets the account-wide presence. `POST instance/setPresence/{instance}`
    pub async fn set_presence(
        &self,
        instance_name: &str,
        request: &SetPresenceRequest,
    ) -> Result<Value> {
        require_instance(instance_name)?;
        require("presence", &request.presence)?;
        self.transport
            .post(endpoint(&["instance", "setPresence", instance_name]), request)
            .await
            .map(Response::into_data)
    }
}

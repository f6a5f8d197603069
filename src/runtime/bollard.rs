// ABOUTME: Bollard-based engine client for fetching inspect reports.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use super::detection::{RuntimeInfo, RuntimeType};
use crate::model::ContainerDetails;
use bollard::Docker;
use bollard::query_parameters::InspectContainerOptions;
use thiserror::Error;

/// Error talking to the container engine.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to connect to runtime: {0}")]
    ConnectionFailed(String),

    #[error("container not found: {0}")]
    ContainerNotFound(String),

    #[error("runtime error: {0}")]
    Runtime(String),

    #[error("failed to decode inspect report: {0}")]
    Decode(#[from] serde_json::Error),
}

fn map_inspect_error(e: bollard::errors::Error) -> RuntimeError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => RuntimeError::ContainerNotFound(message.clone()),
        _ => RuntimeError::Runtime(e.to_string()),
    }
}

/// Engine client for inspecting containers over a unix socket.
pub struct EngineClient {
    client: Docker,
    runtime_type: RuntimeType,
}

impl EngineClient {
    /// Connect to a container runtime using detected runtime info.
    pub fn connect(info: &RuntimeInfo) -> Result<Self, RuntimeError> {
        let client =
            Docker::connect_with_unix(&info.socket_path, 120, bollard::API_DEFAULT_VERSION)
                .map_err(|e| RuntimeError::ConnectionFailed(e.to_string()))?;
        Ok(Self {
            client,
            runtime_type: info.runtime_type,
        })
    }

    /// Get the runtime type (Docker or Podman).
    pub fn runtime_type(&self) -> RuntimeType {
        self.runtime_type
    }

    /// Fetch the full inspect report for a container by name or id.
    ///
    /// The typed bollard response is re-encoded to the wire representation
    /// and decoded into the crate's own model, which also carries the
    /// cluster-manager fields bollard does not know about.
    pub async fn inspect(&self, container: &str) -> Result<ContainerDetails, RuntimeError> {
        let response = self
            .client
            .inspect_container(container, None::<InspectContainerOptions>)
            .await
            .map_err(map_inspect_error)?;

        let value = serde_json::to_value(&response)?;
        let details: ContainerDetails = serde_json::from_value(value)?;
        Ok(details)
    }
}

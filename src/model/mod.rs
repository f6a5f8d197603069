// ABOUTME: Typed object graph for the engine's container inspect report.
// ABOUTME: Deserializes `docker inspect` / `podman inspect` JSON (PascalCase wire names).

use serde::Deserialize;
use std::collections::HashMap;

/// Full inspection report for a container, as returned by the engine.
///
/// Unknown wire fields are ignored throughout; the engine adds fields freely
/// between API versions and this model only declares what the spec derivation
/// consumes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContainerDetails {
    pub id: Option<String>,
    /// Container name; the engine reports it with a leading `/`.
    pub name: Option<String>,
    /// Resolved image reference, content-addressed by the time of inspection.
    pub image: Option<String>,
    pub config: Option<ContainerConfig>,
    pub host_config: Option<HostConfig>,
    /// Generic mount points. Always populated by the engine, but lower
    /// fidelity than `HostConfig.Mounts`.
    pub mounts: Option<Vec<MountPoint>>,
    pub network_settings: Option<NetworkSettings>,
    /// Placement metadata injected by standalone-cluster engines.
    pub node: Option<Node>,
}

impl ContainerDetails {
    /// Parse an inspect report from JSON.
    ///
    /// Accepts both the bare object and the one-element array that
    /// `docker inspect` prints; an empty array is an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        use serde::de::Error;
        let value: serde_json::Value = serde_json::from_str(json)?;
        let value = match value {
            serde_json::Value::Array(mut items) => {
                if items.is_empty() {
                    return Err(serde_json::Error::custom("empty inspect array"));
                }
                items.remove(0)
            }
            other => other,
        };
        serde_json::from_value(value)
    }
}

/// Process configuration section of the inspect report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContainerConfig {
    pub hostname: Option<String>,
    pub env: Option<Vec<String>>,
    pub cmd: Option<Vec<String>>,
    pub labels: Option<HashMap<String, String>>,
    /// The image reference the user asked for, before the engine resolved it.
    pub image: Option<String>,
}

/// Host-level configuration section of the inspect report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HostConfig {
    pub blkio_weight: Option<u16>,
    pub cpuset_cpus: Option<String>,
    pub cpu_shares: Option<i64>,
    pub cpu_quota: Option<i64>,
    pub memory: Option<i64>,
    pub dns: Option<Vec<String>>,
    pub dns_search: Option<Vec<String>>,
    pub extra_hosts: Option<Vec<String>>,
    pub security_opt: Option<Vec<String>>,
    pub network_mode: Option<String>,
    pub volume_driver: Option<String>,
    /// `container[:ro|rw]` references to containers whose volumes are shared.
    pub volumes_from: Option<Vec<String>>,
    /// Legacy `source:target[:options]` bind strings.
    pub binds: Option<Vec<String>>,
    /// Wire-format link strings, `/target_name:/this_container/alias`.
    pub links: Option<Vec<String>>,
    /// Exposed port (`"8080/tcp"`) to host bindings.
    pub port_bindings: Option<HashMap<String, Option<Vec<PortBinding>>>>,
    /// Detailed mount descriptors. Authoritative when present, but the engine
    /// sometimes leaves this empty while still reporting top-level mounts.
    pub mounts: Option<Vec<Mount>>,
}

/// One host binding for an exposed port.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PortBinding {
    pub host_ip: Option<String>,
    pub host_port: Option<String>,
}

impl PortBinding {
    /// The host side of the binding as a single string: `ip:port` when a
    /// host IP is set, otherwise the bare port.
    pub fn host_port_spec(&self) -> String {
        let port = self.host_port.as_deref().unwrap_or_default();
        match self.host_ip.as_deref() {
            Some(ip) if !ip.is_empty() => format!("{}:{}", ip, port),
            _ => port.to_string(),
        }
    }
}

/// Detailed mount descriptor from `HostConfig.Mounts`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Mount {
    #[serde(rename = "Type")]
    pub typ: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub read_only: bool,
    /// Engine-internal mount injected by a cluster manager; never part of
    /// user intent. Absent (false) in plain Docker output.
    pub system: bool,
}

/// Generic mount point from the top-level `Mounts` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MountPoint {
    #[serde(rename = "Type")]
    pub typ: Option<String>,
    /// Volume name, for volume-backed mounts.
    pub name: Option<String>,
    /// Host path for binds; engine-managed storage path for volumes.
    pub source: Option<String>,
    pub destination: Option<String>,
    pub driver: Option<String>,
    pub mode: Option<String>,
    #[serde(rename = "RW", default = "default_true")]
    pub rw: bool,
    /// Same meaning as [`Mount::system`].
    pub system: bool,
}

impl Default for MountPoint {
    fn default() -> Self {
        Self {
            typ: None,
            name: None,
            source: None,
            destination: None,
            driver: None,
            mode: None,
            rw: true,
            system: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Live network-attachment state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkSettings {
    pub networks: Option<HashMap<String, NetworkAttachment>>,
}

/// Per-network endpoint data. Only identity fields are modeled; the spec
/// derivation needs the attachment names, not the runtime addressing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkAttachment {
    #[serde(rename = "NetworkID")]
    pub network_id: Option<String>,
    #[serde(rename = "IPAddress")]
    pub ip_address: Option<String>,
    pub aliases: Option<Vec<String>>,
}

/// Cluster node the container was placed on.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Node {
    pub name: Option<String>,
    pub addr: Option<String>,
}

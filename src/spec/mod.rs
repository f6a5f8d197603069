// ABOUTME: The derived container spec - a flat, declarative launch record.
// ABOUTME: Serializes to YAML/JSON and round-trips, so specs can be stored and replayed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A declarative record sufficient to relaunch an equivalent container.
///
/// Every list and map field defaults to empty rather than absent, so
/// downstream consumers never have to distinguish the two. Scalar fields are
/// omitted from serialized output when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resolved human-readable image name, when recoverable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Content-addressed image reference the engine resolved to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Cluster node the source container was placed on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_driver: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blkio_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpuset_cpus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_shares: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_quota: Option<i64>,
    /// Memory limit in bytes. Unset means unlimited, never zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<i64>,

    pub dns: Vec<String>,
    pub dns_search: Vec<String>,
    pub environment: Vec<String>,
    pub command: Vec<String>,
    pub extra_hosts: Vec<String>,
    pub security_opt: Vec<String>,
    /// Names of networks the container was attached to, sorted.
    pub networks: Vec<String>,
    pub volumes_from: Vec<String>,
    /// Legacy `source:target[:options]` bind strings, carried verbatim.
    pub volume_binds: Vec<String>,
    /// Reconciled external mounts. Never overlaps with `volume_binds`.
    pub mounts: Vec<MountEntry>,

    pub labels: BTreeMap<String, String>,
    /// Link alias to target container name.
    pub links: BTreeMap<String, String>,
    /// Decimal container port to host-port spec (`ip:port` or bare port).
    pub ports: BTreeMap<String, String>,
}

impl ContainerSpec {
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// One external mount declaration in a derived spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountEntry {
    #[serde(rename = "type")]
    pub kind: MountKind,
    /// Host path for binds, volume name for volumes; absent for tmpfs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Path inside the container.
    pub target: String,
    #[serde(default)]
    pub read_only: bool,
}

/// Kind of external storage backing a mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MountKind {
    Bind,
    Volume,
    Tmpfs,
}

#[derive(Debug, Error)]
#[error("unknown mount kind: {0}")]
pub struct UnknownMountKind(String);

impl FromStr for MountKind {
    type Err = UnknownMountKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bind" => Ok(MountKind::Bind),
            "volume" => Ok(MountKind::Volume),
            "tmpfs" => Ok(MountKind::Tmpfs),
            other => Err(UnknownMountKind(other.to_string())),
        }
    }
}

impl fmt::Display for MountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountKind::Bind => write!(f, "bind"),
            MountKind::Volume => write!(f, "volume"),
            MountKind::Tmpfs => write!(f, "tmpfs"),
        }
    }
}

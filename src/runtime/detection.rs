// ABOUTME: Local engine discovery for Docker and Podman.
// ABOUTME: Resolves explicit overrides first, then probes well-known sockets.

use std::path::Path;

/// Error during runtime detection.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("no container runtime found (checked Podman and Docker sockets)")]
    NoRuntimeFound,
}

/// The container runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeType {
    Docker,
    Podman,
}

impl std::fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeType::Docker => write!(f, "docker"),
            RuntimeType::Podman => write!(f, "podman"),
        }
    }
}

/// A runtime the inspect client can connect to.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub runtime_type: RuntimeType,
    /// Path to the runtime socket.
    pub socket_path: String,
}

/// Explicit overrides for runtime discovery.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Explicit runtime type (skips socket probing).
    pub runtime: Option<RuntimeType>,
    /// Explicit socket path.
    pub socket: Option<String>,
}

impl RuntimeConfig {
    /// Resolve the overrides to a runtime, when enough is specified.
    ///
    /// A bare socket override is assumed Docker-compatible; inspect reports
    /// read the same either way.
    fn resolve(&self) -> Option<RuntimeInfo> {
        match (self.runtime, &self.socket) {
            (Some(runtime_type), socket) => Some(RuntimeInfo {
                runtime_type,
                socket_path: socket
                    .clone()
                    .unwrap_or_else(|| default_socket_path(runtime_type)),
            }),
            (None, Some(socket)) => Some(RuntimeInfo {
                runtime_type: RuntimeType::Docker,
                socket_path: socket.clone(),
            }),
            (None, None) => None,
        }
    }
}

const ROOTFUL_PODMAN: &str = "/run/podman/podman.sock";
const DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// Detect the container runtime on the local system.
///
/// Probe order (when not explicitly configured):
/// 1. Rootless Podman socket (`/run/user/$UID/podman/podman.sock`)
/// 2. Rootful Podman socket (`/run/podman/podman.sock`)
/// 3. Docker socket (`/var/run/docker.sock`)
pub fn detect_local(config: Option<&RuntimeConfig>) -> Result<RuntimeInfo, DetectionError> {
    if let Some(info) = config.and_then(RuntimeConfig::resolve) {
        return Ok(info);
    }

    // 1. Rootless Podman
    if let Some(uid) = get_uid() {
        let rootless_socket = format!("/run/user/{}/podman/podman.sock", uid);
        if Path::new(&rootless_socket).exists() {
            return Ok(RuntimeInfo {
                runtime_type: RuntimeType::Podman,
                socket_path: rootless_socket,
            });
        }
    }

    // 2. Rootful Podman
    if Path::new(ROOTFUL_PODMAN).exists() {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Podman,
            socket_path: ROOTFUL_PODMAN.to_string(),
        });
    }

    // 3. Docker
    if Path::new(DOCKER_SOCKET).exists() {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Docker,
            socket_path: DOCKER_SOCKET.to_string(),
        });
    }

    Err(DetectionError::NoRuntimeFound)
}

fn get_uid() -> Option<String> {
    std::env::var("UID").ok().or_else(|| {
        // Fall back to reading /proc/self/status
        std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|s| {
                s.lines()
                    .find(|l| l.starts_with("Uid:"))
                    .and_then(|l| l.split_whitespace().nth(1))
                    .map(|s| s.to_string())
            })
    })
}

fn default_socket_path(runtime: RuntimeType) -> String {
    match runtime {
        RuntimeType::Docker => DOCKER_SOCKET.to_string(),
        RuntimeType::Podman => ROOTFUL_PODMAN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_runtime_resolves_to_its_default_socket() {
        let config = RuntimeConfig {
            runtime: Some(RuntimeType::Podman),
            socket: None,
        };
        let info = config.resolve().unwrap();
        assert_eq!(info.runtime_type, RuntimeType::Podman);
        assert_eq!(info.socket_path, "/run/podman/podman.sock");
    }

    #[test]
    fn bare_socket_override_assumes_docker() {
        let config = RuntimeConfig {
            runtime: None,
            socket: Some("/tmp/engine.sock".to_string()),
        };
        let info = config.resolve().unwrap();
        assert_eq!(info.runtime_type, RuntimeType::Docker);
        assert_eq!(info.socket_path, "/tmp/engine.sock");
    }

    #[test]
    fn empty_overrides_resolve_to_nothing() {
        assert!(RuntimeConfig::default().resolve().is_none());
    }
}

// ABOUTME: Container runtime access for Docker and Podman.
// ABOUTME: Socket detection plus a bollard client for inspect reports.

mod bollard;
mod detection;

pub use self::bollard::{EngineClient, RuntimeError};
pub use detection::{DetectionError, RuntimeConfig, RuntimeInfo, RuntimeType, detect_local};

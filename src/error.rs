// ABOUTME: Application-wide error types for respec.
// ABOUTME: Uses thiserror for ergonomic error handling.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("spec derivation failed: {0}")]
    Derive(#[from] crate::derive::DeriveError),

    #[error("invalid inspect report: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("runtime detection failed: {0}")]
    Detection(#[from] crate::runtime::DetectionError),

    #[error("runtime error: {0}")]
    Runtime(#[from] crate::runtime::RuntimeError),

    #[error("YAML encoding error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

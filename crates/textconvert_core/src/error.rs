//! Error types for conversion ports, host capabilities, and configuration.
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a conversion or format port.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortError {
    #[error("Conversion failed: {0}")]
    Failed(String),

    #[error("Conversion timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Conversion worker unavailable")]
    WorkerGone,
}

impl PortError {
    /// Build a [`PortError::Failed`] from any displayable message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Failure reported by a host capability that is present but could not
/// complete the operation.
#[derive(Error, Debug)]
pub enum CapabilityError {
    #[error("Capability failed: {0}")]
    Failed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("Invalid indent width: {0} (expected 0, 2, 4, 6 or 8)")]
    InvalidIndent(u8),

    #[error("Unknown stale policy: {0}")]
    InvalidPolicy(String),
}

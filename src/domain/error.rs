//! Failures a flow can end in.
//!
//! Flows never propagate these; each one is captured in the flow's
//! terminal status and rendered for the user.

use thiserror::Error;

/// Fallback description when a failure carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Why a flow ended in [`OperationStatus::Failed`](super::OperationStatus::Failed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The operation needs an account and none is connected.
    #[error("connect wallet first")]
    ConnectionMissing,

    /// A contract read failed.
    #[error("{0}")]
    ReadFailure(String),

    /// A write was rejected by the wallet or failed at the RPC layer.
    #[error("{}", .0.as_deref().unwrap_or(UNKNOWN_ERROR))]
    SubmissionFailure(Option<String>),
}

impl FlowError {
    /// Submission failure with a description, treating blank text as absent.
    #[must_use]
    pub fn submission(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::SubmissionFailure(None)
        } else {
            Self::SubmissionFailure(Some(message))
        }
    }
}

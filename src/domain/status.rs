//! Lifecycle of a single user-triggered operation.

use super::error::FlowError;
use super::tx::TxHandle;

/// State of one flow: `Idle → Pending → {Succeeded, Failed}`.
///
/// Terminal states persist until the same flow starts a new operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OperationStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(TxHandle),
    Failed(FlowError),
}

impl OperationStatus {
    /// True while an operation is in flight and its trigger must stay disabled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Transaction handle of a successful operation.
    #[must_use]
    pub fn tx(&self) -> Option<&TxHandle> {
        match self {
            Self::Succeeded(tx) => Some(tx),
            _ => None,
        }
    }

    /// Failure of a failed operation.
    #[must_use]
    pub fn error(&self) -> Option<&FlowError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Status for a finished gateway call.
    #[must_use]
    pub fn from_outcome(outcome: Result<TxHandle, FlowError>) -> Self {
        match outcome {
            Ok(tx) => Self::Succeeded(tx),
            Err(err) => Self::Failed(err),
        }
    }
}

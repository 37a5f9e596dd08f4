//! Handles for submitted transactions.

use std::fmt;

use alloy_primitives::TxHash;
use serde::Serialize;

/// A transaction accepted by the node, identified by its hash.
///
/// Returned at submission time; confirmation is not awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TxHandle {
    pub hash: TxHash,
}

impl TxHandle {
    #[must_use]
    pub const fn new(hash: TxHash) -> Self {
        Self { hash }
    }

    /// Block explorer page for this transaction.
    #[must_use]
    pub fn explorer_url(&self, explorer_base: &str) -> String {
        format!("{}/tx/{}", explorer_base.trim_end_matches('/'), self.hash)
    }
}

impl fmt::Display for TxHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hash)
    }
}

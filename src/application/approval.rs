//! Approval flow: grant the pool spending rights over one token.
//!
//! One flow exists per token so that approving Token0 and Token1 are
//! tracked independently. Approvals do not refresh balances.

use alloy_primitives::{Address, U256};
use tracing::{debug, info, warn};

use crate::domain::{FlowError, OperationStatus, TokenSelector};
use crate::port::ContractGateway;

/// Approval state machine for a single token.
#[derive(Debug, Clone)]
pub struct ApprovalFlow {
    token: TokenSelector,
    status: OperationStatus,
}

impl ApprovalFlow {
    #[must_use]
    pub fn new(token: TokenSelector) -> Self {
        Self {
            token,
            status: OperationStatus::Idle,
        }
    }

    #[must_use]
    pub const fn token(&self) -> TokenSelector {
        self.token
    }

    #[must_use]
    pub const fn status(&self) -> &OperationStatus {
        &self.status
    }

    /// Whether the approve control should accept input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.status.is_pending()
    }

    /// Return to `Idle`.
    pub fn reset(&mut self) {
        self.status = OperationStatus::Idle;
    }

    /// Status line for display, `None` while idle.
    #[must_use]
    pub fn status_text(&self) -> Option<String> {
        let token = self.token.label();
        match &self.status {
            OperationStatus::Idle => None,
            OperationStatus::Pending => Some(format!("Approving {token}...")),
            OperationStatus::Succeeded(_) => Some(format!("{token} approval successful!")),
            OperationStatus::Failed(FlowError::ConnectionMissing) => {
                Some(FlowError::ConnectionMissing.to_string())
            }
            OperationStatus::Failed(err) => Some(format!("{token} approval failed: {err}")),
        }
    }

    /// Approve `amount` base units of this flow's token for the pool.
    ///
    /// Without an account the flow fails immediately and the gateway is not
    /// called. A trigger arriving while an approval is pending is ignored.
    pub async fn approve(
        &mut self,
        gateway: &dyn ContractGateway,
        account: Option<Address>,
        amount: U256,
    ) -> &OperationStatus {
        if self.status.is_pending() {
            debug!(token = %self.token, "Approval already in flight, ignoring trigger");
            return &self.status;
        }

        let Some(account) = account else {
            self.status = OperationStatus::Failed(FlowError::ConnectionMissing);
            return &self.status;
        };

        self.status = OperationStatus::Pending;
        info!(
            token = %self.token,
            account = %account,
            spender = %gateway.pool_address(),
            amount = %amount,
            "Submitting token approval"
        );

        let outcome = gateway
            .approve(self.token, account, amount)
            .await
            .map_err(FlowError::from);

        match &outcome {
            Ok(tx) => info!(token = %self.token, tx_hash = %tx, "Approval submitted"),
            Err(e) => warn!(token = %self.token, error = %e, "Approval failed"),
        }

        self.status = OperationStatus::from_outcome(outcome);
        &self.status
    }
}

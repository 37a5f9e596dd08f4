//! Transaction flow: deposit into or withdraw from the pool.
//!
//! Deposit and withdraw share one state machine, parameterised by
//! [`Direction`]. They also share the token selector and the status line,
//! so only one of them can be in flight at a time. Each direction keeps its
//! own amount field.

use alloy_primitives::U256;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{AmountError, AmountInput, Direction, FlowError, OperationStatus, TokenSelector};
use crate::port::{ContractGateway, WalletSession};

/// Reason a submission was refused before anything changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("a transaction is already pending")]
    InFlight,

    #[error("no signing wallet available")]
    NoSigner,

    #[error(transparent)]
    Amount(#[from] AmountError),
}

/// Deposit/withdraw state machine.
#[derive(Debug, Clone, Default)]
pub struct TransactionFlow {
    token: TokenSelector,
    inputs: [AmountInput; 2],
    status: OperationStatus,
    last_direction: Option<Direction>,
}

impl TransactionFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn token(&self) -> TokenSelector {
        self.token
    }

    #[must_use]
    pub const fn status(&self) -> &OperationStatus {
        &self.status
    }

    /// Direction of the most recent submission, if any.
    #[must_use]
    pub const fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    #[must_use]
    pub fn input(&self, direction: Direction) -> &AmountInput {
        &self.inputs[direction.index()]
    }

    /// Replace the text of one amount field.
    pub fn set_amount(&mut self, direction: Direction, text: impl Into<String>) {
        self.inputs[direction.index()].set(text);
    }

    /// Switch the target token.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::InFlight`] while a transaction is pending.
    pub fn select_token(&mut self, token: TokenSelector) -> Result<(), Rejection> {
        if self.status.is_pending() {
            return Err(Rejection::InFlight);
        }
        self.token = token;
        Ok(())
    }

    /// Return to the initial state: token0, empty fields, idle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Status line for display, `None` while idle.
    #[must_use]
    pub fn status_text(&self) -> Option<String> {
        let direction = self.last_direction?;
        match &self.status {
            OperationStatus::Idle => None,
            OperationStatus::Pending => Some("Pending...".to_string()),
            OperationStatus::Succeeded(_) => Some(direction.success_message()),
            OperationStatus::Failed(err) => Some(direction.failure_message(err)),
        }
    }

    /// Validate a submission without changing state.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] that [`TransactionFlow::submit`] would return.
    pub fn check(&self, session: &dyn WalletSession, direction: Direction) -> Result<U256, Rejection> {
        if self.status.is_pending() {
            return Err(Rejection::InFlight);
        }
        if !session.can_sign() {
            return Err(Rejection::NoSigner);
        }
        Ok(self.input(direction).to_units()?)
    }

    /// Submit the current amount in `direction` for the selected token.
    ///
    /// A rejected submission leaves every field untouched and makes no
    /// gateway call. On success the direction's amount field is cleared; on
    /// failure it is kept so the user can resubmit.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] when the flow is pending, there is no signer,
    /// or the amount field does not hold a usable amount.
    pub async fn submit(
        &mut self,
        gateway: &dyn ContractGateway,
        session: &dyn WalletSession,
        direction: Direction,
    ) -> Result<&OperationStatus, Rejection> {
        let amount = match self.check(session, direction) {
            Ok(amount) => amount,
            Err(rejection) => {
                debug!(direction = %direction, reason = %rejection, "Submission rejected");
                return Err(rejection);
            }
        };
        let account = session.account().ok_or(Rejection::NoSigner)?;

        self.status = OperationStatus::Pending;
        self.last_direction = Some(direction);
        info!(
            direction = %direction,
            token = %self.token,
            amount = %amount,
            account = %account,
            "Submitting pool transaction"
        );

        let outcome = gateway
            .transact(direction, account, amount, self.token)
            .await
            .map_err(FlowError::from);

        match &outcome {
            Ok(tx) => {
                info!(direction = %direction, tx_hash = %tx, "Pool transaction submitted");
                self.inputs[direction.index()].clear();
            }
            Err(e) => warn!(direction = %direction, error = %e, "Pool transaction failed"),
        }

        self.status = OperationStatus::from_outcome(outcome);
        Ok(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::{GatewayError, SessionState};
    use crate::testkit::gateway::{GatewayCall, ScriptedGateway};
    use alloy_primitives::Address;

    fn signer() -> SessionState {
        SessionState::signing(Address::repeat_byte(0x33))
    }

    #[tokio::test]
    async fn empty_amount_is_a_no_op() {
        let gateway = ScriptedGateway::new();
        let mut flow = TransactionFlow::new();

        let result = flow.submit(&gateway, &signer(), Direction::Deposit).await;

        assert_eq!(result, Err(Rejection::Amount(AmountError::Empty)));
        assert_eq!(flow.status(), &OperationStatus::Idle);
        assert!(flow.status_text().is_none());
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn unparsable_amount_is_rejected() {
        let gateway = ScriptedGateway::new();
        let mut flow = TransactionFlow::new();
        flow.set_amount(Direction::Withdraw, "1.2.3");

        let result = flow.submit(&gateway, &signer(), Direction::Withdraw).await;

        assert!(matches!(result, Err(Rejection::Amount(AmountError::Invalid(_)))));
        assert_eq!(flow.input(Direction::Withdraw).as_str(), "1.2.3");
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn missing_signer_is_rejected() {
        let gateway = ScriptedGateway::new();
        let mut flow = TransactionFlow::new();
        flow.set_amount(Direction::Deposit, "1");
        let watcher = SessionState::watch_only(Address::repeat_byte(0x44));

        let result = flow.submit(&gateway, &watcher, Direction::Deposit).await;

        assert_eq!(result, Err(Rejection::NoSigner));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn deposit_success_clears_only_its_field() {
        let gateway = ScriptedGateway::new();
        let mut flow = TransactionFlow::new();
        flow.set_amount(Direction::Deposit, "2.5");
        flow.set_amount(Direction::Withdraw, "1");

        let status = flow
            .submit(&gateway, &signer(), Direction::Deposit)
            .await
            .expect("accepted");

        assert!(status.is_succeeded());
        assert_eq!(flow.status_text().as_deref(), Some("Deposit successful!"));
        assert!(flow.input(Direction::Deposit).is_empty());
        assert_eq!(flow.input(Direction::Withdraw).as_str(), "1");
        assert_eq!(
            gateway.calls(),
            vec![GatewayCall::Transact {
                direction: Direction::Deposit,
                account: Address::repeat_byte(0x33),
                amount: U256::from(2_500_000_000_000_000_000u128),
                is_token0: true,
            }]
        );
    }

    #[tokio::test]
    async fn withdraw_failure_keeps_amount_for_resubmission() {
        let gateway = ScriptedGateway::new();
        gateway.fail_next_write(GatewayError::Submission(Some("insufficient funds".into())));
        let mut flow = TransactionFlow::new();
        flow.select_token(TokenSelector::Token1).expect("idle flow");
        flow.set_amount(Direction::Withdraw, "3");

        flow.submit(&gateway, &signer(), Direction::Withdraw)
            .await
            .expect("accepted");

        assert_eq!(
            flow.status_text().as_deref(),
            Some("Withdraw failed: insufficient funds")
        );
        assert_eq!(flow.input(Direction::Withdraw).as_str(), "3");

        let retry = flow
            .submit(&gateway, &signer(), Direction::Withdraw)
            .await
            .expect("resubmission accepted");
        assert!(retry.is_succeeded());
        assert_eq!(gateway.calls().len(), 2);
    }

    #[test]
    fn token_cannot_change_while_pending() {
        let mut flow = TransactionFlow::new();
        flow.status = OperationStatus::Pending;

        assert_eq!(flow.select_token(TokenSelector::Token1), Err(Rejection::InFlight));
        assert_eq!(flow.token(), TokenSelector::Token0);
    }

    #[test]
    fn pending_flow_rejects_submission() {
        let mut flow = TransactionFlow::new();
        flow.set_amount(Direction::Deposit, "1");
        flow.status = OperationStatus::Pending;

        assert_eq!(flow.check(&signer(), Direction::Deposit), Err(Rejection::InFlight));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut flow = TransactionFlow::new();
        flow.set_amount(Direction::Deposit, "4");
        flow.select_token(TokenSelector::Token1).expect("idle flow");

        flow.reset();

        assert_eq!(flow.token(), TokenSelector::Token0);
        assert!(flow.input(Direction::Deposit).is_empty());
    }
}

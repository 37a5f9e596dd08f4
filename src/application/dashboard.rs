//! The session dashboard: every flow bound to one wallet session.
//!
//! The dashboard owns all UI-side state. It decides when balances are
//! re-read: when the session changes, when asked explicitly, and after a
//! deposit or withdraw reaches `Succeeded`. Failures and pending states do
//! not trigger reads.

use std::sync::Arc;

use alloy_primitives::U256;
use tracing::{debug, info};

use super::approval::ApprovalFlow;
use super::balance::BalanceView;
use super::transaction::{Rejection, TransactionFlow};
use crate::domain::{BalanceSnapshot, Direction, OperationStatus, TokenSelector};
use crate::port::{BalanceSource, ContractGateway, SessionState, WalletSession};

/// State of one user session against the pool.
pub struct Dashboard {
    gateway: Arc<dyn ContractGateway>,
    session: SessionState,
    approval_amount: U256,
    deposited: BalanceView,
    wallet: BalanceView,
    approvals: [ApprovalFlow; 2],
    transaction: TransactionFlow,
    refreshes: u64,
}

impl Dashboard {
    /// Create a disconnected dashboard.
    ///
    /// `approval_amount` is the allowance, in base units, granted by every
    /// approval.
    #[must_use]
    pub fn new(gateway: Arc<dyn ContractGateway>, approval_amount: U256) -> Self {
        Self {
            gateway,
            session: SessionState::disconnected(),
            approval_amount,
            deposited: BalanceView::new(BalanceSource::Deposited),
            wallet: BalanceView::new(BalanceSource::Wallet),
            approvals: [
                ApprovalFlow::new(TokenSelector::Token0),
                ApprovalFlow::new(TokenSelector::Token1),
            ],
            transaction: TransactionFlow::new(),
            refreshes: 0,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub const fn approval_amount(&self) -> U256 {
        self.approval_amount
    }

    /// Balances held inside the pool.
    #[must_use]
    pub const fn balances(&self) -> &BalanceSnapshot {
        self.deposited.snapshot()
    }

    /// Balances held by the wallet address itself.
    #[must_use]
    pub const fn wallet_balances(&self) -> &BalanceSnapshot {
        self.wallet.snapshot()
    }

    #[must_use]
    pub fn approval(&self, token: TokenSelector) -> &ApprovalFlow {
        &self.approvals[token.index()]
    }

    #[must_use]
    pub const fn transaction(&self) -> &TransactionFlow {
        &self.transaction
    }

    /// Number of balance refreshes performed so far.
    #[must_use]
    pub const fn refresh_count(&self) -> u64 {
        self.refreshes
    }

    /// Adopt the current state of `session` without reading balances.
    ///
    /// A change of account resets every flow. Reconnecting the same account
    /// keeps flow state.
    pub fn attach(&mut self, session: &dyn WalletSession) {
        let next = SessionState::of(session);
        if next.account != self.session.account {
            info!(
                account = ?next.account,
                can_sign = next.can_sign,
                "Wallet session changed"
            );
            self.reset_flows();
        }
        self.session = next;
    }

    /// Adopt the current state of `session` and read its balances.
    pub async fn connect(&mut self, session: &dyn WalletSession) {
        self.attach(session);
        self.refresh().await;
    }

    /// Drop the session and return every flow to its initial state.
    pub fn disconnect(&mut self) {
        info!("Wallet disconnected");
        self.session = SessionState::disconnected();
        self.reset_flows();
        self.deposited.clear();
        self.wallet.clear();
    }

    /// Re-read pool and wallet balances for the connected account.
    pub async fn refresh(&mut self) {
        let account = self.session.account;
        let gateway = self.gateway.as_ref();
        tokio::join!(
            self.deposited.refresh(gateway, account),
            self.wallet.refresh(gateway, account),
        );
        self.refreshes += 1;
        debug!(
            token0 = %self.deposited.snapshot().token0,
            token1 = %self.deposited.snapshot().token1,
            "Balances refreshed"
        );
    }

    /// Run the approval flow for `token`.
    pub async fn approve(&mut self, token: TokenSelector) -> &OperationStatus {
        let account = self.session.account;
        let amount = self.approval_amount;
        self.approvals[token.index()]
            .approve(self.gateway.as_ref(), account, amount)
            .await
    }

    /// Change the token targeted by deposits and withdrawals.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::InFlight`] while a transaction is pending.
    pub fn select_token(&mut self, token: TokenSelector) -> Result<(), Rejection> {
        self.transaction.select_token(token)
    }

    /// Edit the amount field of `direction`.
    pub fn set_amount(&mut self, direction: Direction, text: impl Into<String>) {
        self.transaction.set_amount(direction, text);
    }

    /// Whether the submit control for `direction` should accept input.
    #[must_use]
    pub fn can_submit(&self, direction: Direction) -> bool {
        self.transaction.check(&self.session, direction).is_ok()
    }

    /// Submit a deposit or withdraw and re-read balances on success.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] when the submission is refused before any
    /// state changes.
    pub async fn submit(&mut self, direction: Direction) -> Result<&OperationStatus, Rejection> {
        let succeeded = self
            .transaction
            .submit(self.gateway.as_ref(), &self.session, direction)
            .await?
            .is_succeeded();

        if succeeded {
            self.refresh().await;
        }
        Ok(self.transaction.status())
    }

    fn reset_flows(&mut self) {
        for flow in &mut self.approvals {
            flow.reset();
        }
        self.transaction.reset();
    }
}

//! Balance view: the two token balances of the connected account.

use alloy_primitives::Address;
use tracing::{debug, warn};

use crate::domain::{Balance, BalanceSnapshot, TokenSelector};
use crate::port::{BalanceSource, ContractGateway};

/// Last fetched balances from one source.
#[derive(Debug, Clone)]
pub struct BalanceView {
    source: BalanceSource,
    snapshot: BalanceSnapshot,
}

impl BalanceView {
    #[must_use]
    pub fn new(source: BalanceSource) -> Self {
        Self {
            source,
            snapshot: BalanceSnapshot::unknown(),
        }
    }

    #[must_use]
    pub const fn source(&self) -> BalanceSource {
        self.source
    }

    #[must_use]
    pub const fn snapshot(&self) -> &BalanceSnapshot {
        &self.snapshot
    }

    /// Forget both balances.
    pub fn clear(&mut self) {
        self.snapshot = BalanceSnapshot::unknown();
    }

    /// Re-read both balances for `account`.
    ///
    /// With no account the snapshot becomes unknown and nothing is read.
    /// The two reads run concurrently and fail independently: a failed read
    /// shows as unknown without affecting the other token.
    pub async fn refresh(
        &mut self,
        gateway: &dyn ContractGateway,
        account: Option<Address>,
    ) -> &BalanceSnapshot {
        let Some(owner) = account else {
            self.clear();
            return &self.snapshot;
        };

        let (token0, token1) = tokio::join!(
            self.read(gateway, TokenSelector::Token0, owner),
            self.read(gateway, TokenSelector::Token1, owner),
        );

        self.snapshot = BalanceSnapshot::new(token0, token1);
        &self.snapshot
    }

    async fn read(
        &self,
        gateway: &dyn ContractGateway,
        token: TokenSelector,
        owner: Address,
    ) -> Balance {
        match gateway.balance(self.source, token, owner).await {
            Ok(raw) => {
                debug!(source = ?self.source, token = %token, raw = %raw, "Balance read");
                Balance::from_units(raw)
            }
            Err(e) => {
                warn!(source = ?self.source, token = %token, error = %e, "Balance read failed");
                Balance::Unknown
            }
        }
    }
}

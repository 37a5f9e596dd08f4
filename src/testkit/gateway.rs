//! In-memory [`ContractGateway`] for exercising the flows.
//!
//! Reads return per-(source, token) scripted values and default to zero.
//! Writes succeed with a synthetic hash unless a failure has been queued
//! with [`ScriptedGateway::fail_next_write`]. Every call is recorded.

use std::collections::{HashMap, VecDeque};

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{Direction, TokenSelector, TxHandle};
use crate::port::{BalanceSource, ContractGateway, GatewayError};

/// A recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Balance {
        source: BalanceSource,
        token: TokenSelector,
        owner: Address,
    },
    Approve {
        token: TokenSelector,
        account: Address,
        amount: U256,
    },
    Transact {
        direction: Direction,
        account: Address,
        amount: U256,
        is_token0: bool,
    },
}

impl GatewayCall {
    #[must_use]
    pub fn is_write(&self) -> bool {
        !matches!(self, Self::Balance { .. })
    }
}

#[derive(Default)]
struct Script {
    balances: HashMap<(BalanceSource, TokenSelector), Result<U256, GatewayError>>,
    write_failures: VecDeque<GatewayError>,
    calls: Vec<GatewayCall>,
    writes: u64,
}

/// Scripted gateway with call recording.
pub struct ScriptedGateway {
    pool: Address,
    script: Mutex<Script>,
}

impl Default for ScriptedGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedGateway {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pool: Address::repeat_byte(0xee),
            script: Mutex::new(Script::default()),
        }
    }

    /// Make reads of `(source, token)` return `raw`.
    pub fn set_balance(&self, source: BalanceSource, token: TokenSelector, raw: U256) {
        self.script.lock().balances.insert((source, token), Ok(raw));
    }

    /// Make reads of `(source, token)` fail with `error`.
    pub fn fail_balance(&self, source: BalanceSource, token: TokenSelector, error: GatewayError) {
        self.script.lock().balances.insert((source, token), Err(error));
    }

    /// Fail the next write with `error`; later writes succeed again.
    pub fn fail_next_write(&self, error: GatewayError) {
        self.script.lock().write_failures.push_back(error);
    }

    /// All calls made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.script.lock().calls.clone()
    }

    /// Only the write calls made so far.
    #[must_use]
    pub fn writes(&self) -> Vec<GatewayCall> {
        self.calls().into_iter().filter(GatewayCall::is_write).collect()
    }

    fn write(&self, call: GatewayCall) -> Result<TxHandle, GatewayError> {
        let mut script = self.script.lock();
        script.calls.push(call);
        if let Some(error) = script.write_failures.pop_front() {
            return Err(error);
        }
        script.writes += 1;
        let hash = TxHash::from(U256::from(script.writes).to_be_bytes::<32>());
        Ok(TxHandle::new(hash))
    }
}

#[async_trait]
impl ContractGateway for ScriptedGateway {
    async fn balance(
        &self,
        source: BalanceSource,
        token: TokenSelector,
        owner: Address,
    ) -> Result<U256, GatewayError> {
        let mut script = self.script.lock();
        script.calls.push(GatewayCall::Balance {
            source,
            token,
            owner,
        });
        script
            .balances
            .get(&(source, token))
            .cloned()
            .unwrap_or(Ok(U256::ZERO))
    }

    async fn approve(
        &self,
        token: TokenSelector,
        account: Address,
        amount: U256,
    ) -> Result<TxHandle, GatewayError> {
        self.write(GatewayCall::Approve {
            token,
            account,
            amount,
        })
    }

    async fn transact(
        &self,
        direction: Direction,
        account: Address,
        amount: U256,
        token: TokenSelector,
    ) -> Result<TxHandle, GatewayError> {
        self.write(GatewayCall::Transact {
            direction,
            account,
            amount,
            is_token0: token.is_token0(),
        })
    }

    fn pool_address(&self) -> Address {
        self.pool
    }
}

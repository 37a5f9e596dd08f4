//! Contract gateway port.
//!
//! Typed read and write access to the pool and its two tokens. The gateway
//! holds no state of its own and never retries; retry policy belongs to
//! whoever triggered the call.

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Direction, FlowError, TokenSelector, TxHandle};

/// Which balance of a token is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceSource {
    /// Amount held for the owner inside the pool (`token0Balance`/`token1Balance`).
    Deposited,
    /// Amount held by the owner's own address (`balanceOf` on the token).
    Wallet,
}

/// Failure of a single gateway call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// RPC failure, decoding failure or revert on a read.
    #[error("read failed: {0}")]
    Read(String),

    /// Rejected by the signer or failed at the RPC layer on submission.
    #[error("{}", .0.as_deref().unwrap_or(crate::domain::UNKNOWN_ERROR))]
    Submission(Option<String>),

    /// A write was requested but no signing client is configured.
    #[error("no signing wallet configured")]
    SignerUnavailable,
}

impl From<GatewayError> for FlowError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Read(message) => FlowError::ReadFailure(message),
            GatewayError::Submission(message) => {
                FlowError::submission(message.unwrap_or_default())
            }
            GatewayError::SignerUnavailable => FlowError::ConnectionMissing,
        }
    }
}

/// Port for executing calls against the deployed contracts.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait ContractGateway: Send + Sync {
    /// Read one token balance for `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Read`] on RPC, decoding or revert failures.
    /// Callers must treat this as "unknown", never as zero.
    async fn balance(
        &self,
        source: BalanceSource,
        token: TokenSelector,
        owner: Address,
    ) -> Result<U256, GatewayError>;

    /// Grant the pool an allowance of `amount` base units over `token`.
    ///
    /// Returns as soon as the transaction is submitted.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Submission`] or
    /// [`GatewayError::SignerUnavailable`] if the write cannot be submitted.
    async fn approve(
        &self,
        token: TokenSelector,
        account: Address,
        amount: U256,
    ) -> Result<TxHandle, GatewayError>;

    /// Call the pool's `deposit` or `withdraw` with `(amount, isToken0)`.
    ///
    /// Returns as soon as the transaction is submitted.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Submission`] or
    /// [`GatewayError::SignerUnavailable`] if the write cannot be submitted.
    async fn transact(
        &self,
        direction: Direction,
        account: Address,
        amount: U256,
        token: TokenSelector,
    ) -> Result<TxHandle, GatewayError>;

    /// Address of the pool contract that receives approvals.
    fn pool_address(&self) -> Address;
}

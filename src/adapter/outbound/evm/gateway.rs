//! Alloy-backed contract gateway.
//!
//! Reads go through a plain HTTP provider; writes go through a provider
//! carrying the local signer. Writes return once the node accepts the
//! transaction and do not wait for a receipt.

use std::fmt::Display;

use alloy_primitives::{Address, U256};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::contract::{IHookTuah, IERC20};
use super::wallet::LocalWallet;
use crate::domain::{Direction, TokenSelector, TxHandle};
use crate::error::Result;
use crate::infrastructure::config::network::ContractAddresses;
use crate::infrastructure::config::Config;
use crate::port::{BalanceSource, ContractGateway, GatewayError};

/// Gateway to the pool deployment over JSON-RPC.
pub struct EvmGateway {
    rpc_url: Url,
    contracts: ContractAddresses,
    signer: Option<PrivateKeySigner>,
}

fn read_error(e: impl Display) -> GatewayError {
    GatewayError::Read(e.to_string())
}

fn submission_error(e: impl Display) -> GatewayError {
    GatewayError::Submission(Some(e.to_string()))
}

impl EvmGateway {
    #[must_use]
    pub fn new(rpc_url: Url, contracts: ContractAddresses, signer: Option<PrivateKeySigner>) -> Self {
        Self {
            rpc_url,
            contracts,
            signer,
        }
    }

    /// Build a gateway from configuration and the wallet's signer.
    ///
    /// # Errors
    ///
    /// Returns an error if the RPC URL or contract addresses are invalid.
    pub fn from_config(config: &Config, wallet: &LocalWallet) -> Result<Self> {
        Ok(Self::new(
            config.network.rpc_url()?,
            config.contracts()?,
            wallet.signer().cloned(),
        ))
    }

    fn token_address(&self, token: TokenSelector) -> Address {
        match token {
            TokenSelector::Token0 => self.contracts.token0,
            TokenSelector::Token1 => self.contracts.token1,
        }
    }

    fn signer_for(&self, account: Address) -> std::result::Result<&PrivateKeySigner, GatewayError> {
        let signer = self.signer.as_ref().ok_or(GatewayError::SignerUnavailable)?;
        if signer.address() != account {
            return Err(GatewayError::Submission(Some(format!(
                "account {account} does not match the configured signer {}",
                signer.address()
            ))));
        }
        Ok(signer)
    }

    /// Chain id reported by the RPC endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Read`] if the endpoint cannot be reached.
    pub async fn chain_id(&self) -> std::result::Result<u64, GatewayError> {
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());
        provider.get_chain_id().await.map_err(read_error)
    }
}

#[async_trait]
impl ContractGateway for EvmGateway {
    async fn balance(
        &self,
        source: BalanceSource,
        token: TokenSelector,
        owner: Address,
    ) -> std::result::Result<U256, GatewayError> {
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());

        let raw: U256 = match source {
            BalanceSource::Deposited => {
                let pool = IHookTuah::new(self.contracts.pool, &provider);
                match token {
                    TokenSelector::Token0 => pool.token0Balance(owner).call().await,
                    TokenSelector::Token1 => pool.token1Balance(owner).call().await,
                }
                .map_err(read_error)?
            }
            BalanceSource::Wallet => {
                let erc20 = IERC20::new(self.token_address(token), &provider);
                erc20.balanceOf(owner).call().await.map_err(read_error)?
            }
        };

        debug!(source = ?source, token = %token, owner = %owner, raw = %raw, "Read balance");
        Ok(raw)
    }

    async fn approve(
        &self,
        token: TokenSelector,
        account: Address,
        amount: U256,
    ) -> std::result::Result<TxHandle, GatewayError> {
        let signer = self.signer_for(account)?;
        let wallet = alloy_provider::network::EthereumWallet::from(signer.clone());
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(self.rpc_url.clone());

        let erc20 = IERC20::new(self.token_address(token), &provider);
        let pending = erc20
            .approve(self.contracts.pool, amount)
            .from(account)
            .send()
            .await
            .map_err(submission_error)?;

        Ok(TxHandle::new(*pending.tx_hash()))
    }

    async fn transact(
        &self,
        direction: Direction,
        account: Address,
        amount: U256,
        token: TokenSelector,
    ) -> std::result::Result<TxHandle, GatewayError> {
        let signer = self.signer_for(account)?;
        let wallet = alloy_provider::network::EthereumWallet::from(signer.clone());
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(self.rpc_url.clone());

        let pool = IHookTuah::new(self.contracts.pool, &provider);
        let is_token0 = token.is_token0();
        let pending = match direction {
            Direction::Deposit => pool.deposit(amount, is_token0).from(account).send().await,
            Direction::Withdraw => pool.withdraw(amount, is_token0).from(account).send().await,
        }
        .map_err(submission_error)?;

        Ok(TxHandle::new(*pending.tx_hash()))
    }

    fn pool_address(&self) -> Address {
        self.contracts.pool
    }
}

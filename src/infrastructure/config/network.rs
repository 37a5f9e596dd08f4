//! Chain endpoint and deployed contract addresses.

use std::str::FromStr;

use alloy_primitives::Address;
use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, Result};

/// Base Sepolia chain id.
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;

/// Public Base Sepolia RPC endpoint.
pub const BASE_SEPOLIA_RPC: &str = "https://sepolia.base.org";

/// Basescan explorer for Base Sepolia.
pub const BASE_SEPOLIA_EXPLORER: &str = "https://sepolia.basescan.org";

/// HookTuah pool contract on Base Sepolia.
pub const POOL_ADDRESS: &str = "0xE73C81b5386aa1E90a74A1cbF8c9C6bB45461540";

/// First pool token on Base Sepolia.
pub const TOKEN0_ADDRESS: &str = "0xdD37D4a3F585af19C66291151537002012c90CB2";

/// Second pool token on Base Sepolia.
pub const TOKEN1_ADDRESS: &str = "0x3f6ad5DB52D7Ed9879532a40558851078a7f4496";

/// Chain endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// Display name of the chain.
    #[serde(default = "default_network_name")]
    pub name: String,
    /// Chain id used when signing.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    /// JSON-RPC endpoint.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Block explorer base URL.
    #[serde(default = "default_explorer_url")]
    pub explorer_url: String,
}

fn default_network_name() -> String {
    "Base Sepolia".into()
}

const fn default_chain_id() -> u64 {
    BASE_SEPOLIA_CHAIN_ID
}

fn default_rpc_url() -> String {
    BASE_SEPOLIA_RPC.into()
}

fn default_explorer_url() -> String {
    BASE_SEPOLIA_EXPLORER.into()
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: default_network_name(),
            chain_id: default_chain_id(),
            rpc_url: default_rpc_url(),
            explorer_url: default_explorer_url(),
        }
    }
}

impl NetworkConfig {
    /// Parse the RPC endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed.
    pub fn rpc_url(&self) -> Result<Url> {
        parse_url("rpc_url", &self.rpc_url)
    }

    /// Parse the explorer base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed.
    pub fn explorer_url(&self) -> Result<Url> {
        parse_url("explorer_url", &self.explorer_url)
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    Url::parse(value).map_err(|e| {
        ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Deployed contract addresses as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractsConfig {
    #[serde(default = "default_pool")]
    pub pool: String,
    #[serde(default = "default_token0")]
    pub token0: String,
    #[serde(default = "default_token1")]
    pub token1: String,
}

fn default_pool() -> String {
    POOL_ADDRESS.into()
}

fn default_token0() -> String {
    TOKEN0_ADDRESS.into()
}

fn default_token1() -> String {
    TOKEN1_ADDRESS.into()
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            pool: default_pool(),
            token0: default_token0(),
            token1: default_token1(),
        }
    }
}

/// Parsed contract addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractAddresses {
    pub pool: Address,
    pub token0: Address,
    pub token1: Address,
}

impl ContractsConfig {
    /// Parse all three addresses.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first address that does not parse.
    pub fn addresses(&self) -> Result<ContractAddresses> {
        Ok(ContractAddresses {
            pool: parse_address("pool", &self.pool)?,
            token0: parse_address("token0", &self.token0)?,
            token1: parse_address("token1", &self.token1)?,
        })
    }
}

fn parse_address(field: &'static str, value: &str) -> Result<Address> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    Address::from_str(value.trim()).map_err(|e| {
        ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addresses_parse() {
        let addresses = ContractsConfig::default().addresses().expect("defaults parse");
        assert_eq!(addresses.pool, Address::from_str(POOL_ADDRESS).expect("pool"));
        assert_ne!(addresses.token0, addresses.token1);
    }

    #[test]
    fn default_network_is_base_sepolia() {
        let network = NetworkConfig::default();
        assert_eq!(network.chain_id, 84532);
        assert_eq!(
            network.rpc_url().expect("rpc url").as_str(),
            "https://sepolia.base.org/"
        );
    }

    #[test]
    fn bad_address_names_field() {
        let contracts = ContractsConfig {
            token1: "0x1234".into(),
            ..ContractsConfig::default()
        };
        match contracts.addresses() {
            Err(crate::error::Error::Config(ConfigError::InvalidValue { field, .. })) => {
                assert_eq!(field, "token1");
            }
            other => panic!("expected invalid token1, got {other:?}"),
        }
    }

    #[test]
    fn empty_rpc_url_is_missing() {
        let network = NetworkConfig {
            rpc_url: String::new(),
            ..NetworkConfig::default()
        };
        assert!(matches!(
            network.rpc_url(),
            Err(crate::error::Error::Config(ConfigError::MissingField { field: "rpc_url" }))
        ));
    }
}

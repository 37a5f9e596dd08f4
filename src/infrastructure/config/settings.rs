//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from an optional TOML file with environment variable
//! overrides for sensitive values like `WALLET_PRIVATE_KEY`. Every field has a
//! default pointing at the Base Sepolia deployment, so running without a file
//! is supported.
//!
//! # Example
//!
//! ```no_run
//! use hooktuah::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("hooktuah.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer};

use super::logging::LoggingConfig;
use super::network::{ContractAddresses, ContractsConfig, NetworkConfig};
use super::wallet::WalletConfig;
use crate::domain::to_base_units;
use crate::error::{ConfigError, Result};

/// Allowance granted by each approval, in whole tokens.
///
/// 1,000,000 tokens (10^24 base units) is treated as unlimited.
pub const DEFAULT_APPROVAL_TOKENS: u64 = 1_000_000;

/// Keyword for the largest allowance a `uint256` can hold.
pub const MAX_APPROVAL: &str = "max";

/// Approval settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApprovalConfig {
    /// Allowance granted to the pool, in whole tokens. Accepts a TOML
    /// number, a decimal string for values past 64 bits, or `"max"`.
    #[serde(
        default = "default_approval_amount",
        deserialize_with = "deserialize_amount"
    )]
    pub amount: String,
}

fn default_approval_amount() -> String {
    DEFAULT_APPROVAL_TOKENS.to_string()
}

fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Integer(i64),
        Float(f64),
        Text(String),
    }

    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Integer(value) => value.to_string(),
        RawAmount::Float(value) => value.to_string(),
        RawAmount::Text(text) => text,
    })
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self {
            amount: default_approval_amount(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Chain endpoint settings.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Deployed pool and token addresses.
    #[serde(default)]
    pub contracts: ContractsConfig,

    /// Approval allowance policy.
    #[serde(default)]
    pub approval: ApprovalConfig,

    /// Wallet configuration for transaction signing.
    ///
    /// Private key is loaded from `WALLET_PRIVATE_KEY` environment variable.
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn read_keystore_password() -> Result<String> {
    if let Ok(password) = std::env::var("HOOKTUAH_KEYSTORE_PASSWORD") {
        return Ok(password);
    }
    if let Ok(path) = std::env::var("HOOKTUAH_KEYSTORE_PASSWORD_FILE") {
        let contents = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let password = contents.trim().to_string();
        if password.is_empty() {
            return Err(ConfigError::MissingField {
                field: "HOOKTUAH_KEYSTORE_PASSWORD_FILE",
            }
            .into());
        }
        return Ok(password);
    }

    Err(ConfigError::MissingField {
        field: "HOOKTUAH_KEYSTORE_PASSWORD",
    }
    .into())
}

fn decrypt_keystore_private_key(path: &str, password: &str) -> Result<String> {
    use alloy_signer_local::PrivateKeySigner;

    let signer = PrivateKeySigner::decrypt_keystore(path, password).map_err(|e| {
        ConfigError::InvalidValue {
            field: "keystore_path",
            reason: e.to_string(),
        }
    })?;
    Ok(format!("{:x}", signer.to_bytes()))
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the private key from the `WALLET_PRIVATE_KEY` environment variable
    /// or decrypts it from a keystore file if `keystore_path` is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., an unparseable contract address)
    /// - Keystore decryption fails when using keystore authentication
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.load_wallet()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Built-in defaults plus wallet material from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if keystore decryption fails.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.load_wallet()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use [`Config::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if loading or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::from_env(),
        }
    }

    fn load_wallet(&mut self) -> Result<()> {
        // Private key comes from the environment only, never from the file.
        self.wallet.private_key = std::env::var("WALLET_PRIVATE_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if self.wallet.private_key.is_none() {
            if let Some(ref keystore_path) = self.wallet.keystore_path {
                let password = read_keystore_password()?;
                self.wallet.private_key =
                    Some(decrypt_keystore_private_key(keystore_path, &password)?);
            }
        }
        Ok(())
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        self.network.rpc_url()?;
        self.network.explorer_url()?;
        if self.network.chain_id == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chain_id",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        self.contracts.addresses()?;
        if self.approval_units()?.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "approval.amount",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Parsed contract addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if an address does not parse.
    pub fn contracts(&self) -> Result<ContractAddresses> {
        self.contracts.addresses()
    }

    /// Approval allowance in base units.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured amount cannot be represented.
    pub fn approval_units(&self) -> Result<U256> {
        if self.approval.amount.trim().eq_ignore_ascii_case(MAX_APPROVAL) {
            return Ok(U256::MAX);
        }
        to_base_units(&self.approval.amount).map_err(|e| {
            ConfigError::InvalidValue {
                field: "approval.amount",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_yields_base_sepolia_defaults() {
        let config = Config::parse_toml("").expect("defaults are valid");
        assert_eq!(config.network.chain_id, 84532);
        assert_eq!(config.network.rpc_url, "https://sepolia.base.org");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn default_approval_is_ten_to_the_twenty_fourth() {
        let config = Config::parse_toml("").expect("defaults are valid");
        assert_eq!(
            config.approval_units().expect("units"),
            U256::from(10u64).pow(U256::from(24u64))
        );
    }

    #[test]
    fn rejects_zero_approval() {
        let result = Config::parse_toml("[approval]\namount = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "approval.amount",
                ..
            }))
        ));
    }

    #[test]
    fn approval_accepts_amounts_past_sixty_four_bits() {
        let config =
            Config::parse_toml("[approval]\namount = \"100000000000000000000000000000\"\n")
                .expect("valid");
        assert_eq!(
            config.approval_units().expect("units"),
            U256::from(10u64).pow(U256::from(47u64))
        );
    }

    #[test]
    fn max_approval_is_full_uint256() {
        let config = Config::parse_toml("[approval]\namount = \"max\"\n").expect("valid");
        assert_eq!(config.approval_units().expect("units"), U256::MAX);
    }

    #[test]
    fn rejects_non_numeric_approval_text() {
        let result = Config::parse_toml("[approval]\namount = \"lots\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "approval.amount",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_zero_chain_id() {
        let result = Config::parse_toml("[network]\nchain_id = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "chain_id",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = Config::parse_toml("[network\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn overrides_contract_addresses() {
        let toml = r#"
[contracts]
pool = "0x0000000000000000000000000000000000000001"
"#;
        let config = Config::parse_toml(toml).expect("valid");
        assert_eq!(
            config.contracts().expect("addresses").pool,
            alloy_primitives::Address::with_last_byte(1)
        );
    }
}

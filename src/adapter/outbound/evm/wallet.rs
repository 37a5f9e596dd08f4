//! Local wallet session backed by a private key.
//!
//! Stands in for a browser wallet: the account comes from the configured
//! key (raw `WALLET_PRIVATE_KEY` or a decrypted keystore). A watch-only
//! session has an account but cannot sign.

use std::str::FromStr;

use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;

use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;
use crate::port::WalletSession;

/// Wallet collaborator for the CLI.
#[derive(Debug, Clone, Default)]
pub struct LocalWallet {
    signer: Option<PrivateKeySigner>,
    watch: Option<Address>,
}

impl LocalWallet {
    /// No account and no signer.
    #[must_use]
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Session for a private key in hex form.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or malformed.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        if private_key.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "WALLET_PRIVATE_KEY",
            }
            .into());
        }
        let signer = PrivateKeySigner::from_str(private_key.trim()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "WALLET_PRIVATE_KEY",
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            signer: Some(signer),
            watch: None,
        })
    }

    /// Session from configured key material; disconnected when none is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured key is malformed.
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.wallet.private_key.as_deref() {
            Some(key) => Self::from_private_key(key),
            None => Ok(Self::disconnected()),
        }
    }

    /// Read-only session for an address without key material.
    #[must_use]
    pub fn watch_only(address: Address) -> Self {
        Self {
            signer: None,
            watch: Some(address),
        }
    }

    /// The signing key, if any.
    #[must_use]
    pub fn signer(&self) -> Option<&PrivateKeySigner> {
        self.signer.as_ref()
    }

    /// Address of the configured signing key.
    ///
    /// # Errors
    ///
    /// Returns an error if no key is configured.
    pub fn require_address(&self) -> Result<Address> {
        self.signer.as_ref().map(PrivateKeySigner::address).ok_or_else(|| {
            ConfigError::MissingField {
                field: "WALLET_PRIVATE_KEY",
            }
            .into()
        })
    }
}

impl WalletSession for LocalWallet {
    fn account(&self) -> Option<Address> {
        self.signer
            .as_ref()
            .map(PrivateKeySigner::address)
            .or(self.watch)
    }

    fn can_sign(&self) -> bool {
        self.signer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    // Well-known development key (anvil account #0).
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn private_key_yields_signing_session() {
        let wallet = LocalWallet::from_private_key(DEV_KEY).expect("valid key");
        assert_eq!(
            wallet.account(),
            Some(Address::from_str(DEV_ADDRESS).expect("address"))
        );
        assert!(wallet.can_sign());
        assert!(wallet.is_connected());
    }

    #[test]
    fn watch_only_session_cannot_sign() {
        let wallet = LocalWallet::watch_only(Address::repeat_byte(0x09));
        assert_eq!(wallet.account(), Some(Address::repeat_byte(0x09)));
        assert!(!wallet.can_sign());
    }

    #[test]
    fn disconnected_session_has_no_account() {
        let wallet = LocalWallet::disconnected();
        assert!(!wallet.is_connected());
        assert!(matches!(
            wallet.require_address(),
            Err(Error::Config(ConfigError::MissingField {
                field: "WALLET_PRIVATE_KEY"
            }))
        ));
    }

    #[test]
    fn malformed_key_is_rejected() {
        assert!(matches!(
            LocalWallet::from_private_key("not-a-key"),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "WALLET_PRIVATE_KEY",
                ..
            }))
        ));
    }
}

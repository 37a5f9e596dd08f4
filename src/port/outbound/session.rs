//! Wallet session port.
//!
//! The wallet collaborator owns the connected account and the signing
//! client; everything else only reads them.

use alloy_primitives::Address;

/// Read-only view of the connected wallet.
pub trait WalletSession: Send + Sync {
    /// Connected account, if any.
    fn account(&self) -> Option<Address>;

    /// Whether a signing client is available for writes.
    fn can_sign(&self) -> bool;

    /// Whether an account is connected.
    fn is_connected(&self) -> bool {
        self.account().is_some()
    }
}

/// Point-in-time copy of a [`WalletSession`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub account: Option<Address>,
    pub can_sign: bool,
}

impl SessionState {
    /// No account, no signer.
    #[must_use]
    pub const fn disconnected() -> Self {
        Self {
            account: None,
            can_sign: false,
        }
    }

    /// Account with a signing client.
    #[must_use]
    pub const fn signing(account: Address) -> Self {
        Self {
            account: Some(account),
            can_sign: true,
        }
    }

    /// Account without a signing client; reads only.
    #[must_use]
    pub const fn watch_only(account: Address) -> Self {
        Self {
            account: Some(account),
            can_sign: false,
        }
    }

    /// Capture the current state of a session.
    pub fn of(session: &dyn WalletSession) -> Self {
        Self {
            account: session.account(),
            can_sign: session.can_sign(),
        }
    }
}

impl WalletSession for SessionState {
    fn account(&self) -> Option<Address> {
        self.account
    }

    fn can_sign(&self) -> bool {
        self.can_sign && self.account.is_some()
    }
}

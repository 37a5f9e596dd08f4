//! Displayed balances for the connected account.

use std::fmt;

use alloy_primitives::U256;
use serde::Serialize;

use super::amount::format_units;
use super::token::TokenSelector;

/// Placeholder shown for a balance that has not been read successfully.
pub const UNKNOWN_BALANCE: &str = "-";

/// A single token balance, either read from the contract or unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Balance {
    #[default]
    Unknown,
    Known(String),
}

impl Balance {
    /// Build a known balance from raw contract units.
    #[must_use]
    pub fn from_units(raw: U256) -> Self {
        Self::Known(format_units(raw))
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => UNKNOWN_BALANCE,
            Self::Known(value) => value,
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both token balances as of the last fetch.
///
/// Snapshots are replaced as a whole on every fetch; fields are never
/// updated one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BalanceSnapshot {
    pub token0: Balance,
    pub token1: Balance,
}

impl BalanceSnapshot {
    /// Snapshot with both balances unknown.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(token0: Balance, token1: Balance) -> Self {
        Self { token0, token1 }
    }

    #[must_use]
    pub fn get(&self, token: TokenSelector) -> &Balance {
        match token {
            TokenSelector::Token0 => &self.token0,
            TokenSelector::Token1 => &self.token1,
        }
    }

    /// Display pair, `-` standing in for unknown values.
    #[must_use]
    pub fn display_pair(&self) -> (&str, &str) {
        (self.token0.as_str(), self.token1.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_snapshot_displays_placeholders() {
        assert_eq!(BalanceSnapshot::unknown().display_pair(), ("-", "-"));
    }

    #[test]
    fn known_balance_is_scaled() {
        let balance = Balance::from_units(U256::from(5_000_000_000_000_000_000u128));
        assert_eq!(balance, Balance::Known("5.0".into()));
        assert!(balance.is_known());
    }

    #[test]
    fn get_selects_by_token() {
        let snapshot = BalanceSnapshot::new(Balance::Unknown, Balance::Known("1.0".into()));
        assert_eq!(snapshot.get(TokenSelector::Token1).as_str(), "1.0");
        assert_eq!(snapshot.get(TokenSelector::Token0).as_str(), "-");
    }

    #[test]
    fn serializes_unknown_as_null() {
        let snapshot = BalanceSnapshot::new(Balance::Unknown, Balance::Known("2.5".into()));
        let json = serde_json::to_value(&snapshot).expect("serialize");
        assert_eq!(json["token0"], serde_json::Value::Null);
        assert_eq!(json["token1"], "2.5");
    }
}

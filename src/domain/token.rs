//! Token selection for pool operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which of the pool's two tokens an action targets.
///
/// The pool contract takes this as its `isToken0` boolean argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenSelector {
    #[default]
    Token0,
    Token1,
}

impl TokenSelector {
    /// Both selectors, in display order.
    pub const ALL: [Self; 2] = [Self::Token0, Self::Token1];

    /// Value of the contract's `isToken0` argument.
    #[must_use]
    pub const fn is_token0(self) -> bool {
        matches!(self, Self::Token0)
    }

    /// Position of this token in per-token arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Token0 => 0,
            Self::Token1 => 1,
        }
    }

    /// The other token.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Token0 => Self::Token1,
            Self::Token1 => Self::Token0,
        }
    }

    /// Human-readable label used in status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Token0 => "Token0",
            Self::Token1 => "Token1",
        }
    }
}

impl fmt::Display for TokenSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a token name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token '{0}', expected token0 or token1")]
pub struct UnknownToken(pub String);

impl FromStr for TokenSelector {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "token0" | "0" => Ok(Self::Token0),
            "token1" | "1" => Ok(Self::Token1),
            other => Err(UnknownToken(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_token0() {
        assert_eq!(TokenSelector::default(), TokenSelector::Token0);
        assert!(TokenSelector::default().is_token0());
    }

    #[test]
    fn token1_maps_to_false_flag() {
        assert!(!TokenSelector::Token1.is_token0());
    }

    #[test]
    fn parses_names_and_indices() {
        assert_eq!("Token1".parse::<TokenSelector>(), Ok(TokenSelector::Token1));
        assert_eq!("0".parse::<TokenSelector>(), Ok(TokenSelector::Token0));
        assert!("token2".parse::<TokenSelector>().is_err());
    }

    #[test]
    fn other_flips_selection() {
        assert_eq!(TokenSelector::Token0.other(), TokenSelector::Token1);
        assert_eq!(TokenSelector::Token1.other().other(), TokenSelector::Token1);
    }
}

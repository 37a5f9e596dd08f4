//! Direction of a pool transaction.

use std::fmt;

use serde::Serialize;

/// Whether a pool transaction moves tokens in or out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Deposit,
    Withdraw,
}

impl Direction {
    pub const ALL: [Self; 2] = [Self::Deposit, Self::Withdraw];

    /// Pool contract function invoked for this direction.
    #[must_use]
    pub const fn function_name(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Deposit => 0,
            Self::Withdraw => 1,
        }
    }

    /// Status text shown after a successful submission.
    #[must_use]
    pub fn success_message(self) -> String {
        format!("{} successful!", self.label())
    }

    /// Status text shown after a failed submission.
    #[must_use]
    pub fn failure_message(self, reason: impl fmt::Display) -> String {
        format!("{} failed: {reason}", self.label())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_direction_specific() {
        assert_eq!(Direction::Deposit.success_message(), "Deposit successful!");
        assert_eq!(
            Direction::Withdraw.failure_message("insufficient funds"),
            "Withdraw failed: insufficient funds"
        );
    }
}

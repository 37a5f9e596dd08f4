//! Fixed-point conversion between decimal token amounts and contract units.
//!
//! Both pool tokens use 18 decimals, so every amount crossing the contract
//! boundary is scaled by 10^18. User input is truncated toward zero past
//! the 18th fractional digit; contract values are rendered exactly.

use std::fmt;

use alloy_primitives::U256;
use thiserror::Error;

/// Number of decimals used by both pool tokens.
pub const TOKEN_DECIMALS: u32 = 18;

/// Errors raised when user input cannot become a contract amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a decimal number")]
    Invalid(String),

    #[error("amount must not be negative")]
    Negative,

    #[error("amount does not fit in 256 bits")]
    TooLarge,
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Convert decimal text such as `"2.5"` to contract base units.
///
/// Digits beyond the 18th decimal place are truncated. Any amount whose
/// scaled value fits in a `uint256` is accepted.
///
/// # Errors
///
/// Returns [`AmountError::Empty`] for blank text, [`AmountError::Invalid`]
/// for anything that is not a plain decimal, [`AmountError::Negative`] for
/// a leading minus and [`AmountError::TooLarge`] past `uint256`.
pub fn to_base_units(text: &str) -> Result<U256, AmountError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AmountError::Empty);
    }
    if let Some(rest) = text.strip_prefix('-') {
        return match to_base_units(rest) {
            Ok(_) | Err(AmountError::TooLarge) => Err(AmountError::Negative),
            Err(_) => Err(AmountError::Invalid(text.to_string())),
        };
    }

    let unsigned = text.strip_prefix('+').unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(AmountError::Invalid(text.to_string()));
    }

    let decimals = TOKEN_DECIMALS as usize;
    let fraction = &fraction[..fraction.len().min(decimals)];
    let digits = format!("{whole}{fraction:0<decimals$}");
    U256::from_str_radix(&digits, 10).map_err(|_| AmountError::TooLarge)
}

/// Render contract base units as a decimal string.
///
/// Always keeps at least one fractional digit and trims trailing zeros, so
/// `5 * 10^18` renders as `5.0` and zero as `0.0`.
#[must_use]
pub fn format_units(raw: U256) -> String {
    let scale = U256::from(10u64).pow(U256::from(TOKEN_DECIMALS));
    let (whole, fraction) = raw.div_rem(scale);

    let padded = format!("{:0>width$}", fraction.to_string(), width = TOKEN_DECIMALS as usize);
    let trimmed = padded.trim_end_matches('0');
    let fraction = if trimmed.is_empty() { "0" } else { trimmed };

    format!("{whole}.{fraction}")
}

/// Text typed by the user into an amount field.
///
/// Kept as raw text until submission so that partially typed values never
/// raise errors; [`AmountInput::to_units`] validates on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountInput(String);

impl AmountInput {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Replace the current text.
    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    /// Reset to the empty field.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Parse the text and scale it to contract base units.
    ///
    /// # Errors
    ///
    /// Returns an [`AmountError`] when the text is not a usable amount.
    pub fn to_units(&self) -> Result<U256, AmountError> {
        to_base_units(&self.0)
    }
}

impl fmt::Display for AmountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AmountInput {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(value: u128) -> U256 {
        U256::from(value)
    }

    fn scale() -> U256 {
        U256::from(10u64).pow(U256::from(TOKEN_DECIMALS))
    }

    #[test]
    fn scales_whole_amounts() {
        assert_eq!(to_base_units("5"), Ok(units(5_000_000_000_000_000_000)));
    }

    #[test]
    fn scales_fractional_amounts() {
        assert_eq!(to_base_units("2.5"), Ok(units(2_500_000_000_000_000_000)));
        assert_eq!(to_base_units(".5"), Ok(units(500_000_000_000_000_000)));
        assert_eq!(to_base_units("7."), Ok(units(7_000_000_000_000_000_000)));
    }

    #[test]
    fn smallest_unit_survives() {
        assert_eq!(to_base_units("0.000000000000000001"), Ok(units(1)));
    }

    #[test]
    fn truncates_past_eighteen_decimals() {
        assert_eq!(to_base_units("0.0000000000000000019"), Ok(units(1)));
    }

    #[test]
    fn rejects_negative_amounts() {
        assert_eq!(to_base_units("-1"), Err(AmountError::Negative));
        assert_eq!(to_base_units("-0.5"), Err(AmountError::Negative));
    }

    #[test]
    fn accepts_amounts_beyond_fixed_point_decimal_range() {
        assert_eq!(
            AmountInput::new("100000000000").to_units(),
            Ok(U256::from(100_000_000_000u64) * scale())
        );
        assert_eq!(
            AmountInput::new("80000000000").to_units(),
            Ok(U256::from(80_000_000_000u64) * scale())
        );
    }

    #[test]
    fn accepts_largest_whole_amount_that_fits() {
        let max_whole = U256::MAX / scale();
        assert_eq!(to_base_units(&max_whole.to_string()), Ok(max_whole * scale()));
    }

    #[test]
    fn rejects_amounts_past_uint256() {
        let too_many = (U256::MAX / scale() + U256::from(1u64)).to_string();
        assert_eq!(to_base_units(&too_many), Err(AmountError::TooLarge));
        let huge = format!("{}0", U256::MAX);
        assert_eq!(to_base_units(&huge), Err(AmountError::TooLarge));
    }

    #[test]
    fn formats_whole_balance_with_single_fraction_digit() {
        assert_eq!(format_units(units(5_000_000_000_000_000_000)), "5.0");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_units(U256::ZERO), "0.0");
    }

    #[test]
    fn formats_fraction_without_trailing_zeros() {
        assert_eq!(format_units(units(2_500_000_000_000_000_000)), "2.5");
        assert_eq!(format_units(units(1)), "0.000000000000000001");
    }

    #[test]
    fn formats_values_beyond_u128() {
        let raw = U256::from(10u64).pow(U256::from(40u64));
        assert_eq!(format_units(raw), "10000000000000000000000.0");
    }

    #[test]
    fn formatted_units_parse_back() {
        for text in ["2.5", "0.1", "123.456789", "1000000.0", "0.000000000000000001"] {
            let raw = AmountInput::new(text).to_units().expect("valid amount");
            assert_eq!(format_units(raw), text);
            assert_eq!(to_base_units(&format_units(raw)), Ok(raw));
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(AmountInput::new("  ").to_units(), Err(AmountError::Empty));
        assert!(AmountInput::default().is_empty());
    }

    #[test]
    fn garbage_input_is_rejected() {
        for text in ["abc", ".", "1.2.3", "1e18", "0x10", "--1", "-", "1 000"] {
            assert_eq!(
                to_base_units(text),
                Err(AmountError::Invalid(text.into())),
                "{text}"
            );
        }
    }

    #[test]
    fn negative_input_is_rejected() {
        assert_eq!(AmountInput::new("-3").to_units(), Err(AmountError::Negative));
    }

    #[test]
    fn clear_empties_the_field() {
        let mut input = AmountInput::new("2.5");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.as_str(), "");
    }
}

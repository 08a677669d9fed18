//! Conversion between base (micro) units and the displayed major unit.
//!
//! Amounts travel as strings and are handled as `u128` base units, so balances
//! far above 2^53 convert exactly.

use crate::config::consts::{BASE_UNITS_PER_MAJOR, DEFAULT_MAX_SUPPLY_BASE, DENOM_EXPONENT};
use crate::error::{Result, ValidatorClientError};

/// Converter bound to a maximum supply ceiling (in base units).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenomConverter {
    max_supply: u128,
}

impl Default for DenomConverter {
    fn default() -> Self {
        Self {
            max_supply: DEFAULT_MAX_SUPPLY_BASE,
        }
    }
}

impl DenomConverter {
    pub fn new(max_supply: u128) -> Self {
        Self { max_supply }
    }

    pub fn max_supply(&self) -> u128 {
        self.max_supply
    }

    /// Convert a base-unit integer string into a major-unit decimal string.
    ///
    /// `"1500000"` becomes `"1.5"`, `"1"` becomes `"0.000001"`.
    pub fn to_major_unit(&self, base_amount: &str) -> Result<String> {
        let parts = AmountParts::parse(base_amount)?;
        if parts.fraction.len() > DENOM_EXPONENT as usize {
            return Err(precision_error(base_amount));
        }
        if base_amount.contains('.') {
            return Err(ValidatorClientError::invalid_amount(
                base_amount,
                "base amounts must be whole numbers",
            ));
        }
        if parts.whole.len() > 1 && parts.whole.starts_with('0') {
            return Err(ValidatorClientError::invalid_amount(
                base_amount,
                "leading zeros are not allowed",
            ));
        }

        let base = parts
            .whole
            .parse::<u128>()
            .map_err(|_| self.out_of_range(base_amount))?;
        self.check_ceiling(base, base_amount)?;

        let whole = base / BASE_UNITS_PER_MAJOR;
        let remainder = base % BASE_UNITS_PER_MAJOR;
        if remainder == 0 {
            return Ok(whole.to_string());
        }

        let fraction = format!("{:0>width$}", remainder, width = DENOM_EXPONENT as usize);
        Ok(format!("{}.{}", whole, fraction.trim_end_matches('0')))
    }

    /// Convert a major-unit decimal string into a base-unit integer string.
    ///
    /// Trailing fractional zeros are not significant: `"1.5000000"` is `"1500000"`.
    pub fn to_base_unit(&self, major_amount: &str) -> Result<String> {
        let parts = AmountParts::parse(major_amount)?;
        if parts.fraction.len() > DENOM_EXPONENT as usize {
            return Err(precision_error(major_amount));
        }

        let whole = parts
            .whole
            .parse::<u128>()
            .map_err(|_| self.out_of_range(major_amount))?;
        let fraction = if parts.fraction.is_empty() {
            0
        } else {
            format!("{:0<width$}", parts.fraction, width = DENOM_EXPONENT as usize)
                .parse::<u128>()
                .map_err(|_| ValidatorClientError::invalid_amount(major_amount, "not a number"))?
        };

        let base = whole
            .checked_mul(BASE_UNITS_PER_MAJOR)
            .and_then(|scaled| scaled.checked_add(fraction))
            .ok_or_else(|| self.out_of_range(major_amount))?;
        self.check_ceiling(base, major_amount)?;

        Ok(base.to_string())
    }

    fn check_ceiling(&self, base: u128, original: &str) -> Result<()> {
        if base > self.max_supply {
            return Err(self.out_of_range(original));
        }
        Ok(())
    }

    fn out_of_range(&self, amount: &str) -> ValidatorClientError {
        ValidatorClientError::OutOfRange {
            amount: amount.to_string(),
            max: self.max_supply,
        }
    }
}

/// Convert base units to major units using the default supply ceiling.
pub fn to_major_unit(base_amount: &str) -> Result<String> {
    DenomConverter::default().to_major_unit(base_amount)
}

/// Convert major units to base units using the default supply ceiling.
pub fn to_base_unit(major_amount: &str) -> Result<String> {
    DenomConverter::default().to_base_unit(major_amount)
}

/// Display denomination for a base denomination: `unym` is shown as `nym`.
pub fn display_denom(base_denom: &str) -> String {
    match base_denom.strip_prefix('u') {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => base_denom.to_string(),
    }
}

/// Whether `value` is a non-negative integer string (a base-unit amount).
pub fn is_base_amount(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `value` is a non-negative decimal string such as a cosmwasm `Decimal`.
pub fn is_decimal(value: &str) -> bool {
    match value.split_once('.') {
        Some((whole, fraction)) => is_base_amount(whole) && is_base_amount(fraction),
        None => is_base_amount(value),
    }
}

fn precision_error(amount: &str) -> ValidatorClientError {
    ValidatorClientError::Precision {
        amount: amount.to_string(),
        max_decimals: DENOM_EXPONENT,
    }
}

/// Syntactic split of a decimal string; `fraction` has trailing zeros removed.
struct AmountParts<'a> {
    whole: &'a str,
    fraction: &'a str,
}

impl<'a> AmountParts<'a> {
    fn parse(amount: &'a str) -> Result<Self> {
        if amount.is_empty() {
            return Err(ValidatorClientError::invalid_amount(amount, "empty amount"));
        }
        if amount.starts_with('-') {
            return Err(ValidatorClientError::invalid_amount(
                amount,
                "negative amounts are not allowed",
            ));
        }
        if !is_decimal(amount) {
            return Err(ValidatorClientError::invalid_amount(
                amount,
                "not a decimal number",
            ));
        }

        let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
        Ok(Self {
            whole,
            fraction: fraction.trim_end_matches('0'),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_major_unit() {
        assert_eq!(to_major_unit("0").unwrap(), "0");
        assert_eq!(to_major_unit("1").unwrap(), "0.000001");
        assert_eq!(to_major_unit("1000000").unwrap(), "1");
        assert_eq!(to_major_unit("1500000").unwrap(), "1.5");
        assert_eq!(to_major_unit("123456789").unwrap(), "123.456789");
    }

    #[test]
    fn test_to_base_unit() {
        assert_eq!(to_base_unit("0").unwrap(), "0");
        assert_eq!(to_base_unit("0.000001").unwrap(), "1");
        assert_eq!(to_base_unit("1.5").unwrap(), "1500000");
        assert_eq!(to_base_unit("1.5000000").unwrap(), "1500000");
        assert_eq!(to_base_unit("42").unwrap(), "42000000");
    }

    #[test]
    fn test_round_trip() {
        for base in ["999999999999999", "1000000000000000", "123456789012345", "7"] {
            let major = to_major_unit(base).unwrap();
            assert_eq!(to_base_unit(&major).unwrap(), base, "major = {major}");
        }
    }

    #[test]
    fn test_round_trip_above_float_precision() {
        let converter = DenomConverter::new(u128::MAX);
        // 2^53 + 1 and a balance far beyond any f64 mantissa
        for base in ["9007199254740993", "340282366920938463463374607431768211455"] {
            let major = converter.to_major_unit(base).unwrap();
            assert_eq!(converter.to_base_unit(&major).unwrap(), base);
        }
        assert_eq!(
            converter.to_major_unit("9007199254740993").unwrap(),
            "9007199254.740993"
        );
    }

    #[test]
    fn test_rejects_excess_precision() {
        assert!(matches!(
            to_base_unit("0.0000001"),
            Err(ValidatorClientError::Precision { max_decimals: 6, .. })
        ));
        assert!(matches!(
            to_major_unit("1.1234567"),
            Err(ValidatorClientError::Precision { .. })
        ));
    }

    #[test]
    fn test_rejects_non_canonical_base_amounts() {
        for input in ["1.5", "1.0", "1.000000", "007", "00"] {
            assert!(
                matches!(
                    to_major_unit(input),
                    Err(ValidatorClientError::InvalidAmount { .. })
                ),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        for input in ["", "-1", "abc", "1.2.3", "+5", " 1", "1.", ".5", "1e6"] {
            assert!(
                matches!(
                    to_base_unit(input),
                    Err(ValidatorClientError::InvalidAmount { .. })
                ),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_amounts_above_supply() {
        assert!(to_base_unit("1000000000").is_ok());
        assert!(matches!(
            to_base_unit("1000000000.000001"),
            Err(ValidatorClientError::OutOfRange { .. })
        ));
        assert!(matches!(
            to_major_unit("1000000000000001"),
            Err(ValidatorClientError::OutOfRange { .. })
        ));
        // does not fit into u128 at all
        assert!(matches!(
            to_major_unit("999999999999999999999999999999999999999999"),
            Err(ValidatorClientError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_custom_ceiling() {
        let converter = DenomConverter::new(10_000_000);
        assert_eq!(converter.to_base_unit("10").unwrap(), "10000000");
        assert!(matches!(
            converter.to_base_unit("10.000001"),
            Err(ValidatorClientError::OutOfRange { max: 10_000_000, .. })
        ));
    }

    #[test]
    fn test_display_denom() {
        assert_eq!(display_denom("unym"), "nym");
        assert_eq!(display_denom("unyx"), "nyx");
        assert_eq!(display_denom("u"), "u");
        assert_eq!(display_denom("stake"), "stake");
    }

    #[test]
    fn test_decimal_shapes() {
        assert!(is_base_amount("0"));
        assert!(!is_base_amount("1.0"));
        assert!(is_decimal("0.123456789012345678"));
        assert!(!is_decimal("-0.1"));
        assert!(!is_decimal(""));
    }

    proptest! {
        #[test]
        fn prop_round_trip_within_supply(base in 0..=DEFAULT_MAX_SUPPLY_BASE) {
            let base = base.to_string();
            let major = to_major_unit(&base).unwrap();
            prop_assert_eq!(to_base_unit(&major).unwrap(), base);
        }

        #[test]
        fn prop_round_trip_full_u128(base in any::<u128>()) {
            let converter = DenomConverter::new(u128::MAX);
            let base = base.to_string();
            let major = converter.to_major_unit(&base).unwrap();
            prop_assert_eq!(converter.to_base_unit(&major).unwrap(), base);
        }

        #[test]
        fn prop_excess_precision_is_rejected(
            whole in 0u32..1_000_000,
            fraction in "[0-9]{6}[0-9]{0,5}[1-9]",
        ) {
            let amount = format!("{whole}.{fraction}");
            let is_precision_error =
                matches!(to_base_unit(&amount), Err(ValidatorClientError::Precision { .. }));
            prop_assert!(is_precision_error, "{} was not rejected", amount);
            let is_precision_error =
                matches!(to_major_unit(&amount), Err(ValidatorClientError::Precision { .. }));
            prop_assert!(is_precision_error, "{} was not rejected", amount);
        }
    }
}

//! String shapes used by the contracts for amounts, ratios and identifiers.
//!
//! Each newtype refuses malformed values while deserializing, so a DTO that
//! deserialized successfully only holds well-formed strings.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::denom;

macro_rules! string_newtype {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

/// Non-negative integer amount in base units (cosmwasm `Uint128`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BaseAmount(String);

string_newtype!(BaseAmount);

impl TryFrom<String> for BaseAmount {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !denom::is_base_amount(&value) {
            return Err(format!("`{value}` is not a non-negative integer amount"));
        }
        Ok(Self(value))
    }
}

impl From<u128> for BaseAmount {
    fn from(value: u128) -> Self {
        Self(value.to_string())
    }
}

/// Non-negative decimal (cosmwasm `Decimal`), e.g. `"0.853"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Decimal(String);

string_newtype!(Decimal);

impl TryFrom<String> for Decimal {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !denom::is_decimal(&value) {
            return Err(format!("`{value}` is not a non-negative decimal"));
        }
        Ok(Self(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

string_newtype!(NonEmptyString);

impl TryFrom<String> for NonEmptyString {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err("must not be empty".to_string());
        }
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_amount_shape() {
        let amount: BaseAmount = serde_json::from_value(json!("250000000")).unwrap();
        assert_eq!(amount, "250000000");
        assert_eq!(BaseAmount::from(42u128), "42");

        for bad in [json!("2.5"), json!("-1"), json!(""), json!(250)] {
            assert!(serde_json::from_value::<BaseAmount>(bad).is_err());
        }
    }

    #[test]
    fn test_decimal_shape() {
        let ratio: Decimal = serde_json::from_value(json!("416666666666.666666666666666666")).unwrap();
        assert_eq!(ratio.split_once('.').map(|(whole, _)| whole), Some("416666666666"));
        assert!(serde_json::from_value::<Decimal>(json!("-0.1")).is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let owner: NonEmptyString = serde_json::from_value(json!("n1owner")).unwrap();
        assert_eq!(serde_json::to_value(&owner).unwrap(), json!("n1owner"));
        assert!(serde_json::from_value::<NonEmptyString>(json!("")).is_err());
    }
}

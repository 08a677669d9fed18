use serde::{Deserialize, Serialize};

use super::{BaseAmount, NonEmptyString};
use crate::denom::{self, DenomConverter};
use crate::error::Result;

/// Amount in base units, exactly as the chain reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: NonEmptyString,
    pub amount: BaseAmount,
}

impl Coin {
    /// Major-unit representation for display, e.g. `1500000unym` -> `1.5 nym`.
    pub fn to_dec_coin(&self) -> Result<DecCoin> {
        self.to_dec_coin_with(&DenomConverter::default())
    }

    pub fn to_dec_coin_with(&self, converter: &DenomConverter) -> Result<DecCoin> {
        Ok(DecCoin {
            denom: denom::display_denom(&self.denom),
            amount: converter.to_major_unit(&self.amount)?,
        })
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Amount in major units with the display denomination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecCoin {
    pub denom: String,
    pub amount: String,
}

impl std::fmt::Display for DecCoin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.denom)
    }
}

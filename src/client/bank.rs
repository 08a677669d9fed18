use tracing::debug;

use super::{map_transport_error, QueryContext};
use crate::address::validate_address;
use crate::denom::DenomConverter;
use crate::error::{Result, ValidatorClientError};
use crate::schema::parse_response;
use crate::types::{Coin, DecCoin};

const BALANCE_OPERATION: &str = "balance";

/// Client for bank module balances in the configured denomination
#[derive(Clone)]
pub struct BankQueryClient {
    ctx: QueryContext,
    address_prefix: String,
    denom: String,
    converter: DenomConverter,
}

impl BankQueryClient {
    pub(crate) fn new(
        ctx: QueryContext,
        address_prefix: String,
        denom: String,
        converter: DenomConverter,
    ) -> Self {
        Self {
            ctx,
            address_prefix,
            denom,
            converter,
        }
    }

    pub fn denom(&self) -> &str {
        &self.denom
    }

    /// Balance of `address` in base units. The address is checked against the
    /// configured prefix before anything is sent.
    pub async fn get_balance(&self, address: &str) -> Result<Coin> {
        validate_address(address, &self.address_prefix)?;

        debug!(address, denom = %self.denom, "Querying balance");
        let raw = self
            .ctx
            .transport()
            .bank_balance(address, &self.denom)
            .await
            .map_err(|e| map_transport_error(BALANCE_OPERATION, e))?;

        let coin: Coin = parse_response(BALANCE_OPERATION, &raw)?;
        if coin.denom.as_str() != self.denom {
            return Err(ValidatorClientError::SchemaMismatch {
                query: BALANCE_OPERATION.to_string(),
                field: "denom".to_string(),
                reason: format!("expected `{}`, found `{}`", self.denom, coin.denom),
            });
        }
        Ok(coin)
    }

    /// Balance of `address` converted to the display unit, e.g. `1.5 nym`.
    pub async fn get_printable_balance(&self, address: &str) -> Result<DecCoin> {
        self.get_balance(address)
            .await?
            .to_dec_coin_with(&self.converter)
    }
}

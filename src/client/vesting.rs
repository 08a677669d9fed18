use serde::de::DeserializeOwned;

use super::msg::VestingQueryMsg;
use super::QueryContext;
use crate::address::validate_address;
use crate::error::{Result, ValidatorClientError};
use crate::types::{Coin, ContractBuildInformation, OriginalVestingResponse};

/// Client for the vesting contract queries
#[derive(Clone)]
pub struct VestingQueryClient {
    ctx: QueryContext,
    contract: String,
    address_prefix: String,
}

impl VestingQueryClient {
    pub(crate) fn new(ctx: QueryContext, contract: String, address_prefix: String) -> Self {
        Self {
            ctx,
            contract,
            address_prefix,
        }
    }

    /// Get the contract address
    pub fn address(&self) -> &str {
        &self.contract
    }

    pub async fn get_vesting_contract_version(&self) -> Result<ContractBuildInformation> {
        self.ctx
            .query(&self.contract, &VestingQueryMsg::GetContractVersion {})
            .await
    }

    /// Query on behalf of one vesting account. A node error about a missing
    /// account becomes `NotFound` for that account.
    async fn account_query<T: DeserializeOwned>(
        &self,
        address: &str,
        msg: VestingQueryMsg,
    ) -> Result<T> {
        validate_address(address, &self.address_prefix)?;
        self.ctx
            .query(&self.contract, &msg)
            .await
            .map_err(|e| match e {
                ValidatorClientError::NotFound { .. } => {
                    ValidatorClientError::not_found(format!("vesting account {address}"))
                }
                other => other,
            })
    }

    /// Coins still locked in the vesting account
    pub async fn get_locked_coins(&self, address: &str) -> Result<Coin> {
        let msg = VestingQueryMsg::GetLockedCoins {
            vesting_account_address: address.to_string(),
            block_time: None,
        };
        self.account_query(address, msg).await
    }

    /// Coins the owner can transfer out right now
    pub async fn get_spendable_coins(&self, address: &str) -> Result<Coin> {
        let msg = VestingQueryMsg::GetSpendableCoins {
            vesting_account_address: address.to_string(),
            block_time: None,
        };
        self.account_query(address, msg).await
    }

    pub async fn get_vested_coins(&self, address: &str) -> Result<Coin> {
        let msg = VestingQueryMsg::GetVestedCoins {
            vesting_account_address: address.to_string(),
            block_time: None,
        };
        self.account_query(address, msg).await
    }

    pub async fn get_vesting_coins(&self, address: &str) -> Result<Coin> {
        let msg = VestingQueryMsg::GetVestingCoins {
            vesting_account_address: address.to_string(),
            block_time: None,
        };
        self.account_query(address, msg).await
    }

    pub async fn get_original_vesting(&self, address: &str) -> Result<OriginalVestingResponse> {
        let msg = VestingQueryMsg::GetOriginalVesting {
            vesting_account_address: address.to_string(),
        };
        self.account_query(address, msg).await
    }
}

//! Contract-wide settings and metadata returned by the mixnet contract.

use serde::{Deserialize, Serialize};

use super::{Coin, Decimal, NonEmptyString};
use crate::schema::SchemaError;

/// Build metadata embedded into a contract at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractBuildInformation {
    pub build_timestamp: NonEmptyString,
    pub build_version: NonEmptyString,
    pub commit_sha: NonEmptyString,
    pub commit_timestamp: NonEmptyString,
    pub commit_branch: NonEmptyString,
    pub rustc_version: NonEmptyString,
}

pub type MixnetContractVersion = ContractBuildInformation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractStateParams {
    pub minimum_mixnode_delegation: Option<Coin>,
    pub minimum_mixnode_pledge: Coin,
    pub minimum_gateway_pledge: Coin,
}

/// Per-interval reward pool parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalRewardParams {
    pub reward_pool: Decimal,
    pub staking_supply: Decimal,
    pub staking_supply_scale_factor: Decimal,
    pub epoch_reward_budget: Decimal,
    pub stake_saturation_point: Decimal,
    pub sybil_resistance: Decimal,
    pub active_set_work_factor: Decimal,
    pub interval_pool_emission: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardingParams {
    pub interval: IntervalRewardParams,
    pub rewarded_set_size: u32,
    pub active_set_size: u32,
}

impl RewardingParams {
    /// The active set is drawn from the rewarded set and can never outgrow it.
    pub fn check(&self) -> Result<(), SchemaError> {
        if self.active_set_size > self.rewarded_set_size {
            return Err(SchemaError::new(
                "active_set_size",
                format!(
                    "active set ({}) cannot be larger than the rewarded set ({})",
                    self.active_set_size, self.rewarded_set_size
                ),
            ));
        }
        Ok(())
    }
}

/// Number of mixnodes assigned to each of the three mix layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDistribution {
    pub layer1: u64,
    pub layer2: u64,
    pub layer3: u64,
}

impl LayerDistribution {
    pub fn total(&self) -> u128 {
        u128::from(self.layer1) + u128::from(self.layer2) + u128::from(self.layer3)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochLength {
    pub secs: u64,
    pub nanos: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub id: u32,
    pub epochs_in_interval: u32,
    /// RFC 3339 timestamp
    pub current_epoch_start: NonEmptyString,
    pub current_epoch_id: u32,
    pub epoch_length: EpochLength,
    pub total_elapsed_epochs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentIntervalResponse {
    pub interval: Interval,
    pub current_blocktime: u64,
    pub is_current_interval_over: bool,
    pub is_current_epoch_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::from_value;
    use serde_json::json;

    #[test]
    fn test_contract_version_requires_non_empty_fields() {
        let mut raw = json!({
            "build_timestamp": "2023-01-10T12:00:00Z",
            "build_version": "1.1.3",
            "commit_sha": "8b1f2d9",
            "commit_timestamp": "2023-01-09T17:44:12Z",
            "commit_branch": "release/v1.1.3",
            "rustc_version": "1.66.0",
        });
        let version = from_value::<ContractBuildInformation>(&raw).unwrap();
        assert_eq!(version.build_version, "1.1.3");

        raw["commit_sha"] = json!("");
        let err = from_value::<ContractBuildInformation>(&raw).unwrap_err();
        assert_eq!(err.field, "commit_sha");
    }

    #[test]
    fn test_state_params_optional_delegation_minimum() {
        let raw = json!({
            "minimum_mixnode_delegation": null,
            "minimum_mixnode_pledge": { "denom": "unym", "amount": "100000000" },
            "minimum_gateway_pledge": { "denom": "unym", "amount": "100000000" },
        });
        let params = from_value::<ContractStateParams>(&raw).unwrap();
        assert_eq!(params.minimum_mixnode_delegation, None);
        assert_eq!(params.minimum_gateway_pledge.amount, "100000000");
    }

    #[test]
    fn test_rewarding_params_set_sizes() {
        let raw = json!({
            "interval": {
                "reward_pool": "250000000000000",
                "staking_supply": "100000000000000",
                "staking_supply_scale_factor": "0.5",
                "epoch_reward_budget": "100000000",
                "stake_saturation_point": "416666666666.666666666666666666",
                "sybil_resistance": "0.3",
                "active_set_work_factor": "10",
                "interval_pool_emission": "0.02",
            },
            "rewarded_set_size": 240,
            "active_set_size": 300,
        });
        let params = from_value::<RewardingParams>(&raw).unwrap();
        let err = params.check().unwrap_err();
        assert_eq!(err.field, "active_set_size");
    }

    #[test]
    fn test_layer_total_does_not_overflow() {
        let distribution = LayerDistribution {
            layer1: u64::MAX,
            layer2: u64::MAX,
            layer3: 2,
        };
        assert_eq!(distribution.total(), 2 * u128::from(u64::MAX) + 2);
    }

    #[test]
    fn test_current_interval() {
        let raw = json!({
            "interval": {
                "id": 4,
                "epochs_in_interval": 720,
                "current_epoch_start": "2023-02-01T10:00:00Z",
                "current_epoch_id": 13,
                "epoch_length": { "secs": 3600, "nanos": 0 },
                "total_elapsed_epochs": 2893,
            },
            "current_blocktime": 1675245600u64,
            "is_current_interval_over": false,
            "is_current_epoch_over": true,
        });
        let response = from_value::<CurrentIntervalResponse>(&raw).unwrap();
        assert_eq!(response.interval.epoch_length.secs, 3600);
        assert!(response.is_current_epoch_over);
    }
}

//! Smart query messages, serialized the way the contracts expect them:
//! `{"<snake_case_variant>": {<arguments>}}`.

use serde::Serialize;

use crate::types::{IdentityKey, MixId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MixnetQueryMsg {
    GetContractVersion {},
    GetStateParams {},
    GetRewardingParams {},
    GetLayerDistribution {},
    GetCurrentIntervalDetails {},
    GetStakeSaturation {
        mix_id: MixId,
    },
    GetMixnodeDetails {
        mix_id: MixId,
    },
    GetMixnodeRewardingDetails {
        mix_id: MixId,
    },
    GetUnbondedMixNodeInformation {
        mix_id: MixId,
    },
    GetOwnedMixnode {
        address: String,
    },
    GetOwnedGateway {
        address: String,
    },
    GetDelegationDetails {
        mix_id: MixId,
        delegator: String,
        proxy: Option<String>,
    },
    GetMixNodeBonds {
        limit: Option<u32>,
        start_after: Option<MixId>,
    },
    GetMixNodesDetailed {
        limit: Option<u32>,
        start_after: Option<MixId>,
    },
    GetUnbondedMixNodes {
        limit: Option<u32>,
        start_after: Option<MixId>,
    },
    GetGateways {
        start_after: Option<IdentityKey>,
        limit: Option<u32>,
    },
    GetMixnodeDelegations {
        mix_id: MixId,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    GetDelegatorDelegations {
        delegator: String,
        start_after: Option<(MixId, String)>,
        limit: Option<u32>,
    },
    GetAllDelegations {
        start_after: Option<(MixId, String)>,
        limit: Option<u32>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VestingQueryMsg {
    GetContractVersion {},
    GetLockedCoins {
        vesting_account_address: String,
        block_time: Option<u64>,
    },
    GetSpendableCoins {
        vesting_account_address: String,
        block_time: Option<u64>,
    },
    GetVestedCoins {
        vesting_account_address: String,
        block_time: Option<u64>,
    },
    GetVestingCoins {
        vesting_account_address: String,
        block_time: Option<u64>,
    },
    GetOriginalVesting {
        vesting_account_address: String,
    },
}

//! Typed contract responses.

mod coin;
mod contract;
mod delegation;
mod gateway;
mod mixnode;
mod paging;
mod primitives;
mod vesting;

pub use coin::{Coin, DecCoin};
pub use contract::{
    ContractBuildInformation, ContractStateParams, CurrentIntervalResponse, EpochLength,
    Interval, IntervalRewardParams, LayerDistribution, MixnetContractVersion, RewardingParams,
};
pub use delegation::{Delegation, MixNodeDelegationResponse};
pub use gateway::{Gateway, GatewayBond};
pub(crate) use gateway::GatewayOwnershipResponse;
pub use mixnode::{
    Layer, MixNode, MixNodeBond, MixNodeCostParams, MixNodeDetails, MixNodeRewarding,
    MixnodeOverview, StakeSaturationResponse, UnbondedMixnode, UnbondedMixnodeEntry,
};
pub(crate) use mixnode::{
    MixOwnershipResponse, MixnodeDetailsResponse, MixnodeRewardingDetailsResponse,
    UnbondedMixnodeResponse,
};
pub use paging::{Page, PageCursor};
pub use primitives::{BaseAmount, Decimal, NonEmptyString};
pub use vesting::OriginalVestingResponse;

pub type MixId = u32;
pub type IdentityKey = String;

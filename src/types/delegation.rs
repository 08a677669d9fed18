use serde::{Deserialize, Serialize};

use super::{Coin, Decimal, MixId, NonEmptyString};

/// Stake delegated by `owner` to mixnode `mix_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    pub owner: NonEmptyString,
    pub mix_id: MixId,
    /// Value of the mixnode's cumulative reward ratio when the delegation was created.
    pub cumulative_reward_ratio: Decimal,
    pub amount: Coin,
    pub height: u64,
    pub proxy: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixNodeDelegationResponse {
    pub delegation: Option<Delegation>,
    pub mixnode_still_bonded: bool,
}

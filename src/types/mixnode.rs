use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Coin, Decimal, MixId, NonEmptyString};
use crate::schema::{from_value, SchemaError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Layer {
    One,
    Two,
    Three,
}

impl Layer {
    pub fn number(&self) -> u8 {
        u8::from(*self)
    }
}

impl TryFrom<u8> for Layer {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Layer::One),
            2 => Ok(Layer::Two),
            3 => Ok(Layer::Three),
            other => Err(format!("{other} is not a mix layer")),
        }
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        match layer {
            Layer::One => 1,
            Layer::Two => 2,
            Layer::Three => 3,
        }
    }
}

/// Network-facing description of a mixnode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixNode {
    pub host: NonEmptyString,
    pub mix_port: u16,
    pub verloc_port: u16,
    pub http_api_port: u16,
    pub sphinx_key: NonEmptyString,
    /// Base58 encoded ed25519 EdDSA public key.
    pub identity_key: NonEmptyString,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixNodeBond {
    pub mix_id: MixId,
    pub owner: NonEmptyString,
    pub original_pledge: Coin,
    pub layer: Layer,
    pub mix_node: MixNode,
    pub proxy: Option<String>,
    pub bonding_height: u64,
    pub is_unbonding: bool,
}

impl MixNodeBond {
    pub fn identity(&self) -> &str {
        self.mix_node.identity_key.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixNodeCostParams {
    pub profit_margin_percent: Decimal,
    pub interval_operating_cost: Coin,
}

/// Rewarding state of a bonded mixnode. Reward figures are in base units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixNodeRewarding {
    pub cost_params: MixNodeCostParams,
    pub operator: Decimal,
    pub delegates: Decimal,
    pub total_unit_reward: Decimal,
    pub unit_delegation: Decimal,
    pub last_rewarded_epoch: u32,
    pub unique_delegations: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixNodeDetails {
    pub bond_information: MixNodeBond,
    pub rewarding_details: MixNodeRewarding,
}

impl MixNodeDetails {
    pub fn mix_id(&self) -> MixId {
        self.bond_information.mix_id
    }
}

/// Leftover information about a mixnode that has been unbonded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbondedMixnode {
    pub identity_key: NonEmptyString,
    pub owner: NonEmptyString,
    pub proxy: Option<String>,
    pub unbonding_height: u64,
}

/// `[mix_id, unbonded_info]` pair as listed by the paged unbonded query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(MixId, UnbondedMixnode)")]
pub struct UnbondedMixnodeEntry {
    pub mix_id: MixId,
    pub info: UnbondedMixnode,
}

impl From<(MixId, UnbondedMixnode)> for UnbondedMixnodeEntry {
    fn from((mix_id, info): (MixId, UnbondedMixnode)) -> Self {
        Self { mix_id, info }
    }
}

// envelopes of the single-node lookups

#[derive(Debug, Deserialize)]
pub(crate) struct MixnodeDetailsResponse {
    pub mixnode_details: Option<MixNodeDetails>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MixnodeRewardingDetailsResponse {
    pub rewarding_details: Option<MixNodeRewarding>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UnbondedMixnodeResponse {
    pub unbonded_info: Option<UnbondedMixnode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MixOwnershipResponse {
    pub mixnode_details: Option<MixNodeDetails>,
}

/// Saturation of a bonded mixnode's stake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StakeSaturationResponse {
    pub mix_id: MixId,
    /// Saturation capped at 1.0
    pub current_saturation: Decimal,
    pub uncapped_saturation: Decimal,
}

/// Stake saturation as the contract reports it, with both values null for an unknown node.
#[derive(Deserialize)]
struct StakeSaturationPayload {
    mix_id: MixId,
    current_saturation: Option<Decimal>,
    uncapped_saturation: Option<Decimal>,
}

impl StakeSaturationResponse {
    /// Decode the contract payload. `None` means the contract knows no bonded
    /// node under `mix_id`.
    pub fn parse_optional(raw: &Value) -> Result<Option<Self>, SchemaError> {
        let payload: StakeSaturationPayload = from_value(raw)?;

        match (payload.current_saturation, payload.uncapped_saturation) {
            (Some(current_saturation), Some(uncapped_saturation)) => {
                Ok(Some(StakeSaturationResponse {
                    mix_id: payload.mix_id,
                    current_saturation,
                    uncapped_saturation,
                }))
            }
            (None, None) => Ok(None),
            (Some(_), None) => Err(SchemaError::new(
                "uncapped_saturation",
                "missing while current_saturation is present",
            )),
            (None, Some(_)) => Err(SchemaError::new(
                "current_saturation",
                "missing while uncapped_saturation is present",
            )),
        }
    }
}

/// Node details together with its stake saturation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MixnodeOverview {
    pub details: MixNodeDetails,
    pub saturation: StakeSaturationResponse,
}

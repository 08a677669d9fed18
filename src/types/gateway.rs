use serde::{Deserialize, Serialize};

use super::{Coin, NonEmptyString};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gateway {
    pub host: NonEmptyString,
    pub mix_port: u16,
    pub clients_port: u16,
    pub location: String,
    pub sphinx_key: NonEmptyString,
    /// Base58 encoded ed25519 EdDSA public key.
    pub identity_key: NonEmptyString,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayBond {
    pub pledge_amount: Coin,
    pub owner: NonEmptyString,
    pub block_height: u64,
    pub gateway: Gateway,
    pub proxy: Option<String>,
}

impl GatewayBond {
    pub fn identity(&self) -> &str {
        self.gateway.identity_key.as_str()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GatewayOwnershipResponse {
    pub gateway: Option<GatewayBond>,
}

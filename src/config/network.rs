use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::consts::{
    DEFAULT_ADDRESS_PREFIX, DEFAULT_DENOM, DEFAULT_MIXNET_CONTRACT_ADDRESS, DEFAULT_RPC_ADDRESS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_VALIDATOR_ADDRESS, DEFAULT_VESTING_CONTRACT_ADDRESS,
};

/// Network a query client is bound to. Never mutated after the client is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub rpc_address: String,
    pub validator_address: String,
    pub address_prefix: String,
    pub mixnet_contract_address: String,
    pub vesting_contract_address: String,
    pub denom: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_address: DEFAULT_RPC_ADDRESS.to_string(),
            validator_address: DEFAULT_VALIDATOR_ADDRESS.to_string(),
            address_prefix: DEFAULT_ADDRESS_PREFIX.to_string(),
            mixnet_contract_address: DEFAULT_MIXNET_CONTRACT_ADDRESS.to_string(),
            vesting_contract_address: DEFAULT_VESTING_CONTRACT_ADDRESS.to_string(),
            denom: DEFAULT_DENOM.to_string(),
        }
    }
}

/// Transport-level knobs that are not part of the network identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    /// Deadline for every single request, handshake included.
    pub request_timeout: Duration,
    /// Page size sent with paged queries; `None` leaves it to the contract.
    pub page_limit: Option<u32>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            page_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NetworkConfig::default();
        assert_eq!(config.address_prefix, "n");
        assert_eq!(config.denom, "unym");

        let options = ClientOptions::default();
        assert_eq!(options.request_timeout, Duration::from_secs(30));
        assert_eq!(options.page_limit, None);
    }
}

use super::QueryClient;
use crate::config::{ClientOptions, NetworkConfig};
use crate::error::Result;

/// Connect a [`QueryClient`] to the given network with default [`ClientOptions`].
///
/// Contract addresses are checked before the node is contacted, so a
/// misconfigured client never gets built.
pub async fn connect_for_query(
    rpc_address: &str,
    validator_address: &str,
    address_prefix: &str,
    mixnet_contract_address: &str,
    vesting_contract_address: &str,
    denom: &str,
) -> Result<QueryClient> {
    let config = NetworkConfig {
        rpc_address: rpc_address.to_string(),
        validator_address: validator_address.to_string(),
        address_prefix: address_prefix.to_string(),
        mixnet_contract_address: mixnet_contract_address.to_string(),
        vesting_contract_address: vesting_contract_address.to_string(),
        denom: denom.to_string(),
    };
    QueryClient::connect(config, ClientOptions::default()).await
}

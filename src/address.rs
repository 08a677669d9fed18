//! Bech32 address checks and contract address resolution.

use bech32::Variant;

use crate::config::NetworkConfig;
use crate::error::{Result, ValidatorClientError};

/// Check that `address` is a lowercase bech32 string with the human-readable part `prefix`.
///
/// This is a format check only; whether the account or contract exists is left to the chain.
pub fn validate_address(address: &str, prefix: &str) -> Result<()> {
    check_bech32(address, prefix).map_err(|reason| ValidatorClientError::InvalidAddress {
        address: address.to_string(),
        reason,
    })
}

fn check_bech32(address: &str, prefix: &str) -> std::result::Result<(), String> {
    if address.is_empty() {
        return Err("address is empty".to_string());
    }
    if address.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("address must be lowercase".to_string());
    }

    let (hrp, data, variant) = bech32::decode(address).map_err(|e| e.to_string())?;
    if variant != Variant::Bech32 {
        return Err("expected bech32, found bech32m encoding".to_string());
    }
    if hrp != prefix {
        return Err(format!("expected prefix `{prefix}`, found `{hrp}`"));
    }
    if data.is_empty() {
        return Err("address has no payload".to_string());
    }
    Ok(())
}

/// Contract addresses a [`crate::QueryClient`] sends its queries to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractAddresses {
    pub mixnet: String,
    pub vesting: String,
}

impl ContractAddresses {
    pub const MIXNET: &'static str = "mixnet";
    pub const VESTING: &'static str = "vesting";

    /// Resolve and format-check both contract addresses for the configured prefix.
    pub fn resolve(config: &NetworkConfig) -> Result<Self> {
        Ok(Self {
            mixnet: resolve_one(
                Self::MIXNET,
                &config.mixnet_contract_address,
                &config.address_prefix,
            )?,
            vesting: resolve_one(
                Self::VESTING,
                &config.vesting_contract_address,
                &config.address_prefix,
            )?,
        })
    }
}

fn resolve_one(contract: &'static str, address: &str, prefix: &str) -> Result<String> {
    let address = address.trim();
    if address.is_empty() {
        return Err(ValidatorClientError::MissingContractAddress {
            contract,
            reason: "no address configured".to_string(),
        });
    }
    check_bech32(address, prefix)
        .map_err(|reason| ValidatorClientError::MissingContractAddress { contract, reason })?;
    Ok(address.to_string())
}

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use crate::config::consts::DEFAULT_CONFIG_FILE;
use crate::config::file::{load_config_from_path, ConfigFile};
use crate::config::{ClientOptions, NetworkConfig};

/// Connection arguments shared by every query command
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// Tendermint RPC endpoint used for the handshake
    #[arg(long, env = "RPC_ADDRESS")]
    pub rpc_address: Option<String>,

    /// Validator REST endpoint used for queries
    #[arg(long, env = "VALIDATOR_ADDRESS")]
    pub validator_address: Option<String>,

    /// Bech32 prefix of account and contract addresses
    #[arg(long, env = "ADDRESS_PREFIX")]
    pub address_prefix: Option<String>,

    /// Mixnet contract address
    #[arg(long, env = "MIXNET_CONTRACT_ADDRESS")]
    pub mixnet_contract_address: Option<String>,

    /// Vesting contract address
    #[arg(long, env = "VESTING_CONTRACT_ADDRESS")]
    pub vesting_contract_address: Option<String>,

    /// Base denomination, e.g. unym
    #[arg(long, env = "DENOM")]
    pub denom: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Page size for paged queries
    #[arg(long, env = "PAGE_LIMIT")]
    pub page_limit: Option<u32>,

    /// TOML config file (defaults to ./validator_query.toml when present)
    #[arg(long, env = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,
}

/// Query configuration with all values resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub network: NetworkConfig,
    pub options: ClientOptions,
}

impl QueryConfig {
    /// Load configuration with priority: CLI/env -> config file -> defaults
    pub fn load(args: ConnectionArgs) -> Result<Self> {
        let file = match &args.config_file {
            Some(path) => load_config_from_path(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                load_config_from_path(DEFAULT_CONFIG_FILE)
                    .with_context(|| format!("Failed to load config file {DEFAULT_CONFIG_FILE}"))?
            }
            None => ConfigFile::default(),
        };

        let config = Self::resolve(args, file)?;
        info!(
            "Loaded QueryConfig: validator_address={}, rpc_address={}, mixnet_contract={}",
            config.network.validator_address,
            config.network.rpc_address,
            config.network.mixnet_contract_address
        );
        Ok(config)
    }

    /// Merge CLI/env values over file values over defaults.
    pub fn resolve(args: ConnectionArgs, file: ConfigFile) -> Result<Self> {
        let defaults = NetworkConfig::default();

        let network = NetworkConfig {
            rpc_address: args
                .rpc_address
                .or(file.rpc_address)
                .unwrap_or(defaults.rpc_address),
            validator_address: args
                .validator_address
                .or(file.validator_address)
                .unwrap_or(defaults.validator_address),
            address_prefix: args
                .address_prefix
                .or(file.address_prefix)
                .unwrap_or(defaults.address_prefix),
            mixnet_contract_address: args
                .mixnet_contract_address
                .or(file.mixnet_contract_address)
                .unwrap_or(defaults.mixnet_contract_address),
            vesting_contract_address: args
                .vesting_contract_address
                .or(file.vesting_contract_address)
                .unwrap_or(defaults.vesting_contract_address),
            denom: args.denom.or(file.denom).unwrap_or(defaults.denom),
        };

        let mut options = ClientOptions::default();
        if let Some(secs) = args.request_timeout_secs.or(file.request_timeout_secs) {
            if secs == 0 {
                anyhow::bail!("request timeout must be at least one second");
            }
            options.request_timeout = Duration::from_secs(secs);
        }
        options.page_limit = match args.page_limit.or(file.page_limit) {
            Some(0) => {
                warn!("Ignoring page_limit=0, the contract default page size is used");
                None
            }
            other => other,
        };

        Ok(Self { network, options })
    }
}

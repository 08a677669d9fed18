//! Centralized constants for the query client and the CLI.
//!
//! Network defaults point at mainnet; every value can be overridden through the
//! CLI, the environment, or a TOML config file.

// =============================================================================
// Mainnet Defaults
// =============================================================================

/// Tendermint JSON-RPC endpoint used for the connection handshake
pub const DEFAULT_RPC_ADDRESS: &str = "https://rpc.nymtech.net";

/// Validator REST (LCD) endpoint used for contract and bank queries
pub const DEFAULT_VALIDATOR_ADDRESS: &str = "https://api.nymtech.net";

/// Bech32 human-readable part of account and contract addresses
pub const DEFAULT_ADDRESS_PREFIX: &str = "n";

pub const DEFAULT_MIXNET_CONTRACT_ADDRESS: &str =
    "n17srjznxl9dvzdkpwpw24gg668wc73val88a6m5ajg6ankwvz9wtst0cznr";

pub const DEFAULT_VESTING_CONTRACT_ADDRESS: &str =
    "n1nc5tatafv6eyq7llkr2gv50ff9e22mnf70qgjlv737ktmt4eswrq73f2nw";

/// Base (micro) denomination of the staking token
pub const DEFAULT_DENOM: &str = "unym";

/// Default TOML config file looked up by the CLI
pub const DEFAULT_CONFIG_FILE: &str = "validator_query.toml";

// =============================================================================
// Client Settings
// =============================================================================

/// Per-request deadline applied by the HTTP transport
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Denomination
// =============================================================================

/// Number of fractional digits between the base and the major unit
pub const DENOM_EXPONENT: u32 = 6;

/// Base units in one major unit
pub const BASE_UNITS_PER_MAJOR: u128 = 1_000_000;

/// Total token supply in base units (1 billion major units)
pub const DEFAULT_MAX_SUPPLY_BASE: u128 = 1_000_000_000 * BASE_UNITS_PER_MAJOR;

//! Read-only query client for the mixnet and vesting contracts of a
//! CosmWasm chain, plus bank balances in the staking denomination.
//!
//! ```no_run
//! # async fn run() -> validator_query_client::Result<()> {
//! use validator_query_client::{QueryClient, config::{ClientOptions, NetworkConfig}};
//!
//! let client = QueryClient::connect(NetworkConfig::default(), ClientOptions::default()).await?;
//! let saturation = client.mixnet.get_stake_saturation(8).await?;
//! println!("{}", saturation.current_saturation);
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod client;
pub mod config;
pub mod denom;
pub mod error;
pub mod json;
pub mod schema;
pub mod transport;
pub mod types;

pub use address::{validate_address, ContractAddresses};
pub use client::{connect_for_query, QueryClient};
pub use denom::{to_base_unit, to_major_unit, DenomConverter};
pub use error::{Result, ValidatorClientError};

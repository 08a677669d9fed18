use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use term_table::row::Row;
use term_table::table_cell::{Alignment as CellAlignment, TableCell};
use term_table::{Table, TableStyle};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use validator_query_client::config::{ConnectionArgs, QueryConfig};
use validator_query_client::types::{
    Delegation, GatewayBond, MixId, MixNodeBond, UnbondedMixnodeEntry,
};
use validator_query_client::{to_base_unit, to_major_unit, QueryClient};

/// Validator Query CLI - read mixnet and vesting contract state
#[derive(Parser)]
#[command(name = "validator_query")]
#[command(about = "Query mixnet, vesting and bank state from a validator", long_about = None)]
struct Cli {
    #[clap(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Query(QueryCommand),

    /// Convert a base amount to the display unit (no network access)
    ToMajor { amount: String },
    /// Convert a display amount to base units (no network access)
    ToBase { amount: String },
}

#[derive(Subcommand)]
enum QueryCommand {
    /// Mixnet contract build information
    ContractVersion,
    /// Vesting contract build information
    VestingContractVersion,
    /// Mixnet contract state parameters
    StateParams,
    /// Current rewarding parameters
    RewardingParams,
    /// Number of mixnodes per layer
    LayerDistribution,
    /// Current interval and epoch
    CurrentInterval,

    /// Stake saturation of a mixnode
    StakeSaturation { mix_id: MixId },
    /// Bond and rewarding details of a mixnode
    Mixnode { mix_id: MixId },
    /// Rewarding details of a mixnode
    MixnodeRewarding { mix_id: MixId },
    /// Details and saturation of a mixnode
    MixnodeOverview { mix_id: MixId },
    /// Leftover information of an unbonded mixnode
    UnbondedMixnode { mix_id: MixId },

    /// Mixnode owned by an address
    OwnedMixnode { address: String },
    /// Gateway owned by an address
    OwnedGateway { address: String },
    /// Delegation of an address to a mixnode
    Delegation {
        mix_id: MixId,
        delegator: String,
        /// Proxy the delegation was made through
        #[arg(long)]
        proxy: Option<String>,
    },

    /// All bonded mixnodes
    MixnodeBonds,
    /// All unbonded mixnodes
    UnbondedMixnodes,
    /// All bonded gateways
    Gateways,
    /// All delegations to a mixnode
    MixnodeDelegations { mix_id: MixId },
    /// All delegations made by an address
    DelegatorDelegations { delegator: String },
    /// Every delegation on the network
    AllDelegations,

    /// Locked coins of a vesting account
    LockedCoins { address: String },
    /// Spendable coins of a vesting account
    SpendableCoins { address: String },
    /// Vested coins of a vesting account
    VestedCoins { address: String },
    /// Coins still vesting in a vesting account
    VestingCoins { address: String },
    /// Original vesting amount and schedule
    OriginalVesting { address: String },

    /// Bank balance of an address
    Balance {
        address: String,
        /// Show the amount in the display unit
        #[arg(long)]
        printable: bool,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn header_cell(text: &str) -> TableCell {
    TableCell::builder(text)
        .alignment(CellAlignment::Center)
        .build()
}

fn render_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut table = Table::new();
    table.style = TableStyle::extended();
    table.add_row(Row::new(
        headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>(),
    ));
    for row in rows {
        let cells: Vec<TableCell> = row
            .into_iter()
            .map(|cell| {
                TableCell::builder(cell)
                    .alignment(CellAlignment::Left)
                    .build()
            })
            .collect();
        table.add_row(Row::new(cells));
    }
    table.render()
}

fn bonds_table(bonds: &[MixNodeBond]) -> String {
    let rows = bonds
        .iter()
        .map(|bond| {
            vec![
                bond.mix_id.to_string(),
                bond.identity().to_string(),
                bond.owner.to_string(),
                bond.layer.number().to_string(),
                bond.original_pledge.to_string(),
                bond.mix_node.host.to_string(),
            ]
        })
        .collect();
    render_table(
        &["Mix ID", "Identity", "Owner", "Layer", "Pledge", "Host"],
        rows,
    )
}

fn gateways_table(gateways: &[GatewayBond]) -> String {
    let rows = gateways
        .iter()
        .map(|bond| {
            vec![
                bond.identity().to_string(),
                bond.owner.to_string(),
                bond.pledge_amount.to_string(),
                bond.gateway.host.to_string(),
                bond.gateway.location.clone(),
            ]
        })
        .collect();
    render_table(&["Identity", "Owner", "Pledge", "Host", "Location"], rows)
}

fn delegations_table(delegations: &[Delegation]) -> String {
    let rows = delegations
        .iter()
        .map(|delegation| {
            vec![
                delegation.mix_id.to_string(),
                delegation.owner.to_string(),
                delegation.amount.to_string(),
                delegation.height.to_string(),
                delegation.proxy.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    render_table(&["Mix ID", "Owner", "Amount", "Height", "Proxy"], rows)
}

fn unbonded_table(nodes: &[UnbondedMixnodeEntry]) -> String {
    let rows = nodes
        .iter()
        .map(|entry| {
            vec![
                entry.mix_id.to_string(),
                entry.info.identity_key.to_string(),
                entry.info.owner.to_string(),
                entry.info.unbonding_height.to_string(),
            ]
        })
        .collect();
    render_table(&["Mix ID", "Identity", "Owner", "Unbonding Height"], rows)
}

async fn run_query(client: &QueryClient, command: QueryCommand) -> Result<()> {
    let mixnet = &client.mixnet;
    let vesting = &client.vesting;

    match command {
        QueryCommand::ContractVersion => print_json(&mixnet.get_mixnet_contract_version().await?),
        QueryCommand::VestingContractVersion => {
            print_json(&vesting.get_vesting_contract_version().await?)
        }
        QueryCommand::StateParams => print_json(&mixnet.get_state_params().await?),
        QueryCommand::RewardingParams => print_json(&mixnet.get_rewarding_params().await?),
        QueryCommand::LayerDistribution => print_json(&mixnet.get_layer_distribution().await?),
        QueryCommand::CurrentInterval => print_json(&mixnet.get_current_interval().await?),

        QueryCommand::StakeSaturation { mix_id } => {
            print_json(&mixnet.get_stake_saturation(mix_id).await?)
        }
        QueryCommand::Mixnode { mix_id } => print_json(&mixnet.get_mixnode_details(mix_id).await?),
        QueryCommand::MixnodeRewarding { mix_id } => {
            print_json(&mixnet.get_mixnode_rewarding_details(mix_id).await?)
        }
        QueryCommand::MixnodeOverview { mix_id } => {
            print_json(&mixnet.get_mixnode_overview(mix_id).await?)
        }
        QueryCommand::UnbondedMixnode { mix_id } => {
            print_json(&mixnet.get_unbonded_mixnode_information(mix_id).await?)
        }

        QueryCommand::OwnedMixnode { address } => match mixnet.get_owned_mixnode(&address).await? {
            Some(details) => print_json(&details),
            None => {
                println!("{address} does not own a mixnode");
                Ok(())
            }
        },
        QueryCommand::OwnedGateway { address } => match mixnet.get_owned_gateway(&address).await? {
            Some(bond) => print_json(&bond),
            None => {
                println!("{address} does not own a gateway");
                Ok(())
            }
        },
        QueryCommand::Delegation {
            mix_id,
            delegator,
            proxy,
        } => print_json(
            &mixnet
                .get_delegation_details(mix_id, &delegator, proxy.as_deref())
                .await?,
        ),

        QueryCommand::MixnodeBonds => {
            let bonds = mixnet.get_all_mix_node_bonds().await?;
            println!("{}", bonds_table(&bonds));
            info!("{} mixnodes bonded", bonds.len());
            Ok(())
        }
        QueryCommand::UnbondedMixnodes => {
            println!("{}", unbonded_table(&mixnet.get_all_unbonded_mix_nodes().await?));
            Ok(())
        }
        QueryCommand::Gateways => {
            let gateways = mixnet.get_all_gateways().await?;
            println!("{}", gateways_table(&gateways));
            info!("{} gateways bonded", gateways.len());
            Ok(())
        }
        QueryCommand::MixnodeDelegations { mix_id } => {
            let delegations = mixnet.get_all_mixnode_delegations(mix_id).await?;
            println!("{}", delegations_table(&delegations));
            Ok(())
        }
        QueryCommand::DelegatorDelegations { delegator } => {
            let delegations = mixnet.get_all_delegator_delegations(&delegator).await?;
            println!("{}", delegations_table(&delegations));
            Ok(())
        }
        QueryCommand::AllDelegations => {
            let delegations = mixnet.get_all_network_delegations().await?;
            println!("{}", delegations_table(&delegations));
            info!("{} delegations in total", delegations.len());
            Ok(())
        }

        QueryCommand::LockedCoins { address } => print_json(&vesting.get_locked_coins(&address).await?),
        QueryCommand::SpendableCoins { address } => {
            print_json(&vesting.get_spendable_coins(&address).await?)
        }
        QueryCommand::VestedCoins { address } => print_json(&vesting.get_vested_coins(&address).await?),
        QueryCommand::VestingCoins { address } => {
            print_json(&vesting.get_vesting_coins(&address).await?)
        }
        QueryCommand::OriginalVesting { address } => {
            print_json(&vesting.get_original_vesting(&address).await?)
        }

        QueryCommand::Balance { address, printable } => {
            if printable {
                println!("{}", client.bank.get_printable_balance(&address).await?);
            } else {
                println!("{}", client.bank.get_balance(&address).await?);
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ToMajor { amount } => {
            println!("{}", to_major_unit(&amount)?);
            Ok(())
        }
        Commands::ToBase { amount } => {
            println!("{}", to_base_unit(&amount)?);
            Ok(())
        }
        Commands::Query(query) => {
            let config = QueryConfig::load(cli.connection)?;
            let client = QueryClient::connect(config.network.clone(), config.options)
                .await
                .with_context(|| {
                    format!("Failed to connect to {}", config.network.rpc_address)
                })?;

            run_query(&client, query).await
        }
    }
}

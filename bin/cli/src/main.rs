#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::items_after_statements)]

mod config;

use std::str::FromStr;

use alloy::providers::Provider;
use alloy_primitives::{Address, U256};
use alloy_signer_local::PrivateKeySigner;
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};
use tracing::info;
use url::Url;

use splitwise_client::{artifacts, client::signing_provider, MoneyRequest, Splitwise};

use crate::config::Settings;

/// The CLI application that defines all available commands.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Deploy the contract from the compiled binary.
    Deploy,
    /// Request an amount of wei from an address.
    Submit { to: Address, amount: U256 },
    /// Request an equal share of a total from each address.
    Split {
        total: U256,
        #[arg(required = true, num_args = 1..)]
        addresses: Vec<Address>,
    },
    /// Reject an incoming request.
    Reject { request_id: U256 },
    /// Cancel a request you sent.
    Cancel { request_id: U256 },
    /// Pay a single incoming request.
    Pay { request_id: U256 },
    /// Pay every incoming request from an address.
    PayAddress { address: Address },
    /// Pay every incoming request.
    PayAll,
    /// List every address that took part in a request.
    Participants,
    /// List requests you sent.
    Sent,
    /// List requests sent to you.
    Received,
    /// List addresses you owe money to.
    Creditors,
    /// List addresses that owe you money.
    Debtors,
    /// Total amount you owe.
    TotalOwed,
    /// Total amount you requested.
    TotalRequested,
    /// Amount you owe to an address.
    OwedTo { address: Address },
    /// Amount you requested from an address.
    RequestedFrom { address: Address },
}

/// The main entry point for the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables.
    dotenv().ok();

    // Parse the arguments.
    let cli = Cli::parse();

    // Load configuration.
    let settings = Settings::new().context("failed to load settings")?;

    // Initialize logging.
    splitwise_utils::init_logger(settings.log_format);

    // Setup the signer.
    let signer =
        PrivateKeySigner::from_str(&settings.private_key).context("invalid SPLITWISE_PRIVATE_KEY")?;
    let rpc_url = Url::parse(&settings.rpc_url).context("invalid SPLITWISE_RPC_URL")?;
    info!(signer = %signer.address(), rpc = %rpc_url, "using account");

    if cli.command == Command::Deploy {
        let bytecode = artifacts::load_bytecode(&settings.bin_path)?;
        let address = signer.address();
        let client = Splitwise::deploy(signing_provider(rpc_url, signer), address, bytecode).await?;
        return print(cli.json, &client.address(), |address| address.to_string());
    }

    // Bind to the deployed contract.
    let contract = settings
        .contract_address
        .as_deref()
        .ok_or_else(|| anyhow!("SPLITWISE_CONTRACT_ADDRESS is not set"))?;
    let contract = Address::from_str(contract).context("invalid SPLITWISE_CONTRACT_ADDRESS")?;
    let abi = artifacts::load_abi(&settings.abi_path)?;
    let client = Splitwise::connect(rpc_url, signer, contract, &abi)?;

    execute(&client, cli.command, cli.json).await
}

/// Runs a single command against the contract and prints its result.
async fn execute<P: Provider>(client: &Splitwise<P>, command: Command, json: bool) -> Result<()> {
    let tx = |tx: &alloy_primitives::TxHash| tx.to_string();
    let wei = |amount: &U256| format!("{amount} wei");
    let address_lines = |addresses: &Vec<Address>| lines(addresses);
    let request_table = |requests: &Vec<MoneyRequest>| table(requests);

    match command {
        Command::Deploy => Err(anyhow!("deploy does not use a bound contract")),
        Command::Submit { to, amount } => {
            print(json, &client.submit_money_request(to, amount).await?, tx)
        }
        Command::Split { total, addresses } => {
            print(json, &client.split_the_bill(total, addresses).await?, tx)
        }
        Command::Reject { request_id } => {
            print(json, &client.reject_money_request(request_id).await?, tx)
        }
        Command::Cancel { request_id } => {
            print(json, &client.cancel_money_request(request_id).await?, tx)
        }
        Command::Pay { request_id } => {
            print(json, &client.pay_for_requested_amount(request_id).await?, tx)
        }
        Command::PayAddress { address } => print(json, &client.pay_to_address(address).await?, tx),
        Command::PayAll => print(json, &client.pay_for_all_the_requests().await?, tx),
        Command::Participants => print(json, &client.get_participating_addresses().await?, address_lines),
        Command::Sent => print(json, &client.get_sent_requests().await?, request_table),
        Command::Received => print(json, &client.get_received_requests().await?, request_table),
        Command::Creditors => print(json, &client.get_all_creditors().await?, address_lines),
        Command::Debtors => print(json, &client.get_all_debtors().await?, address_lines),
        Command::TotalOwed => print(json, &client.get_total_amount_owed().await?, wei),
        Command::TotalRequested => print(json, &client.get_total_amount_requested().await?, wei),
        Command::OwedTo { address } => print(json, &client.get_amount_owed_to(address).await?, wei),
        Command::RequestedFrom { address } => {
            print(json, &client.get_amount_requested_from(address).await?, wei)
        }
    }
}

/// Prints `value` as JSON or through `render`.
fn print<T: Serialize>(json: bool, value: &T, render: impl Fn(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", render(value));
    }
    Ok(())
}

fn lines(addresses: &[Address]) -> String {
    addresses.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

#[derive(Tabled)]
struct RequestRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Amount (wei)")]
    amount: String,
    #[tabled(rename = "Paid")]
    paid: String,
}

impl From<&MoneyRequest> for RequestRow {
    fn from(request: &MoneyRequest) -> Self {
        Self {
            id: request.request_id.to_string(),
            from: request.from.to_string(),
            to: request.to.to_string(),
            amount: request.amount.to_string(),
            paid: if request.paid { "yes" } else { "no" }.to_string(),
        }
    }
}

fn table(requests: &[MoneyRequest]) -> String {
    let mut table = Table::new(requests.iter().map(RequestRow::from));
    table.with(Style::modern());
    table.to_string()
}

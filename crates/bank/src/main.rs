//! `bank`: talk to a deployed bank contract through your wallet.

#[macro_use]
extern crate tracing;

use bank_client::{BankConfig, Orchestrator};
use bank_wallets::WalletSession;
use clap::Parser;
use eyre::Result;
use figment::providers::Serialized;
use std::process::ExitCode;

mod args;
mod handler;
mod sink;
mod utils;

use args::Args;
use sink::TerminalSink;

fn main() -> Result<ExitCode> {
    handler::install();
    utils::load_dotenv();
    utils::subscriber();
    utils::enable_paint();

    let args = Args::parse();
    run(args)
}

#[tokio::main]
async fn run(args: Args) -> Result<ExitCode> {
    let config = BankConfig::load_with(Serialized::defaults(&args.config))?;
    let contract = config.contract_address()?;
    debug!(%contract, rpc_url = %config.rpc_url, "loaded config");

    let wallet = WalletSession::new(args.wallet.provider(&config.rpc_url)?);
    let orchestrator = Orchestrator::new(wallet, contract, TerminalSink::default());

    let outcome = args.cmd.run(&orchestrator).await;
    Ok(if outcome.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

use alloy_primitives::Address;
use bank_client::{InputField, NotificationKind, NotificationSink, Orchestrator, Outcome, ViewState};
use bank_wallets::{WalletOpts, WalletProvider};
use clap::{Parser, Subcommand};
use serde::Serialize;
use yansi::Paint;

/// Deposit, withdraw and manage a deployed bank contract through your wallet.
#[derive(Debug, Parser)]
#[command(name = "bank", version)]
pub struct Args {
    #[command(flatten)]
    pub config: ConfigOpts,

    #[command(flatten)]
    pub wallet: WalletOpts,

    #[command(subcommand)]
    pub cmd: BankSubcommand,
}

/// Command line overrides of the `bank.toml` and `BANK_*` configuration.
#[derive(Clone, Debug, Default, Serialize, Parser)]
pub struct ConfigOpts {
    /// The JSON-RPC endpoint of the wallet provider.
    #[arg(long, global = true, value_name = "URL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,

    /// The address of the deployed bank contract.
    #[arg(long = "contract", global = true, value_name = "ADDRESS")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<Address>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum BankSubcommand {
    /// Show the bank's name and owner, and the connected account's balance.
    #[command(visible_alias = "s")]
    Status,

    /// Request account access from the wallet.
    #[command(visible_alias = "c")]
    Connect,

    /// Deposit ether into the bank.
    #[command(visible_alias = "d")]
    Deposit {
        /// The amount, in ether.
        #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
        amount: String,
    },

    /// Withdraw ether from the bank to the connected account.
    #[command(visible_alias = "w")]
    Withdraw {
        /// The amount, in ether.
        #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
        amount: String,
    },

    /// Rename the bank. Only the owner may do this.
    SetName {
        /// The new name, at most 31 bytes.
        name: String,
    },
}

impl BankSubcommand {
    /// Runs the command, reporting failures through the orchestrator's sink.
    pub async fn run<P, S>(self, orchestrator: &Orchestrator<P, S>) -> Outcome
    where
        P: WalletProvider,
        S: NotificationSink,
    {
        match self {
            Self::Connect => {
                let outcome = orchestrator.connect().await;
                if let Some(account) = orchestrator.state().session.account {
                    println!("Connected {}", account.green());
                }
                outcome
            }
            Self::Status => {
                orchestrator.start().await;
                let state = orchestrator.state();
                print_status(&state);
                startup_outcome(&state)
            }
            Self::Deposit { amount } => {
                orchestrator.start().await;
                orchestrator.update_input(InputField::DepositAmount, amount);
                report(orchestrator, orchestrator.deposit().await)
            }
            Self::Withdraw { amount } => {
                orchestrator.start().await;
                orchestrator.update_input(InputField::WithdrawAmount, amount);
                report(orchestrator, orchestrator.withdraw().await)
            }
            Self::SetName { name } => {
                orchestrator.start().await;
                orchestrator.update_input(InputField::BankNameDraft, name);
                report(orchestrator, orchestrator.set_bank_name().await)
            }
        }
    }
}

/// Prints the refreshed state after a confirmed transaction.
fn report<P: WalletProvider, S: NotificationSink>(
    orchestrator: &Orchestrator<P, S>,
    outcome: Outcome,
) -> Outcome {
    if outcome == Outcome::Completed {
        print_status(&orchestrator.state());
    }
    outcome
}

/// Startup failures were already reported; they only decide the exit code.
fn startup_outcome(state: &ViewState) -> Outcome {
    match &state.notification {
        Some(notification) if notification.kind == NotificationKind::Error => Outcome::Failed,
        _ => Outcome::Completed,
    }
}

fn print_status(state: &ViewState) {
    let unknown = || "unknown".dim().to_string();

    let name = state.snapshot.bank_name.clone().unwrap_or_else(unknown);
    println!("{:<9}{}", "Bank:", name.bold());

    let owner = state.snapshot.owner_address.map(|owner| owner.to_string()).unwrap_or_else(unknown);
    if state.is_owner() {
        println!("{:<9}{owner} {}", "Owner:", "(you)".cyan());
    } else {
        println!("{:<9}{owner}", "Owner:");
    }

    let account = state
        .session
        .account
        .map(|account| account.to_string())
        .unwrap_or_else(|| "not connected".yellow().to_string());
    println!("{:<9}{account}", "Account:");

    let balance = state
        .caller_balance_ether()
        .map(|balance| format!("{balance} ETH"))
        .unwrap_or_else(unknown);
    println!("{:<9}{balance}", "Balance:");
}

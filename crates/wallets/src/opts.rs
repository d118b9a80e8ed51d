use crate::{RpcWallet, WalletError};
use clap::Parser;
use serde::Serialize;

/// Wallet provider options.
#[derive(Clone, Debug, Default, Serialize, Parser)]
#[command(next_help_heading = "Wallet options")]
pub struct WalletOpts {
    /// Run as if no wallet provider were installed.
    #[arg(long, global = true)]
    pub no_wallet: bool,
}

impl WalletOpts {
    /// Returns the wallet provider to use, if any.
    ///
    /// `url` is the JSON-RPC endpoint that manages the user's accounts.
    pub fn provider(&self, url: &str) -> Result<Option<RpcWallet>, WalletError> {
        if self.no_wallet {
            debug!("wallet provider disabled");
            return Ok(None);
        }
        RpcWallet::connect(url).map(Some)
    }
}

//! # bank-wallets
//!
//! Wallet provider boundary for the bank client.
//!
//! The client never signs anything itself. Like a page talking to an injected browser wallet,
//! it asks a [`WalletProvider`] for account access, relays read-only calls through it, and
//! hands it transactions to sign and submit.

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

pub mod error;
pub use error::{ErrorPayload, WalletError};

mod opts;
pub use opts::WalletOpts;

pub mod provider;
pub use provider::WalletProvider;

mod rpc;
pub use rpc::RpcWallet;

mod session;
pub use session::{Session, WalletSession};

//! # bank-client
//!
//! Orchestrates every interaction between a user, their wallet and the deployed bank contract:
//! connecting the wallet, mirroring the contract's state, submitting deposits, withdrawals and
//! renames, and turning every failure into a single notification.
//!
//! Rendering is left to a presentation shell, which reads [`ViewState`] snapshots, forwards user
//! input to the [`Orchestrator`] and displays what it receives through its [`NotificationSink`].

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

pub mod config;
pub use config::BankConfig;

pub mod contract;
pub use contract::{BankContract, EtherAmount};

pub mod error;
pub use error::{BankError, EncodingError};

mod notify;
pub use notify::{Notification, NotificationKind, NotificationSink};

mod orchestrator;
pub use orchestrator::{Orchestrator, Outcome};

pub mod state;
pub use state::{Affordance, InputField, ViewState};

pub mod units;

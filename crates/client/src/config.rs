//! Client configuration.

use alloy_primitives::Address;
use figment::{
    Figment, Provider,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// The default wallet endpoint.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// The configuration file read from the working directory.
pub const CONFIG_FILE: &str = "bank.toml";

/// Prefix of the environment variables that override the configuration.
pub const ENV_PREFIX: &str = "BANK_";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),
    #[error("no contract address configured; set `BANK_CONTRACT_ADDRESS` or `contract_address` in bank.toml")]
    MissingContractAddress,
}

/// Client configuration.
///
/// Resolved from, in increasing priority: defaults, `bank.toml`, `BANK_*` environment
/// variables, then any extra provider such as command line arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    /// Address of the deployed bank contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<Address>,
    /// JSON-RPC endpoint of the wallet provider.
    pub rpc_url: String,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self { contract_address: None, rpc_url: DEFAULT_RPC_URL.to_string() }
    }
}

impl BankConfig {
    /// The default figment: defaults, the config file and the environment.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads the configuration from the default figment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Loads the configuration from the default figment, overridden by `provider`.
    pub fn load_with(provider: impl Provider) -> Result<Self, ConfigError> {
        Self::extract(Self::figment().merge(provider))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(Box::new)?;
        trace!(?config, "loaded config");
        Ok(config)
    }

    /// Returns the contract address, which must be configured.
    pub fn contract_address(&self) -> Result<Address, ConfigError> {
        self.contract_address.ok_or(ConfigError::MissingContractAddress)
    }
}

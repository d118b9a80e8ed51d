use crate::WalletError;
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;

/// JSON-RPC error code used by EIP-1193 providers when the user rejects a request.
pub const USER_REJECTED_CODE: i64 = 4001;

/// An EIP-1193 style wallet provider.
///
/// The provider owns the user's accounts: it prompts for account access, signs and submits
/// transactions on the user's behalf, and relays read-only calls to the chain.
///
/// Reference: <https://eips.ethereum.org/EIPS/eip-1193>
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Prompts the user for account access (`eth_requestAccounts`).
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Returns the accounts already authorized, without prompting (`eth_accounts`).
    async fn accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Executes a read-only call (`eth_call`) and returns the raw output.
    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, WalletError>;

    /// Signs and submits a transaction (`eth_sendTransaction`), returning its hash as soon as
    /// the provider accepted it.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError>;

    /// Waits until the transaction is included in a block.
    ///
    /// Fails if the transaction was included but reverted.
    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<(), WalletError>;
}

use crate::{ErrorPayload, WalletError, WalletProvider, provider::USER_REJECTED_CODE};
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_provider::{PendingTransactionBuilder, Provider, RootProvider};
use alloy_rpc_types::TransactionRequest;
use alloy_transport::TransportError;
use async_trait::async_trait;
use serde_json::{Value, json};
use url::Url;

/// A [`WalletProvider`] backed by a JSON-RPC endpoint that manages the user's accounts.
///
/// The endpoint is expected to hold unlocked accounts and sign on their behalf, the same way
/// an injected browser wallet does: accounts are obtained through `eth_requestAccounts` and
/// transactions are submitted through `eth_sendTransaction` without local signing.
#[derive(Clone, Debug)]
pub struct RpcWallet {
    url: Url,
    provider: RootProvider,
}

impl RpcWallet {
    /// Connects to the wallet endpoint at `url`.
    pub fn connect(url: &str) -> Result<Self, WalletError> {
        let url: Url = url.parse()?;
        let provider = RootProvider::new_http(url.clone());
        Ok(Self { url, provider })
    }

    /// The endpoint this wallet talks to.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        trace!(url = %self.url, "eth_requestAccounts");
        self.provider
            .raw_request::<_, Vec<Address>>("eth_requestAccounts".into(), ())
            .await
            .map_err(classify)
    }

    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.provider.get_accounts().await.map_err(classify)
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, WalletError> {
        self.provider.call(tx).await.map_err(classify)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError> {
        let pending = self.provider.send_transaction(tx).await.map_err(classify)?;
        Ok(*pending.tx_hash())
    }

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<(), WalletError> {
        let receipt = PendingTransactionBuilder::new(self.provider.clone(), tx_hash)
            .get_receipt()
            .await
            .map_err(|err| WalletError::request(err.to_string()))?;
        if !receipt.status() {
            return Err(WalletError::Request(ErrorPayload::revert(&format!(
                "transaction {tx_hash} failed"
            ))));
        }
        Ok(())
    }
}

/// Maps a transport failure onto the wallet error taxonomy.
///
/// Wallets relay the underlying error of a JSON-RPC error response in its `data` member, e.g.
/// `{ message: "Internal JSON-RPC error.", data: { message: "execution reverted: X" } }`. When
/// `data` carries a message it becomes the inner message, otherwise the response's own message
/// does. The transport's rendering of the whole error is kept as the outer message.
fn classify(err: TransportError) -> WalletError {
    let Some(resp) = err.as_error_resp() else {
        return WalletError::request(err.to_string());
    };
    if resp.code == USER_REJECTED_CODE {
        return WalletError::Rejected(ErrorPayload::message(resp.message.to_string()));
    }

    let data =
        resp.data.as_deref().and_then(|data| serde_json::from_str::<Value>(data.get()).ok());
    let raw = json!({ "message": err.to_string(), "error": data });
    match ErrorPayload::from_json(&raw) {
        nested @ ErrorPayload::Nested { .. } => WalletError::Request(nested),
        _ => WalletError::Request(ErrorPayload::Nested {
            inner: resp.message.to_string(),
            outer: Some(err.to_string()),
        }),
    }
}

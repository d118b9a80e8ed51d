use alloy_primitives::{Address, Bytes, Selector, TxHash, keccak256};
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;
use bank_wallets::{ErrorPayload, WalletError, WalletProvider};
use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Notify;

/// An in-memory [`WalletProvider`] with scripted responses.
///
/// Calls are answered by function selector. Every request is recorded so tests can assert on
/// what reached the wallet. Clones share the same state.
#[derive(Clone, Debug, Default)]
pub struct MockWallet {
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    accounts: Vec<Address>,
    account_error: Option<WalletError>,
    responses: HashMap<Selector, Result<Bytes, WalletError>>,
    send_error: Option<WalletError>,
    confirmation_error: Option<WalletError>,
    gate: Option<Arc<Notify>>,
    account_requests: usize,
    calls: Vec<TransactionRequest>,
    sent: Vec<TransactionRequest>,
    confirmed: Vec<TxHash>,
}

impl MockWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authorizes the given accounts.
    pub fn with_accounts(self, accounts: impl IntoIterator<Item = Address>) -> Self {
        self.state.lock().accounts = accounts.into_iter().collect();
        self
    }

    /// Fails every account request with `err`.
    pub fn reject_accounts(&self, err: WalletError) {
        self.state.lock().account_error = Some(err);
    }

    /// Answers calls to `selector` with `output`.
    pub fn respond(&self, selector: Selector, output: impl Into<Bytes>) {
        self.state.lock().responses.insert(selector, Ok(output.into()));
    }

    /// Fails calls to `selector` with `err`.
    pub fn fail_call(&self, selector: Selector, err: WalletError) {
        self.state.lock().responses.insert(selector, Err(err));
    }

    /// Fails the next transaction submission with `err`.
    pub fn fail_next_send(&self, err: WalletError) {
        self.state.lock().send_error = Some(err);
    }

    /// Fails the next confirmation with `err`.
    pub fn fail_next_confirmation(&self, err: WalletError) {
        self.state.lock().confirmation_error = Some(err);
    }

    /// Holds every submission until the returned handle is notified.
    pub fn hold_sends(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.state.lock().gate = Some(gate.clone());
        gate
    }

    /// Number of `eth_requestAccounts` prompts.
    pub fn account_requests(&self) -> usize {
        self.state.lock().account_requests
    }

    /// All read-only calls, in order.
    pub fn calls(&self) -> Vec<TransactionRequest> {
        self.state.lock().calls.clone()
    }

    /// Number of read-only calls made to `selector`.
    pub fn calls_to(&self, selector: Selector) -> usize {
        self.state.lock().calls.iter().filter(|tx| selector_of(tx) == Some(selector)).count()
    }

    /// All submitted transactions, in order.
    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.state.lock().sent.clone()
    }

    /// Hashes of all confirmed transactions.
    pub fn confirmed(&self) -> Vec<TxHash> {
        self.state.lock().confirmed.clone()
    }

    /// Total number of requests that reached the wallet.
    pub fn requests(&self) -> usize {
        let state = self.state.lock();
        state.account_requests + state.calls.len() + state.sent.len()
    }
}

/// Returns the function selector of the transaction's calldata.
pub fn selector_of(tx: &TransactionRequest) -> Option<Selector> {
    tx.input.input().and_then(|data| data.get(..4)).map(Selector::from_slice)
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        let mut state = self.state.lock();
        state.account_requests += 1;
        match &state.account_error {
            Some(err) => Err(err.clone()),
            None => Ok(state.accounts.clone()),
        }
    }

    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        Ok(self.state.lock().accounts.clone())
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, WalletError> {
        let mut state = self.state.lock();
        let selector = selector_of(&tx);
        state.calls.push(tx);
        match selector.and_then(|selector| state.responses.get(&selector)) {
            Some(response) => response.clone(),
            None => Err(WalletError::Request(ErrorPayload::revert("unknown function"))),
        }
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError> {
        let gate = self.state.lock().gate.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let mut state = self.state.lock();
        state.sent.push(tx);
        if let Some(err) = state.send_error.take() {
            return Err(err);
        }
        Ok(keccak256(state.sent.len().to_be_bytes()))
    }

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<(), WalletError> {
        let mut state = self.state.lock();
        if let Some(err) = state.confirmation_error.take() {
            return Err(err);
        }
        trace!(%tx_hash, "confirmed");
        state.confirmed.push(tx_hash);
        Ok(())
    }
}

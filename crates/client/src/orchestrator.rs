//! Sequencing of wallet and contract interactions.

use crate::{
    BankContract, BankError, Notification, NotificationSink,
    state::{Affordance, BankSnapshot, FormInputs, InputField, PendingFlags, PendingState, ViewState},
};
use alloy_primitives::{Address, TxHash};
use bank_wallets::{WalletProvider, WalletSession};
use parking_lot::Mutex;
use std::sync::Arc;

/// Result of a user-triggered interaction.
///
/// Failures have already been reported to the notification sink by the time this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Failed,
    /// The affordance already had a transaction in flight, nothing was done.
    Ignored,
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

#[derive(Debug, Default)]
struct State {
    started: bool,
    snapshot: BankSnapshot,
    pending: PendingFlags,
    inputs: FormInputs,
    notification: Option<Notification>,
}

/// Drives every interaction between the user, the wallet and the bank contract.
///
/// Each interaction catches its own failure and reports it through the [`NotificationSink`];
/// none of them is fatal and the user may always retry. State lives behind a lock that is
/// never held across an `.await`, so interactions on different affordances may overlap.
pub struct Orchestrator<P, S> {
    wallet: Arc<WalletSession<P>>,
    contract: BankContract<P>,
    sink: S,
    state: Mutex<State>,
}

impl<P: WalletProvider, S: NotificationSink> Orchestrator<P, S> {
    pub fn new(wallet: WalletSession<P>, contract_address: Address, sink: S) -> Self {
        let wallet = Arc::new(wallet);
        let contract = BankContract::new(contract_address, wallet.clone());
        Self { wallet, contract, sink, state: Mutex::new(State::default()) }
    }

    /// A copy of everything the shell renders.
    pub fn state(&self) -> ViewState {
        let state = self.state.lock();
        ViewState {
            session: self.wallet.session(),
            snapshot: state.snapshot.clone(),
            pending: state.pending,
            inputs: state.inputs.clone(),
            notification: state.notification.clone(),
        }
    }

    /// Whether the connected account owns the bank.
    pub fn is_owner(&self) -> bool {
        self.state().is_owner()
    }

    /// Records user input.
    pub fn update_input(&self, field: InputField, value: impl Into<String>) {
        self.state.lock().inputs.set(field, value.into());
    }

    /// Hides the current notification.
    pub fn dismiss_notification(&self) {
        if let Some(notification) = &mut self.state.lock().notification {
            notification.visible = false;
        }
    }

    /// Runs the startup sequence: connect, then read the bank name, owner and caller balance.
    ///
    /// Every step runs even if an earlier one failed. Only the first call does anything;
    /// returns `false` for later calls.
    pub async fn start(&self) -> bool {
        if std::mem::replace(&mut self.state.lock().started, true) {
            trace!("startup sequence already ran");
            return false;
        }
        debug!(contract = %self.contract.address(), "running startup sequence");
        self.connect().await;
        self.refresh_bank_name().await;
        self.refresh_owner().await;
        self.refresh_balance().await;
        true
    }

    /// Asks the wallet for account access.
    ///
    /// The wallet is prompted again every time, even if it already granted access.
    pub async fn connect(&self) -> Outcome {
        match self.wallet.request_accounts().await {
            Ok(_) => Outcome::Completed,
            Err(err) => self.fail("connect", err.into()),
        }
    }

    /// Re-reads the bank name.
    pub async fn refresh_bank_name(&self) -> Outcome {
        match self.contract.read_bank_name().await {
            Ok(name) => {
                self.state.lock().snapshot.bank_name = Some(name);
                Outcome::Completed
            }
            Err(err) => self.fail("read bank name", err),
        }
    }

    /// Re-reads the bank owner.
    pub async fn refresh_owner(&self) -> Outcome {
        match self.contract.read_owner().await {
            Ok(owner) => {
                self.state.lock().snapshot.owner_address = Some(owner);
                Outcome::Completed
            }
            Err(err) => self.fail("read bank owner", err),
        }
    }

    /// Re-reads the caller's balance.
    pub async fn refresh_balance(&self) -> Outcome {
        match self.contract.read_caller_balance().await {
            Ok(balance) => {
                trace!(%balance, "retrieved balance");
                self.state.lock().snapshot.caller_balance_wei = Some(balance.wei());
                Outcome::Completed
            }
            Err(err) => self.fail("read balance", err),
        }
    }

    /// Renames the bank to the drafted name, then re-reads it.
    pub async fn set_bank_name(&self) -> Outcome {
        self.submit(Affordance::SettingName, |inputs| async move {
            self.contract.write_bank_name(&inputs.bank_name_draft).await
        })
        .await
    }

    /// Deposits the entered amount, then re-reads the balance.
    pub async fn deposit(&self) -> Outcome {
        self.submit(Affordance::Depositing, |inputs| async move {
            self.contract.deposit(&inputs.deposit_amount).await
        })
        .await
    }

    /// Withdraws the entered amount, then re-reads the balance.
    pub async fn withdraw(&self) -> Outcome {
        self.submit(Affordance::Withdrawing, |inputs| async move {
            self.contract.withdraw(&inputs.withdraw_amount).await
        })
        .await
    }

    /// Runs a write for `affordance` unless one is already in flight.
    ///
    /// On success the affordance's read is awaited before the success notification is
    /// emitted, so a failing refresh is reported and then replaced by the success.
    async fn submit<F, Fut>(&self, affordance: Affordance, write: F) -> Outcome
    where
        F: FnOnce(FormInputs) -> Fut,
        Fut: Future<Output = Result<TxHash, BankError>>,
    {
        let Some(_pending) = self.begin(affordance) else {
            debug!(?affordance, "ignoring trigger while pending");
            return Outcome::Ignored;
        };

        let inputs = self.state.lock().inputs.clone();
        match write(inputs).await {
            Ok(tx_hash) => {
                debug!(?affordance, %tx_hash, "transaction confirmed");
                match affordance {
                    Affordance::SettingName => self.refresh_bank_name().await,
                    Affordance::Depositing | Affordance::Withdrawing => {
                        self.refresh_balance().await
                    }
                };
                self.notify(Notification::transaction_success());
                Outcome::Completed
            }
            Err(err) => self.fail("transaction", err),
        }
    }

    /// Marks `affordance` as pending, or returns `None` if it already is.
    fn begin(&self, affordance: Affordance) -> Option<PendingGuard<'_>> {
        let mut state = self.state.lock();
        if state.pending.is_pending(affordance) {
            return None;
        }
        state.pending.set(affordance, PendingState::Pending);
        trace!(?affordance, "pending");
        Some(PendingGuard { state: &self.state, affordance })
    }

    fn fail(&self, operation: &str, err: BankError) -> Outcome {
        warn!(%err, "{operation} failed");
        self.notify(Notification::from(&err));
        Outcome::Failed
    }

    /// Replaces the current notification and hands it to the sink.
    fn notify(&self, notification: Notification) {
        self.state.lock().notification = Some(notification.clone());
        self.sink.notify(&notification);
    }
}

/// Returns its affordance to idle when dropped, whatever way the interaction ended.
struct PendingGuard<'a> {
    state: &'a Mutex<State>,
    affordance: Affordance,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().pending.set(self.affordance, PendingState::Idle);
        trace!(affordance = ?self.affordance, "idle");
    }
}

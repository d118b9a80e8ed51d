//! Session state owned by the orchestrator and read by the presentation shell.

use crate::{Notification, units::format_ether};
use alloy_primitives::{Address, U256};
use bank_wallets::Session;

/// Point-in-time mirror of the contract's state.
///
/// Each field is refreshed on its own and may be stale relative to the others.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BankSnapshot {
    pub bank_name: Option<String>,
    pub owner_address: Option<Address>,
    pub caller_balance_wei: Option<U256>,
}

/// A user action that submits a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Affordance {
    SettingName,
    Depositing,
    Withdrawing,
}

/// Whether an affordance has a transaction in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PendingState {
    #[default]
    Idle,
    Pending,
}

/// Pending state of every affordance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingFlags {
    pub setting_name: PendingState,
    pub depositing: PendingState,
    pub withdrawing: PendingState,
}

impl PendingFlags {
    pub fn get(&self, affordance: Affordance) -> PendingState {
        *self.slot(affordance)
    }

    pub fn is_pending(&self, affordance: Affordance) -> bool {
        self.get(affordance) == PendingState::Pending
    }

    pub(crate) fn set(&mut self, affordance: Affordance, state: PendingState) {
        *self.slot_mut(affordance) = state;
    }

    fn slot(&self, affordance: Affordance) -> &PendingState {
        match affordance {
            Affordance::SettingName => &self.setting_name,
            Affordance::Depositing => &self.depositing,
            Affordance::Withdrawing => &self.withdrawing,
        }
    }

    fn slot_mut(&mut self, affordance: Affordance) -> &mut PendingState {
        match affordance {
            Affordance::SettingName => &mut self.setting_name,
            Affordance::Depositing => &mut self.depositing,
            Affordance::Withdrawing => &mut self.withdrawing,
        }
    }
}

/// A form field the user types into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputField {
    DepositAmount,
    WithdrawAmount,
    BankNameDraft,
}

/// Raw user input. Nothing here is validated until it is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInputs {
    pub deposit_amount: String,
    pub withdraw_amount: String,
    pub bank_name_draft: String,
}

impl FormInputs {
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::DepositAmount => &self.deposit_amount,
            InputField::WithdrawAmount => &self.withdraw_amount,
            InputField::BankNameDraft => &self.bank_name_draft,
        }
    }

    pub(crate) fn set(&mut self, field: InputField, value: String) {
        match field {
            InputField::DepositAmount => self.deposit_amount = value,
            InputField::WithdrawAmount => self.withdraw_amount = value,
            InputField::BankNameDraft => self.bank_name_draft = value,
        }
    }
}

/// Everything the presentation shell renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub session: Session,
    pub snapshot: BankSnapshot,
    pub pending: PendingFlags,
    pub inputs: FormInputs,
    /// The single outstanding notification, if one was ever emitted.
    pub notification: Option<Notification>,
}

impl ViewState {
    /// Whether the connected account owns the bank.
    pub fn is_owner(&self) -> bool {
        is_owner(self.session.account, self.snapshot.owner_address)
    }

    /// The caller's balance formatted in ether.
    pub fn caller_balance_ether(&self) -> Option<String> {
        self.snapshot.caller_balance_wei.map(format_ether)
    }
}

/// Returns `true` iff both addresses are known and equal.
///
/// Addresses compare by value, so the hex casing they were written in is irrelevant.
pub fn is_owner(account: Option<Address>, owner: Option<Address>) -> bool {
    matches!((account, owner), (Some(account), Some(owner)) if account == owner)
}

use alloy_primitives::{Address, B256, Selector, U256, address};
use alloy_sol_types::{SolCall, SolValue};
use bank_client::{
    Notification, NotificationSink, Orchestrator, contract::IBank, units::format_bytes32_string,
};
use bank_test_utils::MockWallet;
use bank_wallets::WalletSession;
use parking_lot::Mutex;
use std::sync::Arc;

pub const ALICE: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
pub const BOB: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
pub const BANK: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

pub const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

/// Records every notification it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.notifications.lock().len()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: &Notification) {
        self.notifications.lock().push(notification.clone());
    }
}

pub fn selector<C: SolCall>() -> Selector {
    C::SELECTOR.into()
}

/// A wallet connected as `account` to a bank named `Crypto Bank`, owned by Alice, in which the
/// caller holds 2 ether.
pub fn bank_wallet(account: Address) -> MockWallet {
    let wallet = MockWallet::new().with_accounts([account]);
    set_bank_name(&wallet, "Crypto Bank");
    wallet.respond(selector::<IBank::bankOwnerCall>(), ALICE.abi_encode());
    set_balance(&wallet, U256::from(2 * ONE_ETHER));
    wallet
}

pub fn set_bank_name(wallet: &MockWallet, name: &str) {
    let word: B256 = format_bytes32_string(name).unwrap();
    wallet.respond(selector::<IBank::bankNameCall>(), word.abi_encode());
}

pub fn set_balance(wallet: &MockWallet, wei: U256) {
    wallet.respond(selector::<IBank::getCustomerBalanceCall>(), wei.abi_encode());
}

/// An orchestrator over `wallet`, recording notifications.
pub fn orchestrator(
    wallet: Option<MockWallet>,
) -> (Orchestrator<MockWallet, RecordingSink>, RecordingSink) {
    bank_test_utils::init_tracing();
    let sink = RecordingSink::default();
    (Orchestrator::new(WalletSession::new(wallet), BANK, sink.clone()), sink)
}

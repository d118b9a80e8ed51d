use crate::utils::*;
use alloy_primitives::{B256, TxKind, U256};
use alloy_sol_types::{SolCall, SolValue};
use bank_client::{BankContract, BankError, EncodingError, EtherAmount, contract::IBank};
use bank_test_utils::{MockWallet, selector_of};
use bank_wallets::{ErrorPayload, WalletError, WalletSession};
use std::sync::Arc;

fn contract(wallet: Option<MockWallet>) -> BankContract<MockWallet> {
    BankContract::new(BANK, Arc::new(WalletSession::new(wallet)))
}

#[tokio::test]
async fn reads_decode_contract_state() {
    let wallet = bank_wallet(BOB);
    let bank = contract(Some(wallet.clone()));

    assert_eq!(bank.read_bank_name().await.unwrap(), "Crypto Bank");
    assert_eq!(bank.read_owner().await.unwrap(), ALICE);
    let balance = bank.read_caller_balance().await.unwrap();
    assert_eq!(balance, EtherAmount(U256::from(2 * ONE_ETHER)));
    assert_eq!(balance.to_string(), "2.0");

    // every call targets the bank, the balance lookup is made as the caller
    let calls = wallet.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|tx| tx.to == Some(TxKind::Call(BANK))));
    assert_eq!(calls[2].from, Some(BOB));
    assert!(wallet.sent().is_empty());
}

#[tokio::test]
async fn repeated_reads_agree() {
    let wallet = bank_wallet(ALICE);
    let bank = contract(Some(wallet.clone()));

    assert_eq!(bank.read_bank_name().await.unwrap(), bank.read_bank_name().await.unwrap());
    assert_eq!(
        bank.read_caller_balance().await.unwrap(),
        bank.read_caller_balance().await.unwrap()
    );
    assert_eq!(wallet.calls_to(selector::<IBank::bankNameCall>()), 2);
}

#[tokio::test]
async fn deposit_sends_wei() {
    let wallet = bank_wallet(ALICE);
    let bank = contract(Some(wallet.clone()));

    let tx_hash = bank.deposit("1.5").await.unwrap();

    let sent = wallet.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].value, Some(U256::from(1_500_000_000_000_000_000u128)));
    assert_eq!(sent[0].from, Some(ALICE));
    assert_eq!(sent[0].to, Some(TxKind::Call(BANK)));
    assert_eq!(selector_of(&sent[0]), Some(selector::<IBank::depositMoneyCall>()));
    assert_eq!(wallet.confirmed(), vec![tx_hash]);
}

#[tokio::test]
async fn withdraw_to_caller() {
    let wallet = bank_wallet(BOB);
    let bank = contract(Some(wallet.clone()));

    bank.withdraw("0.25").await.unwrap();

    let sent = wallet.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].value, None);
    let call = IBank::withdrawMoneyCall::abi_decode(sent[0].input.input().unwrap()).unwrap();
    assert_eq!(call._to, BOB);
    assert_eq!(call._total, U256::from(ONE_ETHER / 4));
}

#[tokio::test]
async fn rename_encodes_bytes32() {
    let wallet = bank_wallet(ALICE);
    let bank = contract(Some(wallet.clone()));

    bank.write_bank_name("Savings & Loan").await.unwrap();

    let sent = wallet.sent();
    let call = IBank::setBankNameCall::abi_decode(sent[0].input.input().unwrap()).unwrap();
    assert_eq!(&call._name[..14], b"Savings & Loan");
    assert!(call._name[14..].iter().all(|&byte| byte == 0));
}

#[tokio::test]
async fn rename_too_long_never_reaches_wallet() {
    let wallet = bank_wallet(ALICE);
    let bank = contract(Some(wallet.clone()));

    let err = bank.write_bank_name("The First Decentralized Savings Bank").await.unwrap_err();
    assert!(matches!(err, BankError::Encoding(EncodingError::Bytes32TooLong(36))), "{err:?}");
    assert_eq!(wallet.requests(), 0);
}

#[tokio::test]
async fn invalid_amount_never_reaches_wallet() {
    let wallet = bank_wallet(ALICE);
    let bank = contract(Some(wallet.clone()));

    let err = bank.deposit("one").await.unwrap_err();
    assert!(matches!(err, BankError::Encoding(EncodingError::InvalidAmount { .. })), "{err:?}");
    let err = bank.withdraw("-1").await.unwrap_err();
    assert!(matches!(err, BankError::Encoding(EncodingError::NegativeAmount(_))), "{err:?}");
    assert_eq!(wallet.requests(), 0);
}

#[tokio::test]
async fn write_waits_for_confirmation() {
    let wallet = bank_wallet(ALICE);
    let bank = contract(Some(wallet.clone()));
    wallet.fail_next_confirmation(WalletError::Request(ErrorPayload::revert("paused")));

    let err = bank.deposit("1").await.unwrap_err();
    match err {
        BankError::ContractCallFailed(payload) => {
            assert_eq!(payload, ErrorPayload::revert("paused"));
        }
        other => panic!("expected contract failure, got {other:?}"),
    }
    // submitted, never confirmed
    assert_eq!(wallet.sent().len(), 1);
    assert!(wallet.confirmed().is_empty());
}

#[tokio::test]
async fn rejected_signature() {
    let wallet = bank_wallet(ALICE);
    let bank = contract(Some(wallet.clone()));
    wallet.fail_next_send(WalletError::Rejected(ErrorPayload::message(
        "User denied transaction signature.",
    )));

    let err = bank.withdraw("1").await.unwrap_err();
    assert!(matches!(err, BankError::UserRejected(_)), "{err:?}");
}

#[tokio::test]
async fn no_wallet() {
    let bank = contract(None);

    assert!(matches!(bank.read_bank_name().await, Err(BankError::WalletUnavailable)));
    assert!(matches!(bank.read_owner().await, Err(BankError::WalletUnavailable)));
    assert!(matches!(bank.read_caller_balance().await, Err(BankError::WalletUnavailable)));
    assert!(matches!(bank.deposit("1").await, Err(BankError::WalletUnavailable)));
    assert!(matches!(bank.withdraw("1").await, Err(BankError::WalletUnavailable)));
    // the wallet check comes before any encoding
    assert!(matches!(
        bank.write_bank_name(&"x".repeat(64)).await,
        Err(BankError::WalletUnavailable)
    ));
}

#[tokio::test]
async fn no_account() {
    let wallet = bank_wallet(ALICE).with_accounts([]);
    let bank = contract(Some(wallet.clone()));

    assert!(matches!(bank.read_caller_balance().await, Err(BankError::PreconditionMissing(_))));
    assert!(matches!(bank.withdraw("1").await, Err(BankError::PreconditionMissing(_))));
    assert!(wallet.sent().is_empty());
}

#[tokio::test]
async fn malformed_outputs() {
    let wallet = bank_wallet(ALICE);
    let bank = contract(Some(wallet.clone()));

    // a full word has no terminator
    wallet.respond(selector::<IBank::bankNameCall>(), B256::repeat_byte(b'a').abi_encode());
    let err = bank.read_bank_name().await.unwrap_err();
    assert!(matches!(err, BankError::Encoding(EncodingError::MissingNullTerminator)), "{err:?}");

    // too short to hold an address
    wallet.respond(selector::<IBank::bankOwnerCall>(), vec![0u8; 4]);
    let err = bank.read_owner().await.unwrap_err();
    assert!(matches!(err, BankError::ContractCallFailed(ErrorPayload::Message(_))), "{err:?}");

    // reverts keep their payload
    wallet.fail_call(
        selector::<IBank::bankOwnerCall>(),
        WalletError::Request(ErrorPayload::revert("nope")),
    );
    let err = bank.read_owner().await.unwrap_err();
    assert!(matches!(err, BankError::ContractCallFailed(ErrorPayload::Nested { .. })), "{err:?}");
}

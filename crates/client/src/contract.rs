//! Typed access to the deployed bank contract through the wallet provider.

use crate::{
    BankError,
    units::{format_bytes32_string, format_ether, parse_bytes32_string, parse_ether},
};
use alloy_primitives::{Address, TxHash, TxKind, U256};
use alloy_rpc_types::{TransactionInput, TransactionRequest};
use alloy_sol_types::{SolCall, sol};
use bank_wallets::{ErrorPayload, WalletError, WalletProvider, WalletSession};
use std::{fmt, sync::Arc};

sol! {
    /// The bank contract's external interface.
    interface IBank {
        function bankName() external view returns (bytes32);
        function bankOwner() external view returns (address);
        function getCustomerBalance() external view returns (uint256);
        function setBankName(bytes32 _name) external;
        function depositMoney() external payable;
        function withdrawMoney(address _to, uint256 _total) external;
    }
}

/// An amount of ether, held in wei.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct EtherAmount(pub U256);

impl EtherAmount {
    pub fn wei(&self) -> U256 {
        self.0
    }
}

impl fmt::Display for EtherAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_ether(self.0))
    }
}

/// A client bound to one deployed bank contract, acting through the session's wallet.
///
/// Every operation fails with [`BankError::WalletUnavailable`] when no wallet is installed.
/// Writes only resolve once the transaction has been included in a block.
#[derive(Debug)]
pub struct BankContract<P> {
    address: Address,
    wallet: Arc<WalletSession<P>>,
}

impl<P: WalletProvider> BankContract<P> {
    pub fn new(address: Address, wallet: Arc<WalletSession<P>>) -> Self {
        Self { address, wallet }
    }

    /// The contract's address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Reads the bank's name.
    pub async fn read_bank_name(&self) -> Result<String, BankError> {
        let word = self.call(IBank::bankNameCall {}, None).await?;
        Ok(parse_bytes32_string(&word)?)
    }

    /// Reads the bank owner's address.
    pub async fn read_owner(&self) -> Result<Address, BankError> {
        self.call(IBank::bankOwnerCall {}, None).await
    }

    /// Reads the balance the calling account holds in the bank.
    pub async fn read_caller_balance(&self) -> Result<EtherAmount, BankError> {
        self.wallet.provider()?;
        let caller = self.caller("balance lookup").await?;
        self.call(IBank::getCustomerBalanceCall {}, Some(caller)).await.map(EtherAmount)
    }

    /// Renames the bank. `name` must fit in 31 bytes of UTF-8.
    pub async fn write_bank_name(&self, name: &str) -> Result<TxHash, BankError> {
        self.wallet.provider()?;
        let name = format_bytes32_string(name)?;
        let caller = self.caller("renaming the bank").await?;
        self.send(IBank::setBankNameCall { _name: name }, caller, None).await
    }

    /// Deposits `amount` ether, given as a decimal string.
    pub async fn deposit(&self, amount: &str) -> Result<TxHash, BankError> {
        self.wallet.provider()?;
        let value = parse_ether(amount)?;
        let caller = self.caller("deposit").await?;
        self.send(IBank::depositMoneyCall {}, caller, Some(value)).await
    }

    /// Withdraws `amount` ether, given as a decimal string, to the calling account.
    pub async fn withdraw(&self, amount: &str) -> Result<TxHash, BankError> {
        self.wallet.provider()?;
        let total = parse_ether(amount)?;
        let caller = self.caller("withdrawal").await?;
        self.send(IBank::withdrawMoneyCall { _to: caller, _total: total }, caller, None).await
    }

    async fn caller(&self, operation: &'static str) -> Result<Address, BankError> {
        self.wallet.caller().await.map_err(|err| match err {
            WalletError::NoAccount => BankError::PreconditionMissing(operation),
            err => err.into(),
        })
    }

    async fn call<C: SolCall>(
        &self,
        call: C,
        from: Option<Address>,
    ) -> Result<C::Return, BankError> {
        let provider = self.wallet.provider()?;
        trace!(contract = %self.address, "calling {}", C::SIGNATURE);
        let output = provider.call(self.request(&call, from, None)).await?;
        C::abi_decode_returns(&output).map_err(|err| {
            BankError::ContractCallFailed(ErrorPayload::message(format!(
                "could not decode {} output: {err}",
                C::SIGNATURE
            )))
        })
    }

    /// Submits the call as a transaction and waits for its confirmation.
    async fn send<C: SolCall>(
        &self,
        call: C,
        from: Address,
        value: Option<U256>,
    ) -> Result<TxHash, BankError> {
        let provider = self.wallet.provider()?;
        let tx_hash = provider.send_transaction(self.request(&call, Some(from), value)).await?;
        debug!(%tx_hash, %from, "submitted {}, waiting for confirmation", C::SIGNATURE);
        provider.wait_for_confirmation(tx_hash).await?;
        debug!(%tx_hash, "confirmed {}", C::SIGNATURE);
        Ok(tx_hash)
    }

    fn request<C: SolCall>(
        &self,
        call: &C,
        from: Option<Address>,
        value: Option<U256>,
    ) -> TransactionRequest {
        TransactionRequest {
            from,
            to: Some(TxKind::Call(self.address)),
            value,
            input: TransactionInput::new(call.abi_encode().into()),
            ..Default::default()
        }
    }
}

use crate::{WalletError, WalletProvider};
use alloy_primitives::Address;
use parking_lot::Mutex;
use std::sync::Arc;

/// Current information about the wallet connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Whether a wallet granted account access.
    pub wallet_connected: bool,
    /// The first account the wallet authorized.
    pub account: Option<Address>,
}

/// Tracks the wallet provider and the connection it granted.
///
/// A missing provider is the only signal that no wallet is installed.
#[derive(Debug)]
pub struct WalletSession<P> {
    provider: Option<Arc<P>>,
    session: Mutex<Session>,
}

impl<P: WalletProvider> WalletSession<P> {
    /// Create a new session around an optional provider. The session starts disconnected.
    pub fn new(provider: Option<P>) -> Self {
        Self { provider: provider.map(Arc::new), session: Mutex::new(Session::default()) }
    }

    /// A session without any wallet provider.
    pub fn unavailable() -> Self {
        Self::new(None)
    }

    /// Returns `true` if a wallet provider is present.
    pub fn check_availability(&self) -> bool {
        self.provider.is_some()
    }

    /// Returns the provider, or [`WalletError::Unavailable`] if none is installed.
    pub fn provider(&self) -> Result<&Arc<P>, WalletError> {
        self.provider.as_ref().ok_or(WalletError::Unavailable)
    }

    /// Get current connection information.
    pub fn session(&self) -> Session {
        *self.session.lock()
    }

    /// Prompts the wallet for account access and records the first authorized account.
    ///
    /// The wallet is asked every time, even when a previous request was granted, so the user
    /// may be prompted again.
    pub async fn request_accounts(&self) -> Result<Address, WalletError> {
        let provider = self.provider()?;
        let accounts = provider.request_accounts().await?;
        let Some(&account) = accounts.first() else {
            return Err(WalletError::Rejected(crate::ErrorPayload::message(
                "wallet did not authorize any account",
            )));
        };

        *self.session.lock() = Session { wallet_connected: true, account: Some(account) };
        debug!(%account, "account connected");
        Ok(account)
    }

    /// Resolves the account the wallet currently signs with, without prompting.
    pub async fn caller(&self) -> Result<Address, WalletError> {
        let provider = self.provider()?;
        provider.accounts().await?.first().copied().ok_or(WalletError::NoAccount)
    }
}

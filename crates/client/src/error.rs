//! Error taxonomy and the normalization of failures into user-facing messages.

use alloy_primitives::utils::UnitsError;
use bank_wallets::{ErrorPayload, WalletError};

/// Title of every failed wallet or contract interaction.
pub const TRANSACTION_ERROR: &str = "Transaction Error";

/// Title shown when no wallet provider is installed.
pub const WALLET_NOT_INSTALLED: &str = "Wallet not installed";

/// Title shown when an operation needs a connected account and there is none.
pub const WALLET_NOT_CONNECTED: &str = "Wallet not connected";

/// Body used when a failure carries no usable message.
pub const GENERIC_ERROR_BODY: &str = "An error occurred";

const INSTALL_WALLET_BODY: &str = "Install a wallet provider to use the crypto bank...";

/// Errors raised while converting user input to or from the contract's encodings.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("bytes32 string must be less than 32 bytes")]
    Bytes32TooLong(usize),
    #[error("invalid bytes32 string - no null terminator")]
    MissingNullTerminator,
    #[error("invalid bytes32 string - {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("invalid ether amount {0:?}: amount must not be negative")]
    NegativeAmount(String),
    #[error("invalid ether amount {amount:?}: {source}")]
    InvalidAmount {
        amount: String,
        #[source]
        source: UnitsError,
    },
}

/// Failure of a wallet or contract interaction.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("no wallet provider detected")]
    WalletUnavailable,
    #[error("user rejected the request: {0}")]
    UserRejected(ErrorPayload),
    #[error("contract call failed: {0}")]
    ContractCallFailed(ErrorPayload),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("{0} requires a connected account")]
    PreconditionMissing(&'static str),
}

impl From<WalletError> for BankError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::Unavailable => Self::WalletUnavailable,
            WalletError::NoAccount => Self::PreconditionMissing("this operation"),
            WalletError::Rejected(payload) => Self::UserRejected(payload),
            WalletError::Request(payload) => Self::ContractCallFailed(payload),
            err @ WalletError::InvalidUrl(_) => {
                Self::ContractCallFailed(ErrorPayload::message(err.to_string()))
            }
        }
    }
}

impl BankError {
    /// Converts the failure into the `(title, body)` pair shown to the user.
    ///
    /// Never fails, whatever the shape of the underlying payload.
    pub fn normalize(&self) -> (&'static str, String) {
        match self {
            Self::WalletUnavailable => (WALLET_NOT_INSTALLED, INSTALL_WALLET_BODY.to_string()),
            Self::PreconditionMissing(_) => (WALLET_NOT_CONNECTED, self.to_string()),
            Self::UserRejected(payload) | Self::ContractCallFailed(payload) => {
                (TRANSACTION_ERROR, normalize_payload(payload))
            }
            Self::Encoding(err) => (TRANSACTION_ERROR, err.to_string()),
        }
    }
}

/// Extracts the message to show for a raw provider payload.
///
/// Revert reasons are relayed as `execution reverted: <reason>`; only the reason is kept.
pub fn normalize_payload(payload: &ErrorPayload) -> String {
    let body = match payload {
        ErrorPayload::Nested { inner, outer } => {
            revert_reason(inner).or_else(|| outer.as_deref().filter(|outer| !outer.is_empty()))
        }
        ErrorPayload::Message(message) => Some(message.as_str()).filter(|m| !m.is_empty()),
        ErrorPayload::Opaque => None,
    };
    body.unwrap_or(GENERIC_ERROR_BODY).to_string()
}

/// The second `:`-delimited segment of `message`, trimmed, if it is not empty.
fn revert_reason(message: &str) -> Option<&str> {
    message.split(':').nth(1).map(str::trim).filter(|reason| !reason.is_empty())
}

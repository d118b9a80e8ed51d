//! Conversions between user input and the contract's on-chain encodings.

use crate::EncodingError;
use alloy_primitives::{B256, U256, utils};

/// Encodes `text` as a null-terminated `bytes32` string.
///
/// At most 31 bytes of UTF-8 fit; the last byte is always the terminator.
pub fn format_bytes32_string(text: &str) -> Result<B256, EncodingError> {
    let bytes = text.as_bytes();
    if bytes.len() > 31 {
        return Err(EncodingError::Bytes32TooLong(bytes.len()));
    }
    let mut word = B256::ZERO;
    word[..bytes.len()].copy_from_slice(bytes);
    Ok(word)
}

/// Decodes a null-terminated `bytes32` string.
pub fn parse_bytes32_string(word: &B256) -> Result<String, EncodingError> {
    if word[31] != 0 {
        return Err(EncodingError::MissingNullTerminator);
    }
    let len = word.iter().position(|&byte| byte == 0).unwrap_or(32);
    Ok(std::str::from_utf8(&word[..len])?.to_string())
}

/// Parses a decimal ether amount into wei.
pub fn parse_ether(amount: &str) -> Result<U256, EncodingError> {
    if amount.starts_with('-') {
        return Err(EncodingError::NegativeAmount(amount.to_string()));
    }
    utils::parse_ether(amount)
        .map_err(|source| EncodingError::InvalidAmount { amount: amount.to_string(), source })
}

/// Formats wei as a decimal ether amount.
///
/// Trailing fractional zeros are dropped, keeping at least one fractional digit.
pub fn format_ether(wei: U256) -> String {
    let formatted = utils::format_ether(wei);
    let Some((int, frac)) = formatted.split_once('.') else {
        return format!("{formatted}.0");
    };
    let frac = frac.trim_end_matches('0');
    format!("{int}.{}", if frac.is_empty() { "0" } else { frac })
}

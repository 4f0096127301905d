//! Shared types for EVM transport requests and UI-facing results.

use crate::error::Error;
use alloy_primitives::{Address, U256};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Read-only contract call request (`eth_call`)
#[derive(Debug, Clone)]
pub struct CallRequest {
    /// Target contract address
    pub to: Address,
    /// Encoded function call
    pub data: Vec<u8>,
}

impl CallRequest {
    /// Create a new call request against the latest block
    pub fn new(to: Address, data: Vec<u8>) -> Self {
        Self { to, data }
    }
}

/// State-changing transaction request handed to the wallet transport.
///
/// Gas and fee fields are intentionally absent: fee estimation and signing
/// belong to the wallet, not to this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    /// Sender (the connected wallet account)
    pub from: Address,
    /// Target address (contract or EOA)
    pub to: Address,
    /// Value in wei
    pub value: U256,
    /// Calldata (empty for plain value transfers)
    pub data: Vec<u8>,
}

impl TransactionRequest {
    /// Create a new transaction request with zero value and empty calldata
    pub fn new(from: Address, to: Address) -> Self {
        Self {
            from,
            to,
            value: U256::ZERO,
            data: Vec::new(),
        }
    }

    /// Set the value (in wei) to transfer
    pub fn value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Set the calldata payload
    pub fn data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }
}

/// Whether a sale is gated by a whitelist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleVisibility {
    /// Anyone may participate
    Public,
    /// Participation restricted to whitelisted addresses
    Private,
}

impl std::fmt::Display for SaleVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaleVisibility::Public => write!(f, "PUBLIC"),
            SaleVisibility::Private => write!(f, "PRIVATE"),
        }
    }
}

/// Claim window of a sale, resolved from on-chain unix timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimTiming {
    /// When claiming opens
    pub opens_at: DateTime<Utc>,
    /// When the cliff ends
    pub cliff_ends_at: DateTime<Utc>,
}

impl ClaimTiming {
    /// Build from raw on-chain timestamps
    pub fn from_timestamps(opens_at: u64, cliff_ends_at: u64) -> Result<Self, Error> {
        let opens_at = Utc
            .timestamp_opt(i64::try_from(opens_at).map_err(|_| timestamp_err(opens_at))?, 0)
            .single()
            .ok_or_else(|| timestamp_err(opens_at))?;
        let cliff_ends_at = Utc
            .timestamp_opt(
                i64::try_from(cliff_ends_at).map_err(|_| timestamp_err(cliff_ends_at))?,
                0,
            )
            .single()
            .ok_or_else(|| timestamp_err(cliff_ends_at))?;
        Ok(Self {
            opens_at,
            cliff_ends_at,
        })
    }
}

fn timestamp_err(ts: u64) -> Error {
    Error::Contract(format!("Invalid on-chain timestamp: {}", ts))
}

/// EVM transport-level errors
#[derive(Debug, thiserror::Error)]
pub enum EvmError {
    #[error("RPC error: {0}")]
    RpcError(String),
}

impl From<EvmError> for Error {
    fn from(err: EvmError) -> Self {
        Error::Evm(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_sale_visibility_labels() {
        assert_eq!(SaleVisibility::Public.to_string(), "PUBLIC");
        assert_eq!(SaleVisibility::Private.to_string(), "PRIVATE");
    }

    #[test]
    fn test_claim_timing_from_timestamps() {
        let timing = ClaimTiming::from_timestamps(1_700_000_000, 1_702_592_000).unwrap();
        assert_eq!(timing.opens_at.timestamp(), 1_700_000_000);
        assert_eq!(timing.cliff_ends_at.timestamp(), 1_702_592_000);

        assert!(ClaimTiming::from_timestamps(u64::MAX, 0).is_err());
    }

    #[test]
    fn test_transaction_request_builder() {
        let from = address!("742d35cc6634c0532925a3b844bc454e4438f44e");
        let to = address!("00000000000000000000000000000000000000aa");

        let tx = TransactionRequest::new(from, to)
            .value(U256::from(7u64))
            .data(vec![0x01, 0x02]);

        assert_eq!(tx.from, from);
        assert_eq!(tx.to, to);
        assert_eq!(tx.value, U256::from(7u64));
        assert_eq!(tx.data, vec![0x01, 0x02]);
    }
}

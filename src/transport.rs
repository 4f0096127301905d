//! Wallet transport seam.
//!
//! Signing and transaction submission are external collaborators: a browser
//! wallet bridge, a hardware wallet daemon, a keystore service. This crate
//! only defines the surface it needs from them; it ships no implementation.

use crate::error::Error;
use crate::types::TransactionRequest;
use alloy_primitives::{Address, B256};
use async_trait::async_trait;

/// Connected-wallet transport used for mutating calls.
///
/// Implementations are expected to resolve gas and fees themselves (or defer
/// to their node) when handling `send_transaction`; the request carries only
/// sender, target, value and calldata.
#[async_trait]
pub trait WalletTransport: Send + Sync {
    /// Accounts currently exposed by the wallet. An empty list means the
    /// wallet is not connected.
    async fn accounts(&self) -> Result<Vec<Address>, Error>;

    /// Chain id the wallet is currently pointed at.
    async fn chain_id(&self) -> Result<u64, Error>;

    /// Submit a transaction for signing and broadcast, returning its hash.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<B256, Error>;
}

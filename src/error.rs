use thiserror::Error as ThisError;

/// Top-level error type for the launchpad SDK.
///
/// Transport and contract failures are wrapped verbatim and propagated to the
/// caller; nothing at this layer retries or classifies them.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Configuration loading or validation failure
    #[error("Configuration error: {0}")]
    Config(String),

    /// RPC communication failure
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Wallet transport missing or failing
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Contract call failure (revert, decode failure)
    #[error("Contract error: {0}")]
    Contract(String),

    /// EVM transport-level failure
    #[error("EVM error: {0}")]
    Evm(String),

    /// Numeric conversion failure (malformed amount, overflow)
    #[error("Math error: {0}")]
    Math(String),

    /// Wallet is connected to a different chain than the configured one
    #[error("Wrong network: expected chain id {expected}, wallet reports {actual}")]
    WrongNetwork { expected: u64, actual: u64 },

    /// Anything else
    #[error("{0}")]
    Other(String),
}

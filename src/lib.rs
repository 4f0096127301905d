pub mod abi;
pub mod client;
pub mod config;
pub mod contracts;
pub mod error;
pub mod math;
pub mod transport;
pub mod types;

// Main client exports
pub use client::{LaunchpadClient, LaunchpadClientBuilder};
pub use config::LaunchpadConfig;
pub use error::Error;
pub use transport::WalletTransport;

// Contract helper exports
pub use contracts::{Erc20, Sale, Vesting};

// Commonly used supporting types
pub use abi::AbiRegistry;
pub use math::{percentage_collected, to_base_units, to_human_value};
pub use types::{CallRequest, ClaimTiming, SaleVisibility, TransactionRequest};

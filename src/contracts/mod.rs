//! Contract interfaces and helpers
//!
//! Type-safe interfaces for the three deployed contracts the launchpad
//! application talks to, built with the Alloy `sol!` macro:
//!
//! - **ERC-20**: the sale's token (symbol, decimals, balances)
//! - **Sale**: claim/refund/participation state of a token sale
//! - **Vesting**: time-based release of locked tokens

pub mod erc20;
pub mod sale;
pub mod vesting;

pub use erc20::{Erc20, IERC20};
pub use sale::{ISale, Sale};
pub use vesting::{IVesting, Vesting};

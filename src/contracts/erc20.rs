//! ERC-20 token contract helpers

use crate::abi::{AbiRegistry, TOKEN_ABI};
use crate::client::LaunchpadClient;
use crate::error::Error;
use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;

sol! {
    #[derive(Debug)]
    interface IERC20 {
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
    }
}

/// ERC-20 token helper (read-only surface)
pub struct Erc20 {
    client: LaunchpadClient,
    address: Address,
}

impl Erc20 {
    /// Wire methods this helper invokes on the deployed contract
    pub const REQUIRED_METHODS: &'static [&'static str] = &["symbol", "decimals", "balanceOf"];

    /// Create a new ERC-20 helper for the given contract address
    pub fn new(client: LaunchpadClient, address: Address) -> Self {
        Self { client, address }
    }

    /// Get the contract address
    pub fn address(&self) -> Address {
        self.address
    }

    /// Check the deployment's ABI document covers every method we invoke
    pub fn verify_abi(&self, registry: &AbiRegistry) -> Result<(), Error> {
        registry.verify(TOKEN_ABI, Self::REQUIRED_METHODS)
    }

    /// Get the token ticker symbol
    pub async fn symbol(&self) -> Result<String, Error> {
        let call = IERC20::symbolCall {};
        let result = self.client.call_contract(self.address, call).await?;
        Ok(result._0)
    }

    /// Get token decimals
    pub async fn decimals(&self) -> Result<u8, Error> {
        let call = IERC20::decimalsCall {};
        let result = self.client.call_contract(self.address, call).await?;
        Ok(result._0)
    }

    /// Get balance of an address
    pub async fn balance_of(&self, account: Address) -> Result<U256, Error> {
        let call = IERC20::balanceOfCall { account };
        let result = self.client.call_contract(self.address, call).await?;
        Ok(result._0)
    }
}

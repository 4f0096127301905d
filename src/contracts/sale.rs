//! Token-sale contract helpers
//!
//! High-level methods for the sale contract the launchpad UI drives: sale
//! participation (buy), post-sale claims and refunds, and the read accessors
//! behind the sale page. Mutating methods gate on the configured chain id
//! before anything reaches the wallet transport.

use crate::abi::{AbiRegistry, SALE_ABI};
use crate::client::LaunchpadClient;
use crate::error::Error;
use crate::math;
use crate::types::{ClaimTiming, SaleVisibility};
use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::sol;

sol! {
    #[derive(Debug)]
    interface ISale {
        function claim() external;
        function refund() external;
        function getClaimableTokens(address wallet) external view returns (uint256);
        function pendingClaimable(address wallet) external view returns (uint256);
        function claimedTokens(address wallet) external view returns (uint256);
        function participants(address wallet) external view returns (uint256);
        function claimTiming() external view returns (uint256);
        function claimCliffTime() external view returns (uint256);
        function whitelistEnabled() external view returns (bool);
        function getWhitelistStatus(address wallet) external view returns (bool);
        function getVestingClaim() external view returns (uint256[] memory);
    }
}

/// Sale contract helper
pub struct Sale {
    client: LaunchpadClient,
    address: Address,
}

impl Sale {
    /// Wire methods this helper invokes on the deployed contract
    pub const REQUIRED_METHODS: &'static [&'static str] = &[
        "claim",
        "refund",
        "getClaimableTokens",
        "pendingClaimable",
        "claimedTokens",
        "participants",
        "claimTiming",
        "claimCliffTime",
        "whitelistEnabled",
        "getWhitelistStatus",
        "getVestingClaim",
    ];

    /// Create a new sale helper for the given contract address
    pub fn new(client: LaunchpadClient, address: Address) -> Self {
        Self { client, address }
    }

    /// Get the contract address
    pub fn address(&self) -> Address {
        self.address
    }

    /// Check the deployment's ABI document covers every method we invoke
    pub fn verify_abi(&self, registry: &AbiRegistry) -> Result<(), Error> {
        registry.verify(SALE_ABI, Self::REQUIRED_METHODS)
    }

    // ========== Mutating Operations ==========

    /// Claim vested sale tokens for the connected wallet
    pub async fn claim(&self) -> Result<B256, Error> {
        self.client.require_network().await?;
        self.client
            .send_contract_call(self.address, ISale::claimCall {})
            .await
    }

    /// Claim a refund for the connected wallet
    pub async fn refund(&self) -> Result<B256, Error> {
        self.client.require_network().await?;
        self.client
            .send_contract_call(self.address, ISale::refundCall {})
            .await
    }

    /// Buy into the sale by sending the human-readable native amount as
    /// plain value to the sale contract (the contract's receive hook books
    /// the contribution; there is no calldata on this path).
    pub async fn buy_tokens(&self, amount: &str) -> Result<B256, Error> {
        self.client.require_network().await?;
        let value = math::to_base_units(amount, 18)?;
        self.client.send_value(self.address, value).await
    }

    // ========== Read Accessors ==========

    /// Tokens currently claimable by the connected wallet, as a human
    /// decimal string
    pub async fn claimable_tokens(&self, decimals: u8) -> Result<String, Error> {
        let wallet = self.client.require_sender().await?;
        let result = self
            .client
            .call_contract(self.address, ISale::getClaimableTokensCall { wallet })
            .await?;
        Ok(math::to_human_value(result._0, decimals))
    }

    /// Tokens still locked for the connected wallet, as a human decimal
    /// string
    pub async fn pending_claimable(&self, decimals: u8) -> Result<String, Error> {
        let wallet = self.client.require_sender().await?;
        let result = self
            .client
            .call_contract(self.address, ISale::pendingClaimableCall { wallet })
            .await?;
        Ok(math::to_human_value(result._0, decimals))
    }

    /// Tokens already claimed by the connected wallet, as a human decimal
    /// string
    pub async fn claimed_tokens(&self, decimals: u8) -> Result<String, Error> {
        let wallet = self.client.require_sender().await?;
        let result = self
            .client
            .call_contract(self.address, ISale::claimedTokensCall { wallet })
            .await?;
        Ok(math::to_human_value(result._0, decimals))
    }

    /// Refund state recorded in the contract's participants slot for the
    /// connected wallet
    pub async fn already_refunded(&self) -> Result<u64, Error> {
        let wallet = self.client.require_sender().await?;
        let result = self
            .client
            .call_contract(self.address, ISale::participantsCall { wallet })
            .await?;
        to_u64(result._0, "participants")
    }

    /// Unix timestamp at which claiming opens
    pub async fn claim_timing(&self) -> Result<u64, Error> {
        let result = self
            .client
            .call_contract(self.address, ISale::claimTimingCall {})
            .await?;
        to_u64(result._0, "claimTiming")
    }

    /// Unix timestamp at which the claim cliff ends
    pub async fn claim_cliff_time(&self) -> Result<u64, Error> {
        let result = self
            .client
            .call_contract(self.address, ISale::claimCliffTimeCall {})
            .await?;
        to_u64(result._0, "claimCliffTime")
    }

    /// Claim window as calendar timestamps
    pub async fn claim_schedule(&self) -> Result<ClaimTiming, Error> {
        let opens_at = self.claim_timing().await?;
        let cliff_ends_at = self.claim_cliff_time().await?;
        ClaimTiming::from_timestamps(opens_at, cliff_ends_at)
    }

    /// Whether the sale is whitelist-gated
    pub async fn visibility(&self) -> Result<SaleVisibility, Error> {
        let result = self
            .client
            .call_contract(self.address, ISale::whitelistEnabledCall {})
            .await?;
        Ok(if result._0 {
            SaleVisibility::Private
        } else {
            SaleVisibility::Public
        })
    }

    /// Whether a specific wallet is on the sale's whitelist
    pub async fn wallet_whitelisted(&self, wallet: Address) -> Result<bool, Error> {
        let result = self
            .client
            .call_contract(self.address, ISale::getWhitelistStatusCall { wallet })
            .await?;
        Ok(result._0)
    }

    /// The sale's vesting claim breakdown (contract-defined slots)
    pub async fn vesting_claim(&self) -> Result<Vec<u64>, Error> {
        let result = self
            .client
            .call_contract(self.address, ISale::getVestingClaimCall {})
            .await?;
        result
            ._0
            .into_iter()
            .map(|v| to_u64(v, "getVestingClaim"))
            .collect()
    }
}

fn to_u64(value: U256, what: &str) -> Result<u64, Error> {
    value
        .try_into()
        .map_err(|_| Error::Contract(format!("{} value out of u64 range: {}", what, value)))
}

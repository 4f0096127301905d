//! Vesting contract helpers
//!
//! The vesting contract escrows tokens and releases them over time per
//! schedule. Schedules are addressed by their on-chain `bytes32` id.

use crate::abi::{AbiRegistry, VESTING_ABI};
use crate::client::LaunchpadClient;
use crate::error::Error;
use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::sol;

sol! {
    #[derive(Debug)]
    interface IVesting {
        struct VestingSchedule {
            bool initialized;
            address beneficiary;
            uint256 cliff;
            uint256 start;
            uint256 duration;
            uint256 slicePeriodSeconds;
            bool revocable;
            uint256 amountTotal;
            uint256 released;
            bool revoked;
        }

        function release(bytes32 vestingScheduleId, uint256 amount) external;
        function computeReleasableAmount(bytes32 vestingScheduleId) external view returns (uint256);
        function getVestingSchedule(bytes32 vestingScheduleId) external view returns (VestingSchedule memory);
    }
}

/// Vesting contract helper
pub struct Vesting {
    client: LaunchpadClient,
    address: Address,
}

impl Vesting {
    /// Wire methods this helper invokes on the deployed contract
    pub const REQUIRED_METHODS: &'static [&'static str] = &[
        "release",
        "computeReleasableAmount",
        "getVestingSchedule",
    ];

    /// Create a new vesting helper for the given contract address
    pub fn new(client: LaunchpadClient, address: Address) -> Self {
        Self { client, address }
    }

    /// Get the contract address
    pub fn address(&self) -> Address {
        self.address
    }

    /// Check the deployment's ABI document covers every method we invoke
    pub fn verify_abi(&self, registry: &AbiRegistry) -> Result<(), Error> {
        registry.verify(VESTING_ABI, Self::REQUIRED_METHODS)
    }

    /// Amount currently releasable for a schedule
    pub async fn releasable(&self, schedule_id: B256) -> Result<U256, Error> {
        let call = IVesting::computeReleasableAmountCall {
            vestingScheduleId: schedule_id,
        };
        let result = self.client.call_contract(self.address, call).await?;
        Ok(result._0)
    }

    /// Full on-chain schedule record
    pub async fn schedule(&self, schedule_id: B256) -> Result<IVesting::VestingSchedule, Error> {
        let call = IVesting::getVestingScheduleCall {
            vestingScheduleId: schedule_id,
        };
        let result = self.client.call_contract(self.address, call).await?;
        Ok(result._0)
    }

    /// Amount already released for a schedule
    pub async fn released(&self, schedule_id: B256) -> Result<U256, Error> {
        Ok(self.schedule(schedule_id).await?.released)
    }

    /// Release everything currently releasable for a schedule, with the
    /// connected wallet as sender. Reads the releasable amount first, then
    /// submits `release(id, amount)`.
    pub async fn claim(&self, schedule_id: B256) -> Result<B256, Error> {
        let amount = self.releasable(schedule_id).await?;
        self.client
            .send_contract_call(
                self.address,
                IVesting::releaseCall {
                    vestingScheduleId: schedule_id,
                    amount,
                },
            )
            .await
    }

    /// Beneficiary recorded on a schedule
    pub async fn beneficiary(&self, schedule_id: B256) -> Result<Address, Error> {
        Ok(self.schedule(schedule_id).await?.beneficiary)
    }
}

//! Contract access facade for the launchpad application.
//!
//! Holds the two transport handles the application works with: the injected
//! wallet transport for mutating calls, and a lazily constructed, process-wide
//! read-only RPC provider for queries. Typed contract helpers are reached
//! through [`LaunchpadClient::erc20`], [`LaunchpadClient::sale`] and
//! [`LaunchpadClient::vesting`].

use crate::config::LaunchpadConfig;
use crate::contracts::{Erc20, Sale, Vesting};
use crate::error::Error;
use crate::transport::WalletTransport;
use crate::types::{CallRequest, EvmError, TransactionRequest};
use alloy_primitives::{Address, B256, U256};
use alloy_provider::{Provider, ProviderBuilder, RootProvider};
use alloy_rpc_types_eth::{TransactionInput, TransactionRequest as RpcTransactionRequest};
use alloy_sol_types::SolCall;
use alloy_transport_http::{Client, Http};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Read-only provider, constructed at most once per process and only ever
/// read afterwards.
static READ_PROVIDER: OnceCell<RootProvider<Http<Client>>> = OnceCell::const_new();

/// Main client wrapping the wallet and read-only transports
#[derive(Clone)]
pub struct LaunchpadClient {
    config: LaunchpadConfig,
    wallet: Option<Arc<dyn WalletTransport>>,
}

impl LaunchpadClient {
    /// Create a new client. The wallet transport is optional; without it only
    /// read operations that don't resolve the caller are available.
    pub fn new(config: LaunchpadConfig, wallet: Option<Arc<dyn WalletTransport>>) -> Self {
        Self { config, wallet }
    }

    /// Get the active configuration
    pub fn config(&self) -> &LaunchpadConfig {
        &self.config
    }

    /// Get the wallet transport, if one is attached
    pub fn wallet(&self) -> Option<&Arc<dyn WalletTransport>> {
        self.wallet.as_ref()
    }

    /// Attach a wallet transport
    pub fn set_wallet(&mut self, wallet: Arc<dyn WalletTransport>) {
        self.wallet = Some(wallet);
    }

    async fn read_provider(&self) -> Result<&'static RootProvider<Http<Client>>, Error> {
        READ_PROVIDER
            .get_or_try_init(|| async {
                let url = reqwest::Url::parse(&self.config.rpc_url)
                    .map_err(|e| Error::Config(format!("Invalid RPC URL: {}", e)))?;
                Ok(ProviderBuilder::new().on_http(url))
            })
            .await
    }

    /// Execute a read-only contract call
    pub async fn call(&self, request: CallRequest) -> Result<Vec<u8>, Error> {
        let tx_request = RpcTransactionRequest {
            to: Some(alloy_primitives::TxKind::Call(request.to)),
            input: TransactionInput::new(request.data.into()),
            ..Default::default()
        };

        let result = self
            .read_provider()
            .await?
            .call(&tx_request)
            .await
            .map_err(|e| EvmError::RpcError(e.to_string()))?;

        Ok(result.to_vec())
    }

    /// Call a contract method (read-only) via a typed `sol!` call
    pub async fn call_contract<T: SolCall>(
        &self,
        contract_address: Address,
        call: T,
    ) -> Result<T::Return, Error> {
        let data = call.abi_encode();
        let result = self.call(CallRequest::new(contract_address, data)).await?;
        let decoded = T::abi_decode_returns(&result, false)
            .map_err(|e| Error::Contract(format!("Failed to decode contract call result: {}", e)))?;
        Ok(decoded)
    }

    /// First account exposed by the wallet transport, or `None` when no
    /// transport is attached or the wallet exposes no accounts. Absence is
    /// the signal; the not-connected case is not an error.
    pub async fn connected_wallet(&self) -> Result<Option<Address>, Error> {
        let Some(wallet) = self.wallet.as_ref() else {
            return Ok(None);
        };
        let accounts = wallet.accounts().await?;
        Ok(accounts.first().copied())
    }

    /// Whether the wallet's reported chain id matches the configured one
    pub async fn correct_network(&self) -> Result<bool, Error> {
        let wallet = self.require_wallet()?;
        Ok(wallet.chain_id().await? == self.config.chain_id)
    }

    /// Network gate for mutating operations: warns and errors on mismatch
    /// before any contract call is attempted.
    pub(crate) async fn require_network(&self) -> Result<(), Error> {
        let wallet = self.require_wallet()?;
        let expected = self.config.chain_id;
        let actual = wallet.chain_id().await?;
        if actual != expected {
            warn!(
                expected,
                actual, "wallet is on the wrong network, connect to the expected chain first"
            );
            return Err(Error::WrongNetwork { expected, actual });
        }
        Ok(())
    }

    fn require_wallet(&self) -> Result<&Arc<dyn WalletTransport>, Error> {
        self.wallet
            .as_ref()
            .ok_or_else(|| Error::Wallet("No wallet transport configured".to_string()))
    }

    pub(crate) async fn require_sender(&self) -> Result<Address, Error> {
        self.connected_wallet()
            .await?
            .ok_or_else(|| Error::Wallet("No connected wallet account".to_string()))
    }

    /// Submit a mutating contract call with the connected wallet as sender
    pub async fn send_contract_call<T: SolCall>(
        &self,
        contract_address: Address,
        call: T,
    ) -> Result<B256, Error> {
        let wallet = self.require_wallet()?;
        let from = self.require_sender().await?;
        let data = call.abi_encode();
        debug!(
            to = %contract_address,
            selector = %hex::encode(&data[..4]),
            "submitting contract call"
        );
        wallet
            .send_transaction(TransactionRequest::new(from, contract_address).data(data))
            .await
    }

    /// Submit a plain value transfer with the connected wallet as sender
    pub async fn send_value(&self, to: Address, value: U256) -> Result<B256, Error> {
        let wallet = self.require_wallet()?;
        let from = self.require_sender().await?;
        debug!(%to, %value, "submitting value transfer");
        wallet
            .send_transaction(TransactionRequest::new(from, to).value(value))
            .await
    }

    /// Create a token helper for the given contract address
    pub fn erc20(&self, address: Address) -> Erc20 {
        Erc20::new(self.clone(), address)
    }

    /// Create a sale helper for the given contract address
    pub fn sale(&self, address: Address) -> Sale {
        Sale::new(self.clone(), address)
    }

    /// Create a vesting helper for the given contract address
    pub fn vesting(&self, address: Address) -> Vesting {
        Vesting::new(self.clone(), address)
    }
}

/// Builder pattern for `LaunchpadClient` construction
pub struct LaunchpadClientBuilder {
    config: Option<LaunchpadConfig>,
    wallet: Option<Arc<dyn WalletTransport>>,
}

impl LaunchpadClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: None,
            wallet: None,
        }
    }

    /// Set the configuration explicitly
    pub fn with_config(mut self, config: LaunchpadConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the wallet transport
    pub fn with_wallet(mut self, wallet: Arc<dyn WalletTransport>) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// Build the client, falling back to environment configuration when no
    /// explicit configuration was provided
    pub fn build(self) -> Result<LaunchpadClient, Error> {
        let config = match self.config {
            Some(config) => config,
            None => LaunchpadConfig::from_env()?,
        };
        Ok(LaunchpadClient::new(config, self.wallet))
    }
}

impl Default for LaunchpadClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

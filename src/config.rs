//! Configuration loading for the launchpad SDK.
//!
//! Values come from configuration files (optional) overridden by environment
//! variables, and are re-read on every `from_env` call. Only two settings are
//! required: the read-only RPC endpoint and the expected chain id used by the
//! network gate.

use crate::error::Error;
use config::{Config as ConfigLoader, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable names
const ENV_RPC_URL: &str = "LAUNCHPAD_RPC_URL";
const ENV_CHAIN_ID: &str = "LAUNCHPAD_CHAIN_ID";
const ENV_ABI_DIR: &str = "LAUNCHPAD_ABI_DIR";
const ENV_CONFIG_DIR: &str = "LAUNCHPAD_CONFIG_DIR";

/// Configuration file names to try, in order of preference
const CONFIG_FILES: &[&str] = &["launchpad.toml", "config.toml"];

/// Raw configuration as read from files/environment, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawConfig {
    /// Read-only RPC endpoint URL
    rpc_url: Option<String>,
    /// Expected chain id for the network gate; files may carry it as either
    /// an integer or a string
    #[serde(default, deserialize_with = "string_or_integer")]
    chain_id: Option<String>,
    /// Directory holding token.json / vesting.json / sale.json
    abi_dir: Option<String>,
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Integer(u64),
        Text(String),
    }

    Ok(Option::<Value>::deserialize(deserializer)?.map(|v| match v {
        Value::Integer(n) => n.to_string(),
        Value::Text(s) => s,
    }))
}

impl RawConfig {
    fn merge(&mut self, other: RawConfig) {
        if self.rpc_url.is_none() {
            self.rpc_url = other.rpc_url;
        }
        if self.chain_id.is_none() {
            self.chain_id = other.chain_id;
        }
        if self.abi_dir.is_none() {
            self.abi_dir = other.abi_dir;
        }
    }
}

/// Validated SDK configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchpadConfig {
    /// Read-only RPC endpoint URL
    pub rpc_url: String,
    /// Chain id the connected wallet is expected to report
    pub chain_id: u64,
    /// Optional directory holding the contract ABI documents
    pub abi_dir: Option<PathBuf>,
}

impl LaunchpadConfig {
    /// Create a configuration programmatically
    pub fn new(rpc_url: impl Into<String>, chain_id: u64) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            chain_id,
            abi_dir: None,
        }
    }

    /// Set the ABI directory
    pub fn with_abi_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.abi_dir = Some(dir.into());
        self
    }

    /// Load configuration from files and environment variables.
    ///
    /// Environment variables override file values. Values are read at call
    /// time; nothing is cached between calls.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let mut raw = RawConfig::default();

        // Environment wins, so it is merged first
        raw.merge(RawConfig {
            rpc_url: env::var(ENV_RPC_URL).ok(),
            chain_id: env::var(ENV_CHAIN_ID).ok(),
            abi_dir: env::var(ENV_ABI_DIR).ok(),
        });

        let config_dir = env::var(ENV_CONFIG_DIR).unwrap_or_else(|_| "config".to_string());
        for file_name in CONFIG_FILES {
            let path = Path::new(&config_dir).join(file_name);
            if path.is_file() {
                raw.merge(Self::load_file(&path)?);
            }
        }

        Self::build(raw)
    }

    fn load_file(path: &Path) -> Result<RawConfig, Error> {
        let path_str = path
            .to_str()
            .ok_or_else(|| Error::Config(format!("Non-UTF8 config path: {}", path.display())))?;

        let loader = ConfigLoader::builder()
            .add_source(File::new(path_str, FileFormat::Toml))
            .build()
            .map_err(|e| Error::Config(format!("Failed to load {}: {}", path.display(), e)))?;

        loader
            .try_deserialize()
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    fn build(raw: RawConfig) -> Result<Self, Error> {
        let rpc_url = raw
            .rpc_url
            .ok_or_else(|| Error::Config(format!("{} is not set", ENV_RPC_URL)))?;

        reqwest::Url::parse(&rpc_url)
            .map_err(|e| Error::Config(format!("Invalid RPC URL '{}': {}", rpc_url, e)))?;

        let chain_id = raw
            .chain_id
            .ok_or_else(|| Error::Config(format!("{} is not set", ENV_CHAIN_ID)))?;
        let chain_id: u64 = chain_id
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("Invalid chain id: {}", chain_id)))?;

        Ok(Self {
            rpc_url,
            chain_id,
            abi_dir: raw.abi_dir.map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_valid() {
        let config = LaunchpadConfig::build(RawConfig {
            rpc_url: Some("https://rpc.example.org".to_string()),
            chain_id: Some("5".to_string()),
            abi_dir: Some("abis".to_string()),
        })
        .unwrap();

        assert_eq!(config.rpc_url, "https://rpc.example.org");
        assert_eq!(config.chain_id, 5);
        assert_eq!(config.abi_dir, Some(PathBuf::from("abis")));
    }

    #[test]
    fn test_build_rejects_missing_and_malformed() {
        assert!(LaunchpadConfig::build(RawConfig::default()).is_err());

        let bad_url = LaunchpadConfig::build(RawConfig {
            rpc_url: Some("not a url".to_string()),
            chain_id: Some("1".to_string()),
            abi_dir: None,
        });
        assert!(bad_url.is_err());

        let bad_chain = LaunchpadConfig::build(RawConfig {
            rpc_url: Some("https://rpc.example.org".to_string()),
            chain_id: Some("mainnet".to_string()),
            abi_dir: None,
        });
        assert!(bad_chain.is_err());
    }

    #[test]
    fn test_file_chain_id_accepts_integer_and_string() {
        for toml in [
            "rpc_url = \"https://rpc.example.org\"\nchain_id = 5",
            "rpc_url = \"https://rpc.example.org\"\nchain_id = \"5\"",
        ] {
            let loader = ConfigLoader::builder()
                .add_source(File::from_str(toml, FileFormat::Toml))
                .build()
                .unwrap();
            let raw: RawConfig = loader.try_deserialize().unwrap();
            assert_eq!(raw.chain_id.as_deref(), Some("5"));
            assert_eq!(LaunchpadConfig::build(raw).unwrap().chain_id, 5);
        }
    }
}

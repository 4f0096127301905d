//! ABI registry for the externally supplied contract interface documents.
//!
//! The token, vesting and sale ABIs are opaque JSON schemas owned by the
//! contract deployments. The typed `sol!` interfaces in `contracts/` are the
//! actual call path; this registry exists so an application can load the
//! deployment's own ABI files and check that every method the SDK invokes is
//! really present in them.

use crate::error::Error;
use alloy_json_abi::{Function, JsonAbi};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Registry key for the token contract ABI
pub const TOKEN_ABI: &str = "token";
/// Registry key for the vesting contract ABI
pub const VESTING_ABI: &str = "vesting";
/// Registry key for the sale contract ABI
pub const SALE_ABI: &str = "sale";

/// Contract ABI registry keyed by contract kind
#[derive(Debug, Clone, Default)]
pub struct AbiRegistry {
    abis: HashMap<String, JsonAbi>,
}

impl AbiRegistry {
    /// Create a new empty ABI registry
    pub fn new() -> Self {
        Self {
            abis: HashMap::new(),
        }
    }

    /// Load `token.json`, `vesting.json` and `sale.json` from a directory
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, Error> {
        let mut registry = Self::new();
        for key in [TOKEN_ABI, VESTING_ABI, SALE_ABI] {
            let path = dir.as_ref().join(format!("{}.json", key));
            registry.load_from_file(&path, key.to_string())?;
        }
        Ok(registry)
    }

    /// Load an ABI from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P, key: String) -> Result<(), Error> {
        let content = fs::read_to_string(&path).map_err(|e| {
            Error::Config(format!(
                "Failed to read ABI file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        self.load_from_json(&content, key)
    }

    /// Load an ABI from a JSON string
    pub fn load_from_json(&mut self, json: &str, key: String) -> Result<(), Error> {
        let abi: JsonAbi = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Failed to parse ABI JSON: {}", e)))?;

        self.abis.insert(key, abi);
        Ok(())
    }

    /// Get an ABI by key
    pub fn get(&self, key: &str) -> Option<&JsonAbi> {
        self.abis.get(key)
    }

    /// Get a function by name from a specific ABI
    pub fn get_function(&self, abi_key: &str, function_name: &str) -> Result<&Function, Error> {
        let abi = self
            .get(abi_key)
            .ok_or_else(|| Error::Config(format!("ABI '{}' not found", abi_key)))?;

        abi.functions()
            .find(|f| f.name == function_name)
            .ok_or_else(|| {
                Error::Config(format!(
                    "Function '{}' not found in ABI '{}'",
                    function_name, abi_key
                ))
            })
    }

    /// Check that every named method exists in the given ABI document.
    ///
    /// Used by the contract helpers to validate a deployment's ABI against
    /// the wire methods the SDK will invoke.
    pub fn verify(&self, abi_key: &str, methods: &[&str]) -> Result<(), Error> {
        let abi = self
            .get(abi_key)
            .ok_or_else(|| Error::Config(format!("ABI '{}' not found", abi_key)))?;

        let missing: Vec<&str> = methods
            .iter()
            .copied()
            .filter(|m| !abi.functions().any(|f| f.name == *m))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Contract(format!(
                "ABI '{}' is missing methods: {}",
                abi_key,
                missing.join(", ")
            )))
        }
    }

    /// List all loaded ABI keys
    pub fn list_keys(&self) -> Vec<&str> {
        self.abis.keys().map(|s| s.as_str()).collect()
    }
}

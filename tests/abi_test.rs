//! Tests for loading the deployment ABI documents and verifying them
//! against the wire methods the SDK invokes.

use launchpad_sdk::abi::{AbiRegistry, SALE_ABI, TOKEN_ABI, VESTING_ABI};
use launchpad_sdk::contracts::{Erc20, Sale, Vesting};
use std::fs;

fn abi_json(methods: &[&str]) -> String {
    let functions: Vec<String> = methods
        .iter()
        .map(|name| {
            format!(
                r#"{{"type":"function","name":"{}","inputs":[],"outputs":[],"stateMutability":"nonpayable"}}"#,
                name
            )
        })
        .collect();
    format!("[{}]", functions.join(","))
}

#[test]
fn verify_passes_when_all_methods_present() {
    let mut registry = AbiRegistry::new();
    registry
        .load_from_json(&abi_json(Sale::REQUIRED_METHODS), SALE_ABI.to_string())
        .unwrap();

    assert!(registry.verify(SALE_ABI, Sale::REQUIRED_METHODS).is_ok());
}

#[test]
fn verify_reports_missing_methods() {
    let mut registry = AbiRegistry::new();
    // Deployment is missing the refund path
    let methods: Vec<&str> = Sale::REQUIRED_METHODS
        .iter()
        .copied()
        .filter(|m| *m != "refund")
        .collect();
    registry
        .load_from_json(&abi_json(&methods), SALE_ABI.to_string())
        .unwrap();

    let err = registry
        .verify(SALE_ABI, Sale::REQUIRED_METHODS)
        .unwrap_err();
    assert!(err.to_string().contains("refund"));
}

#[test]
fn verify_fails_for_unknown_key() {
    let registry = AbiRegistry::new();
    assert!(registry.verify(SALE_ABI, Sale::REQUIRED_METHODS).is_err());
}

#[test]
fn load_dir_reads_all_three_documents() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("token.json"),
        abi_json(Erc20::REQUIRED_METHODS),
    )
    .unwrap();
    fs::write(
        dir.path().join("vesting.json"),
        abi_json(Vesting::REQUIRED_METHODS),
    )
    .unwrap();
    fs::write(
        dir.path().join("sale.json"),
        abi_json(Sale::REQUIRED_METHODS),
    )
    .unwrap();

    let registry = AbiRegistry::load_dir(dir.path()).unwrap();

    let mut keys = registry.list_keys();
    keys.sort_unstable();
    assert_eq!(keys, vec![SALE_ABI, TOKEN_ABI, VESTING_ABI]);

    assert!(registry.verify(TOKEN_ABI, Erc20::REQUIRED_METHODS).is_ok());
    assert!(registry
        .verify(VESTING_ABI, Vesting::REQUIRED_METHODS)
        .is_ok());
    assert_eq!(
        registry.get_function(SALE_ABI, "claim").unwrap().name,
        "claim"
    );
}

#[test]
fn load_dir_fails_on_missing_document() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("token.json"),
        abi_json(Erc20::REQUIRED_METHODS),
    )
    .unwrap();

    assert!(AbiRegistry::load_dir(dir.path()).is_err());
}

#[test]
fn malformed_json_is_a_config_error() {
    let mut registry = AbiRegistry::new();
    assert!(registry
        .load_from_json("not json", TOKEN_ABI.to_string())
        .is_err());
}

/// End-to-end test for the authorization signing binary
use std::process::Command;

use dbc_admin_tools::authorization::{build_message, verify_authorization, AuthorizationAction};
use dbc_admin_tools::keypair::write_keypair;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

#[test]
fn produces_verifiable_payload() {
    let dir = tempfile::tempdir().unwrap();
    let wallet_path = dir.path().join("admin.json");
    let admin = Keypair::new();
    write_keypair(&admin, &wallet_path).unwrap();

    let user = Pubkey::new_unique();
    let target = Pubkey::new_unique();

    let output = Command::new(env!("CARGO_BIN_EXE_sign_authorization"))
        .env("ADMIN_WALLET", wallet_path.to_str().unwrap())
        .args([
            "initialize_pool",
            &user.to_string(),
            &target.to_string(),
            "5",
            "123456",
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");
    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(payload["action"], "initialize_pool");
    assert_eq!(payload["admin"], admin.pubkey().to_string());
    assert_eq!(payload["nonce"], 5);
    assert_eq!(payload["expirySlot"], 123_456);

    // The printed signature verifies against the reconstructed message.
    let message = build_message(AuthorizationAction::InitializePool, &user, &target, 5, 123_456);
    assert_eq!(payload["message"], hex::encode(message));

    let signature: [u8; 64] = bs58::decode(payload["signature"].as_str().unwrap())
        .into_vec()
        .unwrap()
        .try_into()
        .unwrap();
    verify_authorization(&admin.pubkey(), &message, &signature).unwrap();
}

#[test]
fn unknown_action_fails() {
    let dir = tempfile::tempdir().unwrap();
    let wallet_path = dir.path().join("admin.json");
    write_keypair(&Keypair::new(), &wallet_path).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_sign_authorization"))
        .env("ADMIN_WALLET", wallet_path.to_str().unwrap())
        .args([
            "mint",
            &Pubkey::new_unique().to_string(),
            &Pubkey::new_unique().to_string(),
            "1",
            "2",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown action"));
}

#[test]
fn missing_arguments_exit_1_with_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_sign_authorization"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

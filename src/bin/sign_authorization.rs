//! Produce an admin authorization payload for an authorization-gated
//! instruction
//! Run with: cargo run --bin sign_authorization -- <action> <user> <target> <nonce> <expiry-slot>
//!
//! The signer keypair comes from ADMIN_WALLET (defaults to the deployer
//! wallet). Output is a JSON payload whose signature the program will accept
//! for the given action, user and target, provided the nonce is fresh and
//! the expiry slot has not passed.

use std::env;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::Signer;

use dbc_admin_tools::authorization::{build_message, sign_authorization, AuthorizationAction};
use dbc_admin_tools::keypair::read_keypair;

const DEFAULT_ADMIN_WALLET: &str = "keys/devnet/deployer.json";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PayloadOutput {
    action: &'static str,
    admin: String,
    user: String,
    target: String,
    nonce: u64,
    expiry_slot: u64,
    message: String,
    signature: String,
}

fn run(args: &[String]) -> Result<()> {
    let action = AuthorizationAction::from_str(&args[1])?;
    let user = Pubkey::from_str(&args[2]).with_context(|| format!("invalid user {:?}", args[2]))?;
    let target =
        Pubkey::from_str(&args[3]).with_context(|| format!("invalid target {:?}", args[3]))?;
    let nonce: u64 = args[4]
        .parse()
        .with_context(|| format!("invalid nonce {:?}", args[4]))?;
    let expiry_slot: u64 = args[5]
        .parse()
        .with_context(|| format!("invalid expiry slot {:?}", args[5]))?;

    let wallet_path =
        PathBuf::from(env::var("ADMIN_WALLET").unwrap_or_else(|_| DEFAULT_ADMIN_WALLET.into()));
    let admin = read_keypair(&wallet_path).context("failed to load admin wallet")?;

    let payload = sign_authorization(&admin, action, &user, &target, nonce, expiry_slot)?;
    let message = build_message(action, &user, &target, nonce, expiry_slot);

    let output = PayloadOutput {
        action: action.name(),
        admin: admin.pubkey().to_string(),
        user: user.to_string(),
        target: target.to_string(),
        nonce,
        expiry_slot,
        message: hex::encode(message),
        signature: bs58::encode(payload.signature).into_string(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().collect();
    if args.len() < 6 {
        eprintln!("Usage: sign_authorization <action> <user> <target> <nonce> <expiry-slot>");
        eprintln!("  action: initialize_pool | swap");
        process::exit(1);
    }

    run(&args)
}

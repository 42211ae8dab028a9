//! Off-chain side of the program's admin authorization scheme.
//!
//! Authorization-gated instructions take a payload holding an ed25519
//! signature over a fixed-layout message. The program verifies the signature
//! against its admin whitelist and enforces a strictly-increasing nonce per
//! authority; this module only produces (and sanity-checks) the payload.

use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use borsh::BorshSerialize;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

/// action(1) || user(32) || target(32) || nonce(8) || expiry_slot(8)
pub const AUTHORIZATION_MESSAGE_LEN: usize = 1 + 32 + 32 + 8 + 8;

/// Actions the program accepts admin authorizations for.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationAction {
    InitializePool = 1,
    Swap = 2,
}

impl AuthorizationAction {
    pub fn name(&self) -> &'static str {
        match self {
            AuthorizationAction::InitializePool => "initialize_pool",
            AuthorizationAction::Swap => "swap",
        }
    }
}

impl FromStr for AuthorizationAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "initialize_pool" => Ok(AuthorizationAction::InitializePool),
            "swap" => Ok(AuthorizationAction::Swap),
            other => Err(anyhow!(
                "unknown action {other:?}, expected initialize_pool or swap"
            )),
        }
    }
}

/// The payload embedded in authorization-gated instructions. Layout mirrors
/// the program's account argument.
#[derive(Debug, Clone, BorshSerialize)]
pub struct AuthorizationPayload {
    pub signature: [u8; 64],
    pub nonce: u64,
    pub expiry_slot: u64,
}

/// The exact byte sequence the program reconstructs and verifies.
pub fn build_message(
    action: AuthorizationAction,
    user: &Pubkey,
    target: &Pubkey,
    nonce: u64,
    expiry_slot: u64,
) -> [u8; AUTHORIZATION_MESSAGE_LEN] {
    let mut buf = [0u8; AUTHORIZATION_MESSAGE_LEN];
    buf[0] = action as u8;
    buf[1..33].copy_from_slice(user.as_ref());
    buf[33..65].copy_from_slice(target.as_ref());
    buf[65..73].copy_from_slice(&nonce.to_le_bytes());
    buf[73..81].copy_from_slice(&expiry_slot.to_le_bytes());
    buf
}

/// Sign an authorization message with an admin keypair.
///
/// The signature is verified locally before being returned, so a payload
/// that leaves this function will pass the program's signature check.
pub fn sign_authorization(
    admin: &Keypair,
    action: AuthorizationAction,
    user: &Pubkey,
    target: &Pubkey,
    nonce: u64,
    expiry_slot: u64,
) -> Result<AuthorizationPayload> {
    let message = build_message(action, user, target, nonce, expiry_slot);
    let signature: [u8; 64] = admin
        .sign_message(&message)
        .as_ref()
        .try_into()
        .map_err(|_| anyhow!("unexpected signature length"))?;

    verify_authorization(&admin.pubkey(), &message, &signature)
        .context("freshly produced signature failed verification")?;

    Ok(AuthorizationPayload {
        signature,
        nonce,
        expiry_slot,
    })
}

/// Verify a signature the way the program does.
pub fn verify_authorization(admin: &Pubkey, message: &[u8], signature: &[u8; 64]) -> Result<()> {
    let key = VerifyingKey::from_bytes(admin.as_ref().try_into()?)
        .map_err(|_| anyhow!("admin key {admin} is not a valid ed25519 public key"))?;
    key.verify(message, &Signature::from_bytes(signature))
        .map_err(|_| anyhow!("signature does not verify against admin key {admin}"))
}

//! Keypair loading, decoding and file handling.
//!
//! Keypair files use the standard Solana CLI format: a JSON array of 64
//! integers holding the 32-byte seed followed by the 32-byte public key.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ed25519_dalek::SigningKey;
use solana_sdk::signature::Keypair;

/// Length of a full secret key (seed + public key).
pub const SECRET_KEY_LEN: usize = 64;

/// Build a keypair from a 64-byte secret, checking that the public-key half
/// actually belongs to the seed.
pub fn keypair_from_bytes(bytes: &[u8]) -> Result<Keypair> {
    if bytes.len() != SECRET_KEY_LEN {
        return Err(anyhow!(
            "expected {}-byte secret key, got {}",
            SECRET_KEY_LEN,
            bytes.len()
        ));
    }
    let seed: [u8; 32] = bytes[..32]
        .try_into()
        .map_err(|_| anyhow!("invalid seed length"))?;
    let derived = SigningKey::from_bytes(&seed).verifying_key();
    if derived.as_bytes()[..] != bytes[32..] {
        return Err(anyhow!("public key half does not match the seed"));
    }
    Keypair::try_from(bytes).map_err(|e| anyhow!("invalid keypair bytes: {e}"))
}

/// Decode a base58-encoded 64-byte secret key into a keypair.
pub fn keypair_from_base58(secret: &str) -> Result<Keypair> {
    let bytes = bs58::decode(secret)
        .into_vec()
        .context("secret is not valid base58")?;
    keypair_from_bytes(&bytes)
}

/// Read a keypair from a JSON-array file.
pub fn read_keypair(path: &Path) -> Result<Keypair> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read keypair file {}", path.display()))?;
    let bytes: Vec<u8> = serde_json::from_str(&contents)
        .with_context(|| format!("keypair file {} is not a JSON byte array", path.display()))?;
    keypair_from_bytes(&bytes)
        .with_context(|| format!("keypair file {} is invalid", path.display()))
}

/// Write a keypair as a JSON byte array, creating parent directories.
pub fn write_keypair(keypair: &Keypair, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create directory {}", dir.display()))?;
        }
    }
    let json = serde_json::to_string(&keypair.to_bytes().to_vec())?;
    fs::write(path, json)
        .with_context(|| format!("failed to write keypair file {}", path.display()))
}

//! Anchor IDL handling.
//!
//! The on-chain program is only known through its IDL file: the program
//! address and the instruction discriminators come from there, nothing of
//! the program itself is embedded in this crate.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use sha2::{Digest, Sha256};
use solana_sdk::pubkey::Pubkey;

/// A loaded IDL document.
#[derive(Debug)]
pub struct ProgramIdl {
    document: serde_json::Value,
}

impl ProgramIdl {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read IDL file {}", path.display()))?;
        let document = serde_json::from_str(&contents)
            .with_context(|| format!("IDL file {} is not valid JSON", path.display()))?;
        Ok(Self { document })
    }

    pub fn from_value(document: serde_json::Value) -> Self {
        Self { document }
    }

    /// The program address, from the top-level `address` field (Anchor
    /// 0.30+) or the legacy `metadata.address`.
    pub fn program_id(&self) -> Result<Pubkey> {
        let address = self
            .document
            .get("address")
            .or_else(|| self.document.get("metadata").and_then(|m| m.get("address")))
            .and_then(|a| a.as_str())
            .ok_or_else(|| anyhow!("program address missing in IDL metadata"))?;
        Pubkey::from_str(address).with_context(|| format!("IDL program address {address:?}"))
    }

    /// Discriminator for the named instruction. Prefers the bytes embedded
    /// in the IDL; falls back to the Anchor sighash when absent.
    pub fn instruction_discriminator(&self, name: &str) -> Result<[u8; 8]> {
        let instruction = self
            .document
            .get("instructions")
            .and_then(|i| i.as_array())
            .and_then(|list| {
                list.iter()
                    .find(|ix| ix.get("name").and_then(|n| n.as_str()) == Some(name))
            })
            .ok_or_else(|| anyhow!("instruction {name:?} not found in IDL"))?;

        match instruction.get("discriminator").and_then(|d| d.as_array()) {
            Some(bytes) => {
                let bytes: Vec<u8> = bytes
                    .iter()
                    .map(|b| {
                        b.as_u64()
                            .and_then(|v| u8::try_from(v).ok())
                            .ok_or_else(|| anyhow!("malformed discriminator for {name:?}"))
                    })
                    .collect::<Result<_>>()?;
                bytes
                    .as_slice()
                    .try_into()
                    .map_err(|_| anyhow!("discriminator for {name:?} is not 8 bytes"))
            }
            None => Ok(anchor_discriminator(name)),
        }
    }
}

/// Anchor's global-namespace instruction sighash:
/// the first 8 bytes of `sha256("global:<name>")`.
pub fn anchor_discriminator(name: &str) -> [u8; 8] {
    let digest = Sha256::digest(format!("global:{name}").as_bytes());
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

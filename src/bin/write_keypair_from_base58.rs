//! Convert a base58-encoded secret key into a keypair file on disk
//! Run with: cargo run --bin write_keypair_from_base58 -- <base58-secret> <output-path>

use std::env;
use std::path::Path;
use std::process;

use anyhow::Result;
use dbc_admin_tools::keypair::{keypair_from_base58, write_keypair};
use solana_sdk::signer::Signer;

fn run(secret: &str, out_path: &Path) -> Result<()> {
    // Decode and validate before touching the filesystem.
    let keypair = keypair_from_base58(secret)?;
    write_keypair(&keypair, out_path)?;
    println!("{}", keypair.pubkey());
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: write_keypair_from_base58 <base58-secret> <output-path>");
        process::exit(1);
    }

    if let Err(e) = run(&args[1], Path::new(&args[2])) {
        eprintln!("Failed to write keypair: {e:#}");
        process::exit(2);
    }
}

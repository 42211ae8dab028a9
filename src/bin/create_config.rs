//! Initialize a bonding curve configuration account on the program
//! Run with: cargo run --bin create_config
//!
//! Everything is driven by environment variables (see settings.rs for the
//! full list and defaults). Prints the parameter summary before submission
//! and the resulting config address and signature after confirmation, both
//! as JSON on stdout; diagnostics go to stderr.

use anyhow::{Context, Result};
use serde::Serialize;
use solana_client::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use tracing::info;

use dbc_admin_tools::idl::ProgramIdl;
use dbc_admin_tools::keypair::read_keypair;
use dbc_admin_tools::params::{create_config_instruction, ConfigParameters, ConfigSummary};
use dbc_admin_tools::settings::Settings;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateConfigResult {
    config_address: String,
    transaction_signature: String,
    fee_claimer: String,
    leftover_receiver: String,
    quote_mint: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;

    // Local files load before anything touches the network.
    let payer = read_keypair(&settings.wallet_path).context("failed to load wallet")?;
    info!("payer: {}", payer.pubkey());

    let idl = ProgramIdl::load(&settings.idl_path)?;
    let program_id = idl.program_id()?;
    let discriminator = idl.instruction_discriminator("create_config")?;
    info!("program: {}", program_id);

    let params = ConfigParameters::from_settings(&settings);
    let config_keypair = Keypair::new();

    let summary = ConfigSummary::new(&settings, &params);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    let rpc_client =
        RpcClient::new_with_commitment(settings.rpc_url.clone(), CommitmentConfig::confirmed());
    let recent_blockhash = rpc_client
        .get_latest_blockhash()
        .context("failed to fetch a recent blockhash")?;

    let instruction = create_config_instruction(
        &program_id,
        discriminator,
        &params,
        &config_keypair.pubkey(),
        &settings,
        &payer.pubkey(),
    )?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &[&payer, &config_keypair],
        recent_blockhash,
    );

    info!("submitting create_config transaction");
    let signature = rpc_client
        .send_and_confirm_transaction(&transaction)
        .context("create_config transaction failed")?;

    let result = CreateConfigResult {
        config_address: config_keypair.pubkey().to_string(),
        transaction_signature: signature.to_string(),
        fee_claimer: settings.fee_claimer.to_string(),
        leftover_receiver: settings.leftover_receiver.to_string(),
        quote_mint: settings.quote_mint.to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

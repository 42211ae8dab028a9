//! Environment-variable configuration for the config-creation tool.
//!
//! Every knob has a documented default so the tool runs against devnet out
//! of the box; any field can be overridden per variable. Parse failures are
//! hard errors naming the offending variable.

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use solana_sdk::pubkey::Pubkey;

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_WALLET_PATH: &str = "keys/devnet/deployer.json";
pub const DEFAULT_IDL_PATH: &str = "target/idl/dynamic_bonding_curve.json";
pub const DEFAULT_FEE_CLAIMER: &str = "7iP6tKxvovkSTKggrYVYhkQgHLvT1CqKxop16wbK5jE9";
pub const DEFAULT_QUOTE_MINT: &str = "So11111111111111111111111111111111111111112";

/// Assembled configuration for one `create_config` invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub rpc_url: String,
    pub wallet_path: PathBuf,
    pub idl_path: PathBuf,
    pub fee_claimer: Pubkey,
    pub leftover_receiver: Pubkey,
    pub quote_mint: Pubkey,
    pub migration_option: u8,
    pub migration_fee_option: u8,
    pub collect_fee_mode: u8,
    pub activation_type: u8,
    pub token_type: u8,
    pub token_decimal: u8,
    pub partner_lp_percentage: u8,
    pub partner_locked_lp_percentage: u8,
    pub creator_lp_percentage: u8,
    pub creator_locked_lp_percentage: u8,
    pub creator_trading_fee_percentage: u8,
    pub token_update_authority: u8,
    pub migration_quote_threshold: u64,
    pub migration_fee_percentage: u8,
    pub migration_creator_fee_percentage: u8,
    pub migrated_pool_fee_bps: u16,
    pub migrated_pool_collect_fee_mode: u8,
    pub migrated_pool_dynamic_fee: u8,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let fee_claimer_str = env_or("FEE_CLAIMER", DEFAULT_FEE_CLAIMER);
        let fee_claimer = parse_pubkey("FEE_CLAIMER", &fee_claimer_str)?;
        // The leftover receiver falls back to the fee claimer, including an
        // overridden one.
        let leftover_receiver = match env::var("LEFTOVER_RECEIVER") {
            Ok(value) => parse_pubkey("LEFTOVER_RECEIVER", &value)?,
            Err(_) => fee_claimer,
        };

        Ok(Self {
            rpc_url: env_or("RPC_URL", DEFAULT_RPC_URL),
            wallet_path: PathBuf::from(env_or("WALLET", DEFAULT_WALLET_PATH)),
            idl_path: PathBuf::from(env_or("IDL_PATH", DEFAULT_IDL_PATH)),
            fee_claimer,
            leftover_receiver,
            quote_mint: parse_pubkey("QUOTE_MINT", &env_or("QUOTE_MINT", DEFAULT_QUOTE_MINT))?,
            migration_option: parse_env("MIGRATION_OPTION", 1)?,
            migration_fee_option: parse_env("MIGRATION_FEE_OPTION", 2)?,
            collect_fee_mode: parse_env("COLLECT_FEE_MODE", 1)?,
            activation_type: parse_env("ACTIVATION_TYPE", 0)?,
            token_type: parse_env("TOKEN_TYPE", 0)?,
            token_decimal: parse_env("TOKEN_DECIMAL", 9)?,
            partner_lp_percentage: parse_env("PARTNER_LP_PERCENTAGE", 20)?,
            partner_locked_lp_percentage: parse_env("PARTNER_LOCKED_LP_PERCENTAGE", 0)?,
            creator_lp_percentage: parse_env("CREATOR_LP_PERCENTAGE", 80)?,
            creator_locked_lp_percentage: parse_env("CREATOR_LOCKED_LP_PERCENTAGE", 0)?,
            creator_trading_fee_percentage: parse_env("CREATOR_TRADING_FEE_PERCENTAGE", 50)?,
            token_update_authority: parse_env("TOKEN_UPDATE_AUTHORITY", 0)?,
            migration_quote_threshold: parse_env("MIGRATION_QUOTE_THRESHOLD", 1_000_000_000)?,
            migration_fee_percentage: parse_env("MIGRATION_FEE_PERCENTAGE", 0)?,
            migration_creator_fee_percentage: parse_env("MIGRATION_CREATOR_FEE_PERCENTAGE", 0)?,
            migrated_pool_fee_bps: parse_env("MIGRATED_POOL_FEE_BPS", 0)?,
            migrated_pool_collect_fee_mode: parse_env("MIGRATED_POOL_COLLECT_FEE_MODE", 0)?,
            migrated_pool_dynamic_fee: parse_env("MIGRATED_POOL_DYNAMIC_FEE", 0)?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| anyhow!("invalid value {value:?} for {key}: {e}")),
        Err(_) => Ok(default),
    }
}

fn parse_pubkey(key: &str, value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value).with_context(|| format!("invalid address {value:?} for {key}"))
}

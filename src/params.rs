//! The `create_config` instruction payload.
//!
//! These structs mirror the bonding-curve program's `ConfigParameters`
//! argument byte for byte; the program owns their validation, this side only
//! has to serialize them in the right order. Field order is therefore load
//! bearing and must not be rearranged.

use anyhow::Result;
use borsh::BorshSerialize;
use serde::Serialize;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use crate::settings::Settings;

/// Flat fee numerator applied at the cliff, before any scheduled decay.
pub const CLIFF_FEE_NUMERATOR: u64 = 5_000_000;
/// Square-root price the curve starts trading at.
pub const SQRT_START_PRICE: u128 = 4_295_048_016_000_000;
/// Square-root price of the single configured curve point.
pub const CURVE_SQRT_PRICE: u128 = 4_295_048_016_000_000_000;
/// Liquidity of the single configured curve point.
pub const CURVE_LIQUIDITY: u128 = 79_305_979_500_567_546_804_382_630_723;

/// Seed of the Anchor event-authority PDA.
const EVENT_AUTHORITY_SEED: &[u8] = b"__event_authority";

#[derive(Debug, Clone, BorshSerialize)]
pub struct BaseFeeParameters {
    pub cliff_fee_numerator: u64,
    pub first_factor: u16,
    pub second_factor: u64,
    pub third_factor: u64,
    pub base_fee_mode: u8,
}

#[derive(Debug, Clone, BorshSerialize)]
pub struct DynamicFeeParameters {
    pub bin_step: u16,
    pub bin_step_u128: u128,
    pub filter_period: u16,
    pub decay_period: u16,
    pub reduction_factor: u16,
    pub max_volatility_accumulator: u32,
    pub variable_fee_control: u32,
}

#[derive(Debug, Clone, BorshSerialize)]
pub struct PoolFeeParameters {
    pub base_fee: BaseFeeParameters,
    pub dynamic_fee: Option<DynamicFeeParameters>,
}

#[derive(Debug, Clone, BorshSerialize)]
pub struct LockedVestingParameters {
    pub amount_per_period: u64,
    pub cliff_duration_from_migration_time: u64,
    pub frequency: u64,
    pub number_of_period: u64,
    pub cliff_unlock_amount: u64,
}

#[derive(Debug, Clone, BorshSerialize)]
pub struct TokenSupplyParameters {
    pub pre_migration_token_supply: u64,
    pub post_migration_token_supply: u64,
}

#[derive(Debug, Clone, BorshSerialize)]
pub struct MigrationFee {
    pub fee_percentage: u8,
    pub creator_fee_percentage: u8,
}

#[derive(Debug, Clone, BorshSerialize)]
pub struct MigratedPoolFee {
    pub pool_fee_bps: u16,
    pub collect_fee_mode: u8,
    pub dynamic_fee: u8,
}

#[derive(Debug, Clone, BorshSerialize)]
pub struct LiquidityDistributionParameters {
    pub sqrt_price: u128,
    pub liquidity: u128,
}

#[derive(Debug, Clone, BorshSerialize)]
pub struct ConfigParameters {
    pub pool_fees: PoolFeeParameters,
    pub collect_fee_mode: u8,
    pub migration_option: u8,
    pub activation_type: u8,
    pub token_type: u8,
    pub token_decimal: u8,
    pub partner_lp_percentage: u8,
    pub partner_locked_lp_percentage: u8,
    pub creator_lp_percentage: u8,
    pub creator_locked_lp_percentage: u8,
    pub migration_quote_threshold: u64,
    pub sqrt_start_price: u128,
    pub locked_vesting: LockedVestingParameters,
    pub migration_fee_option: u8,
    pub token_supply: Option<TokenSupplyParameters>,
    pub creator_trading_fee_percentage: u8,
    pub token_update_authority: u8,
    pub migration_fee: MigrationFee,
    pub migrated_pool_fee: MigratedPoolFee,
    pub padding: [u64; 7],
    pub curve: Vec<LiquidityDistributionParameters>,
}

impl ConfigParameters {
    /// Assemble the payload from settings plus the fixed curve constants.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            pool_fees: PoolFeeParameters {
                base_fee: BaseFeeParameters {
                    cliff_fee_numerator: CLIFF_FEE_NUMERATOR,
                    first_factor: 0,
                    second_factor: 0,
                    third_factor: 0,
                    base_fee_mode: 0,
                },
                dynamic_fee: None,
            },
            collect_fee_mode: settings.collect_fee_mode,
            migration_option: settings.migration_option,
            activation_type: settings.activation_type,
            token_type: settings.token_type,
            token_decimal: settings.token_decimal,
            partner_lp_percentage: settings.partner_lp_percentage,
            partner_locked_lp_percentage: settings.partner_locked_lp_percentage,
            creator_lp_percentage: settings.creator_lp_percentage,
            creator_locked_lp_percentage: settings.creator_locked_lp_percentage,
            migration_quote_threshold: settings.migration_quote_threshold,
            sqrt_start_price: SQRT_START_PRICE,
            locked_vesting: LockedVestingParameters {
                amount_per_period: 0,
                cliff_duration_from_migration_time: 0,
                frequency: 0,
                number_of_period: 0,
                cliff_unlock_amount: 0,
            },
            migration_fee_option: settings.migration_fee_option,
            token_supply: None,
            creator_trading_fee_percentage: settings.creator_trading_fee_percentage,
            token_update_authority: settings.token_update_authority,
            migration_fee: MigrationFee {
                fee_percentage: settings.migration_fee_percentage,
                creator_fee_percentage: settings.migration_creator_fee_percentage,
            },
            migrated_pool_fee: MigratedPoolFee {
                pool_fee_bps: settings.migrated_pool_fee_bps,
                collect_fee_mode: settings.migrated_pool_collect_fee_mode,
                dynamic_fee: settings.migrated_pool_dynamic_fee,
            },
            padding: [0; 7],
            curve: vec![LiquidityDistributionParameters {
                sqrt_price: CURVE_SQRT_PRICE,
                liquidity: CURVE_LIQUIDITY,
            }],
        }
    }
}

/// The parameter summary printed before submission, in the shape partner
/// tooling expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSummary {
    pub quote_mint: String,
    pub fee_claimer: String,
    pub leftover_receiver: String,
    pub migration_option: u8,
    pub migration_fee_option: u8,
    pub collect_fee_mode: u8,
    pub activation_type: u8,
    pub token_type: u8,
    pub token_decimal: u8,
    pub migration_quote_threshold: String,
    pub creator_trading_fee_percentage: u8,
    pub curve: Vec<CurvePointSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePointSummary {
    pub sqrt_price: String,
    pub liquidity: String,
}

impl ConfigSummary {
    pub fn new(settings: &Settings, params: &ConfigParameters) -> Self {
        Self {
            quote_mint: settings.quote_mint.to_string(),
            fee_claimer: settings.fee_claimer.to_string(),
            leftover_receiver: settings.leftover_receiver.to_string(),
            migration_option: settings.migration_option,
            migration_fee_option: settings.migration_fee_option,
            collect_fee_mode: settings.collect_fee_mode,
            activation_type: settings.activation_type,
            token_type: settings.token_type,
            token_decimal: settings.token_decimal,
            migration_quote_threshold: settings.migration_quote_threshold.to_string(),
            creator_trading_fee_percentage: settings.creator_trading_fee_percentage,
            curve: params
                .curve
                .iter()
                .map(|point| CurvePointSummary {
                    sqrt_price: point.sqrt_price.to_string(),
                    liquidity: point.liquidity.to_string(),
                })
                .collect(),
        }
    }
}

/// The Anchor event-authority PDA for the program.
pub fn event_authority(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[EVENT_AUTHORITY_SEED], program_id).0
}

/// Build the `create_config` instruction.
///
/// Account order matches the program's accounts struct; the event authority
/// and the program id are part of it even though the instruction itself
/// never touches them directly.
pub fn create_config_instruction(
    program_id: &Pubkey,
    discriminator: [u8; 8],
    params: &ConfigParameters,
    config: &Pubkey,
    settings: &Settings,
    payer: &Pubkey,
) -> Result<Instruction> {
    let mut data = discriminator.to_vec();
    data.extend(borsh::to_vec(params)?);

    let accounts = vec![
        AccountMeta::new(*config, true),
        AccountMeta::new_readonly(settings.fee_claimer, false),
        AccountMeta::new_readonly(settings.leftover_receiver, false),
        AccountMeta::new_readonly(settings.quote_mint, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new_readonly(event_authority(program_id), false),
        AccountMeta::new_readonly(*program_id, false),
    ];

    Ok(Instruction::new_with_bytes(*program_id, &data, accounts))
}

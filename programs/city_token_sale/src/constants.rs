use super::*;

// PDA seeds
pub const ADMIN_VAULT_SEED: &[u8] = b"protocol_admin";
pub const CITY_CONFIG_SEED: &[u8] = b"city-config";
pub const CITY_MINT_SEED: &[u8] = b"city-mint";

pub const CITY_TOKEN_DECIMALS: u8 = 6;

pub const NATIVE_UNIT_SCALE: u64 = 1_000_000_000; // lamports per SOL
pub const TOKEN_UNIT_SCALE: u64 = 1_000_000;      // 10^CITY_TOKEN_DECIMALS

// Seeds are capped at 32 bytes, so the city name is too.
pub const MAX_CITY_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_URI_LEN: usize = 200;

const_assert_eq!(TOKEN_UNIT_SCALE, 10u64.pow(CITY_TOKEN_DECIMALS as u32));
const_assert_eq!(NATIVE_UNIT_SCALE, solana_program::native_token::LAMPORTS_PER_SOL);
const_assert_eq!(MAX_CITY_NAME_LEN, anchor_lang::solana_program::pubkey::MAX_SEED_LEN);

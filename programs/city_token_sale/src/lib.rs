use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    self, allocate, assign, create_account, Allocate, Assign, CreateAccount,
    Transfer as SystemTransfer,
};
use anchor_spl::associated_token::{self, get_associated_token_address, AssociatedToken};
use anchor_spl::metadata::{
    create_metadata_accounts_v3,
    mpl_token_metadata::types::DataV2,
    CreateMetadataAccountsV3,
    Metadata,
};
use anchor_spl::token::{self, initialize_mint2, InitializeMint2, Mint, MintTo, Token};
use mpl_token_metadata::accounts::Metadata as MetadataMpl;
use std::panic::Location;
use static_assertions::const_assert_eq;

pub mod error;
pub mod instructions;
pub mod state;
pub mod events;
pub mod constants;
pub mod math;
pub mod pda;
pub mod helpers;

pub use error::SaleError;
pub use instructions::*;
pub use state::*;
pub use events::*;
pub use constants::*;
pub use math::*;
pub use pda::*;
pub use helpers::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "city_token_sale",
    project_url: "https://github.com/city-token-sale/city_token_sale",
    contacts: "email:security@city-token-sale.dev",
    policy: "Please report vulnerabilities privately before disclosing them.",
    source_code: "https://github.com/city-token-sale/city_token_sale",
    source_release: "v0.1.0"
}

declare_id!("4u7TRCSVbzMFq1HY26TTrF2A7VE8uWwYU8LokMe4FpwW");

#[program]
pub mod city_token_sale {
    use super::*;

    /// Liveness probe. Touches no accounts.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        Initialize::handler(ctx)
    }

    pub fn vault_initialize(ctx: Context<InitializeVault>) -> Result<()> {
        let bump = ctx.bumps.admin_vault;

        InitializeVault::handler(ctx, bump)
    }

    pub fn buy<'info>(
        ctx: Context<'_, '_, '_, 'info, Buy<'info>>,
        city_name: String,
        city_rate: u64,
        deposit_amount: u64,
        reference_price: u64,
    ) -> Result<()> {
        Buy::handler(ctx, city_name, city_rate, deposit_amount, reference_price)
    }

    pub fn preview_buy(
        ctx: Context<PreviewBuy>,
        city_rate: u64,
        deposit_amount: u64,
        reference_price: u64,
    ) -> Result<PurchaseQuote> {
        PreviewBuy::handler(ctx, city_rate, deposit_amount, reference_price)
    }

    #[access_control(CreateCityMetadata::validate(&city_name, &symbol, &uri))]
    pub fn create_city_metadata(
        ctx: Context<CreateCityMetadata>,
        city_name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        CreateCityMetadata::handler(ctx, city_name, symbol, uri)
    }
}

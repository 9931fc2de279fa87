use super::*;

#[derive(Accounts)]
#[instruction(city_name: String)]
pub struct CreateCityMetadata<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [ADMIN_VAULT_SEED, admin.key().as_ref()],
        bump = admin_vault.bump,
        has_one = admin @ SaleError::Unauthorized,
    )]
    pub admin_vault: Account<'info, AdminVault>,

    #[account(
        seeds = [CITY_CONFIG_SEED, city_name.as_bytes()],
        bump = city_config.bump,
    )]
    pub city_config: Box<Account<'info, CityConfig>>,

    #[account(
        address = city_config.mint @ SaleError::AddressMismatch,
        constraint = city_mint.mint_authority == Some(admin_vault.key()).into() @ SaleError::InvalidMintAuthority,
    )]
    pub city_mint: Box<Account<'info, Mint>>,

    /// CHECK: Metaplex metadata PDA of `city_mint`, created by the metadata program
    #[account(
        mut,
        address = MetadataMpl::find_pda(&city_mint.key()).0 @ SaleError::AddressMismatch,
    )]
    pub metadata: UncheckedAccount<'info>,

    pub token_metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl CreateCityMetadata<'_> {
    pub fn validate(city_name: &str, symbol: &str, uri: &str) -> Result<()> {
        validate_city_name(city_name)?;
        require!(
            !symbol.is_empty() && symbol.len() <= MAX_SYMBOL_LEN,
            SaleError::InvalidSymbolLength
        );
        require!(uri.len() <= MAX_URI_LEN, SaleError::InvalidUriLength);
        Ok(())
    }

    pub fn handler(
        ctx: Context<Self>,
        city_name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        let admin_key = ctx.accounts.admin.key();
        let bump = [ctx.accounts.admin_vault.bump];
        let vault_seeds = AdminVault::signer_seeds(&admin_key, &bump);
        let vault_signer = &[&vault_seeds[..]];

        let cpi_program = ctx.accounts.token_metadata_program.to_account_info();
        let cpi_accounts = CreateMetadataAccountsV3 {
            metadata: ctx.accounts.metadata.to_account_info(),
            mint: ctx.accounts.city_mint.to_account_info(),
            mint_authority: ctx.accounts.admin_vault.to_account_info(),
            payer: ctx.accounts.admin.to_account_info(),
            update_authority: ctx.accounts.admin_vault.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
            rent: ctx.accounts.rent.to_account_info(),
        };

        create_metadata_accounts_v3(
            CpiContext::new_with_signer(cpi_program, cpi_accounts, vault_signer),
            DataV2 {
                name: city_name.clone(),
                symbol: symbol.clone(),
                uri: uri.clone(),
                seller_fee_basis_points: 0,
                creators: None,
                collection: None,
                uses: None,
            },
            false,
            true,
            None,
        )?;

        msg!("Metadata created for {} ({})", city_name, symbol);

        let clock = Clock::get()?;
        emit!(CityMetadataCreatedEvent {
            city_config: ctx.accounts.city_config.key(),
            mint: ctx.accounts.city_mint.key(),
            metadata: ctx.accounts.metadata.key(),
            symbol,
            uri,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}

use super::*;

#[derive(Accounts)]
pub struct Buy<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// CHECK: only the key is read, as the admin vault seed
    pub admin: UncheckedAccount<'info>,

    /// CHECK: pinned to the derived vault address, deserialized by `AdminVault::load`
    #[account(
        mut,
        address = derive_admin_vault(&admin.key()).0 @ SaleError::AddressMismatch,
    )]
    pub admin_vault: UncheckedAccount<'info>,

    /// CHECK: matched against the city name's derived address in the handler,
    /// created on the city's first purchase
    #[account(mut)]
    pub city_config: UncheckedAccount<'info>,

    /// CHECK: matched against the derived address for a new city and against
    /// `CityConfig::mint` for an existing one
    #[account(mut)]
    pub city_mint: UncheckedAccount<'info>,

    /// CHECK: must be the buyer's associated token account for `city_mint`
    #[account(mut)]
    pub buyer_token_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Buy<'info> {
    /// Loads the city for `city_name`, creating its config and mint on the
    /// first purchase. Returns the config and whether this call created it.
    fn open_city(&self, city_name: &str, city_rate: u64) -> Result<(CityConfig, bool)> {
        let (config_key, config_bump) = derive_city_config(city_name)?;
        require!(self.city_config.key() == config_key, SaleError::AddressMismatch);

        let city_mint_key = self.city_mint.key();
        let admin_vault_key = self.admin_vault.key();

        if !self.city_config.data_is_empty() {
            let mut config = CityConfig::load(&self.city_config)?;
            config.resolve(city_name, city_mint_key, city_rate, config.bump)?;
            check_mint_authority(&self.city_mint, &admin_vault_key)?;
            return Ok((config, false));
        }

        let (mint_key, mint_bump) = derive_city_mint(city_name)?;
        require!(city_mint_key == mint_key, SaleError::AddressMismatch);

        let config_bump_seed = [config_bump];
        let config_seeds: &[&[u8]] = &[CITY_CONFIG_SEED, city_name.as_bytes(), &config_bump_seed];
        create_pda_account(
            &self.buyer,
            &self.city_config,
            &self.system_program,
            8 + CityConfig::INIT_SPACE,
            &crate::ID,
            &[config_seeds],
        )?;

        let mint_bump_seed = [mint_bump];
        let mint_seeds: &[&[u8]] = &[CITY_MINT_SEED, city_name.as_bytes(), &mint_bump_seed];
        create_city_mint(
            &self.buyer,
            &self.city_mint,
            &self.token_program,
            &self.system_program,
            &admin_vault_key,
            &[mint_seeds],
        )?;

        let mut config = CityConfig::default();
        let created = config.resolve(city_name, city_mint_key, city_rate, config_bump)?;

        Ok((config, created))
    }

    fn open_buyer_token_account(&self) -> Result<()> {
        let expected = get_associated_token_address(&self.buyer.key(), &self.city_mint.key());
        require!(
            self.buyer_token_account.key() == expected,
            SaleError::AddressMismatch
        );

        associated_token::create_idempotent(CpiContext::new(
            self.associated_token_program.to_account_info(),
            associated_token::Create {
                payer: self.buyer.to_account_info(),
                associated_token: self.buyer_token_account.to_account_info(),
                authority: self.buyer.to_account_info(),
                mint: self.city_mint.to_account_info(),
                system_program: self.system_program.to_account_info(),
                token_program: self.token_program.to_account_info(),
            },
        ))
    }

    pub fn handler(
        ctx: Context<'_, '_, '_, 'info, Self>,
        city_name: String,
        city_rate: u64,
        deposit_amount: u64,
        reference_price: u64,
    ) -> Result<()> {
        validate_purchase(city_rate, deposit_amount, reference_price)?;
        validate_city_name(&city_name)?;

        let mut admin_vault = AdminVault::load(&ctx.accounts.admin_vault)?;

        // Pure; any pricing failure aborts before accounts are created or funds move.
        let quote = quote_purchase(deposit_amount, reference_price, city_rate)?;

        let (mut city_config, created) = ctx.accounts.open_city(&city_name, city_rate)?;
        let city_mint_key = ctx.accounts.city_mint.key();

        let clock = Clock::get()?;
        if created {
            msg!("New city token created: {}", city_name);
            msg!("   Mint address: {}", city_mint_key);

            emit!(CityCreatedEvent {
                city_config: ctx.accounts.city_config.key(),
                mint: city_mint_key,
                city_name: city_name.clone(),
                launch_rate: city_rate,
                timestamp: clock.unix_timestamp,
            });
        } else {
            msg!("Buying existing city token: {}", city_name);
        }

        ctx.accounts.open_buyer_token_account()?;

        msg!("   Lamports paid: {}", deposit_amount);
        msg!("   SOL counted: {}", quote.base_units);
        msg!("   USD value: ${}", quote.usd_value);
        msg!("   Rate per token: ${}", city_rate);
        msg!("   Tokens to mint: {} (with decimals)", quote.token_amount);

        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                SystemTransfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.admin_vault.to_account_info(),
                },
            ),
            deposit_amount,
        )?;
        admin_vault.record_deposit(deposit_amount)?;

        let admin_key = ctx.accounts.admin.key();
        let bump = [admin_vault.bump];
        let vault_seeds = AdminVault::signer_seeds(&admin_key, &bump);
        let vault_signer = &[&vault_seeds[..]];

        token::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.city_mint.to_account_info(),
                    to: ctx.accounts.buyer_token_account.to_account_info(),
                    authority: ctx.accounts.admin_vault.to_account_info(),
                },
                vault_signer,
            ),
            quote.token_amount,
        )?;

        city_config.record_mint(quote.token_amount)?;
        city_config.store(&ctx.accounts.city_config)?;
        admin_vault.store(&ctx.accounts.admin_vault)?;

        msg!("   Vault balance: {} lamports", admin_vault.balance);
        msg!("   Total city supply: {}", city_config.total_supply);

        emit!(CityTokensPurchasedEvent {
            buyer: ctx.accounts.buyer.key(),
            admin_vault: ctx.accounts.admin_vault.key(),
            city_config: ctx.accounts.city_config.key(),
            mint: city_mint_key,
            deposit_amount,
            reference_price,
            city_rate,
            usd_value: quote.usd_value,
            token_amount: quote.token_amount,
            vault_balance: admin_vault.balance,
            total_supply: city_config.total_supply,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}

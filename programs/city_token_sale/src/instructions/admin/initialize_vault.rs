use super::*;

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + AdminVault::INIT_SPACE,
        seeds = [ADMIN_VAULT_SEED, admin.key().as_ref()],
        bump,
    )]
    pub admin_vault: Account<'info, AdminVault>,

    pub system_program: Program<'info, System>,
}

impl InitializeVault<'_> {
    pub fn handler(ctx: Context<Self>, bump: u8) -> Result<()> {
        let admin = ctx.accounts.admin.key();
        ctx.accounts.admin_vault.initialize(admin, bump)?;

        msg!("Admin vault created for {}", admin);

        let clock = Clock::get()?;
        emit!(AdminVaultInitializedEvent {
            admin,
            admin_vault: ctx.accounts.admin_vault.key(),
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}

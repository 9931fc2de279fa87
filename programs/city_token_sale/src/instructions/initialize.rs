use super::*;

#[derive(Accounts)]
pub struct Initialize {}

impl Initialize {
    pub fn handler(ctx: Context<Self>) -> Result<()> {
        msg!("city_token_sale is live: {}", ctx.program_id);
        Ok(())
    }
}

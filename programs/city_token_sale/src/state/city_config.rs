use super::*;

#[account]
#[derive(InitSpace, Debug, Default)]
pub struct CityConfig {
    #[max_len(32)]
    pub city_name: String,
    pub mint: Pubkey,         // bound on first purchase, never rebound
    pub launch_rate: u64,     // rate of the purchase that created the city; not used for pricing
    pub total_supply: u64,    // everything this program has minted for the city
    pub bump: u8,
}

impl CityConfig {
    pub fn is_bound(&self) -> bool {
        self.mint != Pubkey::default()
    }

    /// Binds a fresh config to its mint, or checks the mint supplied for an
    /// existing city against the one recorded at creation.
    ///
    /// Returns `true` when this call created the binding. An existing
    /// config is left unchanged; `city_rate` only lands in `launch_rate`
    /// on the creating call.
    pub fn resolve(
        &mut self,
        city_name: &str,
        mint: Pubkey,
        city_rate: u64,
        bump: u8,
    ) -> Result<bool> {
        if self.is_bound() {
            require!(self.mint == mint, SaleError::AddressMismatch);
            return Ok(false);
        }

        self.city_name = city_name.to_string();
        self.mint = mint;
        self.launch_rate = city_rate;
        self.total_supply = 0;
        self.bump = bump;

        Ok(true)
    }

    pub fn record_mint(&mut self, amount: u64) -> Result<()> {
        self.total_supply = self.total_supply.safe_add(amount)?;
        Ok(())
    }

    pub fn load(info: &AccountInfo) -> Result<Self> {
        require_keys_eq!(*info.owner, crate::ID, ErrorCode::AccountOwnedByWrongProgram);
        let data = info.try_borrow_data()?;
        Self::try_deserialize(&mut &data[..])
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        self.try_serialize(&mut &mut data[..])
    }
}

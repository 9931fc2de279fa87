use super::*;

/// Custody record for SOL deposited through `buy`. One per admin.
#[account]
#[derive(InitSpace, Debug)]
pub struct AdminVault {
    pub admin: Pubkey,
    pub balance: u64, // lamports deposited, never decreases
    pub bump: u8,
}

impl AdminVault {
    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    pub fn initialize(&mut self, admin: Pubkey, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), SaleError::AlreadyInitialized);

        self.admin = admin;
        self.balance = 0;
        self.bump = bump;

        Ok(())
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.balance = self.balance.safe_add(amount)?;
        Ok(())
    }

    /// Reads the vault from a raw account, reporting any absent or foreign
    /// account as `VaultNotInitialized`.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return err!(SaleError::VaultNotInitialized);
        }

        let data = info.try_borrow_data()?;
        let vault = Self::try_deserialize(&mut &data[..])
            .map_err(|_| error!(SaleError::VaultNotInitialized))?;
        require!(vault.is_initialized(), SaleError::VaultNotInitialized);

        Ok(vault)
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        self.try_serialize(&mut &mut data[..])
    }

    pub fn signer_seeds<'a>(admin: &'a Pubkey, bump: &'a [u8; 1]) -> [&'a [u8]; 3] {
        [ADMIN_VAULT_SEED, admin.as_ref(), &bump[..]]
    }
}

use super::*;

pub fn derive_admin_vault(admin: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ADMIN_VAULT_SEED, admin.as_ref()], &crate::ID)
}

pub fn derive_city_config(city_name: &str) -> Result<(Pubkey, u8)> {
    derive_city_address(CITY_CONFIG_SEED, city_name)
}

pub fn derive_city_mint(city_name: &str) -> Result<(Pubkey, u8)> {
    derive_city_address(CITY_MINT_SEED, city_name)
}

// Names that cannot be used as a seed fail with `InvalidCityName` instead of aborting.
fn derive_city_address(prefix: &[u8], city_name: &str) -> Result<(Pubkey, u8)> {
    validate_city_name(city_name)?;
    Pubkey::try_find_program_address(&[prefix, city_name.as_bytes()], &crate::ID)
        .ok_or_else(|| error!(SaleError::InvalidCityName))
}

/// City names double as PDA seeds and as the stored `CityConfig::city_name`.
pub fn validate_city_name(city_name: &str) -> Result<()> {
    require!(
        !city_name.is_empty() && city_name.len() <= MAX_CITY_NAME_LEN,
        SaleError::InvalidCityName
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(derive_city_config("lisbon").unwrap(), derive_city_config("lisbon").unwrap());
        assert_eq!(derive_city_mint("lisbon").unwrap(), derive_city_mint("lisbon").unwrap());

        let admin = Pubkey::new_unique();
        assert_eq!(derive_admin_vault(&admin), derive_admin_vault(&admin));
    }

    #[test]
    fn config_and_mint_spaces_are_disjoint() {
        let (config, _) = derive_city_config("lisbon").unwrap();
        let (mint, _) = derive_city_mint("lisbon").unwrap();
        assert_ne!(config, mint);
    }

    #[test]
    fn vaults_are_per_admin() {
        let (first, _) = derive_admin_vault(&Pubkey::new_unique());
        let (second, _) = derive_admin_vault(&Pubkey::new_unique());
        assert_ne!(first, second);
    }

    #[test]
    fn distinct_names_never_collide() {
        // Deterministic pseudo-random names across the full 1..=32 byte range.
        let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
        let mut names = HashSet::new();
        while names.len() < 512 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = (state % MAX_CITY_NAME_LEN as u64) as usize + 1;
            let name: String = (0..len)
                .map(|i| (b'a' + ((state >> (i % 58)) % 26) as u8) as char)
                .collect();
            names.insert(name);
        }

        let mut addresses = HashSet::new();
        for name in &names {
            assert!(addresses.insert(derive_city_config(name).unwrap().0), "config collision for {name}");
            assert!(addresses.insert(derive_city_mint(name).unwrap().0), "mint collision for {name}");
        }
        assert_eq!(addresses.len(), names.len() * 2);
    }

    #[test]
    fn city_name_bounds() {
        assert!(validate_city_name("a").is_ok());
        assert!(validate_city_name(&"x".repeat(MAX_CITY_NAME_LEN)).is_ok());
        assert_eq!(validate_city_name("").unwrap_err(), SaleError::InvalidCityName.into());
        assert_eq!(
            validate_city_name(&"x".repeat(MAX_CITY_NAME_LEN + 1)).unwrap_err(),
            SaleError::InvalidCityName.into()
        );
    }

    #[test]
    fn unusable_names_fail_to_derive() {
        let too_long = "x".repeat(MAX_CITY_NAME_LEN + 1);
        for name in ["", too_long.as_str()] {
            assert_eq!(derive_city_config(name).unwrap_err(), SaleError::InvalidCityName.into());
            assert_eq!(derive_city_mint(name).unwrap_err(), SaleError::InvalidCityName.into());
        }
    }
}

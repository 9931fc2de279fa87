use super::*;

#[event]
pub struct AdminVaultInitializedEvent {
    pub admin: Pubkey,
    pub admin_vault: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct CityCreatedEvent {
    pub city_config: Pubkey,
    pub mint: Pubkey,
    pub city_name: String,
    pub launch_rate: u64,
    pub timestamp: i64,
}

#[event]
pub struct CityTokensPurchasedEvent {
    pub buyer: Pubkey,
    pub admin_vault: Pubkey,
    pub city_config: Pubkey,
    pub mint: Pubkey,
    pub deposit_amount: u64,   // lamports
    pub reference_price: u64,
    pub city_rate: u64,
    pub usd_value: u64,
    pub token_amount: u64,     // with decimals
    pub vault_balance: u64,
    pub total_supply: u64,
    pub timestamp: i64,
}

#[event]
pub struct CityMetadataCreatedEvent {
    pub city_config: Pubkey,
    pub mint: Pubkey,
    pub metadata: Pubkey,
    pub symbol: String,
    pub uri: String,
    pub timestamp: i64,
}

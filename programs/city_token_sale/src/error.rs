use super::*;

#[error_code]
pub enum SaleError {
    #[msg("City rate must be greater than zero")]
    RateNotValid,
    #[msg("The admin vault has not been initialized")]
    VaultNotInitialized,
    #[msg("The admin vault is already initialized")]
    AlreadyInitialized,
    #[msg("Supplied account does not match its derived address")]
    AddressMismatch,
    #[msg("There has been an arithmetic overflow error")]
    ArithmeticOverflow,
    #[msg("Reference price must be greater than zero")]
    PriceNotValid,
    #[msg("Please enter a valid amount greater than zero")]
    InvalidAmount,
    #[msg("City name must be between 1 and 32 bytes")]
    InvalidCityName,
    #[msg("Division by zero")]
    DivisionByZero,
    #[msg("City mint authority is not the admin vault")]
    InvalidMintAuthority,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid symbol length")]
    InvalidSymbolLength,
    #[msg("Invalid URI length")]
    InvalidUriLength,
}

use super::*;

/// Read-only quote. Moves no funds and touches no accounts.
#[derive(Accounts)]
pub struct PreviewBuy {}

impl PreviewBuy {
    pub fn handler(
        _ctx: Context<Self>,
        city_rate: u64,
        deposit_amount: u64,
        reference_price: u64,
    ) -> Result<PurchaseQuote> {
        validate_purchase(city_rate, deposit_amount, reference_price)?;

        let quote = quote_purchase(deposit_amount, reference_price, city_rate)?;
        msg!(
            "Quote: {} lamports -> ${} -> {} tokens",
            deposit_amount,
            quote.usd_value,
            quote.token_amount
        );

        Ok(quote)
    }
}

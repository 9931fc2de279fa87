use super::*;

/// Every intermediate value of a purchase, as computed by the price engine.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PurchaseQuote {
    /// Whole SOL counted toward the purchase; fractional lamports are dropped.
    pub base_units: u64,
    pub usd_value: u64,
    pub token_whole: u64,
    /// Amount to mint, in the city mint's smallest unit.
    pub token_amount: u64,
}

/// Runs the purchase pricing step by step.
///
/// Each division truncates on its own, in this order:
/// `lamports / 1e9`, `* reference_price`, `/ city_rate`, `* 1e6`.
/// Intermediates are `u128`; any value that does not fit back into `u64`
/// aborts with `ArithmeticOverflow`.
pub fn quote_purchase(
    deposit_amount: u64,
    reference_price: u64,
    city_rate: u64,
) -> Result<PurchaseQuote> {
    require!(city_rate > 0, SaleError::RateNotValid);

    let base_units = (deposit_amount as u128).safe_div(NATIVE_UNIT_SCALE as u128)?;
    let usd_value = base_units.safe_mul(reference_price as u128)?;
    let token_whole = usd_value.safe_div(city_rate as u128)?;
    let token_amount = token_whole.safe_mul(TOKEN_UNIT_SCALE as u128)?;

    Ok(PurchaseQuote {
        base_units: to_u64(base_units)?,
        usd_value: to_u64(usd_value)?,
        token_whole: to_u64(token_whole)?,
        token_amount: to_u64(token_amount)?,
    })
}

/// Argument checks shared by `buy` and `preview_buy`, applied in this order.
pub fn validate_purchase(city_rate: u64, deposit_amount: u64, reference_price: u64) -> Result<()> {
    require!(city_rate > 0, SaleError::RateNotValid);
    require!(reference_price > 0, SaleError::PriceNotValid);
    require!(deposit_amount > 0, SaleError::InvalidAmount);
    Ok(())
}

/// Amount of city tokens (smallest unit) minted for `deposit_amount` lamports.
pub fn compute_token_amount(
    deposit_amount: u64,
    reference_price: u64,
    city_rate: u64,
) -> Result<u64> {
    Ok(quote_purchase(deposit_amount, reference_price, city_rate)?.token_amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_SOL: u64 = 1_000_000_000;

    #[test]
    fn one_sol_at_rate_ten() {
        let quote = quote_purchase(ONE_SOL, 200, 10).unwrap();
        assert_eq!(
            quote,
            PurchaseQuote {
                base_units: 1,
                usd_value: 200,
                token_whole: 20,
                token_amount: 20_000_000,
            }
        );
    }

    #[test]
    fn one_sol_at_rate_five() {
        assert_eq!(compute_token_amount(ONE_SOL, 200, 5).unwrap(), 40_000_000);
    }

    #[test]
    fn zero_rate_is_rejected() {
        assert_eq!(
            compute_token_amount(ONE_SOL, 200, 0).unwrap_err(),
            SaleError::RateNotValid.into()
        );
    }

    #[test]
    fn purchase_arguments_are_checked_rate_first() {
        assert!(validate_purchase(10, ONE_SOL, 200).is_ok());
        assert_eq!(
            validate_purchase(0, 0, 0).unwrap_err(),
            SaleError::RateNotValid.into()
        );
        assert_eq!(
            validate_purchase(10, 0, 0).unwrap_err(),
            SaleError::PriceNotValid.into()
        );
        assert_eq!(
            validate_purchase(10, 0, 200).unwrap_err(),
            SaleError::InvalidAmount.into()
        );
    }

    #[test]
    fn same_inputs_same_output() {
        let inputs = [(ONE_SOL, 200, 10), (7 * ONE_SOL + 3, 151, 9), (u64::MAX, 1, 1)];
        for (deposit, price, rate) in inputs {
            let first = compute_token_amount(deposit, price, rate).unwrap();
            let second = compute_token_amount(deposit, price, rate).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn each_step_truncates() {
        // 2.999999999 SOL counts as 2 whole SOL.
        let quote = quote_purchase(3 * ONE_SOL - 1, 100, 7).unwrap();
        assert_eq!(quote.base_units, 2);
        assert_eq!(quote.usd_value, 200);
        // 200 / 7 = 28.57.. -> 28 whole tokens
        assert_eq!(quote.token_whole, 28);
        assert_eq!(quote.token_amount, 28_000_000);
    }

    #[test]
    fn dust_deposit_yields_zero_tokens() {
        assert_eq!(compute_token_amount(ONE_SOL - 1, 200, 10).unwrap(), 0);
        assert_eq!(compute_token_amount(1, u64::MAX, 1).unwrap(), 0);
        // USD value below one token's price
        assert_eq!(compute_token_amount(ONE_SOL, 9, 10).unwrap(), 0);
    }

    #[test]
    fn overflow_aborts_instead_of_wrapping() {
        // 18 whole SOL * u64::MAX overflows the u64 usd value
        assert_eq!(
            compute_token_amount(u64::MAX, u64::MAX, 1).unwrap_err(),
            SaleError::ArithmeticOverflow.into()
        );
        // usd value fits, token expansion by 1e6 does not
        assert_eq!(
            compute_token_amount(ONE_SOL, u64::MAX / 2, 1).unwrap_err(),
            SaleError::ArithmeticOverflow.into()
        );
    }

    #[test]
    fn largest_deposit_at_unit_price_fits() {
        let quote = quote_purchase(u64::MAX, 1, 1).unwrap();
        assert_eq!(quote.base_units, u64::MAX / ONE_SOL);
        assert_eq!(quote.token_amount, (u64::MAX / ONE_SOL) * 1_000_000);
    }
}

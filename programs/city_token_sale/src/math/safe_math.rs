use super::*;

/// Checked arithmetic that reports failures as `SaleError` and logs where they happened.
pub trait SafeMath<T>: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self>;
    fn safe_mul(self, rhs: Self) -> Result<Self>;
    fn safe_div(self, rhs: Self) -> Result<Self>;
    fn safe_sub(self, rhs: Self) -> Result<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath<$t> for $t {
            #[inline(always)]
            #[track_caller]
            fn safe_add(self, v: $t) -> Result<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(SaleError::ArithmeticOverflow.into())
                    }
                }
            }

            #[inline(always)]
            #[track_caller]
            fn safe_sub(self, v: $t) -> Result<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(SaleError::ArithmeticOverflow.into())
                    }
                }
            }

            #[inline(always)]
            #[track_caller]
            fn safe_mul(self, v: $t) -> Result<$t> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(SaleError::ArithmeticOverflow.into())
                    }
                }
            }

            #[inline(always)]
            #[track_caller]
            fn safe_div(self, v: $t) -> Result<$t> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(SaleError::DivisionByZero.into())
                    }
                }
            }
        }
    };
}

checked_impl!(u64);
checked_impl!(u128);

/// Narrows a `u128` intermediate back to `u64`.
#[track_caller]
pub fn to_u64(value: u128) -> Result<u64> {
    let caller = Location::caller();
    u64::try_from(value).map_err(|_| {
        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
        error!(SaleError::ArithmeticOverflow)
    })
}

//! Conversions with [fraction::Fraction], for callers who need to leave the
//! `i32` range (e.g. accumulate many values) and come back.
//!
//! ```
//! use exact_fraction::Fraction;
//!
//! let f = Fraction::new(-3, 4)?;
//! let big = fraction::Fraction::from(f);
//! assert_eq!(big, fraction::Fraction::new_neg(3u64, 4u64));
//! assert_eq!(Fraction::try_from(big)?, f);
//! # Ok::<(), exact_fraction::FractionError>(())
//! ```

use fraction::Fraction as BigFraction;

use crate::{Fraction, FractionError, FractionResult};

impl From<Fraction> for BigFraction {
    fn from(value: Fraction) -> Self {
        let numerator = value.numerator().unsigned_abs();
        let denominator = value.denominator().unsigned_abs();
        if value.numerator() < 0 {
            BigFraction::new_neg(numerator, denominator)
        } else {
            BigFraction::new(numerator, denominator)
        }
    }
}

impl TryFrom<BigFraction> for Fraction {
    type Error = FractionError;
    fn try_from(value: BigFraction) -> FractionResult<Self> {
        let (numerator, denominator) = match (value.numer(), value.denom()) {
            (Some(numerator), Some(denominator)) => (*numerator, *denominator),
            _ => {
                return Err(FractionError::InvalidArgument(format!(
                    "can not convert {} into exact fraction",
                    value
                )))
            }
        };
        let numerator =
            i64::try_from(numerator).map_err(|_| FractionError::too_large())?;
        let denominator = i64::try_from(denominator)
            .map_err(|_| FractionError::too_large())?;
        let numerator = match value.is_sign_negative() {
            true => -numerator,
            false => numerator,
        };
        Fraction::from_wide(numerator, denominator)
    }
}

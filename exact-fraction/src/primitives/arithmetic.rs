//! Overflow-checked arithmetic.
//!
//! Cross products are computed in `i64` and narrowed back by
//! [Fraction::from_wide], so a result which does not fit `i32` is
//! always reported as [FractionError::Overflow].
//!
//! Operator traits are sugar over `try_*` methods and panic on error,
//! the same way primitive integers do.
//!
//! ```
//! use exact_fraction::Fraction;
//!
//! let a = Fraction::new(1, 2)?;
//! let b = Fraction::new(1, 3)?;
//! assert_eq!(a.try_add(&b)?, Fraction::new(5, 6)?);
//! assert_eq!(a - b, Fraction::new(1, 6)?);
//! assert!(a.try_div(&Fraction::ZERO).is_err());
//! # Ok::<(), exact_fraction::FractionError>(())
//! ```

use std::ops::{Add, Div, Mul, Sub};

use crate::{FractionError, FractionResult};

use super::{
    fraction_tools::{check_overflow, Operation},
    Fraction,
};

impl Fraction {
    pub fn try_add(&self, other: &Self) -> FractionResult<Self> {
        let (n1, d1, n2, d2) = self.wide_parts(other);
        let numerator = n1 * d2 + n2 * d1;
        let denominator = d1 * d2;
        check_overflow(numerator, denominator, Operation::Add)?;
        Self::from_wide(numerator, denominator)
    }

    /// The pre-check bounds `n1*d2 - n2*d1` by shifting the `i32` limits
    /// with the second product; anything it lets through is still caught
    /// on narrowing.
    pub fn try_sub(&self, other: &Self) -> FractionResult<Self> {
        let (n1, d1, n2, d2) = self.wide_parts(other);
        check_overflow(n1 * d2, n2 * d1, Operation::Sub)?;
        Self::from_wide(n1 * d2 - n2 * d1, d1 * d2)
    }

    pub fn try_mul(&self, other: &Self) -> FractionResult<Self> {
        let (n1, d1, n2, d2) = self.wide_parts(other);
        check_overflow(n1, n2, Operation::Mul)?;
        check_overflow(d1, d2, Operation::Mul)?;
        Self::from_wide(n1 * n2, d1 * d2)
    }

    /// Multiply by reciprocal of `other`.
    pub fn try_div(&self, other: &Self) -> FractionResult<Self> {
        if other.numerator == 0 || other.denominator == 0 {
            return Err(FractionError::DivisionByZero);
        }
        let (n1, d1, n2, d2) = self.wide_parts(other);
        check_overflow(n1, d2, Operation::Mul)?;
        check_overflow(d1, n2, Operation::Mul)?;
        Self::from_wide(n1 * d2, d1 * n2)
    }

    fn wide_parts(&self, other: &Self) -> (i64, i64, i64, i64) {
        (
            self.numerator as i64,
            self.denominator as i64,
            other.numerator as i64,
            other.denominator as i64,
        )
    }
}

/// Unwrap result of the operator, panicking like integer overflow does.
pub(crate) fn expect_op(
    result: FractionResult<Fraction>,
    op: &str,
) -> Fraction {
    match result {
        Ok(fraction) => fraction,
        Err(err) => panic!("attempt to {} fractions failed: {}", op, err),
    }
}

impl Add for Fraction {
    type Output = Self;
    /// # Panics
    ///
    /// On overflow. Use [Fraction::try_add] to handle it.
    fn add(self, rhs: Self) -> Self::Output {
        expect_op(self.try_add(&rhs), "add")
    }
}
impl Sub for Fraction {
    type Output = Self;
    /// # Panics
    ///
    /// On overflow. Use [Fraction::try_sub] to handle it.
    fn sub(self, rhs: Self) -> Self::Output {
        expect_op(self.try_sub(&rhs), "subtract")
    }
}
impl Mul for Fraction {
    type Output = Self;
    /// # Panics
    ///
    /// On overflow. Use [Fraction::try_mul] to handle it.
    fn mul(self, rhs: Self) -> Self::Output {
        expect_op(self.try_mul(&rhs), "multiply")
    }
}
impl Div for Fraction {
    type Output = Self;
    /// # Panics
    ///
    /// On overflow or division by zero. Use [Fraction::try_div] to
    /// handle it.
    fn div(self, rhs: Self) -> Self::Output {
        expect_op(self.try_div(&rhs), "divide")
    }
}

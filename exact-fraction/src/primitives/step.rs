//! Prefix and postfix increment/decrement by one whole unit.

use crate::FractionResult;

use super::Fraction;

impl Fraction {
    /// Add one in place, returning the updated fraction.
    ///
    /// ```
    /// # use exact_fraction::Fraction;
    /// let mut f = Fraction::new(1, 2)?;
    /// assert_eq!(*f.increment()?, Fraction::new(3, 2)?);
    /// # Ok::<(), exact_fraction::FractionError>(())
    /// ```
    pub fn increment(&mut self) -> FractionResult<&mut Self> {
        *self = self.shifted(1)?;
        Ok(self)
    }

    /// Add one in place, returning the value before the change.
    pub fn post_increment(&mut self) -> FractionResult<Self> {
        let previous = *self;
        self.increment()?;
        Ok(previous)
    }

    /// Subtract one in place, returning the updated fraction.
    pub fn decrement(&mut self) -> FractionResult<&mut Self> {
        *self = self.shifted(-1)?;
        Ok(self)
    }

    /// Subtract one in place, returning the value before the change.
    pub fn post_decrement(&mut self) -> FractionResult<Self> {
        let previous = *self;
        self.decrement()?;
        Ok(previous)
    }

    fn shifted(&self, units: i64) -> FractionResult<Self> {
        let denominator = self.denominator as i64;
        let numerator = self.numerator as i64 + units * denominator;
        Self::from_wide(numerator, denominator)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Fraction, FractionError};

    fn frac(n: i32, d: i32) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn post_increment() -> Result<(), FractionError> {
        let mut f = frac(1, 2);
        assert_eq!(f.post_increment()?, frac(1, 2));
        assert_eq!(f, frac(3, 2));
        Ok(())
    }

    #[test]
    fn pre_decrement() -> Result<(), FractionError> {
        let mut f = frac(1, 2);
        assert_eq!(*f.decrement()?, frac(-1, 2));
        assert_eq!(f, frac(-1, 2));
        Ok(())
    }

    #[test]
    fn chained() -> Result<(), FractionError> {
        let mut f = frac(-5, 3);
        f.increment()?.increment()?;
        assert_eq!(f, frac(1, 3));
        assert_eq!(f.post_decrement()?, frac(1, 3));
        assert_eq!(f, frac(-2, 3));
        Ok(())
    }

    #[test]
    fn overflow_keeps_value() {
        let mut f = frac(i32::MAX, 1);
        assert!(matches!(f.increment(), Err(FractionError::Overflow(_))));
        assert_eq!(f, frac(i32::MAX, 1));
        let mut f = frac(i32::MIN, 1);
        assert!(matches!(
            f.post_decrement(),
            Err(FractionError::Overflow(_))
        ));
        assert_eq!(f, frac(i32::MIN, 1));
    }
}

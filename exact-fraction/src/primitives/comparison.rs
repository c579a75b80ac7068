//! Ordering of fractions.
//!
//! Equality is derived: both sides are always in lowest terms with a
//! positive denominator, so equal values have equal fields.

use std::cmp::Ordering;

use super::Fraction;

impl Ord for Fraction {
    /// Cross-multiplication in `i64`, where the product of two `i32`
    /// can not overflow.
    fn cmp(&self, other: &Self) -> Ordering {
        let left = self.numerator as i64 * other.denominator as i64;
        let right = other.numerator as i64 * self.denominator as i64;
        left.cmp(&right)
    }
}
impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

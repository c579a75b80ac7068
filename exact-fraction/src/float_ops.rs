//! Mixed arithmetic and comparison of [Fraction] with `f32`.
//!
//! The float is first approximated by [Fraction::from_f32] (three decimal
//! digits), then the fraction-fraction operation is applied. Functions come
//! in pairs: `op_float(fraction, value)` and `float_op(value, fraction)`.
//!
//! ```
//! use exact_fraction::{float_ops, Fraction};
//!
//! let half = Fraction::new(1, 2)?;
//! assert_eq!(float_ops::add_float(&half, 0.25)?, Fraction::new(3, 4)?);
//! assert_eq!(float_ops::float_sub(1.0, &half)?, half);
//! assert!(float_ops::lt_float(&half, 0.501)?);
//! assert_eq!(half * 4.0, Fraction::new(2, 1)?);
//! assert!(0.5 == half);
//! # Ok::<(), exact_fraction::FractionError>(())
//! ```

use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Sub},
};

use crate::{primitives::expect_op, Fraction, FractionError, FractionResult};

pub fn add_float(fraction: &Fraction, value: f32) -> FractionResult<Fraction> {
    fraction.try_add(&Fraction::from_f32(value)?)
}
pub fn float_add(value: f32, fraction: &Fraction) -> FractionResult<Fraction> {
    add_float(fraction, value)
}

pub fn sub_float(fraction: &Fraction, value: f32) -> FractionResult<Fraction> {
    fraction.try_sub(&Fraction::from_f32(value)?)
}
pub fn float_sub(value: f32, fraction: &Fraction) -> FractionResult<Fraction> {
    Fraction::from_f32(value)?.try_sub(fraction)
}

pub fn mul_float(fraction: &Fraction, value: f32) -> FractionResult<Fraction> {
    fraction.try_mul(&Fraction::from_f32(value)?)
}
pub fn float_mul(value: f32, fraction: &Fraction) -> FractionResult<Fraction> {
    mul_float(fraction, value)
}

/// Zero divisor is rejected before the float is approximated.
pub fn div_float(fraction: &Fraction, value: f32) -> FractionResult<Fraction> {
    if value == 0.0 {
        return Err(FractionError::DivisionByZero);
    }
    fraction.try_div(&Fraction::from_f32(value)?)
}
pub fn float_div(value: f32, fraction: &Fraction) -> FractionResult<Fraction> {
    Fraction::from_f32(value)?.try_div(fraction)
}

fn compare(fraction: &Fraction, value: f32) -> FractionResult<Ordering> {
    Ok(fraction.cmp(&Fraction::from_f32(value)?))
}

pub fn eq_float(fraction: &Fraction, value: f32) -> FractionResult<bool> {
    Ok(*fraction == Fraction::from_f32(value)?)
}
pub fn float_eq(value: f32, fraction: &Fraction) -> FractionResult<bool> {
    eq_float(fraction, value)
}
pub fn ne_float(fraction: &Fraction, value: f32) -> FractionResult<bool> {
    eq_float(fraction, value).map(|eq| !eq)
}
pub fn float_ne(value: f32, fraction: &Fraction) -> FractionResult<bool> {
    ne_float(fraction, value)
}

pub fn lt_float(fraction: &Fraction, value: f32) -> FractionResult<bool> {
    Ok(compare(fraction, value)? == Ordering::Less)
}
pub fn gt_float(fraction: &Fraction, value: f32) -> FractionResult<bool> {
    Ok(compare(fraction, value)? == Ordering::Greater)
}
/// `!(fraction < value)`
pub fn ge_float(fraction: &Fraction, value: f32) -> FractionResult<bool> {
    lt_float(fraction, value).map(|lt| !lt)
}
/// `!(fraction > value)`
pub fn le_float(fraction: &Fraction, value: f32) -> FractionResult<bool> {
    gt_float(fraction, value).map(|gt| !gt)
}

pub fn float_lt(value: f32, fraction: &Fraction) -> FractionResult<bool> {
    gt_float(fraction, value)
}
pub fn float_gt(value: f32, fraction: &Fraction) -> FractionResult<bool> {
    lt_float(fraction, value)
}
pub fn float_le(value: f32, fraction: &Fraction) -> FractionResult<bool> {
    ge_float(fraction, value)
}
pub fn float_ge(value: f32, fraction: &Fraction) -> FractionResult<bool> {
    le_float(fraction, value)
}

impl Add<f32> for Fraction {
    type Output = Fraction;
    fn add(self, rhs: f32) -> Self::Output {
        expect_op(add_float(&self, rhs), "add")
    }
}
impl Add<Fraction> for f32 {
    type Output = Fraction;
    fn add(self, rhs: Fraction) -> Self::Output {
        expect_op(float_add(self, &rhs), "add")
    }
}
impl Sub<f32> for Fraction {
    type Output = Fraction;
    fn sub(self, rhs: f32) -> Self::Output {
        expect_op(sub_float(&self, rhs), "subtract")
    }
}
impl Sub<Fraction> for f32 {
    type Output = Fraction;
    fn sub(self, rhs: Fraction) -> Self::Output {
        expect_op(float_sub(self, &rhs), "subtract")
    }
}
impl Mul<f32> for Fraction {
    type Output = Fraction;
    fn mul(self, rhs: f32) -> Self::Output {
        expect_op(mul_float(&self, rhs), "multiply")
    }
}
impl Mul<Fraction> for f32 {
    type Output = Fraction;
    fn mul(self, rhs: Fraction) -> Self::Output {
        expect_op(float_mul(self, &rhs), "multiply")
    }
}
impl Div<f32> for Fraction {
    type Output = Fraction;
    fn div(self, rhs: f32) -> Self::Output {
        expect_op(div_float(&self, rhs), "divide")
    }
}
impl Div<Fraction> for f32 {
    type Output = Fraction;
    fn div(self, rhs: Fraction) -> Self::Output {
        expect_op(float_div(self, &rhs), "divide")
    }
}

/// Float which can not be approximated is never equal.
impl PartialEq<f32> for Fraction {
    fn eq(&self, other: &f32) -> bool {
        eq_float(self, *other).unwrap_or(false)
    }
}
impl PartialEq<Fraction> for f32 {
    fn eq(&self, other: &Fraction) -> bool {
        float_eq(*self, other).unwrap_or(false)
    }
}
/// Float which can not be approximated is unordered.
impl PartialOrd<f32> for Fraction {
    fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
        compare(self, *other).ok()
    }
}
impl PartialOrd<Fraction> for f32 {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        compare(other, *self).ok().map(Ordering::reverse)
    }
}

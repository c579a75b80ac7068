//! Leaf helpers, used by every operation on [Fraction](super::Fraction).

use std::fmt;

use crate::{FractionError, FractionResult};

pub(crate) const MAX: i64 = i32::MAX as i64;
pub(crate) const MIN: i64 = i32::MIN as i64;

/// Kind of operation, which [check_overflow] guards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
}
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
        };
        write!(f, "{}", name)
    }
}

/// Euclid's algorithm.
///
/// Sign of the result follows the remainder chain, so callers take
/// the absolute value. `gcd(a, 0) == a`.
///
/// # Example
///
/// ```
/// # use exact_fraction::primitives::gcd;
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// assert_eq!(gcd(-4, 6).abs(), 2);
/// ```
pub fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        return a;
    }
    gcd(b, a % b)
}

/// Compare floats with the explicit tolerance.
pub fn almost_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Check, that operation on two wide operands fits into `i32`.
///
/// - `Add` checks only `a`, which is the already computed sum.
/// - `Sub` checks `a - b` against the bounds shifted by `b`.
/// - `Mul` checks `a * b` by dividing the bound before multiplying.
pub fn check_overflow(a: i64, b: i64, op: Operation) -> FractionResult<()> {
    let overflows = match op {
        Operation::Add => a > MAX || a < MIN,
        Operation::Sub => a > MAX + b || a < MIN - b,
        Operation::Mul => {
            (a > 0 && b > 0 && a > MAX / b)
                || (a > 0 && b < 0 && a > MIN / b)
                || (a < 0 && b > 0 && a < MIN / b)
                || (a < 0 && b < 0 && a < MAX / b)
        }
    };
    if overflows {
        log::debug!("overflow in {}: a = {}, b = {}", op, a, b);
        return Err(FractionError::Overflow(format!(
            "Overflow in {} operation",
            op
        )));
    }
    Ok(())
}

/// Narrow wide value back to `i32`.
pub(crate) fn narrow(value: i64) -> FractionResult<i32> {
    i32::try_from(value).map_err(|_| {
        log::debug!("{} does not fit into i32", value);
        FractionError::too_large()
    })
}

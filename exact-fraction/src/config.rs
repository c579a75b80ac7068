//! Settings of the float interoperation.
//!
//! Nothing here is global: every routine that approximates or compares
//! against floats receives its settings (or epsilon) explicitly.

use serde::{Deserialize, Serialize};

use crate::{FractionError, FractionResult};

/// Default tolerance of the approximate float comparison.
pub const EPSILON: f32 = 0.0001;

/// Default amount of decimal digits kept by float conversion.
pub const DECIMAL_DIGITS: u32 = 3;

/// 10^9 is the largest power of ten which fits the denominator.
const MAX_DECIMAL_DIGITS: u32 = 9;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatSettings {
    /// Float is approximated by a fraction with denominator
    /// `10^decimal_digits` (before reduction).
    pub decimal_digits: u32,
    /// Tolerance of [crate::Fraction::approx_eq].
    pub epsilon: f32,
}
impl FloatSettings {
    pub fn new(decimal_digits: u32, epsilon: f32) -> FractionResult<Self> {
        let settings = Self {
            decimal_digits,
            epsilon,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check settings, which could come from deserialization.
    pub fn validate(&self) -> FractionResult<()> {
        if self.decimal_digits > MAX_DECIMAL_DIGITS {
            return Err(FractionError::InvalidArgument(format!(
                "decimal digits should be at most {}, got {}",
                MAX_DECIMAL_DIGITS, self.decimal_digits
            )));
        }
        if !(self.epsilon >= 0.0) {
            return Err(FractionError::InvalidArgument(format!(
                "epsilon should be non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Denominator of the float approximation before reduction.
    pub fn scale(&self) -> f64 {
        10_f64.powi(self.decimal_digits as i32)
    }
}
impl Default for FloatSettings {
    fn default() -> Self {
        Self {
            decimal_digits: DECIMAL_DIGITS,
            epsilon: EPSILON,
        }
    }
}

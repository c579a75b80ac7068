use crate::{config::FloatSettings, FractionError, FractionResult};

use super::fraction_tools::{almost_equal, gcd, narrow, MAX, MIN};

/// Exact rational number with `i32` numerator and denominator.
///
/// Every instance is normalized: denominator is positive, sign is carried
/// by the numerator, and the pair is reduced to lowest terms. Because of
/// it, derived `PartialEq`, `Eq` and `Hash` compare values.
///
/// # Example
///
/// ```
/// use exact_fraction::Fraction;
///
/// let half = Fraction::new(2, -4)?;
/// assert_eq!(half.numerator(), -1);
/// assert_eq!(half.denominator(), 2);
/// assert_eq!(half.to_string(), "-1/2");
/// # Ok::<(), exact_fraction::FractionError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    pub(super) numerator: i32,
    pub(super) denominator: i32,
}
impl Fraction {
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };
    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Build reduced fraction.
    ///
    /// Fails with [FractionError::InvalidArgument] on zero denominator and
    /// with [FractionError::Overflow] if the normalized form does not fit
    /// `i32` (e.g. `1 / i32::MIN`).
    pub fn new(numerator: i32, denominator: i32) -> FractionResult<Self> {
        Self::from_wide(numerator as i64, denominator as i64)
    }

    /// Build fraction from the wide intermediate values of arithmetic.
    ///
    /// Both parts have to fit `i32` before the reduction.
    pub(crate) fn from_wide(
        numerator: i64,
        denominator: i64,
    ) -> FractionResult<Self> {
        if denominator == 0 {
            return Err(FractionError::zero_denominator());
        }
        if numerator > MAX
            || numerator < MIN
            || denominator > MAX
            || denominator < MIN
        {
            log::debug!(
                "{}/{} does not fit into i32 before reduction",
                numerator,
                denominator
            );
            return Err(FractionError::too_large());
        }
        Self::normalized(numerator, denominator)
    }

    /// Reduce in the wide domain, then narrow.
    fn normalized(numerator: i64, denominator: i64) -> FractionResult<Self> {
        let g = gcd(numerator, denominator).abs();
        let (mut numerator, mut denominator) =
            (numerator / g, denominator / g);
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        log::trace!("normalized to {}/{}", numerator, denominator);
        Ok(Self {
            numerator: narrow(numerator)?,
            denominator: narrow(denominator)?,
        })
    }

    /// Approximate float with default [FloatSettings]: three decimal
    /// digits, so `0.333` becomes `333/1000`, not `1/3`.
    pub fn from_f32(value: f32) -> FractionResult<Self> {
        Self::from_f32_with(value, &FloatSettings::default())
    }

    /// Approximate float by a fraction with denominator
    /// `10^settings.decimal_digits` (before reduction).
    pub fn from_f32_with(
        value: f32,
        settings: &FloatSettings,
    ) -> FractionResult<Self> {
        settings.validate()?;
        if value.is_nan() {
            return Err(FractionError::InvalidArgument(
                "Number is not a number".to_string(),
            ));
        }
        if value.is_infinite() {
            return Err(number_too_large());
        }
        let value = value as f64;
        let (integral, fractional) = (value.trunc(), value.fract());
        let precision = 1.0 / settings.scale();
        if integral > MAX as f64 || fractional / precision > MAX as f64 {
            return Err(number_too_large());
        }
        let denominator = settings.scale().round();
        let numerator =
            (fractional * denominator).round() + integral * denominator;
        if numerator > MAX as f64 || numerator < MIN as f64 {
            log::debug!("{} can not be approximated within i32", value);
            return Err(number_too_large());
        }
        Self::from_wide(numerator as i64, denominator as i64)
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }
    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    /// Bring fraction to lowest terms with positive denominator.
    ///
    /// Constructors and mutating operations already call it, so on any
    /// reachable value this is a no-op.
    pub fn reduce(&mut self) {
        let g = gcd(self.numerator as i64, self.denominator as i64).abs();
        let (mut numerator, mut denominator) =
            (self.numerator as i64 / g, self.denominator as i64 / g);
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        // reduction never grows a positive-denominator pair
        if let (Ok(numerator), Ok(denominator)) =
            (narrow(numerator), narrow(denominator))
        {
            self.numerator = numerator;
            self.denominator = denominator;
        }
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// Compare with float, allowing `epsilon` of difference.
    ///
    /// Unlike `==`, the float is not rounded to a fraction first.
    ///
    /// ```
    /// # use exact_fraction::{Fraction, EPSILON};
    /// let third = Fraction::new(1, 3)?;
    /// assert!(third.approx_eq(0.33334, EPSILON));
    /// assert!(third != 0.333_f32);
    /// # Ok::<(), exact_fraction::FractionError>(())
    /// ```
    pub fn approx_eq(&self, value: f32, epsilon: f32) -> bool {
        almost_equal(self.to_f32(), value, epsilon)
    }
}
impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}
impl TryFrom<f32> for Fraction {
    type Error = FractionError;
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_f32(value)
    }
}
impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        value.to_f64()
    }
}

fn number_too_large() -> FractionError {
    FractionError::Overflow("Number is too large".to_string())
}

//! Exact rational numbers bounded by `i32`.
//!
//! [Fraction] is always kept in lowest terms with a positive denominator.
//! Arithmetic is computed in `i64` and checked before narrowing back, so
//! overflow is reported as an error instead of wrapping.
//!
//! ```
//! use exact_fraction::{Fraction, FractionError};
//!
//! let a = Fraction::new(1, 2)?;
//! let b = Fraction::new(1, 3)?;
//! assert_eq!(a + b, Fraction::new(5, 6)?);
//! assert_eq!(Fraction::from_f32(0.5)?, a);
//! assert_eq!(
//!     a.try_div(&Fraction::new(0, 5)?),
//!     Err(FractionError::DivisionByZero)
//! );
//! # Ok::<(), FractionError>(())
//! ```

pub mod bridge;
pub mod config;
mod error;
pub mod float_ops;
pub mod primitives;

pub use config::{FloatSettings, EPSILON};
pub use error::{FractionError, FractionResult};
pub use primitives::Fraction;

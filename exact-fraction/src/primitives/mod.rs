//! The [Fraction] value type and its operations.
//!
//! Construction and [Fraction::reduce] are leaves: every arithmetic
//! operator, the increment/decrement and the stream extraction finish by
//! normalizing through them.

pub mod arithmetic;
pub mod comparison;
pub mod fraction_tools;
pub mod step;
pub mod text;
pub mod value;

pub(crate) use arithmetic::expect_op;
pub use fraction_tools::{almost_equal, check_overflow, gcd, Operation};
pub use value::Fraction;

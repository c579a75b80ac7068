
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FractionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Overflow: {0}")]
    Overflow(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid input format: {0}")]
    Format(String),
}
pub type FractionResult<T> = Result<T, FractionError>;

impl FractionError {
    pub(crate) fn zero_denominator() -> Self {
        Self::InvalidArgument("Denominator cannot be zero".to_string())
    }
    pub(crate) fn too_large() -> Self {
        Self::Overflow("Numerator or denominator is too large".to_string())
    }
}

//! Error types.

/// The failure kinds reported by fallible operations.
///
/// Each variant is raised at a well-defined operation boundary; no operation
/// partially mutates its destination before reporting one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A numeric string was malformed.
    #[error("invalid numeric string")]
    InvalidArgument,

    /// The result is not representable: a [`Natural`][`crate::Natural`]
    /// subtraction would go negative, or a
    /// [`Rational`][`crate::Rational`] was constructed from a NaN or an
    /// infinity.
    #[error("result is not a number")]
    NotANumber,

    /// Division or remainder with a zero divisor.
    #[error("division by zero")]
    DivideByZero,

    /// The value is too large for the target type.
    #[error("value too large for the target type")]
    Overflow,

    /// The magnitude is smaller than the target type can represent.
    #[error("value too small for the target type")]
    Underflow,
}

/// Result type with the `bigrat` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

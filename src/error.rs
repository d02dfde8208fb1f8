//! Error types for fraction conversions.

use thiserror::Error;

/// Errors produced by conversions to and from fixed width numeric types.
///
/// All failures are immediate; no partial result is ever produced.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FractionError {
    /// The accuracy passed to [`BigFraction::from_f64`] was outside the
    /// open interval (0, 1).
    ///
    /// [`BigFraction::from_f64`]: crate::BigFraction::from_f64
    #[error("accuracy must be within (0, 1), got {0}")]
    AccuracyOutOfRange(f64),

    /// Tried to convert a NaN or infinite float into a fraction.
    #[error("cannot convert non-finite value {0} to a fraction")]
    NonFinite(f64),

    /// The quotient does not fit into the representable decimal range.
    #[error("quotient is out of the representable decimal range")]
    DecimalOutOfRange,
}

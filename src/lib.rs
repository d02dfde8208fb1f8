//! # bigfraction
//!
//! Exact rational arithmetic over arbitrary precision integers.
//!
//! This crate provides [`BigFraction`], a pair of `dashu` big integers
//! treated as an exact numerator/denominator ratio:
//! - Arithmetic and comparison operators that never lose precision
//! - Exact conversion from fixed point decimals
//! - Accuracy-bounded conversion from binary floats, so recurring
//!   decimals map to small fractions (0.166666... becomes 1/6)
//! - Conversion back to decimal even when the operands are far outside
//!   the decimal range
//!
//! Results are never reduced implicitly; call [`BigFraction::simplify`]
//! to divide out common factors.
//!
//! ## Quick Start
//!
//! ```
//! use bigfraction::BigFraction;
//!
//! let a = BigFraction::from_i64(1, 2);
//! let b = BigFraction::from_i64(1, 3);
//! assert_eq!(&a + &b, BigFraction::from_i64(5, 6));
//!
//! let sixth = BigFraction::from_f64(0.166_666_666_7, 1e-9).unwrap();
//! assert_eq!(sixth, BigFraction::from_i64(1, 6));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod approx;
mod cmp;
mod decimal;
mod error;
mod fraction;
mod ops;

#[cfg(test)]
mod proptests;

pub use error::FractionError;
pub use fraction::BigFraction;

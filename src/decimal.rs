//! Fixed point decimal conversions.
//!
//! Decimals convert in exactly: the type carries its fractional digit
//! count, so scaling by a power of ten loses nothing. The way back out
//! has to cope with numerators and denominators far beyond the decimal
//! range; it reduces them by splitting off the integer quotient, or by
//! inverting when the value itself is smaller than one.

use dashu::integer::IBig;
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::error::FractionError;
use crate::BigFraction;

impl From<Decimal> for BigFraction {
    /// Exact conversion: the numerator is the decimal's unscaled
    /// mantissa and the denominator the matching power of ten.
    fn from(value: Decimal) -> Self {
        Self {
            numerator: IBig::from(value.mantissa()),
            denominator: IBig::from(10).pow(value.scale() as usize),
        }
    }
}

/// A big integer as a decimal, if it fits the 96-bit mantissa.
fn decimal_from_int(value: &IBig) -> Result<Decimal, FractionError> {
    let mantissa = i128::try_from(value.clone()).map_err(|_| FractionError::DecimalOutOfRange)?;
    Decimal::try_from_i128_with_scale(mantissa, 0).map_err(|_| FractionError::DecimalOutOfRange)
}

impl BigFraction {
    /// Converts to the closest representable fixed point decimal.
    ///
    /// Operands within the decimal's integer range divide natively.
    /// Beyond that the integer quotient is split off and the remainder
    /// (now smaller than one) converted on its own; a huge-over-huge
    /// fraction that is itself smaller than one converts through its
    /// reciprocal instead. Either reduction strictly shrinks the
    /// operands, so the recursion terminates after at most one further
    /// step.
    ///
    /// # Errors
    ///
    /// [`FractionError::DecimalOutOfRange`] when the true quotient
    /// cannot be represented.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    pub fn to_decimal(&self) -> Result<Decimal, FractionError> {
        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let max = IBig::from(Decimal::MAX.mantissa());
        let min = IBig::from(Decimal::MIN.mantissa());

        if self.numerator <= max
            && self.numerator >= min
            && self.denominator <= max
            && self.denominator >= min
        {
            return Ok(decimal_from_int(&self.numerator)? / decimal_from_int(&self.denominator)?);
        }

        let quotient = &self.numerator / &self.denominator;

        if !quotient.is_zero() {
            let whole = decimal_from_int(&quotient)?;
            return Ok(whole + (self - &quotient).to_decimal()?);
        }

        // |value| < 1 with out-of-range operands: convert the reciprocal,
        // whose integer part is now nonzero, and invert back.
        let inverse = Self::new(self.denominator.clone(), self.numerator.clone());
        Ok(Decimal::ONE / inverse.to_decimal()?)
    }
}

//! The `BigFraction` value type.
//!
//! A fraction is stored exactly as the numerator/denominator pair it was
//! built from. Operators return new values and never reduce; see
//! [`BigFraction::simplify`] for explicit GCD reduction.

use std::fmt;
use std::hash::{Hash, Hasher};

use dashu::base::{Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};

/// An exact fraction of two arbitrary precision integers.
///
/// The components are kept as given: unreduced, and with whatever signs
/// the caller supplied. The sign of the value is the product of the
/// component signs, so `5/-7` is negative and `-9/-8` is positive.
///
/// A zero denominator is accepted at construction and only fails when an
/// operation has to divide by it ([`simplify`], [`to_big_integer`],
/// [`to_decimal`]); comparisons and arithmetic never divide and so never
/// reject it.
///
/// [`simplify`]: BigFraction::simplify
/// [`to_big_integer`]: BigFraction::to_big_integer
/// [`to_decimal`]: BigFraction::to_decimal
#[derive(Clone)]
pub struct BigFraction {
    pub(crate) numerator: IBig,
    pub(crate) denominator: IBig,
}

/// Sign of a big integer as -1, 0, or 1.
pub(crate) fn int_signum(value: &IBig) -> i8 {
    if value.is_zero() {
        0
    } else if DashuSigned::is_positive(value) {
        1
    } else {
        -1
    }
}

impl BigFraction {
    /// The fraction 0/1.
    pub const ZERO: Self = Self {
        numerator: IBig::ZERO,
        denominator: IBig::ONE,
    };

    /// The fraction 1/1.
    pub const ONE: Self = Self {
        numerator: IBig::ONE,
        denominator: IBig::ONE,
    };

    /// The fraction -1/1.
    pub const MINUS_ONE: Self = Self {
        numerator: IBig::NEG_ONE,
        denominator: IBig::ONE,
    };

    /// Creates a fraction from a numerator and a denominator, taken as is.
    ///
    /// No reduction is performed and the denominator is not checked for
    /// zero.
    #[must_use]
    pub fn new(numerator: IBig, denominator: IBig) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates a fraction from an i64 numerator and denominator.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(IBig::from(numerator), IBig::from(denominator))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        &self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> &IBig {
        &self.denominator
    }

    /// Returns the sign of the fraction: -1, 0, or 1.
    #[must_use]
    pub fn sign(&self) -> i8 {
        if self.numerator.is_zero() {
            0
        } else if int_signum(&self.numerator) == int_signum(&self.denominator) {
            1
        } else {
            -1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.sign() < 0 {
            -self
        } else {
            self.clone()
        }
    }

    /// Returns an equal fraction with numerator and denominator divided
    /// by their greatest common divisor.
    ///
    /// The integer quotient is split off first so the GCD runs on the
    /// remainder rather than the full numerator, which is much cheaper
    /// for fractions with a large integer part.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn simplify(&self) -> Self {
        let quotient = &self.numerator / &self.denominator;
        let remainder = &self.numerator - &quotient * &self.denominator;
        let gcd = IBig::from(remainder.clone().gcd(self.denominator.clone()));

        let denominator = &self.denominator / &gcd;
        let numerator = &quotient * &denominator + remainder / &gcd;
        Self {
            numerator,
            denominator,
        }
    }

    /// Truncates the fraction to a big integer.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn to_big_integer(&self) -> IBig {
        &self.numerator / &self.denominator
    }

    /// Converts to an f64. Lossy for components beyond 53 bits.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.numerator.to_f64().value() / self.denominator.to_f64().value()
    }

    /// Converts to an f32. Lossy for components beyond 24 bits.
    #[must_use]
    pub fn to_f32(&self) -> f32 {
        self.numerator.to_f32().value() / self.denominator.to_f32().value()
    }
}

impl Zero for BigFraction {
    fn zero() -> Self {
        Self::ZERO
    }

    /// A fraction is zero when its numerator is zero, whatever the
    /// denominator.
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for BigFraction {
    fn one() -> Self {
        Self::ONE
    }

    /// A fraction is one when numerator and denominator are equal.
    fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }
}

impl From<IBig> for BigFraction {
    fn from(value: IBig) -> Self {
        Self {
            numerator: value,
            denominator: IBig::ONE,
        }
    }
}

impl From<i64> for BigFraction {
    fn from(value: i64) -> Self {
        Self::from(IBig::from(value))
    }
}

impl From<i32> for BigFraction {
    fn from(value: i32) -> Self {
        Self::from(IBig::from(value))
    }
}

impl Hash for BigFraction {
    /// Hashes the reduced form with the denominator sign normalized, so
    /// equal fractions hash equally no matter how they are denominated.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_zero() {
            IBig::ZERO.hash(state);
            IBig::ONE.hash(state);
            return;
        }

        let reduced = self.simplify();
        let (numerator, denominator) = if int_signum(&reduced.denominator) < 0 {
            (-reduced.numerator, -reduced.denominator)
        } else {
            (reduced.numerator, reduced.denominator)
        };
        numerator.hash(state);
        denominator.hash(state);
    }
}

impl fmt::Debug for BigFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigFraction({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for BigFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{})", self.numerator, self.denominator)
    }
}

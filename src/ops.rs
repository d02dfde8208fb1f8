//! Arithmetic operators.
//!
//! Every operator returns a new, unreduced fraction; denominators grow
//! multiplicatively across repeated operations until the caller calls
//! [`BigFraction::simplify`]. Operands mixing a fraction with a big
//! integer avoid the needless denominator multiplication.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use dashu::integer::IBig;

use crate::BigFraction;

impl Neg for BigFraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &BigFraction {
    type Output = BigFraction;

    fn neg(self) -> Self::Output {
        BigFraction {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

// Fraction with fraction

impl Add for BigFraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            numerator: &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            denominator: self.denominator * rhs.denominator,
        }
    }
}

impl Add<&BigFraction> for BigFraction {
    type Output = Self;

    fn add(self, rhs: &BigFraction) -> Self::Output {
        Self {
            numerator: &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            denominator: self.denominator * &rhs.denominator,
        }
    }
}

impl Add for &BigFraction {
    type Output = BigFraction;

    fn add(self, rhs: Self) -> Self::Output {
        BigFraction {
            numerator: &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            denominator: &self.denominator * &rhs.denominator,
        }
    }
}

impl Sub for BigFraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            numerator: &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            denominator: self.denominator * rhs.denominator,
        }
    }
}

impl Sub<&BigFraction> for BigFraction {
    type Output = Self;

    fn sub(self, rhs: &BigFraction) -> Self::Output {
        Self {
            numerator: &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            denominator: self.denominator * &rhs.denominator,
        }
    }
}

impl Sub for &BigFraction {
    type Output = BigFraction;

    fn sub(self, rhs: Self) -> Self::Output {
        BigFraction {
            numerator: &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            denominator: &self.denominator * &rhs.denominator,
        }
    }
}

impl Mul for BigFraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            numerator: self.numerator * rhs.numerator,
            denominator: self.denominator * rhs.denominator,
        }
    }
}

impl Mul<&BigFraction> for BigFraction {
    type Output = Self;

    fn mul(self, rhs: &BigFraction) -> Self::Output {
        Self {
            numerator: self.numerator * &rhs.numerator,
            denominator: self.denominator * &rhs.denominator,
        }
    }
}

impl Mul for &BigFraction {
    type Output = BigFraction;

    fn mul(self, rhs: Self) -> Self::Output {
        BigFraction {
            numerator: &self.numerator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
    }
}

impl Div for BigFraction {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self {
            numerator: self.numerator * rhs.denominator,
            denominator: self.denominator * rhs.numerator,
        }
    }
}

impl Div<&BigFraction> for BigFraction {
    type Output = Self;

    fn div(self, rhs: &BigFraction) -> Self::Output {
        Self {
            numerator: self.numerator * &rhs.denominator,
            denominator: self.denominator * &rhs.numerator,
        }
    }
}

impl Div for &BigFraction {
    type Output = BigFraction;

    fn div(self, rhs: Self) -> Self::Output {
        BigFraction {
            numerator: &self.numerator * &rhs.denominator,
            denominator: &self.denominator * &rhs.numerator,
        }
    }
}

// Fraction with big integer

impl Add<IBig> for BigFraction {
    type Output = Self;

    fn add(self, rhs: IBig) -> Self::Output {
        Self {
            numerator: self.numerator + rhs * &self.denominator,
            denominator: self.denominator,
        }
    }
}

impl Add<&IBig> for &BigFraction {
    type Output = BigFraction;

    fn add(self, rhs: &IBig) -> Self::Output {
        BigFraction {
            numerator: &self.numerator + rhs * &self.denominator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Add<BigFraction> for IBig {
    type Output = BigFraction;

    fn add(self, rhs: BigFraction) -> Self::Output {
        BigFraction {
            numerator: self * &rhs.denominator + rhs.numerator,
            denominator: rhs.denominator,
        }
    }
}

impl Add<&BigFraction> for &IBig {
    type Output = BigFraction;

    fn add(self, rhs: &BigFraction) -> Self::Output {
        BigFraction {
            numerator: self * &rhs.denominator + &rhs.numerator,
            denominator: rhs.denominator.clone(),
        }
    }
}

impl Sub<IBig> for BigFraction {
    type Output = Self;

    fn sub(self, rhs: IBig) -> Self::Output {
        Self {
            numerator: self.numerator - rhs * &self.denominator,
            denominator: self.denominator,
        }
    }
}

impl Sub<&IBig> for &BigFraction {
    type Output = BigFraction;

    fn sub(self, rhs: &IBig) -> Self::Output {
        BigFraction {
            numerator: &self.numerator - rhs * &self.denominator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Sub<BigFraction> for IBig {
    type Output = BigFraction;

    fn sub(self, rhs: BigFraction) -> Self::Output {
        BigFraction {
            numerator: self * &rhs.denominator - rhs.numerator,
            denominator: rhs.denominator,
        }
    }
}

impl Sub<&BigFraction> for &IBig {
    type Output = BigFraction;

    fn sub(self, rhs: &BigFraction) -> Self::Output {
        BigFraction {
            numerator: self * &rhs.denominator - &rhs.numerator,
            denominator: rhs.denominator.clone(),
        }
    }
}

impl Mul<IBig> for BigFraction {
    type Output = Self;

    fn mul(self, rhs: IBig) -> Self::Output {
        Self {
            numerator: self.numerator * rhs,
            denominator: self.denominator,
        }
    }
}

impl Mul<&IBig> for &BigFraction {
    type Output = BigFraction;

    fn mul(self, rhs: &IBig) -> Self::Output {
        BigFraction {
            numerator: &self.numerator * rhs,
            denominator: self.denominator.clone(),
        }
    }
}

impl Mul<BigFraction> for IBig {
    type Output = BigFraction;

    fn mul(self, rhs: BigFraction) -> Self::Output {
        BigFraction {
            numerator: self * rhs.numerator,
            denominator: rhs.denominator,
        }
    }
}

impl Mul<&BigFraction> for &IBig {
    type Output = BigFraction;

    fn mul(self, rhs: &BigFraction) -> Self::Output {
        BigFraction {
            numerator: self * &rhs.numerator,
            denominator: rhs.denominator.clone(),
        }
    }
}

impl Div<IBig> for BigFraction {
    type Output = Self;

    fn div(self, rhs: IBig) -> Self::Output {
        Self {
            numerator: self.numerator,
            denominator: self.denominator * rhs,
        }
    }
}

impl Div<&IBig> for &BigFraction {
    type Output = BigFraction;

    fn div(self, rhs: &IBig) -> Self::Output {
        BigFraction {
            numerator: self.numerator.clone(),
            denominator: &self.denominator * rhs,
        }
    }
}

impl Div<BigFraction> for IBig {
    type Output = BigFraction;

    fn div(self, rhs: BigFraction) -> Self::Output {
        BigFraction {
            numerator: self * rhs.denominator,
            denominator: rhs.numerator,
        }
    }
}

impl Div<&BigFraction> for &IBig {
    type Output = BigFraction;

    fn div(self, rhs: &BigFraction) -> Self::Output {
        BigFraction {
            numerator: self * &rhs.denominator,
            denominator: rhs.numerator.clone(),
        }
    }
}

impl Rem<IBig> for BigFraction {
    type Output = Self;

    /// Fraction modulo an integer: the modulus is scaled by the
    /// denominator and the remainder taken on the numerator, so
    /// `21/4 % 5` is `1/4`. The result keeps the dividend's sign.
    fn rem(self, rhs: IBig) -> Self::Output {
        Self {
            numerator: self.numerator % (&self.denominator * rhs),
            denominator: self.denominator,
        }
    }
}

impl Rem<&IBig> for &BigFraction {
    type Output = BigFraction;

    fn rem(self, rhs: &IBig) -> Self::Output {
        BigFraction {
            numerator: &self.numerator % (&self.denominator * rhs),
            denominator: self.denominator.clone(),
        }
    }
}

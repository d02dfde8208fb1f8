//! Cross-multiplication comparisons.
//!
//! Two fractions compare by comparing `a.num * b.den` against
//! `b.num * a.den` on the unbounded integers, never through floating
//! point. When the denominators carry different signs the ordering is
//! reversed, since multiplying an inequality by a negative flips it.
//! This stays correct for unreduced and negative-denominator fractions
//! without normalizing anything.

use std::cmp::Ordering;

use dashu::integer::IBig;
use num_traits::Zero;

use crate::fraction::{int_signum, BigFraction};

impl PartialEq for BigFraction {
    fn eq(&self, other: &Self) -> bool {
        // every zero is equal to every other zero, whatever the denominators
        if self.is_zero() && other.is_zero() {
            return true;
        }
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

// Zero denominators are outside the supported domain; for all fractions
// with nonzero denominators cross-product equality is an equivalence
// relation.
impl Eq for BigFraction {}

impl PartialOrd for BigFraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        let ord = lhs.cmp(&rhs);

        Some(
            if int_signum(&self.denominator) == int_signum(&other.denominator) {
                ord
            } else {
                ord.reverse()
            },
        )
    }
}

impl PartialEq<IBig> for BigFraction {
    fn eq(&self, other: &IBig) -> bool {
        self.numerator == other * &self.denominator
    }
}

impl PartialEq<BigFraction> for IBig {
    fn eq(&self, other: &BigFraction) -> bool {
        other == self
    }
}

impl PartialOrd<IBig> for BigFraction {
    fn partial_cmp(&self, other: &IBig) -> Option<Ordering> {
        let ord = self.numerator.cmp(&(other * &self.denominator));

        Some(if int_signum(&self.denominator) == 1 {
            ord
        } else {
            ord.reverse()
        })
    }
}

impl PartialOrd<BigFraction> for IBig {
    fn partial_cmp(&self, other: &BigFraction) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

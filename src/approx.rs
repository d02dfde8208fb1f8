//! Accuracy-bounded conversion from binary floating point.
//!
//! A double like 0.166666... should become 1/6, not a huge power-of-ten
//! fraction. The conversion therefore searches the Stern-Brocot tree for
//! the simplest fraction within a caller-chosen relative accuracy.

use dashu::integer::IBig;

use crate::error::FractionError;
use crate::BigFraction;

impl BigFraction {
    /// Accuracy used by the `TryFrom<f64>` conversion.
    pub const DEFAULT_ACCURACY: f64 = 1e-15;

    /// Finds the simplest fraction approximating `value` within the
    /// given relative accuracy.
    ///
    /// The accuracy is the maximum allowed ratio of the approximation
    /// error to the magnitude of `value` (absolute for zero). The search
    /// walks mediants between a lower and an upper bound fraction, so it
    /// lands on small denominators first; the bounds strictly narrow each
    /// step and the strictly positive error window guarantees
    /// termination. Mediant state is kept in `i64` (the search depth is
    /// small for realistic accuracies); the result is materialized in
    /// arbitrary precision.
    ///
    /// # Errors
    ///
    /// [`FractionError::AccuracyOutOfRange`] unless 0 < `accuracy` < 1,
    /// and [`FractionError::NonFinite`] for NaN or infinite `value`.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_f64(value: f64, accuracy: f64) -> Result<Self, FractionError> {
        if accuracy <= 0.0 || accuracy >= 1.0 {
            return Err(FractionError::AccuracyOutOfRange(accuracy));
        }

        let sign: i8 = if value > 0.0 {
            1
        } else if value < 0.0 {
            -1
        } else {
            0
        };
        let magnitude = value.abs();

        // Relative error bound, converted to an absolute window.
        let max_error = if sign == 0 {
            accuracy
        } else {
            magnitude * accuracy
        };

        let signed = IBig::from(sign);
        let whole =
            IBig::try_from(magnitude.floor()).map_err(|_| FractionError::NonFinite(value))?;
        let frac = magnitude - magnitude.floor();

        if frac < max_error {
            return Ok(Self {
                numerator: signed * whole,
                denominator: IBig::ONE,
            });
        }
        if 1.0 - max_error < frac {
            return Ok(Self {
                numerator: signed * (whole + IBig::ONE),
                denominator: IBig::ONE,
            });
        }

        // Stern-Brocot search between 0/1 and 1/1.
        let (mut lower_n, mut lower_d) = (0_i64, 1_i64);
        let (mut upper_n, mut upper_d) = (1_i64, 1_i64);

        loop {
            let middle_n = lower_n + upper_n;
            let middle_d = lower_d + upper_d;

            if middle_d as f64 * (frac + max_error) < middle_n as f64 {
                // frac + error < mediant: the mediant is the new upper bound
                upper_n = middle_n;
                upper_d = middle_d;
            } else if (middle_n as f64) < (frac - max_error) * middle_d as f64 {
                // mediant < frac - error: the mediant is the new lower bound
                lower_n = middle_n;
                lower_d = middle_d;
            } else {
                // the mediant is inside the window
                let denominator = IBig::from(middle_d);
                let numerator = (whole * &denominator + IBig::from(middle_n)) * signed;
                return Ok(Self {
                    numerator,
                    denominator,
                });
            }
        }
    }
}

impl TryFrom<f64> for BigFraction {
    type Error = FractionError;

    /// Converts with [`BigFraction::DEFAULT_ACCURACY`]; fails only for
    /// non-finite values.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value, Self::DEFAULT_ACCURACY)
    }
}

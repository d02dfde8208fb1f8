//! Property-based tests for exact fraction arithmetic.

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use dashu::integer::IBig;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::BigFraction;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn hash_of(f: &BigFraction) -> u64 {
        let mut hasher = DefaultHasher::new();
        f.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        #[test]
        fn integer_round_trip(n in any::<i64>()) {
            let f = BigFraction::from(n);
            prop_assert_eq!(f.to_big_integer(), IBig::from(n));
        }

        #[test]
        fn simplify_is_idempotent(a in small_int(), b in non_zero_int()) {
            let once = BigFraction::from_i64(a, b).simplify();
            let twice = once.simplify();
            prop_assert_eq!(once.numerator(), twice.numerator());
            prop_assert_eq!(once.denominator(), twice.denominator());
        }

        #[test]
        fn simplify_keeps_the_value(a in small_int(), b in non_zero_int()) {
            let f = BigFraction::from_i64(a, b);
            prop_assert_eq!(f.simplify(), f);
        }

        #[test]
        fn equality_ignores_common_factors(
            a in small_int(),
            b in non_zero_int(),
            k in non_zero_int(),
        ) {
            let f = BigFraction::from_i64(a, b);
            let scaled = BigFraction::from_i64(a * k, b * k);
            prop_assert_eq!(&f, &scaled);
            prop_assert_eq!(hash_of(&f), hash_of(&scaled));
        }

        #[test]
        fn ordering_survives_sign_flip(
            a in small_int(),
            b in non_zero_int(),
            c in small_int(),
            d in non_zero_int(),
        ) {
            let f = BigFraction::from_i64(a, b);
            let g = BigFraction::from_i64(c, d);
            let flipped = BigFraction::from_i64(-a, -b);
            prop_assert_eq!(f.partial_cmp(&g), flipped.partial_cmp(&g));
        }

        #[test]
        fn add_commutes(
            a in small_int(),
            b in non_zero_int(),
            c in small_int(),
            d in non_zero_int(),
        ) {
            let f = BigFraction::from_i64(a, b);
            let g = BigFraction::from_i64(c, d);
            prop_assert_eq!(&f + &g, &g + &f);
        }

        #[test]
        fn mul_commutes(
            a in small_int(),
            b in non_zero_int(),
            c in small_int(),
            d in non_zero_int(),
        ) {
            let f = BigFraction::from_i64(a, b);
            let g = BigFraction::from_i64(c, d);
            prop_assert_eq!(&f * &g, &g * &f);
        }

        #[test]
        fn sub_inverts_add(
            a in small_int(),
            b in non_zero_int(),
            c in small_int(),
            d in non_zero_int(),
        ) {
            let f = BigFraction::from_i64(a, b);
            let g = BigFraction::from_i64(c, d);
            prop_assert_eq!(&(&f + &g) - &g, f);
        }

        #[test]
        fn div_inverts_mul(
            a in small_int(),
            b in non_zero_int(),
            c in non_zero_int(),
            d in non_zero_int(),
        ) {
            let f = BigFraction::from_i64(a, b);
            let g = BigFraction::from_i64(c, d);
            prop_assert_eq!(&(&f * &g) / &g, f);
        }

        #[test]
        fn negation_flips_the_sign(a in small_int(), b in non_zero_int()) {
            let f = BigFraction::from_i64(a, b);
            prop_assert_eq!((-&f).sign(), -f.sign());
        }

        #[test]
        fn from_f64_respects_the_accuracy_bound(
            n in prop_oneof![(-1_000_000i64..=-1i64), (1i64..=1_000_000i64)],
            exp in -3i32..4i32,
        ) {
            let value = n as f64 * 10f64.powi(exp);
            let f = BigFraction::from_f64(value, 1e-9).unwrap();
            let relative_error = ((f.to_f64() - value) / value).abs();
            prop_assert!(relative_error <= 1e-9);
        }

        #[test]
        fn from_f64_zero_is_exact(accuracy in 1e-12f64..0.99f64) {
            let f = BigFraction::from_f64(0.0, accuracy).unwrap();
            prop_assert!(f.is_zero());
        }

        #[test]
        fn decimal_round_trip(mantissa in any::<i64>(), scale in 0u32..28) {
            let d = rust_decimal::Decimal::new(mantissa, scale);
            let f = BigFraction::from(d);
            prop_assert_eq!(f.to_decimal().unwrap(), d);
        }
    }
}

//! Equivalence tests between `bigrat::Rational` and
//! `num_rational::BigRational`, invariant checks, and the binary64 round
//! trip.

use bigrat::{Error, Natural, Rational};
use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;

fn assert_matches_oracle(r: &Rational, o: &BigRational) {
    assert_eq!(r.numerator().to_string(), o.numer().to_string());
    assert_eq!(r.denominator().to_string(), o.denom().to_string());
}

/// Lowest terms, positive denominator, zero as 0/1.
fn assert_normalized(r: &Rational) {
    assert!(!r.denominator().is_zero());
    if r.is_zero() {
        assert_eq!(r.denominator(), &Natural::ONE);
    } else {
        assert_eq!(r.numerator().magnitude().gcd(r.denominator()), Natural::ONE);
    }
}

prop_compose! {
    /// A `Rational` and the equivalent `BigRational`.
    fn rational_pair()(num in any::<i128>(), den in any::<i128>()) -> (Rational, BigRational) {
        let den = if den == 0 { 1 } else { den };
        (
            Rational::new(num, den).unwrap(),
            BigRational::new(BigInt::from(num), BigInt::from(den)),
        )
    }
}

proptest! {
    #[test]
    fn add_matches_oracle((a, oa) in rational_pair(), (b, ob) in rational_pair()) {
        let sum = &a + &b;
        assert_matches_oracle(&sum, &(oa + ob));
        assert_normalized(&sum);
    }

    #[test]
    fn sub_matches_oracle((a, oa) in rational_pair(), (b, ob) in rational_pair()) {
        let diff = &a - &b;
        assert_matches_oracle(&diff, &(oa - ob));
        assert_normalized(&diff);
    }

    #[test]
    fn mul_matches_oracle((a, oa) in rational_pair(), (b, ob) in rational_pair()) {
        let product = &a * &b;
        assert_matches_oracle(&product, &(oa * ob));
        assert_normalized(&product);
    }

    #[test]
    fn div_matches_oracle((a, oa) in rational_pair(), (b, ob) in rational_pair()) {
        prop_assume!(!b.is_zero());
        let quotient = &a / &b;
        assert_matches_oracle(&quotient, &(oa / ob));
        assert_normalized(&quotient);
    }

    #[test]
    fn add_commutes_and_associates((a, _) in rational_pair(), (b, _) in rational_pair(), (c, _) in rational_pair()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn mul_commutes_and_associates((a, _) in rational_pair(), (b, _) in rational_pair(), (c, _) in rational_pair()) {
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn sub_then_add_round_trips((a, _) in rational_pair(), (b, _) in rational_pair()) {
        prop_assert_eq!(&(&a - &b) + &b, a);
    }

    #[test]
    fn division_is_exact((a, _) in rational_pair(), (b, _) in rational_pair()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!(&(&a * &b) / &b, a);
    }

    #[test]
    fn distributive_law((a, _) in rational_pair(), (b, _) in rational_pair(), (c, _) in rational_pair()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn comparison_matches_oracle((a, oa) in rational_pair(), (b, ob) in rational_pair()) {
        prop_assert_eq!(a.cmp(&b), oa.cmp(&ob));
    }

    #[test]
    fn string_round_trips((a, _) in rational_pair()) {
        prop_assert_eq!(a.to_string().parse::<Rational>().unwrap(), a);
    }

    #[test]
    fn binary64_round_trip_is_bit_exact(v in any::<f64>()) {
        prop_assume!(v.is_finite() && v != 0.0);
        let r = Rational::try_from(v).unwrap();
        assert_normalized(&r);
        prop_assert_eq!(r.to_f64().unwrap().to_bits(), v.to_bits());
    }
}

#[test]
fn reduction_vectors() {
    assert_eq!(Rational::new(1024, 384).unwrap().to_string(), "8/3");
    assert_eq!(Rational::new(-1313, 39).unwrap().to_string(), "-101/3");
}

#[test]
fn one_tenth_in_hex() {
    let r = Rational::try_from(0.1).unwrap();
    assert_eq!(format!("{r:x}"), "ccccccccccccd/80000000000000");
}

#[test]
fn dividing_by_the_zero_rational_fails() {
    let a = Rational::new(2000, 7).unwrap();
    let zero = Rational::new(0, 1).unwrap();
    assert_eq!(a.checked_div(&zero), Err(Error::DivideByZero));
}

#[test]
fn long_product_reduces_to_169ths() {
    let a: Rational = "-123456789012345678901234567890123456789012345678901234567890123456789012345678\
                       90/13"
        .parse()
        .unwrap();
    let b: Rational = "-12345678901234567890123456789012345678901234567890123456789012345678901234567\
                       89012345678901234567890/13"
        .parse()
        .unwrap();

    let product = &a * &b;
    assert!(!product.is_negative());
    assert_eq!(product.denominator(), &Natural::from(169u32));

    // Cross-check the full numerator against the oracle.
    let oa = BigRational::new(
        BigInt::parse_bytes(
            b"-12345678901234567890123456789012345678901234567890123456789012345678901234567890",
            10,
        )
        .unwrap(),
        BigInt::from(13),
    );
    let ob = BigRational::new(
        BigInt::parse_bytes(
            b"-1234567890123456789012345678901234567890123456789012345678901234567890123456789012345678901234567890",
            10,
        )
        .unwrap(),
        BigInt::from(13),
    );
    assert_matches_oracle(&product, &(oa * ob));
}

#[test]
fn whole_numbers_parse_with_denominator_one() {
    let r: Rational = "-42".parse().unwrap();
    assert_eq!(r.denominator(), &Natural::ONE);
    assert_eq!(r.to_string(), "-42/1");
}

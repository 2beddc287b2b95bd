//! [`Rational`] negation.

use crate::Rational;
use core::ops::Neg;

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        // Negating cannot break lowest terms, so no renormalization.
        Rational {
            numerator: -self.numerator(),
            denominator: self.denominator().clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Rational;

    #[test]
    fn double_negation() {
        let r = Rational::new(-3, 7).unwrap();
        assert_eq!(-(-r.clone()), r);
    }

    #[test]
    fn negated_zero_is_zero() {
        assert_eq!(-Rational::ZERO, Rational::ZERO);
    }
}

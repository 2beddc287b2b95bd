//! [`Rational`] multiplication.

use crate::Rational;
use core::ops::{Mul, MulAssign};

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        let numerator = self.numerator() * rhs.numerator();
        let denominator = self.denominator() * rhs.denominator();
        Rational::from_parts(numerator, denominator)
    }
}

impl Mul<Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        &self * rhs
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        &self * &rhs
    }
}

impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Rational) {
        *self *= &rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::Rational;

    #[test]
    fn product_reduces() {
        let a = Rational::new(2, 3).unwrap();
        let b = Rational::new(3, 4).unwrap();
        assert_eq!(&a * &b, Rational::new(1, 2).unwrap());
    }

    #[test]
    fn sign_rules() {
        let a = Rational::new(-2, 3).unwrap();
        let b = Rational::new(3, 5).unwrap();
        assert_eq!(&a * &b, Rational::new(-2, 5).unwrap());
        assert_eq!(&a * &a, Rational::new(4, 9).unwrap());
    }
}

//! [`Rational`] division.

use crate::{Error, Integer, Rational, Result};
use core::ops::{Div, DivAssign};

impl Rational {
    /// Computes `self / rhs`, failing with [`Error::DivideByZero`] when
    /// `rhs` is zero.
    ///
    /// Division multiplies by the inverse: the right-hand numerator moves
    /// into the denominator, so its sign is folded into the result's
    /// numerator to keep the denominator positive.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }

        let negative = self.is_negative() != rhs.is_negative();
        let numerator = Integer::from_sign_magnitude(
            negative,
            self.numerator().magnitude() * rhs.denominator(),
        );
        let denominator = self.denominator() * rhs.numerator().magnitude();
        Ok(Self::from_parts(numerator, denominator))
    }
}

impl Div<&Rational> for &Rational {
    type Output = Rational;

    fn div(self, rhs: &Rational) -> Rational {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Div<Rational> for &Rational {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Rational {
        self / &rhs
    }
}

impl Div<&Rational> for Rational {
    type Output = Rational;

    fn div(self, rhs: &Rational) -> Rational {
        &self / rhs
    }
}

impl Div for Rational {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Rational {
        &self / &rhs
    }
}

impl DivAssign<&Rational> for Rational {
    fn div_assign(&mut self, rhs: &Rational) {
        *self = &*self / rhs;
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Rational) {
        *self /= &rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Rational};

    #[test]
    fn divide_by_zero_is_reported() {
        let a = Rational::new(2000, 7).unwrap();
        let zero = Rational::new(0, 1).unwrap();
        assert_eq!(a.checked_div(&zero), Err(Error::DivideByZero));
    }

    #[test]
    fn inverse_multiplication() {
        let a = Rational::new(2, 3).unwrap();
        let b = Rational::new(4, 9).unwrap();
        assert_eq!(&a / &b, Rational::new(3, 2).unwrap());
    }

    #[test]
    fn sign_folds_into_the_numerator() {
        let a = Rational::new(1, 2).unwrap();
        let b = Rational::new(-2, 3).unwrap();
        let q = &a / &b;
        assert_eq!(q, Rational::new(-3, 4).unwrap());
        assert!(!q.denominator().is_zero());
    }

    #[test]
    fn division_undoes_multiplication() {
        let a = Rational::new(-355, 113).unwrap();
        let b = Rational::new(22, 7).unwrap();
        assert_eq!(&(&a * &b) / &b, a);
    }
}

//! [`Rational`] subtraction.

use crate::Rational;
use core::ops::{Sub, SubAssign};

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        let numerator = &(self.numerator() * rhs.denominator())
            - &(rhs.numerator() * self.denominator());
        let denominator = self.denominator() * rhs.denominator();
        Rational::from_parts(numerator, denominator)
    }
}

impl Sub<Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self - &rhs
    }
}

impl Sub<&Rational> for Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        &self - rhs
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        &self - &rhs
    }
}

impl SubAssign<&Rational> for Rational {
    fn sub_assign(&mut self, rhs: &Rational) {
        *self = &*self - rhs;
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Rational) {
        *self -= &rhs;
    }
}

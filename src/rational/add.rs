//! [`Rational`] addition.

use crate::Rational;
use core::ops::{Add, AddAssign};

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        let numerator = &(self.numerator() * rhs.denominator())
            + &(rhs.numerator() * self.denominator());
        let denominator = self.denominator() * rhs.denominator();
        Rational::from_parts(numerator, denominator)
    }
}

impl Add<Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        self + &rhs
    }
}

impl Add<&Rational> for Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        &self + rhs
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        &self + &rhs
    }
}

impl AddAssign<&Rational> for Rational {
    fn add_assign(&mut self, rhs: &Rational) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Rational) {
        *self += &rhs;
    }
}

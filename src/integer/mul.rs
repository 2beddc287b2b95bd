//! [`Integer`] multiplication.

use crate::{Integer, Natural};
use core::ops::{Mul, MulAssign};

impl Mul<&Integer> for &Integer {
    type Output = Integer;

    fn mul(self, rhs: &Integer) -> Integer {
        Integer::from_sign_magnitude(
            self.is_negative() != rhs.is_negative(),
            self.magnitude() * rhs.magnitude(),
        )
    }
}

impl Mul<Integer> for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Integer) -> Integer {
        self * &rhs
    }
}

impl Mul<&Integer> for Integer {
    type Output = Integer;

    fn mul(self, rhs: &Integer) -> Integer {
        &self * rhs
    }
}

impl Mul for Integer {
    type Output = Integer;

    fn mul(self, rhs: Integer) -> Integer {
        &self * &rhs
    }
}

/// Scaling by a [`Natural`] preserves the sign; the rational layer uses
/// this for its cross-multiplication formulas.
impl Mul<&Natural> for &Integer {
    type Output = Integer;

    fn mul(self, rhs: &Natural) -> Integer {
        Integer::from_sign_magnitude(self.is_negative(), self.magnitude() * rhs)
    }
}

impl MulAssign<&Integer> for Integer {
    fn mul_assign(&mut self, rhs: &Integer) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Integer {
    fn mul_assign(&mut self, rhs: Integer) {
        *self *= &rhs;
    }
}

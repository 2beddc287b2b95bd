//! [`Integer`] subtraction.
//!
//! Unlike the [`Natural`][`crate::Natural`] version this cannot fail: a
//! negative result just flips the sign.

use crate::Integer;
use core::cmp::Ordering;
use core::ops::{Sub, SubAssign};

impl Sub<&Integer> for &Integer {
    type Output = Integer;

    fn sub(self, rhs: &Integer) -> Integer {
        // Opposite signs: the magnitudes pile up on this value's side.
        if self.is_negative() != rhs.is_negative() {
            return Integer::from_sign_magnitude(
                self.is_negative(),
                self.magnitude() + rhs.magnitude(),
            );
        }

        // Same sign: subtract the smaller magnitude from the larger. Taking
        // away more than we have lands on the inverse of the right-hand
        // sign.
        match self.magnitude().cmp(rhs.magnitude()) {
            Ordering::Less => Integer::from_sign_magnitude(
                !rhs.is_negative(),
                rhs.magnitude() - self.magnitude(),
            ),
            _ => Integer::from_sign_magnitude(
                self.is_negative(),
                self.magnitude() - rhs.magnitude(),
            ),
        }
    }
}

impl Sub<Integer> for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Integer) -> Integer {
        self - &rhs
    }
}

impl Sub<&Integer> for Integer {
    type Output = Integer;

    fn sub(self, rhs: &Integer) -> Integer {
        &self - rhs
    }
}

impl Sub for Integer {
    type Output = Integer;

    fn sub(self, rhs: Integer) -> Integer {
        &self - &rhs
    }
}

impl SubAssign<&Integer> for Integer {
    fn sub_assign(&mut self, rhs: &Integer) {
        *self = &*self - rhs;
    }
}

impl SubAssign for Integer {
    fn sub_assign(&mut self, rhs: Integer) {
        *self -= &rhs;
    }
}

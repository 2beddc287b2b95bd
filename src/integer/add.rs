//! [`Integer`] addition.

use crate::Integer;
use core::cmp::Ordering;
use core::ops::{Add, AddAssign};

impl Add<&Integer> for &Integer {
    type Output = Integer;

    fn add(self, rhs: &Integer) -> Integer {
        // Same sign: add the magnitudes and keep the sign.
        if self.is_negative() == rhs.is_negative() {
            return Integer::from_sign_magnitude(
                self.is_negative(),
                self.magnitude() + rhs.magnitude(),
            );
        }

        // Opposite signs: subtract the smaller magnitude from the larger
        // and take the sign of the larger.
        match self.magnitude().cmp(rhs.magnitude()) {
            Ordering::Less => Integer::from_sign_magnitude(
                rhs.is_negative(),
                rhs.magnitude() - self.magnitude(),
            ),
            _ => Integer::from_sign_magnitude(
                self.is_negative(),
                self.magnitude() - rhs.magnitude(),
            ),
        }
    }
}

impl Add<Integer> for &Integer {
    type Output = Integer;

    fn add(self, rhs: Integer) -> Integer {
        self + &rhs
    }
}

impl Add<&Integer> for Integer {
    type Output = Integer;

    fn add(self, rhs: &Integer) -> Integer {
        &self + rhs
    }
}

impl Add for Integer {
    type Output = Integer;

    fn add(self, rhs: Integer) -> Integer {
        &self + &rhs
    }
}

impl AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, rhs: &Integer) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Integer {
    fn add_assign(&mut self, rhs: Integer) {
        *self += &rhs;
    }
}

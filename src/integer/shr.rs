//! [`Integer`] right shift.
//!
//! The shift acts on the magnitude; a negative value that shifts to nothing
//! collapses to canonical zero rather than negative zero.

use crate::Integer;
use core::ops::{Shr, ShrAssign};

impl Shr<u32> for &Integer {
    type Output = Integer;

    fn shr(self, shift: u32) -> Integer {
        Integer::from_sign_magnitude(self.is_negative(), self.magnitude() >> shift)
    }
}

impl Shr<u32> for Integer {
    type Output = Integer;

    fn shr(self, shift: u32) -> Integer {
        &self >> shift
    }
}

impl ShrAssign<u32> for Integer {
    fn shr_assign(&mut self, shift: u32) {
        *self = &*self >> shift;
    }
}

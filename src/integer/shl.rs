//! [`Integer`] left shift.

use crate::Integer;
use core::ops::{Shl, ShlAssign};

impl Shl<u32> for &Integer {
    type Output = Integer;

    fn shl(self, shift: u32) -> Integer {
        Integer::from_sign_magnitude(self.is_negative(), self.magnitude() << shift)
    }
}

impl Shl<u32> for Integer {
    type Output = Integer;

    fn shl(self, shift: u32) -> Integer {
        &self << shift
    }
}

impl ShlAssign<u32> for Integer {
    fn shl_assign(&mut self, shift: u32) {
        *self = &*self << shift;
    }
}

#[cfg(test)]
mod tests {
    use crate::Integer;

    #[test]
    fn sign_is_preserved() {
        assert_eq!(Integer::from(-3) << 4, Integer::from(-48));
        assert_eq!(Integer::from(3) << 4, Integer::from(48));
    }
}

//! [`Natural`] right shift.

use crate::{digits, Limb, Natural};
use core::ops::{Shr, ShrAssign};

impl Shr<u32> for &Natural {
    type Output = Natural;

    fn shr(self, shift: u32) -> Natural {
        let digit_count = (shift / Limb::BITS) as usize;
        let bit_count = shift % Limb::BITS;

        if digit_count >= self.nlimbs() {
            return Natural::ZERO;
        }

        let mut res = Natural::with_capacity(self.nlimbs() - digit_count);
        let len = digits::shr(res.buf_mut(), self.digits(), digit_count, bit_count);
        res.set_len(len);
        res
    }
}

impl Shr<u32> for Natural {
    type Output = Natural;

    fn shr(mut self, shift: u32) -> Natural {
        self >>= shift;
        self
    }
}

impl ShrAssign<u32> for Natural {
    fn shr_assign(&mut self, shift: u32) {
        let digit_count = (shift / Limb::BITS) as usize;
        let bit_count = shift % Limb::BITS;

        let len = self.nlimbs();
        let len = digits::shr_assign(self.buf_mut(), len, digit_count, bit_count);
        self.set_len(len);
    }
}

//! [`Natural`] left shift.

use crate::{digits, Limb, Natural};
use core::ops::{Shl, ShlAssign};

impl Shl<u32> for &Natural {
    type Output = Natural;

    fn shl(self, shift: u32) -> Natural {
        if self.is_zero() {
            return Natural::ZERO;
        }

        let digit_count = (shift / Limb::BITS) as usize;
        let bit_count = shift % Limb::BITS;

        let mut res = Natural::with_capacity(self.nlimbs() + digit_count + 1);
        let len = digits::shl(res.buf_mut(), self.digits(), digit_count, bit_count);
        res.set_len(len);
        res
    }
}

impl Shl<u32> for Natural {
    type Output = Natural;

    fn shl(mut self, shift: u32) -> Natural {
        self <<= shift;
        self
    }
}

impl ShlAssign<u32> for Natural {
    fn shl_assign(&mut self, shift: u32) {
        if self.is_zero() {
            return;
        }

        let digit_count = (shift / Limb::BITS) as usize;
        let bit_count = shift % Limb::BITS;

        let len = self.nlimbs();
        self.expand(len + digit_count + 1);
        let len = digits::shl_assign(self.buf_mut(), len, digit_count, bit_count);
        self.set_len(len);
    }
}

#[cfg(test)]
mod tests {
    use crate::Natural;

    #[test]
    fn shift_is_doubling() {
        let n = Natural::from(3u32);
        assert_eq!(&n << 1, Natural::from(6u32));
        assert_eq!(&n << 10, Natural::from(3072u32));
    }

    #[test]
    fn shift_across_limb_boundaries() {
        let n = &Natural::ONE << 200;
        assert_eq!(n.bits(), 201);
        assert_eq!(&n >> 200, Natural::ONE);

        let mut m = Natural::from(0xabcdu32);
        m <<= 77;
        assert_eq!(&m >> 77, Natural::from(0xabcdu32));
    }

    #[test]
    fn zero_shifts_to_zero() {
        assert!((&Natural::ZERO << 1000).is_zero());
    }
}

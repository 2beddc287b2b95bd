//! [`Natural`] multiplication.

use crate::{digits, Natural};
use core::ops::{Mul, MulAssign};

impl Mul<&Natural> for &Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Natural {
        if self.is_zero() || rhs.is_zero() {
            return Natural::ZERO;
        }

        let mut res = Natural::with_capacity(self.nlimbs() + rhs.nlimbs());
        let len = if rhs.nlimbs() == 1 {
            digits::mul_limb(res.buf_mut(), self.digits(), rhs.digits()[0])
        } else if self.nlimbs() == 1 {
            digits::mul_limb(res.buf_mut(), rhs.digits(), self.digits()[0])
        } else {
            digits::mul(res.buf_mut(), self.digits(), rhs.digits())
        };
        res.set_len(len);
        res
    }
}

impl Mul<Natural> for &Natural {
    type Output = Natural;

    fn mul(self, rhs: Natural) -> Natural {
        self * &rhs
    }
}

impl Mul<&Natural> for Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Natural {
        &self * rhs
    }
}

impl Mul for Natural {
    type Output = Natural;

    fn mul(self, rhs: Natural) -> Natural {
        &self * &rhs
    }
}

impl MulAssign<&Natural> for Natural {
    fn mul_assign(&mut self, rhs: &Natural) {
        // The column multiplier reads every input limb after some output
        // limbs are written, so it cannot run in place.
        *self = &*self * rhs;
    }
}

impl MulAssign for Natural {
    fn mul_assign(&mut self, rhs: Natural) {
        *self *= &rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::Natural;
    use alloc::string::ToString;

    #[test]
    fn multiply_by_zero_trims_to_empty() {
        let big: Natural = "0xfedcfedc0123456789".parse().unwrap();
        let product = &big * &Natural::ZERO;
        assert!(product.is_zero());
        assert_eq!(product.bits(), 0);
    }

    #[test]
    fn single_limb_fast_path_agrees_with_comba() {
        let a: Natural = "123456789012345678901234567890".parse().unwrap();
        let five = Natural::from(5u32);
        let sum = &a + &a + &a + &a + &a;
        assert_eq!(&a * &five, sum);
        assert_eq!(&five * &a, &a * &five);
    }

    #[test]
    fn known_product() {
        let a: Natural = "18446744073709551615".parse().unwrap(); // 2^64 - 1
        let square = &a * &a;
        assert_eq!(
            square.to_string(),
            "340282366920938463426481119284349108225" // (2^64 - 1)^2
        );
    }
}

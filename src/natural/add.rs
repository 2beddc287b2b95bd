//! [`Natural`] addition.

use crate::{digits, Natural};
use core::ops::{Add, AddAssign};

impl Add<&Natural> for &Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Natural {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return rhs.clone();
        }

        let mut res = Natural::with_capacity(self.nlimbs().max(rhs.nlimbs()) + 1);
        let len = if rhs.nlimbs() == 1 {
            digits::add_limb(res.buf_mut(), self.digits(), rhs.digits()[0])
        } else if self.nlimbs() == 1 {
            digits::add_limb(res.buf_mut(), rhs.digits(), self.digits()[0])
        } else {
            digits::add(res.buf_mut(), self.digits(), rhs.digits())
        };
        res.set_len(len);
        res
    }
}

impl Add<Natural> for &Natural {
    type Output = Natural;

    fn add(self, rhs: Natural) -> Natural {
        self + &rhs
    }
}

impl Add<&Natural> for Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Natural {
        &self + rhs
    }
}

impl Add for Natural {
    type Output = Natural;

    fn add(self, rhs: Natural) -> Natural {
        &self + &rhs
    }
}

impl AddAssign<&Natural> for Natural {
    fn add_assign(&mut self, rhs: &Natural) {
        if rhs.is_zero() {
            return;
        }

        let len = self.nlimbs();
        self.expand(len.max(rhs.nlimbs()) + 1);
        let len = if rhs.nlimbs() == 1 {
            digits::add_limb_assign(self.buf_mut(), len, rhs.digits()[0])
        } else {
            digits::add_assign(self.buf_mut(), len, rhs.digits())
        };
        self.set_len(len);
    }
}

impl AddAssign for Natural {
    fn add_assign(&mut self, rhs: Natural) {
        *self += &rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::Natural;

    #[test]
    fn add_zero_is_identity() {
        let n = Natural::from(1234u32);
        assert_eq!(&n + &Natural::ZERO, n);
        assert_eq!(&Natural::ZERO + &n, n);
    }

    #[test]
    fn carry_chain() {
        let max64 = Natural::from(u64::MAX);
        let sum = &max64 + &Natural::ONE;
        assert_eq!(sum, &Natural::ONE << 64);
    }

    #[test]
    fn add_assign_grows() {
        let mut acc = Natural::ZERO;
        for _ in 0..100 {
            acc += Natural::from(u64::MAX);
        }
        assert_eq!(acc, &Natural::from(u64::MAX) * &Natural::from(100u32));
    }
}

//! [`Natural`] subtraction.

use crate::{digits, Error, Natural, Result};
use core::cmp::Ordering;
use core::ops::{Sub, SubAssign};

impl Natural {
    /// Computes `self - rhs`, failing with [`Error::NotANumber`] when the
    /// result would be negative. The natural numbers are not closed under
    /// subtraction; callers that need a signed difference use
    /// [`Integer`][`crate::Integer`].
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Ok(self.clone());
        }
        if digits::cmp(self.digits(), rhs.digits()) == Ordering::Less {
            return Err(Error::NotANumber);
        }

        let mut res = Natural::with_capacity(self.nlimbs());
        let len = if rhs.nlimbs() == 1 {
            digits::sub_limb(res.buf_mut(), self.digits(), rhs.digits()[0])
        } else {
            digits::sub(res.buf_mut(), self.digits(), rhs.digits())
        };
        res.set_len(len);
        Ok(res)
    }
}

impl Sub<&Natural> for &Natural {
    type Output = Natural;

    fn sub(self, rhs: &Natural) -> Natural {
        self.checked_sub(rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl Sub<Natural> for &Natural {
    type Output = Natural;

    fn sub(self, rhs: Natural) -> Natural {
        self - &rhs
    }
}

impl Sub<&Natural> for Natural {
    type Output = Natural;

    fn sub(self, rhs: &Natural) -> Natural {
        &self - rhs
    }
}

impl Sub for Natural {
    type Output = Natural;

    fn sub(self, rhs: Natural) -> Natural {
        &self - &rhs
    }
}

impl SubAssign<&Natural> for Natural {
    fn sub_assign(&mut self, rhs: &Natural) {
        if rhs.is_zero() {
            return;
        }
        assert!(
            digits::cmp(self.digits(), rhs.digits()) != Ordering::Less,
            "attempted to subtract with underflow"
        );

        let len = self.nlimbs();
        let len = digits::sub_assign(self.buf_mut(), len, rhs.digits());
        self.set_len(len);
    }
}

impl SubAssign for Natural {
    fn sub_assign(&mut self, rhs: Natural) {
        *self -= &rhs;
    }
}

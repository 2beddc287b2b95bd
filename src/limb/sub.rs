//! Limb subtraction

use crate::{primitives::borrowing_sub, Limb};
use core::ops::{Sub, SubAssign};

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the
    /// new borrow (`0` or `1`).
    #[inline(always)]
    #[must_use]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Computes `self - rhs`, returning the result along with the borrow.
    #[inline(always)]
    #[must_use]
    pub const fn overflowing_sub(self, rhs: Limb) -> (Limb, Limb) {
        let (res, borrow) = self.0.overflowing_sub(rhs.0);
        (Limb(res), Limb(borrow as _))
    }

    /// Perform wrapping subtraction, discarding underflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }
}

impl Sub for Limb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (res, borrow) = self.overflowing_sub(rhs);
        assert!(borrow.is_zero(), "attempted to subtract with underflow");
        res
    }
}

impl SubAssign for Limb {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

//! Limb division

use crate::{primitives::div_rem_wide, Limb};
use core::ops::{Div, Rem};

impl Limb {
    /// Computes `self / rhs` and `self % rhs` in one step.
    ///
    /// Panics if `rhs` is zero.
    #[inline(always)]
    #[must_use]
    pub const fn div_rem(self, rhs: Self) -> (Self, Self) {
        (Limb(self.0 / rhs.0), Limb(self.0 % rhs.0))
    }

    /// Divides the two-limb value `(hi, lo)` (with `hi == self`) by
    /// `divisor`, returning the one-limb quotient and remainder.
    ///
    /// The caller must guarantee `self < divisor` so that the quotient fits
    /// in a single limb.
    #[inline(always)]
    #[must_use]
    pub const fn div_rem_wide(self, lo: Self, divisor: Self) -> (Self, Self) {
        let (quo, rem) = div_rem_wide(self.0, lo.0, divisor.0);
        (Limb(quo), Limb(rem))
    }
}

impl Div for Limb {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.div_rem(rhs).0
    }
}

impl Rem for Limb {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.div_rem(rhs).1
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;

    #[test]
    fn div_rem_exact() {
        let (q, r) = Limb(42).div_rem(Limb(7));
        assert_eq!(q, Limb(6));
        assert_eq!(r, Limb::ZERO);
    }

    #[test]
    fn div_rem_wide_round_trip() {
        let (q, r) = Limb(3).div_rem_wide(Limb(7), Limb(11));
        // q * 11 + r == 3 * 2^W + 7
        let wide = |l: Limb| l.0 as u128;
        assert_eq!(
            wide(q) * 11 + wide(r),
            (3u128 << Limb::BITS) + 7
        );
        assert!(r < Limb(11));
    }
}

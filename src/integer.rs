//! Unbounded signed integers.

mod add;
mod cmp;
mod div;
mod encoding;
mod from;
mod mul;
mod neg;
mod shl;
mod shr;
mod sub;

#[cfg(feature = "serde")]
mod serde;

use crate::Natural;
use core::fmt;

/// An unbounded signed integer, stored as a sign and a [`Natural`]
/// magnitude.
///
/// Zero is canonical: a zero magnitude always carries a non-negative sign,
/// and every operation re-establishes that before returning. With canonical
/// zero, structural equality is value equality.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Integer {
    negative: bool,
    magnitude: Natural,
}

impl Integer {
    /// The value `0`.
    pub const ZERO: Self = Self {
        negative: false,
        magnitude: Natural::ZERO,
    };

    /// The value `1`.
    pub const ONE: Self = Self {
        negative: false,
        magnitude: Natural::ONE,
    };

    /// Assemble a value from a sign and a magnitude, forcing the canonical
    /// non-negative zero.
    pub(crate) fn from_sign_magnitude(negative: bool, magnitude: Natural) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    /// Is this value negative?
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Is this value zero?
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// The magnitude (absolute value) of this integer.
    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> &Natural {
        &self.magnitude
    }

    /// The absolute value as an owned [`Natural`].
    #[must_use]
    pub fn abs(&self) -> Natural {
        self.magnitude.clone()
    }

    /// The number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bits(&self) -> u32 {
        self.magnitude.bits()
    }

    /// Computes the greatest common divisor of the magnitudes of `self` and
    /// `rhs`, as a [`Natural`].
    #[must_use]
    pub fn gcd(&self, rhs: &Self) -> Natural {
        self.magnitude.gcd(&rhs.magnitude)
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

impl num_traits::Zero for Integer {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }
}

impl num_traits::One for Integer {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self == &Self::ONE
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl zeroize::Zeroize for Integer {
    fn zeroize(&mut self) {
        use zeroize::Zeroize;

        self.magnitude.zeroize();
        self.negative = false;
    }
}

#[cfg(test)]
mod tests {
    use super::Integer;
    use crate::Natural;

    #[test]
    fn canonical_zero_is_non_negative() {
        let z = Integer::from_sign_magnitude(true, Natural::ZERO);
        assert!(!z.is_negative());
        assert_eq!(z, Integer::ZERO);
    }

    #[test]
    fn accessors() {
        let n = Integer::from(-42);
        assert!(n.is_negative());
        assert_eq!(n.magnitude(), &Natural::from(42u32));
        assert_eq!(n.abs(), Natural::from(42u32));
        assert_eq!(n.bits(), 6);
    }
}

//! Exact rational numbers.

mod add;
mod cmp;
mod div;
mod encoding;
mod float;
mod from;
mod mul;
mod neg;
mod sub;

#[cfg(feature = "serde")]
mod serde;

use crate::{Integer, Natural};
use core::fmt;

/// An exact rational number: an [`Integer`] numerator over a positive
/// [`Natural`] denominator.
///
/// Values are always normalized: the denominator is at least one, numerator
/// and denominator share no common factor, and zero is exactly `0/1`. Every
/// operation runs its result through the same normalization, so structural
/// equality is value equality.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Rational {
    numerator: Integer,
    denominator: Natural,
}

impl Rational {
    /// The value `0`, represented as `0/1`.
    pub const ZERO: Self = Self {
        numerator: Integer::ZERO,
        denominator: Natural::ONE,
    };

    /// The value `1`.
    pub const ONE: Self = Self {
        numerator: Integer::ONE,
        denominator: Natural::ONE,
    };

    /// Assemble and normalize a value from a numerator and a non-zero
    /// denominator. Callers guarantee the denominator; arithmetic preserves
    /// it because denominators only ever multiply.
    pub(crate) fn from_parts(numerator: Integer, denominator: Natural) -> Self {
        debug_assert!(!denominator.is_zero());
        let mut res = Self {
            numerator,
            denominator,
        };
        res.normalize();
        res
    }

    /// Re-establish lowest terms: divide numerator and denominator by their
    /// greatest common divisor and pin zero to `0/1`.
    fn normalize(&mut self) {
        if self.numerator.is_zero() {
            self.denominator = Natural::ONE;
            return;
        }

        let gcd = self.numerator.magnitude().gcd(&self.denominator);
        if gcd != Natural::ONE {
            let reduced = self
                .numerator
                .magnitude()
                .checked_div(&gcd)
                .expect("gcd of a non-zero value is non-zero");
            self.numerator = Integer::from_sign_magnitude(self.numerator.is_negative(), reduced);
            self.denominator = self
                .denominator
                .checked_div(&gcd)
                .expect("gcd of a non-zero value is non-zero");
        }
    }

    /// The numerator, including the sign.
    #[inline]
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// The denominator; always at least one.
    #[inline]
    #[must_use]
    pub fn denominator(&self) -> &Natural {
        &self.denominator
    }

    /// Is this value zero?
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Is this value negative?
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl num_traits::Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }
}

impl num_traits::One for Rational {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self == &Self::ONE
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl zeroize::Zeroize for Rational {
    fn zeroize(&mut self) {
        use zeroize::Zeroize;

        self.numerator.zeroize();
        self.denominator.zeroize();
        // A zeroized value must still satisfy the invariants; restore 0/1.
        self.denominator = Natural::ONE;
    }
}

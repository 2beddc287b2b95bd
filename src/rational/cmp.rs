//! [`Rational`] comparisons.
//!
//! Denominators are positive, so cross-multiplying the numerators by the
//! opposite denominators preserves the ordering.

use crate::Rational;
use core::cmp::Ordering;

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numerator() * other.denominator()).cmp(&(other.numerator() * self.denominator()))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

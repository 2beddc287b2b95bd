//! [`Integer`] comparisons.

use crate::Integer;
use core::cmp::Ordering;

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            // Signs differ: the non-negative value is the greater one.
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            // Both non-negative: plain magnitude order.
            (false, false) => self.magnitude().cmp(other.magnitude()),
            // Both negative: the larger magnitude is the smaller value.
            (true, true) => other.magnitude().cmp(self.magnitude()),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

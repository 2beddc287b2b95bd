//! [`Natural`] comparisons.

use crate::{digits, Natural};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

impl Ord for Natural {
    /// A length difference decides immediately, so comparison touches limbs
    /// only for equal-length operands.
    fn cmp(&self, other: &Self) -> Ordering {
        digits::cmp(self.digits(), other.digits())
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Natural {
    fn eq(&self, other: &Self) -> bool {
        self.digits() == other.digits()
    }
}

impl Eq for Natural {}

impl Hash for Natural {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use crate::Natural;

    #[test]
    fn ordering() {
        let small: Natural = "0xffffffffffffffff".parse().unwrap();
        let large: Natural = "0x10000000000000000".parse().unwrap();
        assert!(small < large);
        assert!(large > small);
        assert!(Natural::ZERO < small);
        assert_eq!(large, large.clone());
    }

    #[test]
    fn equal_lengths_compare_from_the_top() {
        let a: Natural = "0x10000000000000001".parse().unwrap();
        let b: Natural = "0x10000000000000002".parse().unwrap();
        assert!(a < b);
    }
}

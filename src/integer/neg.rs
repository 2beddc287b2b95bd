//! [`Integer`] negation.

use crate::Integer;
use core::ops::Neg;

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer::from_sign_magnitude(!self.is_negative(), self.magnitude().clone())
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        let Integer {
            negative,
            magnitude,
        } = self;
        Integer::from_sign_magnitude(!negative, magnitude)
    }
}

#[cfg(test)]
mod tests {
    use crate::Integer;

    #[test]
    fn double_negation() {
        let n = Integer::from(-17);
        assert_eq!(-(-n.clone()), n);
    }

    #[test]
    fn negated_zero_stays_canonical() {
        let z = -Integer::ZERO;
        assert!(!z.is_negative());
        assert!(z.is_zero());
    }
}

//! [`Integer`] division.
//!
//! Truncating division: the quotient's sign is the XOR of the operand
//! signs, and the remainder follows the dividend's sign, so that
//! `a == (a / b) * b + (a % b)` holds for every non-zero `b`.

use crate::{Error, Integer, Result};
use core::ops::{Div, DivAssign, Rem, RemAssign};

impl Integer {
    /// Computes `self / rhs` and `self % rhs` in one pass, failing with
    /// [`Error::DivideByZero`] for a zero divisor.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }

        let (quotient, remainder) = self.magnitude().div_rem(rhs.magnitude())?;
        Ok((
            Self::from_sign_magnitude(self.is_negative() != rhs.is_negative(), quotient),
            Self::from_sign_magnitude(self.is_negative(), remainder),
        ))
    }

    /// Computes `self / rhs`, failing with [`Error::DivideByZero`] for a
    /// zero divisor.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        Ok(self.div_rem(rhs)?.0)
    }

    /// Computes `self % rhs`, failing with [`Error::DivideByZero`] for a
    /// zero divisor.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self> {
        Ok(self.div_rem(rhs)?.1)
    }
}

impl Div<&Integer> for &Integer {
    type Output = Integer;

    fn div(self, rhs: &Integer) -> Integer {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Div<Integer> for &Integer {
    type Output = Integer;

    fn div(self, rhs: Integer) -> Integer {
        self / &rhs
    }
}

impl Div<&Integer> for Integer {
    type Output = Integer;

    fn div(self, rhs: &Integer) -> Integer {
        &self / rhs
    }
}

impl Div for Integer {
    type Output = Integer;

    fn div(self, rhs: Integer) -> Integer {
        &self / &rhs
    }
}

impl DivAssign<&Integer> for Integer {
    fn div_assign(&mut self, rhs: &Integer) {
        *self = &*self / rhs;
    }
}

impl DivAssign for Integer {
    fn div_assign(&mut self, rhs: Integer) {
        *self /= &rhs;
    }
}

impl Rem<&Integer> for &Integer {
    type Output = Integer;

    fn rem(self, rhs: &Integer) -> Integer {
        self.checked_rem(rhs).expect("division by zero")
    }
}

impl Rem<Integer> for &Integer {
    type Output = Integer;

    fn rem(self, rhs: Integer) -> Integer {
        self % &rhs
    }
}

impl Rem<&Integer> for Integer {
    type Output = Integer;

    fn rem(self, rhs: &Integer) -> Integer {
        &self % rhs
    }
}

impl Rem for Integer {
    type Output = Integer;

    fn rem(self, rhs: Integer) -> Integer {
        &self % &rhs
    }
}

impl RemAssign<&Integer> for Integer {
    fn rem_assign(&mut self, rhs: &Integer) {
        *self = &*self % rhs;
    }
}

impl RemAssign for Integer {
    fn rem_assign(&mut self, rhs: Integer) {
        *self %= &rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Integer};

    #[test]
    fn dividend_sign_remainder() {
        let a = Integer::from(1313);
        let b = Integer::from(-39);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, Integer::from(-33));
        assert_eq!(r, Integer::from(26));
    }

    #[test]
    fn truncation_identity_across_signs() {
        for a in [1313i64, -1313] {
            for b in [39i64, -39] {
                let ia = Integer::from(a);
                let ib = Integer::from(b);
                let (q, r) = ia.div_rem(&ib).unwrap();
                assert_eq!(&(&q * &ib) + &r, ia);
                assert_eq!(q, Integer::from(a / b));
                assert_eq!(r, Integer::from(a % b));
            }
        }
    }

    #[test]
    fn zero_divisor_is_reported() {
        assert_eq!(
            Integer::from(1).div_rem(&Integer::ZERO),
            Err(Error::DivideByZero)
        );
    }

    #[test]
    fn zero_quotient_is_canonical() {
        let (q, r) = Integer::from(-1).div_rem(&Integer::from(2)).unwrap();
        assert!(!q.is_negative());
        assert!(q.is_zero());
        assert_eq!(r, Integer::from(-1));
    }
}

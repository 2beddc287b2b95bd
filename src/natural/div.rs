//! [`Natural`] division.

use crate::{digits, Error, Natural, Result};
use core::cmp::Ordering;
use core::ops::{Div, DivAssign, Rem, RemAssign};

impl Natural {
    /// Computes `self / rhs` and `self % rhs` in one pass, failing with
    /// [`Error::DivideByZero`] for a zero divisor.
    ///
    /// The remainder is always strictly smaller than the divisor.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }

        // A dividend smaller than the divisor divides to zero untouched.
        if digits::cmp(self.digits(), rhs.digits()) == Ordering::Less {
            return Ok((Natural::ZERO, self.clone()));
        }

        if rhs.nlimbs() == 1 {
            let mut quotient = Natural::with_capacity(self.nlimbs());
            let (len, rem) = digits::div_rem_limb(quotient.buf_mut(), self.digits(), rhs.digits()[0]);
            quotient.set_len(len);
            return Ok((quotient, Natural::from_limb(rem)));
        }

        let mut quotient = Natural::with_capacity(self.nlimbs() - rhs.nlimbs() + 1);
        let mut remainder = Natural::with_capacity(self.nlimbs() + 1);
        let (q_len, r_len) = digits::div_rem(
            quotient.buf_mut(),
            remainder.buf_mut(),
            self.digits(),
            rhs.digits(),
        );
        quotient.set_len(q_len);
        remainder.set_len(r_len);
        Ok((quotient, remainder))
    }

    /// Computes `self % rhs`, failing with [`Error::DivideByZero`] for a
    /// zero divisor.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self> {
        Ok(self.div_rem(rhs)?.1)
    }

    /// Computes `self / rhs`, failing with [`Error::DivideByZero`] for a
    /// zero divisor.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        Ok(self.div_rem(rhs)?.0)
    }
}

impl Div<&Natural> for &Natural {
    type Output = Natural;

    fn div(self, rhs: &Natural) -> Natural {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Div<Natural> for &Natural {
    type Output = Natural;

    fn div(self, rhs: Natural) -> Natural {
        self / &rhs
    }
}

impl Div<&Natural> for Natural {
    type Output = Natural;

    fn div(self, rhs: &Natural) -> Natural {
        &self / rhs
    }
}

impl Div for Natural {
    type Output = Natural;

    fn div(self, rhs: Natural) -> Natural {
        &self / &rhs
    }
}

impl DivAssign<&Natural> for Natural {
    fn div_assign(&mut self, rhs: &Natural) {
        *self = &*self / rhs;
    }
}

impl DivAssign for Natural {
    fn div_assign(&mut self, rhs: Natural) {
        *self /= &rhs;
    }
}

impl Rem<&Natural> for &Natural {
    type Output = Natural;

    fn rem(self, rhs: &Natural) -> Natural {
        self.checked_rem(rhs).expect("division by zero")
    }
}

impl Rem<Natural> for &Natural {
    type Output = Natural;

    fn rem(self, rhs: Natural) -> Natural {
        self % &rhs
    }
}

impl Rem<&Natural> for Natural {
    type Output = Natural;

    fn rem(self, rhs: &Natural) -> Natural {
        &self % rhs
    }
}

impl Rem for Natural {
    type Output = Natural;

    fn rem(self, rhs: Natural) -> Natural {
        &self % &rhs
    }
}

impl RemAssign<&Natural> for Natural {
    fn rem_assign(&mut self, rhs: &Natural) {
        *self = &*self % rhs;
    }
}

impl RemAssign for Natural {
    fn rem_assign(&mut self, rhs: Natural) {
        *self %= &rhs;
    }
}

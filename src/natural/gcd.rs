//! Greatest common divisor.

use crate::Natural;
use core::mem;

impl Natural {
    /// Computes the greatest common divisor of `self` and `rhs` by the
    /// Euclidean remainder algorithm.
    ///
    /// `gcd(a, 0)` is `a` by convention. The loop only moves values between
    /// its three slots, so each round costs one remainder and no copies.
    #[must_use]
    pub fn gcd(&self, rhs: &Self) -> Self {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return rhs.clone();
        }

        let (mut larger, mut smaller) = if self < rhs {
            (rhs.clone(), self.clone())
        } else {
            (self.clone(), rhs.clone())
        };

        loop {
            let rem = &larger % &smaller;
            if rem.is_zero() {
                return smaller;
            }
            larger = mem::replace(&mut smaller, rem);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Natural;

    #[test]
    fn gcd_with_zero() {
        let n = Natural::from(42u32);
        assert_eq!(n.gcd(&Natural::ZERO), n);
        assert_eq!(Natural::ZERO.gcd(&n), n);
    }

    #[test]
    fn known_gcds() {
        let a = Natural::from(1024u32);
        let b = Natural::from(384u32);
        assert_eq!(a.gcd(&b), Natural::from(128u32));

        let a = Natural::from(1313u32);
        let b = Natural::from(39u32);
        assert_eq!(a.gcd(&b), Natural::from(13u32));
    }

    #[test]
    fn coprime_values() {
        let a: Natural = "123456789012345678901234567891".parse().unwrap();
        let b = Natural::from(2u32);
        assert_eq!(a.gcd(&b), Natural::ONE);
    }

    #[test]
    fn gcd_divides_both() {
        let a: Natural = "43252003274489856000".parse().unwrap();
        let b: Natural = "608472288060".parse().unwrap();
        let g = a.gcd(&b);
        assert!((&a % &g).is_zero());
        assert!((&b % &g).is_zero());
    }
}

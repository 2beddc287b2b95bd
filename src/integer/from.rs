//! [`Integer`] conversions and parsing.

use crate::{Error, Integer, Natural, Result};
use core::str::FromStr;

impl From<Natural> for Integer {
    fn from(magnitude: Natural) -> Self {
        Self::from_sign_magnitude(false, magnitude)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Self {
                    Self::from_sign_magnitude(false, Natural::from(value))
                }
            }
        )+
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Self {
                    Self::from_sign_magnitude(
                        value < 0,
                        Natural::from(value.unsigned_abs()),
                    )
                }
            }
        )+
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<&Integer> for u64 {
    type Error = Error;

    fn try_from(value: &Integer) -> Result<u64> {
        if value.is_negative() {
            return Err(Error::Overflow);
        }
        u64::try_from(value.magnitude())
    }
}

impl TryFrom<&Integer> for i64 {
    type Error = Error;

    fn try_from(value: &Integer) -> Result<i64> {
        let magnitude = u64::try_from(value.magnitude())?;
        if value.is_negative() {
            if magnitude > i64::MIN.unsigned_abs() {
                return Err(Error::Overflow);
            }
            Ok((magnitude as i64).wrapping_neg())
        } else {
            i64::try_from(magnitude).map_err(|_| Error::Overflow)
        }
    }
}

impl TryFrom<&Integer> for i128 {
    type Error = Error;

    fn try_from(value: &Integer) -> Result<i128> {
        let magnitude = u128::try_from(value.magnitude())?;
        if value.is_negative() {
            if magnitude > i128::MIN.unsigned_abs() {
                return Err(Error::Overflow);
            }
            Ok((magnitude as i128).wrapping_neg())
        } else {
            i128::try_from(magnitude).map_err(|_| Error::Overflow)
        }
    }
}

/// The [`Natural`] grammar with an optional leading `-`.
impl FromStr for Integer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.strip_prefix('-') {
            Some(rest) => Ok(Self::from_sign_magnitude(true, rest.parse()?)),
            None => Ok(Self::from_sign_magnitude(false, s.parse()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Integer};

    #[test]
    fn extreme_primitives_round_trip() {
        assert_eq!(i64::try_from(&Integer::from(i64::MIN)), Ok(i64::MIN));
        assert_eq!(i64::try_from(&Integer::from(i64::MAX)), Ok(i64::MAX));
        assert_eq!(i128::try_from(&Integer::from(i128::MIN)), Ok(i128::MIN));
        assert_eq!(u64::try_from(&Integer::from(u64::MAX)), Ok(u64::MAX));
    }

    #[test]
    fn out_of_range_narrowing() {
        let too_big = Integer::from(i64::MAX) + Integer::ONE;
        assert_eq!(i64::try_from(&too_big), Err(Error::Overflow));

        let too_small = Integer::from(i64::MIN) - Integer::ONE;
        assert_eq!(i64::try_from(&too_small), Err(Error::Overflow));

        assert_eq!(u64::try_from(&Integer::from(-1)), Err(Error::Overflow));
    }

    #[test]
    fn parses_signed_strings() {
        assert_eq!("-1313".parse::<Integer>().unwrap(), Integer::from(-1313));
        assert_eq!("1313".parse::<Integer>().unwrap(), Integer::from(1313));
        assert_eq!("-0x10".parse::<Integer>().unwrap(), Integer::from(-16));
        assert_eq!("-0".parse::<Integer>().unwrap(), Integer::ZERO);
    }

    #[test]
    fn rejects_bare_minus() {
        assert_eq!("-".parse::<Integer>(), Err(Error::InvalidArgument));
    }
}

//! [`Rational`] construction and parsing.

use crate::{Error, Integer, Natural, Rational, Result};
use core::str::FromStr;

impl Rational {
    /// Construct `numerator / denominator`, failing with
    /// [`Error::DivideByZero`] for a zero denominator.
    ///
    /// Both arguments go through [`Integer`], so a negative denominator is
    /// accepted; its sign folds into the numerator and the stored
    /// denominator stays positive.
    pub fn new(numerator: impl Into<Integer>, denominator: impl Into<Integer>) -> Result<Self> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(Error::DivideByZero);
        }

        let negative = numerator.is_negative() != denominator.is_negative();
        Ok(Self::from_parts(
            Integer::from_sign_magnitude(negative, numerator.abs()),
            denominator.abs(),
        ))
    }
}

impl From<Integer> for Rational {
    fn from(numerator: Integer) -> Self {
        Self {
            numerator,
            denominator: Natural::ONE,
        }
    }
}

impl From<Natural> for Rational {
    fn from(value: Natural) -> Self {
        Self::from(Integer::from(value))
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Self::from(Integer::from(value))
                }
            }
        )+
    };
}

impl_from_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Parses `numerator/denominator`, where both halves follow the full
/// [`Integer`] grammar (sign, base prefix, digit checks), or a bare
/// [`Integer`] for a whole number. A zero denominator is
/// [`Error::DivideByZero`].
impl FromStr for Rational {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            None => Ok(Self::from(Integer::from_str(s)?)),
            Some((numerator, denominator)) => {
                let numerator = Integer::from_str(numerator)?;
                let denominator = Integer::from_str(denominator)?;
                Self::new(numerator, denominator)
            }
        }
    }
}

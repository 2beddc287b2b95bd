//! [`Natural`] conversions and parsing.

use crate::{digits, Error, Limb, Natural, Result, Word};
use core::str::FromStr;

impl Natural {
    /// Construct from a single limb.
    pub(crate) fn from_limb(limb: Limb) -> Self {
        let mut res = Self::ZERO;
        if !limb.is_zero() {
            res.buf_mut()[0] = limb;
            res.set_len(1);
        }
        res
    }

    fn from_u128(mut value: u128) -> Self {
        let mut res = Self::ZERO;
        let mut nlimbs = 0;
        while value != 0 {
            res.buf_mut()[nlimbs] = Limb(value as Word);
            nlimbs += 1;
            value >>= Limb::BITS;
        }
        res.set_len(nlimbs);
        res
    }
}

impl From<u8> for Natural {
    fn from(value: u8) -> Self {
        Self::from_limb(Limb(value as Word))
    }
}

impl From<u16> for Natural {
    fn from(value: u16) -> Self {
        Self::from_limb(Limb(value as Word))
    }
}

impl From<u32> for Natural {
    fn from(value: u32) -> Self {
        Self::from_limb(Limb(value as Word))
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Self::from_u128(value as u128)
    }
}

impl From<u128> for Natural {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<usize> for Natural {
    fn from(value: usize) -> Self {
        Self::from_u128(value as u128)
    }
}

impl TryFrom<&Natural> for u64 {
    type Error = Error;

    fn try_from(value: &Natural) -> Result<u64> {
        if value.bits() > u64::BITS {
            return Err(Error::Overflow);
        }

        let mut res = 0u64;
        for (i, limb) in value.digits().iter().enumerate() {
            res |= u64::from(limb.0) << (i as u32 * Limb::BITS);
        }
        Ok(res)
    }
}

impl TryFrom<&Natural> for u128 {
    type Error = Error;

    fn try_from(value: &Natural) -> Result<u128> {
        if value.bits() > u128::BITS {
            return Err(Error::Overflow);
        }

        let mut res = 0u128;
        for (i, limb) in value.digits().iter().enumerate() {
            res |= u128::from(limb.0) << (i as u32 * Limb::BITS);
        }
        Ok(res)
    }
}

/// Parses the C-style integer grammar: a leading `0x`/`0X` selects
/// hexadecimal, a leading `0` octal, anything else decimal. Octal digits
/// `8`/`9`, letters outside the hex range, an empty string and a bare hex
/// prefix are all [`Error::InvalidArgument`].
impl FromStr for Natural {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(Error::InvalidArgument);
        }

        let (base, body) = match bytes {
            [b'0', b'x' | b'X', rest @ ..] => {
                if rest.is_empty() {
                    return Err(Error::InvalidArgument);
                }
                (16u8, rest)
            }
            [b'0', rest @ ..] => (8u8, rest),
            _ => (10u8, bytes),
        };

        let mut res = Natural::ZERO;
        for &c in body {
            let digit = match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' if base == 16 => c - b'a' + 10,
                b'A'..=b'F' if base == 16 => c - b'A' + 10,
                _ => return Err(Error::InvalidArgument),
            };
            if digit >= base {
                return Err(Error::InvalidArgument);
            }

            // res = res * base + digit, in place.
            let len = res.nlimbs();
            res.expand(len + 1);
            let len = digits::mul_limb_assign(res.buf_mut(), len, Limb(base as Word));
            let len = digits::add_limb_assign(res.buf_mut(), len, Limb(digit as Word));
            res.set_len(len);
        }
        Ok(res)
    }
}

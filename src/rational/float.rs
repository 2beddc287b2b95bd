//! Exact conversion between [`Rational`] and IEEE-754 binary64.
//!
//! All bit-level work goes through [`f64::to_bits`]/[`f64::from_bits`] and
//! shifts, so the code is independent of host byte order. Every finite
//! double is a dyadic rational, which makes the conversion from `f64` exact
//! and the round trip bit-for-bit.

use crate::{Error, Integer, Natural, Rational, Result};

/// Bits in the stored significand (the hidden bit is not stored).
const SIG_BITS: u32 = 52;
/// The implicit leading bit of a normal value.
const HIDDEN_BIT: u64 = 1 << SIG_BITS;
/// Mask for the stored significand.
const SIG_MASK: u64 = HIDDEN_BIT - 1;
/// Mask for the biased exponent field.
const EXP_MASK: u64 = 0x7ff;
/// The exponent bias.
const EXP_BIAS: i64 = 1023;
/// Smallest unbiased exponent of a normal value.
const EXP_MIN: i64 = -1022;

/// Rejects NaN and the infinities with [`Error::NotANumber`]; every finite
/// value converts exactly.
impl TryFrom<f64> for Rational {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        let bits = value.to_bits();
        let negative = (bits >> 63) == 1;
        let biased = ((bits >> SIG_BITS) as i64) & (EXP_MASK as i64);
        let mut significand = bits & SIG_MASK;

        if biased == EXP_MASK as i64 {
            return Err(Error::NotANumber);
        }

        // A non-zero exponent field means a normal value with the hidden
        // bit set; zero means a subnormal (or zero itself) anchored at the
        // minimum exponent.
        let exponent = if biased != 0 {
            significand |= HIDDEN_BIT;
            biased - EXP_BIAS - SIG_BITS as i64
        } else {
            EXP_MIN - SIG_BITS as i64
        };

        let numerator = Integer::from_sign_magnitude(negative, Natural::from(significand));

        // A negative exponent scales the denominator up; a non-negative one
        // scales the numerator.
        Ok(if exponent < 0 {
            Self::from_parts(numerator, &Natural::ONE << (-exponent) as u32)
        } else {
            Self::from(&numerator << exponent as u32)
        })
    }
}

impl Rational {
    /// Convert to the nearest-toward-zero binary64 value.
    ///
    /// Fails with [`Error::Overflow`] when the magnitude exceeds the largest
    /// finite double and with [`Error::Underflow`] when it is smaller than
    /// the smallest subnormal. Values below the normal range are encoded as
    /// subnormals.
    pub fn to_f64(&self) -> Result<f64> {
        if self.is_zero() {
            return Ok(0.0);
        }

        let mut n = self.numerator().abs();
        let mut d = self.denominator().clone();
        let mut exponent: i64 = 0;

        // Scale the operands so the integer quotient lands on 53 or 54
        // significant bits: cap the denominator at 52 bits, then stretch or
        // shrink the numerator to 53 bits more than the denominator.
        let mut d_bits = d.bits();
        if d_bits > SIG_BITS {
            let s = d_bits - SIG_BITS;
            d >>= s;
            exponent -= s as i64;
            d_bits = SIG_BITS;
        }

        let n_bits = n.bits();
        if n_bits > d_bits + SIG_BITS + 1 {
            let s = n_bits - (d_bits + SIG_BITS + 1);
            n >>= s;
            exponent += s as i64;
        } else {
            let s = d_bits + SIG_BITS + 1 - n_bits;
            n <<= s;
            exponent -= s as i64;
        }

        let quotient = n.checked_div(&d).expect("denominator is at least one");
        let mut significand = u64::try_from(&quotient).expect("quotient fits 54 bits");

        // 54 significant bits shift down to 53; afterwards the hidden bit
        // sits exactly at bit 52.
        while significand >= HIDDEN_BIT << 1 {
            significand >>= 1;
            exponent += 1;
        }
        debug_assert!(significand >= HIDDEN_BIT);
        exponent += SIG_BITS as i64;

        if exponent > EXP_BIAS {
            return Err(Error::Overflow);
        }

        let encoded = if exponent < EXP_MIN {
            // Below the normal range: shift into a subnormal encoding with
            // a zero exponent field, truncating toward zero.
            let shift = EXP_MIN - exponent;
            let sub = if shift > SIG_BITS as i64 {
                0
            } else {
                significand >> shift
            };
            if sub == 0 {
                return Err(Error::Underflow);
            }
            sub
        } else {
            (significand & SIG_MASK) | ((exponent + EXP_BIAS) as u64) << SIG_BITS
        };

        let sign = (self.is_negative() as u64) << 63;
        Ok(f64::from_bits(sign | encoded))
    }
}

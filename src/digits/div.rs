//! Digit array division.

use super::{bits, cmp, mul_limb, shl_assign, shr_assign, sub_assign, trimmed_len};
use crate::{Limb, WideWord, Word};
use alloc::vec;
use core::cmp::Ordering;

/// `res = a / v`, returning the quotient length and the remainder, for a
/// single-limb divisor `v != 0`.
///
/// Long division from the most significant limb down: the running remainder
/// is promoted into the high half of a wide accumulator at each step.
pub(crate) fn div_rem_limb(res: &mut [Limb], a: &[Limb], v: Limb) -> (usize, Limb) {
    debug_assert!(!v.is_zero());

    let mut rem = Limb::ZERO;
    for i in (0..a.len()).rev() {
        let (quo, r) = rem.div_rem_wide(a[i], v);
        res[i] = quo;
        rem = r;
    }

    (trimmed_len(res, a.len()), rem)
}

/// `buf[..len] /= v`, in place, returning the quotient length and the
/// remainder. The downward walk reads each digit before overwriting it.
pub(crate) fn div_rem_limb_assign(buf: &mut [Limb], len: usize, v: Limb) -> (usize, Limb) {
    debug_assert!(!v.is_zero());

    let mut rem = Limb::ZERO;
    for i in (0..len).rev() {
        let (quo, r) = rem.div_rem_wide(buf[i], v);
        buf[i] = quo;
        rem = r;
    }

    (trimmed_len(buf, len), rem)
}

/// Schoolbook division of digit arrays: computes `a / b` into `quotient` and
/// `a % b` into `remainder`, returning both logical lengths.
///
/// Preconditions: `|b| >= 2` (single-limb divisors take the fast path
/// above), `a >= b`, and both inputs normalized per the kernel contract.
/// `quotient` must hold `|a| - |b| + 1` limbs and `remainder` `|a| + 1`
/// limbs; neither may overlap an input. Two scratch buffers sized from the
/// operand lengths are allocated per call: the shifted divisor and the
/// shifted-product subtrahend.
pub(crate) fn div_rem(
    quotient: &mut [Limb],
    remainder: &mut [Limb],
    a: &[Limb],
    b: &[Limb],
) -> (usize, usize) {
    debug_assert!(b.len() >= 2);
    debug_assert!(cmp(a, b) != Ordering::Less);

    let q_capacity = a.len() - b.len() + 1;
    quotient[..q_capacity].fill(Limb::ZERO);

    // Normalize so the divisor's top limb has its high bit set; quotient
    // digit estimates from the top limb are then off by at most two.
    let shift = (Limb::BITS - bits(b) % Limb::BITS) % Limb::BITS;

    remainder[..a.len()].copy_from_slice(a);
    let mut rem_len = shl_assign(remainder, a.len(), 0, shift);

    let mut divisor = vec![Limb::ZERO; b.len()];
    divisor[..b.len()].copy_from_slice(b);
    let divisor_len = shl_assign(&mut divisor, b.len(), 0, shift);
    debug_assert_eq!(divisor_len, b.len());
    let divisor = &divisor[..divisor_len];
    let top = divisor[divisor_len - 1];

    let mut t1 = vec![Limb::ZERO; a.len() + 1];

    loop {
        let i = rem_len - 1;
        let d_hi = remainder[i];

        if d_hi >= top {
            // The next quotient digit is probably 1 at position
            // `i - |divisor| + 1`, but the lower divisor limbs can still
            // outweigh the remainder; test with the full divisor.
            t1[..divisor_len].copy_from_slice(divisor);
            let shifted_len = shl_assign(&mut t1, divisor_len, i + 1 - divisor_len, 0);
            if cmp(&t1[..shifted_len], &remainder[..rem_len]) != Ordering::Greater {
                quotient[i + 1 - divisor_len] = Limb::ONE;
                rem_len = sub_assign(remainder, rem_len, &t1[..shifted_len]);
                if cmp(&remainder[..rem_len], divisor) == Ordering::Less {
                    break;
                }
                continue;
            }
        }

        // Estimate the digit at position `i - |divisor|`. When the top
        // remainder limb saturates the top divisor limb the digit is within
        // one of the maximum; otherwise estimate from the two most
        // significant remainder limbs over the top divisor limb.
        let mut q = if d_hi >= top {
            Limb::MAX
        } else {
            let d = ((d_hi.0 as WideWord) << Word::BITS) | (remainder[i - 1].0 as WideWord);
            Limb((d / (top.0 as WideWord)) as Word)
        };

        let prod_len = mul_limb(&mut t1, divisor, q);
        let mut t1_len = shl_assign(&mut t1, prod_len, i - divisor_len, 0);

        // The estimate can be high; with a normalized divisor it is over by
        // at most two, so this loop runs at most twice.
        while cmp(&t1[..t1_len], &remainder[..rem_len]) == Ordering::Greater {
            q = Limb(q.0 - 1);
            let prod_len = mul_limb(&mut t1, divisor, q);
            t1_len = shl_assign(&mut t1, prod_len, i - divisor_len, 0);
        }

        quotient[i - divisor_len] = q;
        rem_len = sub_assign(remainder, rem_len, &t1[..t1_len]);
        if cmp(&remainder[..rem_len], divisor) == Ordering::Less {
            break;
        }
    }

    let q_len = trimmed_len(quotient, q_capacity);
    if rem_len > 0 {
        rem_len = shr_assign(remainder, rem_len, 0, shift);
    }

    (q_len, rem_len)
}

#[cfg(test)]
mod tests {
    use super::{div_rem, div_rem_limb};
    use crate::Limb;

    #[test]
    fn limb_divisor() {
        let mut res = [Limb::ZERO; 2];
        let (len, rem) = div_rem_limb(&mut res, &[Limb(1), Limb(1)], Limb(2));
        // 2^W + 1 = 2 * 2^(W-1) + 1
        assert_eq!(len, 1);
        assert_eq!(res[0], Limb(1 << (Limb::BITS - 1)));
        assert_eq!(rem, Limb::ONE);
    }

    #[test]
    fn equal_operands() {
        let a = [Limb(7), Limb(9)];
        let mut quotient = [Limb::ZERO; 1];
        let mut remainder = [Limb::ZERO; 3];
        let (q_len, r_len) = div_rem(&mut quotient, &mut remainder, &a, &a);
        assert_eq!(q_len, 1);
        assert_eq!(quotient[0], Limb::ONE);
        assert_eq!(r_len, 0);
    }

    #[test]
    fn max_quotient_digit() {
        // ((2^W - 1) * d) / d = 2^W - 1 exercises the saturated-digit path.
        let d = [Limb(3), Limb(4)];
        let mut product = [Limb::ZERO; 3];
        let p_len = crate::digits::mul_limb(&mut product, &d, Limb::MAX);

        let mut quotient = [Limb::ZERO; 2];
        let mut remainder = [Limb::ZERO; 4];
        let (q_len, r_len) = div_rem(&mut quotient, &mut remainder, &product[..p_len], &d);
        assert_eq!(q_len, 1);
        assert_eq!(quotient[0], Limb::MAX);
        assert_eq!(r_len, 0);
    }

    #[test]
    fn estimate_two_over_is_corrected() {
        // Knuth 4.3.1 worst case scaled to the limb width: the two-limb
        // estimate comes out two above the true digit.
        let half = Limb(1 << (Limb::BITS - 1));
        let b = [Limb::MAX, half];
        let a = [Limb(0), Limb(Limb::MAX.0 - 2), Limb(half.0 - 1)];

        let mut quotient = [Limb::ZERO; 2];
        let mut remainder = [Limb::ZERO; 4];
        let (q_len, r_len) = div_rem(&mut quotient, &mut remainder, &a, &b);
        assert_eq!(q_len, 1);
        assert_eq!(quotient[0], Limb(Limb::MAX.0 - 2));
        assert_eq!(&remainder[..r_len], &[Limb(Limb::MAX.0 - 2), half]);
    }

    #[test]
    fn quotient_and_remainder_reconstruct_the_dividend() {
        let a = [Limb(0x1234), Limb(0x5678), Limb(0x9abc)];
        let b = [Limb(0xff), Limb(0x11)];

        let mut quotient = [Limb::ZERO; 2];
        let mut remainder = [Limb::ZERO; 4];
        let (q_len, r_len) = div_rem(&mut quotient, &mut remainder, &a, &b);

        // a == q * b + r
        let mut check = [Limb::ZERO; 4];
        let c_len = crate::digits::mul(&mut check, &quotient[..q_len], &b);
        let c_len = crate::digits::add_assign(&mut check, c_len, &remainder[..r_len]);
        assert_eq!(&check[..c_len], &a[..]);
        assert_eq!(
            crate::digits::cmp(&remainder[..r_len], &b),
            core::cmp::Ordering::Less
        );
    }
}

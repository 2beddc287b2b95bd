//! Digit array left shift.

use crate::Limb;

/// `buf[..len] <<= digit_count * W + bit_count`, in place,
/// with `bit_count < W`.
///
/// Fills from the top down so the source digits are still intact when they
/// are read; this is what makes the in-place form safe. `buf` must hold
/// `len + digit_count` limbs, plus one more when `bit_count` is non-zero
/// (the top limb's high bits can spill over).
pub(crate) fn shl_assign(
    buf: &mut [Limb],
    len: usize,
    digit_count: usize,
    bit_count: u32,
) -> usize {
    debug_assert!(bit_count < Limb::BITS);
    if len == 0 {
        return 0;
    }

    // A pure word shift is a reverse copy.
    if bit_count == 0 {
        buf.copy_within(0..len, digit_count);
        buf[..digit_count].fill(Limb::ZERO);
        return len + digit_count;
    }

    let inv = Limb::BITS - bit_count;
    let mut res_len = len + digit_count;

    let spill = Limb(buf[len - 1].0 >> inv);
    if !spill.is_zero() {
        buf[res_len] = spill;
        res_len += 1;
    }

    for i in (1..len).rev() {
        buf[i + digit_count] = Limb((buf[i].0 << bit_count) | (buf[i - 1].0 >> inv));
    }
    buf[digit_count] = Limb(buf[0].0 << bit_count);
    buf[..digit_count].fill(Limb::ZERO);

    res_len
}

/// `res = a << (digit_count * W + bit_count)`, with `bit_count < W`.
///
/// `res` must hold `|a| + digit_count` limbs, plus one more when
/// `bit_count` is non-zero, and may not overlap `a`; use [`shl_assign`] to
/// shift within one buffer.
pub(crate) fn shl(res: &mut [Limb], a: &[Limb], digit_count: usize, bit_count: u32) -> usize {
    res[..a.len()].copy_from_slice(a);
    shl_assign(res, a.len(), digit_count, bit_count)
}

#[cfg(test)]
mod tests {
    use super::{shl, shl_assign};
    use crate::Limb;

    #[test]
    fn word_shift_moves_digits() {
        let mut res = [Limb::ZERO; 4];
        let len = shl(&mut res, &[Limb(1), Limb(2)], 2, 0);
        assert_eq!(len, 4);
        assert_eq!(res, [Limb(0), Limb(0), Limb(1), Limb(2)]);
    }

    #[test]
    fn bit_shift_spills_into_a_new_limb() {
        let mut buf = [Limb::MAX, Limb::ZERO];
        let len = shl_assign(&mut buf, 1, 0, 1);
        assert_eq!(len, 2);
        assert_eq!(buf, [Limb(Limb::MAX.0 - 1), Limb(1)]);
    }

    #[test]
    fn bit_shift_without_spill() {
        let mut buf = [Limb(1), Limb::ZERO];
        let len = shl_assign(&mut buf, 1, 0, 3);
        assert_eq!(len, 1);
        assert_eq!(buf[0], Limb(8));
    }

    #[test]
    fn mixed_digit_and_bit_shift() {
        let mut buf = [Limb(0b101), Limb::ZERO, Limb::ZERO];
        let len = shl_assign(&mut buf, 1, 1, 2);
        assert_eq!(len, 2);
        assert_eq!(&buf[..len], &[Limb(0), Limb(0b10100)]);
    }
}

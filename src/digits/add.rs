//! Digit array addition.

use crate::Limb;

/// `res = a + b`. Operand order does not matter.
///
/// `res` must hold `max(|a|, |b|) + 1` limbs. Walks the shorter operand,
/// then carries through the longer one.
pub(crate) fn add(res: &mut [Limb], a: &[Limb], b: &[Limb]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut carry = Limb::ZERO;
    for i in 0..short.len() {
        let (sum, c) = long[i].carrying_add(short[i], carry);
        res[i] = sum;
        carry = c;
    }

    for i in short.len()..long.len() {
        let (sum, c) = long[i].carrying_add(Limb::ZERO, carry);
        res[i] = sum;
        carry = c;
    }

    let mut len = long.len();
    if !carry.is_zero() {
        res[len] = carry;
        len += 1;
    }
    len
}

/// `res = a + v` for a single limb `v`. `res` must hold `|a| + 1` limbs.
pub(crate) fn add_limb(res: &mut [Limb], a: &[Limb], v: Limb) -> usize {
    if v.is_zero() {
        res[..a.len()].copy_from_slice(a);
        return a.len();
    }
    if a.is_empty() {
        res[0] = v;
        return 1;
    }

    let (sum, mut carry) = a[0].carrying_add(v, Limb::ZERO);
    res[0] = sum;
    for i in 1..a.len() {
        let (sum, c) = a[i].carrying_add(Limb::ZERO, carry);
        res[i] = sum;
        carry = c;
    }

    let mut len = a.len();
    if !carry.is_zero() {
        res[len] = carry;
        len += 1;
    }
    len
}

/// `buf[..len] += b`, in place. `buf` must hold `max(len, |b|) + 1` limbs.
pub(crate) fn add_assign(buf: &mut [Limb], len: usize, b: &[Limb]) -> usize {
    let n = len.max(b.len());

    let mut carry = Limb::ZERO;
    for i in 0..n {
        let x = if i < len { buf[i] } else { Limb::ZERO };
        let y = b.get(i).copied().unwrap_or(Limb::ZERO);
        let (sum, c) = x.carrying_add(y, carry);
        buf[i] = sum;
        carry = c;
    }

    let mut out = n;
    if !carry.is_zero() {
        buf[out] = carry;
        out += 1;
    }
    out
}

/// `buf[..len] += v`, in place. `buf` must hold `len + 1` limbs.
pub(crate) fn add_limb_assign(buf: &mut [Limb], len: usize, v: Limb) -> usize {
    if v.is_zero() {
        return len;
    }
    if len == 0 {
        buf[0] = v;
        return 1;
    }

    let (sum, mut carry) = buf[0].carrying_add(v, Limb::ZERO);
    buf[0] = sum;
    let mut i = 1;
    while i < len && !carry.is_zero() {
        let (sum, c) = buf[i].carrying_add(Limb::ZERO, carry);
        buf[i] = sum;
        carry = c;
        i += 1;
    }

    if !carry.is_zero() {
        buf[len] = carry;
        return len + 1;
    }
    len
}

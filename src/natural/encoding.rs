//! [`Natural`] formatting.
//!
//! Digits are produced chunk-wise: the value is divided repeatedly by the
//! largest power of the base that fits in one limb, so the expensive
//! division runs once per limb-sized chunk rather than once per character.
//! The alternate flag (`{:#x}` and friends) renders the C-style base prefix
//! the string parser accepts: `0` for octal, `0x`/`0X` for hex.

use crate::{digits, Limb, Natural, Word};
use alloc::vec::Vec;
use core::fmt;

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// A formatting base: the radix, the number of digits per chunk and the
/// chunk divisor `radix^digits`, which is the largest such power
/// representable in a [`Word`].
struct Radix {
    base: Word,
    chunk_digits: usize,
    chunk: Word,
}

#[cfg(target_pointer_width = "64")]
const DECIMAL: Radix = Radix {
    base: 10,
    chunk_digits: 19,
    chunk: 10_000_000_000_000_000_000,
};
#[cfg(target_pointer_width = "32")]
const DECIMAL: Radix = Radix {
    base: 10,
    chunk_digits: 9,
    chunk: 1_000_000_000,
};

#[cfg(target_pointer_width = "64")]
const OCTAL: Radix = Radix {
    base: 8,
    chunk_digits: 21,
    chunk: 1 << 63,
};
#[cfg(target_pointer_width = "32")]
const OCTAL: Radix = Radix {
    base: 8,
    chunk_digits: 10,
    chunk: 1 << 30,
};

#[cfg(target_pointer_width = "64")]
const HEX: Radix = Radix {
    base: 16,
    chunk_digits: 15,
    chunk: 1 << 60,
};
#[cfg(target_pointer_width = "32")]
const HEX: Radix = Radix {
    base: 16,
    chunk_digits: 7,
    chunk: 1 << 28,
};

impl Natural {
    fn fmt_radix(&self, f: &mut fmt::Formatter<'_>, radix: &Radix, upper: bool) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        // Peel limb-sized chunks off the value, least significant first.
        let mut scratch: Vec<Limb> = self.digits().to_vec();
        let mut len = scratch.len();
        let mut chunks: Vec<Word> = Vec::new();
        while len > 0 {
            let (next_len, rem) = digits::div_rem_limb_assign(&mut scratch, len, Limb(radix.chunk));
            len = next_len;
            chunks.push(rem.0);
        }

        let table = if upper { DIGITS_UPPER } else { DIGITS_LOWER };
        let mut buf = [0u8; 64];
        for (idx, &chunk) in chunks.iter().enumerate().rev() {
            // Only the most significant chunk goes unpadded.
            let width = if idx == chunks.len() - 1 {
                0
            } else {
                radix.chunk_digits
            };
            let s = encode_chunk(chunk, radix.base, table, width, &mut buf);
            f.write_str(s)?;
        }
        Ok(())
    }
}

/// Render one chunk into `buf`, zero-padded to `width` digits (or to the
/// value's own length when `width` is zero), and return it as a string.
fn encode_chunk<'b>(
    mut value: Word,
    base: Word,
    table: &[u8; 16],
    width: usize,
    buf: &'b mut [u8; 64],
) -> &'b str {
    let mut pos = buf.len();
    while value > 0 {
        pos -= 1;
        buf[pos] = table[(value % base) as usize];
        value /= base;
    }
    while buf.len() - pos < width.max(1) {
        pos -= 1;
        buf[pos] = b'0';
    }
    core::str::from_utf8(&buf[pos..]).expect("digits are ASCII")
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, &DECIMAL, false)
    }
}

impl fmt::Octal for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0")?;
        }
        self.fmt_radix(f, &OCTAL, false)
    }
}

impl fmt::LowerHex for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        self.fmt_radix(f, &HEX, false)
    }
}

impl fmt::UpperHex for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0X")?;
        }
        self.fmt_radix(f, &HEX, true)
    }
}

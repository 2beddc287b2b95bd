//! Unbounded non-negative integers.

mod add;
mod cmp;
mod div;
mod encoding;
mod from;
mod gcd;
mod mul;
mod shl;
mod shr;
mod sub;

#[cfg(feature = "rand_core")]
mod rand;

#[cfg(feature = "serde")]
mod serde;

use crate::{digits, Limb};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Number of limbs a [`Natural`] can hold without heap allocation.
const INLINE_LIMBS: usize = 16;

/// An unbounded non-negative integer.
///
/// The value is a little-endian array of [`Limb`]s with no leading-zero
/// limbs; zero is the empty array. Values of up to `INLINE_LIMBS` limbs
/// (1024 bits on 64-bit targets) are stored inline and never allocate.
///
/// Every arithmetic operation sizes its result for the worst case up front,
/// dispatches into the digit-array kernel (choosing a single-limb fast path
/// where one operand is small) and records the logical length the kernel
/// returns.
///
/// Operations that can fail — subtraction below zero, division by zero,
/// narrowing conversions — have checked forms returning
/// [`Result`][`crate::Result`]; the operator impls panic on the same
/// conditions.
pub struct Natural {
    /// Logical number of limbs; `storage` is meaningful only below this.
    nlimbs: usize,
    storage: Storage,
}

/// Backing storage for the limbs of a [`Natural`].
///
/// Which variant is in use is an implementation detail and never observable
/// through the public API. Moving a `Heap` value transfers the allocation;
/// moving an `Inline` value copies the fixed array. Dropping a `Heap` value
/// releases its allocation.
#[derive(Clone)]
enum Storage {
    Inline([Limb; INLINE_LIMBS]),
    Heap(Vec<Limb>),
}

impl Natural {
    /// The value `0`.
    pub const ZERO: Self = Self {
        nlimbs: 0,
        storage: Storage::Inline([Limb::ZERO; INLINE_LIMBS]),
    };

    /// The value `1`.
    pub const ONE: Self = {
        let mut limbs = [Limb::ZERO; INLINE_LIMBS];
        limbs[0] = Limb::ONE;
        Self {
            nlimbs: 1,
            storage: Storage::Inline(limbs),
        }
    };

    /// Create a zero-length value whose buffer can hold `capacity` limbs.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        if capacity <= INLINE_LIMBS {
            Self::ZERO
        } else {
            Self {
                nlimbs: 0,
                storage: Storage::Heap(vec![Limb::ZERO; capacity]),
            }
        }
    }

    /// The logical digits of this value, obeying the no-leading-zero
    /// invariant.
    #[inline]
    pub(crate) fn digits(&self) -> &[Limb] {
        match &self.storage {
            Storage::Inline(limbs) => &limbs[..self.nlimbs],
            Storage::Heap(limbs) => &limbs[..self.nlimbs],
        }
    }

    /// The full backing buffer, for the kernel to write into.
    #[inline]
    pub(crate) fn buf_mut(&mut self) -> &mut [Limb] {
        match &mut self.storage {
            Storage::Inline(limbs) => limbs,
            Storage::Heap(limbs) => limbs,
        }
    }

    /// Record the logical length returned by a kernel call.
    #[inline]
    pub(crate) fn set_len(&mut self, nlimbs: usize) {
        debug_assert!(nlimbs <= self.capacity());
        self.nlimbs = nlimbs;
    }

    #[inline]
    pub(crate) fn nlimbs(&self) -> usize {
        self.nlimbs
    }

    fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Inline(_) => INLINE_LIMBS,
            Storage::Heap(limbs) => limbs.len(),
        }
    }

    /// Grow the backing buffer to hold `capacity` limbs, copying the current
    /// digits forward. Used by the in-place mutators.
    pub(crate) fn expand(&mut self, capacity: usize) {
        if capacity <= self.capacity() {
            return;
        }
        let mut limbs = vec![Limb::ZERO; capacity];
        limbs[..self.nlimbs].copy_from_slice(self.digits());
        self.storage = Storage::Heap(limbs);
    }

    /// Is this value zero?
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.nlimbs == 0
    }

    /// The number of bits needed to represent this value; zero needs none.
    #[must_use]
    pub fn bits(&self) -> u32 {
        digits::bits(self.digits())
    }
}

/// Cloning re-compacts: a value that fits the inline buffer is cloned into
/// it, regardless of how the source is stored.
impl Clone for Natural {
    fn clone(&self) -> Self {
        let mut res = Self::with_capacity(self.nlimbs);
        res.buf_mut()[..self.nlimbs].copy_from_slice(self.digits());
        res.nlimbs = self.nlimbs;
        res
    }
}

impl Default for Natural {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({self})")
    }
}

impl num_traits::Zero for Natural {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }
}

impl num_traits::One for Natural {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self.digits() == [Limb::ONE]
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl zeroize::Zeroize for Natural {
    fn zeroize(&mut self) {
        use zeroize::Zeroize;

        match &mut self.storage {
            Storage::Inline(limbs) => limbs.zeroize(),
            Storage::Heap(limbs) => limbs.zeroize(),
        }
        self.nlimbs = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{Natural, INLINE_LIMBS};
    use crate::Limb;

    #[test]
    fn consts() {
        assert!(Natural::ZERO.is_zero());
        assert_eq!(Natural::ONE.digits(), [Limb::ONE]);
    }

    #[test]
    fn small_values_stay_inline() {
        let small = Natural::with_capacity(INLINE_LIMBS);
        assert!(matches!(small.storage, super::Storage::Inline(_)));

        let large = Natural::with_capacity(INLINE_LIMBS + 1);
        assert!(matches!(large.storage, super::Storage::Heap(_)));
    }

    #[test]
    fn clone_recompacts() {
        let mut wide = Natural::with_capacity(INLINE_LIMBS + 4);
        wide.buf_mut()[0] = Limb(7);
        wide.set_len(1);

        let clone = wide.clone();
        assert!(matches!(clone.storage, super::Storage::Inline(_)));
        assert_eq!(clone, wide);
    }

    #[test]
    fn expand_preserves_digits() {
        let mut n = Natural::from(5u32);
        n.expand(INLINE_LIMBS * 2);
        assert_eq!(n, Natural::from(5u32));
        assert!(matches!(n.storage, super::Storage::Heap(_)));
    }

    #[test]
    fn bit_count() {
        assert_eq!(Natural::ZERO.bits(), 0);
        assert_eq!(Natural::ONE.bits(), 1);
        assert_eq!(Natural::from(0b10110u32).bits(), 5);
        assert_eq!((&Natural::ONE << 300).bits(), 301);
    }
}

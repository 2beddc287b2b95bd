//! Conversions from primitive integers to a limb.

use crate::{Limb, Word};

impl Limb {
    /// Create a [`Limb`] from a `u8` (const-friendly).
    #[must_use]
    pub const fn from_u8(n: u8) -> Self {
        Limb(n as Word)
    }

    /// Create a [`Limb`] from a `u16` (const-friendly).
    #[must_use]
    pub const fn from_u16(n: u16) -> Self {
        Limb(n as Word)
    }

    /// Create a [`Limb`] from a `u32` (const-friendly).
    #[must_use]
    pub const fn from_u32(n: u32) -> Self {
        Limb(n as Word)
    }

    /// Create a [`Limb`] from a `u64` (const-friendly).
    #[cfg(target_pointer_width = "64")]
    #[must_use]
    pub const fn from_u64(n: u64) -> Self {
        Limb(n)
    }
}

impl From<u8> for Limb {
    #[inline]
    fn from(n: u8) -> Limb {
        Limb::from_u8(n)
    }
}

impl From<u16> for Limb {
    #[inline]
    fn from(n: u16) -> Limb {
        Limb::from_u16(n)
    }
}

impl From<u32> for Limb {
    #[inline]
    fn from(n: u32) -> Limb {
        Limb::from_u32(n)
    }
}

#[cfg(target_pointer_width = "64")]
impl From<u64> for Limb {
    #[inline]
    fn from(n: u64) -> Limb {
        Limb::from_u64(n)
    }
}

impl From<Limb> for Word {
    #[inline]
    fn from(limb: Limb) -> Word {
        limb.0
    }
}

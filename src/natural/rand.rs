//! Random [`Natural`] generation.

use crate::{digits, Limb, Natural, Word};
use rand_core::RngCore;

#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl Natural {
    /// Sample a uniformly random value below `2^bits`.
    pub fn random_bits(rng: &mut impl RngCore, bits: u32) -> Self {
        if bits == 0 {
            return Self::ZERO;
        }

        let nlimbs = bits.div_ceil(Limb::BITS) as usize;
        let mut res = Self::with_capacity(nlimbs);

        let buf = res.buf_mut();
        for limb in buf[..nlimbs].iter_mut() {
            *limb = Limb(rng.next_u64() as Word);
        }

        let excess = nlimbs as u32 * Limb::BITS - bits;
        if excess > 0 {
            buf[nlimbs - 1] = Limb(buf[nlimbs - 1].0 >> excess);
        }

        let len = digits::trimmed_len(buf, nlimbs);
        res.set_len(len);
        res
    }
}

#[cfg(test)]
mod tests {
    use crate::Natural;
    use rand_core::SeedableRng;

    #[test]
    fn stays_below_the_bound() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
        for bits in [1u32, 7, 64, 65, 1000] {
            for _ in 0..50 {
                let n = Natural::random_bits(&mut rng, bits);
                assert!(n.bits() <= bits);
            }
        }
    }

    #[test]
    fn zero_bits_is_zero() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(2);
        assert!(Natural::random_bits(&mut rng, 0).is_zero());
    }
}

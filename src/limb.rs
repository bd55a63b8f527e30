use alloc::vec::Vec;
use num::BigUint;
use num::ToPrimitive;

/// Limb widths a constant table can be encoded for.
///
/// Both widths represent the same integers; only the packing differs. The
/// base is kept below the word width so a schoolbook multiplication can
/// accumulate partial products before an explicit carry propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimbWidth {
    /// 29-bit limbs in 32-bit words, 18 limbs.
    Narrow,
    /// 60-bit limbs in 64-bit words, 9 limbs.
    Wide,
}

impl LimbWidth {
    /// Significant bits per limb.
    pub const fn base_bits(self) -> u32 {
        match self {
            LimbWidth::Narrow => 29,
            LimbWidth::Wide => 60,
        }
    }

    /// Fixed limb count; base_bits * nlimbs covers 512 bits with margin.
    pub const fn nlimbs(self) -> usize {
        match self {
            LimbWidth::Narrow => 18,
            LimbWidth::Wide => 9,
        }
    }

    /// Native word size the limbs are stored in.
    pub const fn word_bits(self) -> u32 {
        match self {
            LimbWidth::Narrow => 32,
            LimbWidth::Wide => 64,
        }
    }

    /// Spare bits per word, available for carries during accumulation.
    pub const fn headroom(self) -> u32 {
        self.word_bits() - self.base_bits()
    }

    pub const fn limb_mask(self) -> u64 {
        (1 << self.base_bits()) - 1
    }

    /// Splits `x` into nlimbs() limbs, least-significant first.
    ///
    /// Caller contract: `x < 2^(base_bits * nlimbs)`.
    pub fn decode(self, x: &BigUint) -> Vec<u64> {
        assert!(
            x.bits() <= self.base_bits() as u64 * self.nlimbs() as u64,
            "value does not fit the limb representation"
        );
        let mask = BigUint::from(self.limb_mask());
        let mut v = x.clone();
        let mut limbs = Vec::with_capacity(self.nlimbs());
        for _ in 0..self.nlimbs() {
            limbs.push((&v & &mask).to_u64().unwrap());
            v >>= self.base_bits();
        }
        limbs
    }

    /// Inverse of [`decode`](Self::decode): encode(decode(x)) == x.
    ///
    /// Caller contract: exactly nlimbs() limbs, each below 2^base_bits.
    pub fn encode(self, limbs: &[u64]) -> BigUint {
        assert_eq!(limbs.len(), self.nlimbs());
        let mut acc = BigUint::default();
        for &limb in limbs.iter().rev() {
            assert!(limb <= self.limb_mask(), "limb exceeds the base");
            acc <<= self.base_bits();
            acc += limb;
        }
        acc
    }
}

//! Fixed-width 256-bit unsigned integers.
//!
//! Limbs are stored least significant first. Byte conversions are big-endian,
//! matching how scalars and coordinates are serialized on the wire.

use core::cmp::Ordering;

/// A 256-bit unsigned integer as four 64-bit limbs (little-endian limb order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct U256(pub(crate) [u64; 4]);

impl U256 {
    pub const ZERO: U256 = U256([0, 0, 0, 0]);
    pub const ONE: U256 = U256([1, 0, 0, 0]);

    /// Build from limbs, least significant first.
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        U256(limbs)
    }

    pub const fn from_u64(value: u64) -> Self {
        U256([value, 0, 0, 0])
    }

    pub const fn from_u128(value: u128) -> Self {
        U256([value as u64, (value >> 64) as u64, 0, 0])
    }

    /// Interpret 32 bytes as a big-endian integer.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            // Limb 0 comes from the last 8 bytes
            let start = 32 - (i + 1) * 8;
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&bytes[start..start + 8]);
            *limb = u64::from_be_bytes(chunk);
        }
        U256(limbs)
    }

    /// Serialize as 32 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (i, limb) in self.0.iter().enumerate() {
            let start = 32 - (i + 1) * 8;
            bytes[start..start + 8].copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// Value of bit `index` (0 = least significant). Bits past 255 read as zero.
    pub fn bit(&self, index: usize) -> bool {
        if index >= 256 {
            return false;
        }
        (self.0[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Number of significant bits (0 for zero).
    pub fn bits(&self) -> usize {
        for i in (0..4).rev() {
            if self.0[i] != 0 {
                return i * 64 + (64 - self.0[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// Add, returning the wrapped sum and whether it overflowed 2^256.
    pub fn overflowing_add(&self, other: &U256) -> (U256, bool) {
        let mut out = [0u64; 4];
        let mut carry = false;
        for i in 0..4 {
            let (sum, c1) = self.0[i].overflowing_add(other.0[i]);
            let (sum, c2) = sum.overflowing_add(carry as u64);
            out[i] = sum;
            carry = c1 || c2;
        }
        (U256(out), carry)
    }

    /// Subtract, returning the wrapped difference and whether it borrowed.
    pub fn overflowing_sub(&self, other: &U256) -> (U256, bool) {
        let mut out = [0u64; 4];
        let mut borrow = false;
        for i in 0..4 {
            let (diff, b1) = self.0[i].overflowing_sub(other.0[i]);
            let (diff, b2) = diff.overflowing_sub(borrow as u64);
            out[i] = diff;
            borrow = b1 || b2;
        }
        (U256(out), borrow)
    }

    pub fn wrapping_add(&self, other: &U256) -> U256 {
        self.overflowing_add(other).0
    }

    pub fn wrapping_sub(&self, other: &U256) -> U256 {
        self.overflowing_sub(other).0
    }

    /// Full 512-bit product as `(low, high)` halves.
    pub fn mul_wide(&self, other: &U256) -> (U256, U256) {
        let mut product = [0u64; 8];
        for i in 0..4 {
            let mut carry: u128 = 0;
            for j in 0..4 {
                let cur = (self.0[i] as u128) * (other.0[j] as u128)
                    + (product[i + j] as u128)
                    + carry;
                product[i + j] = cur as u64;
                carry = cur >> 64;
            }
            product[i + 4] = carry as u64;
        }
        (
            U256([product[0], product[1], product[2], product[3]]),
            U256([product[4], product[5], product[6], product[7]]),
        )
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Most significant limb first
        for i in (0..4).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_be_bytes_round_trip() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let value = U256::from_be_bytes(&bytes);

        assert_eq!(value.0[0], 0x18191A1B1C1D1E1F);
        assert_eq!(value.0[3], 0x0001020304050607);
        assert_eq!(value.to_be_bytes(), bytes);
    }

    #[test]
    fn test_add_carry_propagates() {
        let max = U256([u64::MAX; 4]);
        let (sum, overflow) = max.overflowing_add(&U256::ONE);
        assert!(overflow);
        assert!(sum.is_zero());

        let (sum, overflow) = U256([u64::MAX, 0, 0, 0]).overflowing_add(&U256::ONE);
        assert!(!overflow);
        assert_eq!(sum, U256([0, 1, 0, 0]));
    }

    #[test]
    fn test_sub_borrow_propagates() {
        let (diff, borrow) = U256::ZERO.overflowing_sub(&U256::ONE);
        assert!(borrow);
        assert_eq!(diff, U256([u64::MAX; 4]));

        let (diff, borrow) = U256([0, 1, 0, 0]).overflowing_sub(&U256::ONE);
        assert!(!borrow);
        assert_eq!(diff, U256([u64::MAX, 0, 0, 0]));
    }

    #[test]
    fn test_mul_wide() {
        // (2^256 - 1)^2 = 2^512 - 2^257 + 1
        let max = U256([u64::MAX; 4]);
        let (lo, hi) = max.mul_wide(&max);
        assert_eq!(lo, U256::ONE);
        assert_eq!(hi, U256([u64::MAX - 1, u64::MAX, u64::MAX, u64::MAX]));

        let (lo, hi) = U256::from_u64(6).mul_wide(&U256::from_u64(7));
        assert_eq!(lo, U256::from_u64(42));
        assert!(hi.is_zero());
    }

    #[test]
    fn test_ordering_uses_high_limb_first() {
        let a = U256([u64::MAX, 0, 0, 0]);
        let b = U256([0, 0, 0, 1]);
        assert!(a < b);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_bits() {
        assert_eq!(U256::ZERO.bits(), 0);
        assert_eq!(U256::ONE.bits(), 1);
        assert_eq!(U256([0, 0, 0, 1 << 63]).bits(), 256);
        assert!(U256([0, 0, 0, 1 << 63]).bit(255));
        assert!(!U256::ONE.bit(300));
    }
}

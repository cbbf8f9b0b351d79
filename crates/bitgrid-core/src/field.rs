//! Arithmetic in the secp256k1 base field F_p.
//!
//! p = 2^256 - 2^32 - 977, so any 512-bit product folds back into range with
//! 2^256 ≡ 2^32 + 977 (mod p).

use crate::u256::U256;

/// The field prime p.
pub const P: U256 = U256::from_limbs([
    0xFFFFFFFEFFFFFC2F,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
]);

/// 2^256 - p.
const FOLD: u64 = 0x1000003D1;

/// p - 2, the Fermat inversion exponent.
const INV_EXP: U256 = U256::from_limbs([
    0xFFFFFFFEFFFFFC2D,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
]);

/// (p + 1) / 4. Square roots are a single exponentiation because p ≡ 3 (mod 4).
const SQRT_EXP: U256 = U256::from_limbs([
    0xFFFFFFFFBFFFFF0C,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0x3FFFFFFFFFFFFFFF,
]);

/// An element of F_p, always held in canonical form (< p).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldElement(U256);

impl FieldElement {
    pub const ZERO: FieldElement = FieldElement(U256::ZERO);
    pub const ONE: FieldElement = FieldElement(U256::ONE);

    /// Wrap a value already known to be below p. Only for constants.
    pub(crate) const fn from_u256_unchecked(value: U256) -> Self {
        FieldElement(value)
    }

    /// Wrap a value, rejecting anything that is not a canonical residue.
    pub fn from_u256(value: U256) -> Option<Self> {
        if value < P {
            Some(FieldElement(value))
        } else {
            None
        }
    }

    pub fn from_u64(value: u64) -> Self {
        FieldElement(U256::from_u64(value))
    }

    /// Parse 32 big-endian bytes. Values ≥ p are rejected.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        Self::from_u256(U256::from_be_bytes(bytes))
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    pub fn to_u256(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parity of the canonical representative.
    pub fn is_even(&self) -> bool {
        !self.0.is_odd()
    }

    pub fn add(&self, other: &FieldElement) -> FieldElement {
        let (sum, overflow) = self.0.overflowing_add(&other.0);
        // Both inputs are < p, so at most one subtraction is needed. When the
        // add wrapped, subtracting p modulo 2^256 still lands on the residue.
        if overflow || sum >= P {
            FieldElement(sum.wrapping_sub(&P))
        } else {
            FieldElement(sum)
        }
    }

    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        let (diff, borrow) = self.0.overflowing_sub(&other.0);
        if borrow {
            FieldElement(diff.wrapping_add(&P))
        } else {
            FieldElement(diff)
        }
    }

    pub fn neg(&self) -> FieldElement {
        FieldElement::ZERO.sub(self)
    }

    pub fn double(&self) -> FieldElement {
        self.add(self)
    }

    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        let (lo, hi) = self.0.mul_wide(&other.0);
        reduce_wide(&lo, &hi)
    }

    pub fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// Multiply by a small constant.
    pub fn mul_u64(&self, k: u64) -> FieldElement {
        self.mul(&FieldElement::from_u64(k))
    }

    /// Left-to-right square-and-multiply.
    pub fn pow(&self, exponent: &U256) -> FieldElement {
        let mut result = FieldElement::ONE;
        for i in (0..exponent.bits()).rev() {
            result = result.square();
            if exponent.bit(i) {
                result = result.mul(self);
            }
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem. Zero has none.
    pub fn invert(&self) -> Option<FieldElement> {
        if self.is_zero() {
            return None;
        }
        Some(self.pow(&INV_EXP))
    }

    /// A square root, if one exists. The other root is its negation.
    pub fn sqrt(&self) -> Option<FieldElement> {
        let root = self.pow(&SQRT_EXP);
        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }
}

/// Reduce a 512-bit value `hi * 2^256 + lo` modulo p.
fn reduce_wide(lo: &U256, hi: &U256) -> FieldElement {
    // hi * FOLD spans at most 290 bits: four limbs plus a small top word
    let mut folded = [0u64; 4];
    let mut carry: u128 = 0;
    for i in 0..4 {
        let prod = (hi.0[i] as u128) * (FOLD as u128) + carry;
        folded[i] = prod as u64;
        carry = prod >> 64;
    }

    let (sum, overflow) = lo.overflowing_add(&U256::from_limbs(folded));
    let top = carry as u64 + overflow as u64;

    // Fold the remaining top word once more
    let (mut result, overflow) = sum.overflowing_add(&U256::from_u128(top as u128 * FOLD as u128));
    if overflow {
        // The wrapped value is tiny here, so adding FOLD cannot overflow again
        result = result.wrapping_add(&U256::from_u64(FOLD));
    }

    if result >= P {
        result = result.wrapping_sub(&P);
    }
    FieldElement(result)
}

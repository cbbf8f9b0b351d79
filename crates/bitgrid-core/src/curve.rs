//! secp256k1 group arithmetic: y^2 = x^3 + 7 over F_p.
//!
//! Points are accumulated in Jacobian coordinates (X, Y, Z) representing the
//! affine point (X / Z^2, Y / Z^3). Z = 0 is the point at infinity.

use crate::field::FieldElement;
use crate::u256::U256;

/// Curve coefficient b.
pub const B: u64 = 7;

/// Order n of the group generated by G.
pub const N: U256 = U256::from_limbs([
    0xBFD25E8CD0364141,
    0xBAAEDCE6AF48A03B,
    0xFFFFFFFFFFFFFFFE,
    0xFFFFFFFFFFFFFFFF,
]);

const GX: U256 = U256::from_limbs([
    0x59F2815B16F81798,
    0x029BFCDB2DCE28D9,
    0x55A06295CE870B07,
    0x79BE667EF9DCBBAC,
]);

const GY: U256 = U256::from_limbs([
    0x9C47D08FFB10D4B8,
    0xFD17B448A6855419,
    0x5DA4FBFC0E1108A8,
    0x483ADA7726A3C465,
]);

/// The standard base point G.
pub const GENERATOR: AffinePoint = AffinePoint {
    x: FieldElement::from_u256_unchecked(GX),
    y: FieldElement::from_u256_unchecked(GY),
};

/// A finite point in affine coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffinePoint {
    pub x: FieldElement,
    pub y: FieldElement,
}

impl AffinePoint {
    /// Check y^2 == x^3 + 7.
    pub fn is_on_curve(&self) -> bool {
        self.y.square() == curve_rhs(&self.x)
    }

    pub fn neg(&self) -> AffinePoint {
        AffinePoint { x: self.x, y: self.y.neg() }
    }

    /// Recover the point with the given x-coordinate and y parity.
    pub fn from_x(x: FieldElement, y_is_odd: bool) -> Option<AffinePoint> {
        let y = curve_rhs(&x).sqrt()?;
        let y = if y.is_even() == y_is_odd { y.neg() } else { y };
        Some(AffinePoint { x, y })
    }

    pub fn to_jacobian(&self) -> JacobianPoint {
        JacobianPoint { x: self.x, y: self.y, z: FieldElement::ONE }
    }
}

/// x^3 + 7.
fn curve_rhs(x: &FieldElement) -> FieldElement {
    x.square().mul(x).add(&FieldElement::from_u64(B))
}

/// A point in Jacobian projective coordinates.
#[derive(Debug, Clone, Copy)]
pub struct JacobianPoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl JacobianPoint {
    pub const INFINITY: JacobianPoint = JacobianPoint {
        x: FieldElement::ONE,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Point doubling for a = 0 (dbl-2009-l).
    pub fn double(&self) -> JacobianPoint {
        if self.is_infinity() || self.y.is_zero() {
            return JacobianPoint::INFINITY;
        }

        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        // d = 2 * ((x + b)^2 - a - c)
        let d = self.x.add(&b).square().sub(&a).sub(&c).double();
        let e = a.mul_u64(3);
        let f = e.square();

        let x3 = f.sub(&d.double());
        let y3 = e.mul(&d.sub(&x3)).sub(&c.mul_u64(8));
        let z3 = self.y.mul(&self.z).double();

        JacobianPoint { x: x3, y: y3, z: z3 }
    }

    /// General point addition.
    pub fn add(&self, other: &JacobianPoint) -> JacobianPoint {
        if self.is_infinity() {
            return *other;
        }
        if other.is_infinity() {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.mul(&z2z2);
        let u2 = other.x.mul(&z1z1);
        let s1 = self.y.mul(&z2z2).mul(&other.z);
        let s2 = other.y.mul(&z1z1).mul(&self.z);

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);

        if h.is_zero() {
            // Same x: either the same point or inverses
            return if r.is_zero() {
                self.double()
            } else {
                JacobianPoint::INFINITY
            };
        }

        let hh = h.square();
        let hhh = hh.mul(&h);
        let v = u1.mul(&hh);

        let x3 = r.square().sub(&hhh).sub(&v.double());
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&hhh));
        let z3 = self.z.mul(&other.z).mul(&h);

        JacobianPoint { x: x3, y: y3, z: z3 }
    }

    /// Convert back to affine coordinates. Infinity has no affine form.
    pub fn to_affine(&self) -> Option<AffinePoint> {
        let z_inv = self.z.invert()?;
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2.mul(&z_inv);
        Some(AffinePoint {
            x: self.x.mul(&z_inv2),
            y: self.y.mul(&z_inv3),
        })
    }
}

/// Scalar multiplication k * P with a Montgomery ladder.
///
/// Every bit costs exactly one addition and one doubling. The limb arithmetic
/// underneath is not hardened against timing.
pub fn mul(point: &AffinePoint, k: &U256) -> JacobianPoint {
    let mut r0 = JacobianPoint::INFINITY;
    let mut r1 = point.to_jacobian();

    for i in (0..256).rev() {
        if k.bit(i) {
            r0 = r0.add(&r1);
            r1 = r1.double();
        } else {
            r1 = r0.add(&r1);
            r0 = r0.double();
        }
    }
    r0
}

/// k * G.
pub fn mul_generator(k: &U256) -> JacobianPoint {
    mul(&GENERATOR, k)
}

/// Whether `k` is a usable secret scalar: 1 <= k < n.
pub fn is_valid_scalar(k: &U256) -> bool {
    !k.is_zero() && *k < N
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(value: u64) -> U256 {
        U256::from_u64(value)
    }

    fn x_hex(point: &AffinePoint) -> String {
        hex::encode_upper(point.x.to_be_bytes())
    }

    fn y_hex(point: &AffinePoint) -> String {
        hex::encode_upper(point.y.to_be_bytes())
    }

    #[test]
    fn test_generator_on_curve() {
        assert!(GENERATOR.is_on_curve());
    }

    #[test]
    fn test_one_times_g() {
        let p = mul_generator(&scalar(1)).to_affine().unwrap();
        assert_eq!(p, GENERATOR);
    }

    #[test]
    fn test_two_times_g() {
        let p = mul_generator(&scalar(2)).to_affine().unwrap();
        assert_eq!(x_hex(&p), "C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5");
        assert_eq!(y_hex(&p), "1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A");
    }

    #[test]
    fn test_three_times_g() {
        let p = mul_generator(&scalar(3)).to_affine().unwrap();
        assert_eq!(x_hex(&p), "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9");
        assert_eq!(y_hex(&p), "388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672");
        assert!(p.is_on_curve());
    }

    #[test]
    fn test_add_matches_double() {
        let g = GENERATOR.to_jacobian();
        let doubled = g.double().to_affine().unwrap();
        let added = g.add(&g).to_affine().unwrap();
        assert_eq!(doubled, added);
    }

    #[test]
    fn test_n_minus_one_is_negated_generator() {
        let k = N.wrapping_sub(&U256::ONE);
        let p = mul_generator(&k).to_affine().unwrap();
        assert_eq!(p, GENERATOR.neg());
    }

    #[test]
    fn test_order_annihilates_generator() {
        assert!(mul_generator(&N).is_infinity());
        assert!(mul_generator(&U256::ZERO).is_infinity());
    }

    #[test]
    fn test_point_plus_negation_is_infinity() {
        let g = GENERATOR.to_jacobian();
        let neg = GENERATOR.neg().to_jacobian();
        assert!(g.add(&neg).is_infinity());
    }

    #[test]
    fn test_from_x_recovers_generator() {
        let p = AffinePoint::from_x(GENERATOR.x, false).unwrap();
        assert_eq!(p, GENERATOR);
        let q = AffinePoint::from_x(GENERATOR.x, true).unwrap();
        assert_eq!(q, GENERATOR.neg());
    }

    #[test]
    fn test_scalar_bounds() {
        assert!(!is_valid_scalar(&U256::ZERO));
        assert!(is_valid_scalar(&U256::ONE));
        assert!(is_valid_scalar(&N.wrapping_sub(&U256::ONE)));
        assert!(!is_valid_scalar(&N));
        assert!(!is_valid_scalar(&U256::from_limbs([u64::MAX; 4])));
    }
}

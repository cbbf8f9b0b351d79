//! Public key derivation and SEC1 serialization.

use alloc::vec::Vec;
use crate::curve::{self, AffinePoint};
use crate::error::KeyError;
use crate::field::FieldElement;
use crate::network::{
    COMPRESSED_PUBKEY_LEN, PUBKEY_EVEN_PREFIX, PUBKEY_ODD_PREFIX, PUBKEY_UNCOMPRESSED_PREFIX,
    UNCOMPRESSED_PUBKEY_LEN,
};
use crate::u256::U256;

/// A secp256k1 public key: a finite point on the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    point: AffinePoint,
}

impl PublicKey {
    /// Compute scalar * G. The scalar must satisfy 1 <= scalar < n.
    pub fn from_secret_bytes(scalar: &[u8; 32]) -> Result<Self, KeyError> {
        let k = U256::from_be_bytes(scalar);
        if !curve::is_valid_scalar(&k) {
            return Err(KeyError::InvalidScalar);
        }
        // A valid scalar never lands on infinity
        let point = curve::mul_generator(&k)
            .to_affine()
            .ok_or(KeyError::InvalidScalar)?;
        Ok(PublicKey { point })
    }

    /// Parse a compressed (33-byte) or uncompressed (65-byte) key.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        match (bytes.len(), bytes.first()) {
            (COMPRESSED_PUBKEY_LEN, Some(&prefix))
                if prefix == PUBKEY_EVEN_PREFIX || prefix == PUBKEY_ODD_PREFIX =>
            {
                let x = field_from_slice(&bytes[1..33])?;
                let point = AffinePoint::from_x(x, prefix == PUBKEY_ODD_PREFIX)
                    .ok_or(KeyError::InvalidPublicKey)?;
                Ok(PublicKey { point })
            }
            (UNCOMPRESSED_PUBKEY_LEN, Some(&PUBKEY_UNCOMPRESSED_PREFIX)) => {
                let point = AffinePoint {
                    x: field_from_slice(&bytes[1..33])?,
                    y: field_from_slice(&bytes[33..65])?,
                };
                if !point.is_on_curve() {
                    return Err(KeyError::InvalidPublicKey);
                }
                Ok(PublicKey { point })
            }
            _ => Err(KeyError::InvalidPublicKey),
        }
    }

    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// `02 || x` for even y, `03 || x` for odd y.
    pub fn serialize_compressed(&self) -> [u8; COMPRESSED_PUBKEY_LEN] {
        let mut out = [0u8; COMPRESSED_PUBKEY_LEN];
        out[0] = if self.point.y.is_even() {
            PUBKEY_EVEN_PREFIX
        } else {
            PUBKEY_ODD_PREFIX
        };
        out[1..].copy_from_slice(&self.point.x.to_be_bytes());
        out
    }

    /// `04 || x || y`.
    pub fn serialize_uncompressed(&self) -> [u8; UNCOMPRESSED_PUBKEY_LEN] {
        let mut out = [0u8; UNCOMPRESSED_PUBKEY_LEN];
        out[0] = PUBKEY_UNCOMPRESSED_PREFIX;
        out[1..33].copy_from_slice(&self.point.x.to_be_bytes());
        out[33..].copy_from_slice(&self.point.y.to_be_bytes());
        out
    }

    pub fn serialize(&self, compressed: bool) -> Vec<u8> {
        if compressed {
            self.serialize_compressed().to_vec()
        } else {
            self.serialize_uncompressed().to_vec()
        }
    }
}

/// Derive the serialized public key for a 32-byte big-endian scalar.
pub fn derive_public_key(scalar: &[u8; 32], compressed: bool) -> Result<Vec<u8>, KeyError> {
    Ok(PublicKey::from_secret_bytes(scalar)?.serialize(compressed))
}

fn field_from_slice(bytes: &[u8]) -> Result<FieldElement, KeyError> {
    let array: &[u8; 32] = bytes.try_into().map_err(|_| KeyError::InvalidPublicKey)?;
    FieldElement::from_be_bytes(array).ok_or(KeyError::InvalidPublicKey)
}

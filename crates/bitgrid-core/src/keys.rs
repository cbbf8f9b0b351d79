//! Private keys, WIF encoding and legacy P2PKH addresses.

use alloc::string::String;
use alloc::vec::Vec;
use crate::base58::encode_check;
use crate::curve;
use crate::error::KeyError;
use crate::grid::{parse_key_hex, BitGrid};
use crate::hash::hash160;
use crate::network::{COMPRESSED_WIF_SUFFIX, P2PKH_VERSION, WIF_VERSION};
use crate::pubkey::PublicKey;
use crate::u256::U256;

/// A secp256k1 secret scalar in [1, n).
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    bytes: [u8; 32],
}

impl PrivateKey {
    /// Wrap 32 big-endian bytes, rejecting zero and values ≥ n.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, KeyError> {
        if !curve::is_valid_scalar(&U256::from_be_bytes(bytes)) {
            return Err(KeyError::InvalidScalar);
        }
        Ok(PrivateKey { bytes: *bytes })
    }

    /// Parse a 64-digit hex key.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        Self::from_bytes(&parse_key_hex(hex_str)?)
    }

    /// Read the key out of a grid. An empty grid is not a key.
    pub fn from_grid(grid: &BitGrid) -> Result<Self, KeyError> {
        if grid.is_empty() {
            return Err(KeyError::InsufficientEntropy);
        }
        Self::from_bytes(&grid.to_bytes())
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// 64 uppercase hex digits.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.bytes)
    }

    pub fn public_key(&self) -> PublicKey {
        // The scalar was range-checked on construction
        match PublicKey::from_secret_bytes(&self.bytes) {
            Ok(key) => key,
            Err(_) => unreachable!("validated scalar produced no public key"),
        }
    }

    /// Wallet Import Format: Base58Check(0x80 || key [|| 0x01]).
    pub fn to_wif(&self, compressed: bool) -> String {
        let mut payload = Vec::with_capacity(34);
        payload.push(WIF_VERSION);
        payload.extend_from_slice(&self.bytes);
        if compressed {
            payload.push(COMPRESSED_WIF_SUFFIX);
        }
        encode_check(&payload)
    }

    /// Legacy address: Base58Check(0x00 || HASH160(pubkey)).
    pub fn to_address(&self, compressed: bool) -> String {
        p2pkh_address(&self.public_key().serialize(compressed))
    }
}

// Keep secret bytes out of debug output
impl core::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// HASH160 of a serialized public key, the 20-byte P2PKH payload.
pub fn pubkey_hash(pubkey: &[u8]) -> [u8; 20] {
    hash160(pubkey)
}

/// Encode a serialized public key as a mainnet P2PKH address.
pub fn p2pkh_address(pubkey: &[u8]) -> String {
    let mut payload = [0u8; 21];
    payload[0] = P2PKH_VERSION;
    payload[1..].copy_from_slice(&pubkey_hash(pubkey));
    encode_check(&payload)
}

/// WIF for a raw 32-byte scalar.
pub fn to_wif(scalar: &[u8; 32], compressed: bool) -> Result<String, KeyError> {
    Ok(PrivateKey::from_bytes(scalar)?.to_wif(compressed))
}

/// Legacy address for a raw 32-byte scalar.
pub fn to_address(scalar: &[u8; 32], compressed: bool) -> Result<String, KeyError> {
    Ok(PrivateKey::from_bytes(scalar)?.to_address(compressed))
}

/// Everything shown for one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedKeys {
    /// 64 uppercase hex digits.
    pub private_key_hex: String,
    /// Wallet Import Format.
    pub wif: String,
    /// Uppercase hex of the serialized public key (66 or 130 digits).
    pub public_key_hex: String,
    /// Legacy P2PKH address.
    pub address: String,
    /// Whether the compressed public key form was used.
    pub compressed: bool,
}

impl DerivedKeys {
    pub fn from_private_key(key: &PrivateKey, compressed: bool) -> Self {
        let pubkey = key.public_key().serialize(compressed);
        DerivedKeys {
            private_key_hex: key.to_hex(),
            wif: key.to_wif(compressed),
            public_key_hex: hex::encode_upper(&pubkey),
            address: p2pkh_address(&pubkey),
            compressed,
        }
    }
}

/// Derive all artifacts from raw 32-byte entropy.
///
/// All-zero entropy is refused with `InsufficientEntropy` before any curve
/// arithmetic; other out-of-range values give `InvalidScalar`.
pub fn derive_from_bytes(entropy: &[u8; 32], compressed: bool) -> Result<DerivedKeys, KeyError> {
    if entropy.iter().all(|&b| b == 0) {
        return Err(KeyError::InsufficientEntropy);
    }
    let key = PrivateKey::from_bytes(entropy)?;
    Ok(DerivedKeys::from_private_key(&key, compressed))
}

/// Derive all artifacts from a 64-digit hex key.
pub fn derive_from_hex(hex_str: &str, compressed: bool) -> Result<DerivedKeys, KeyError> {
    derive_from_bytes(&parse_key_hex(hex_str)?, compressed)
}

/// Derive all artifacts from a grid.
pub fn derive_from_grid(grid: &BitGrid, compressed: bool) -> Result<DerivedKeys, KeyError> {
    derive_from_bytes(&grid.to_bytes(), compressed)
}

//! Bitcoin mainnet version bytes.
//!
//! Only mainnet and only the legacy P2PKH address scheme are produced.

/// Version byte prefixed to a WIF private key payload.
pub const WIF_VERSION: u8 = 0x80;

/// Version byte for P2PKH addresses.
pub const P2PKH_VERSION: u8 = 0x00;

/// Suffix appended to a WIF payload when the key uses a compressed public key.
pub const COMPRESSED_WIF_SUFFIX: u8 = 0x01;

/// SEC1 prefix for a compressed point with even y.
pub const PUBKEY_EVEN_PREFIX: u8 = 0x02;

/// SEC1 prefix for a compressed point with odd y.
pub const PUBKEY_ODD_PREFIX: u8 = 0x03;

/// SEC1 prefix for an uncompressed point.
pub const PUBKEY_UNCOMPRESSED_PREFIX: u8 = 0x04;

/// Serialized length of a compressed public key.
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

/// Serialized length of an uncompressed public key.
pub const UNCOMPRESSED_PUBKEY_LEN: usize = 65;

//! Bit grid to Bitcoin key derivation for the visual key generator.
//!
//! This crate provides pure Rust implementations of:
//! - A 16x16 bit grid and its 64-digit hex form
//! - Base58 and Base58Check encoding
//! - secp256k1 field and point arithmetic with public key serialization
//! - WIF private keys and legacy P2PKH mainnet addresses
//!
//! Every function is pure. Nothing here stores keys, logs, or touches I/O.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod base58;
pub mod curve;
pub mod error;
pub mod field;
pub mod grid;
pub mod hash;
pub mod keys;
pub mod network;
pub mod pubkey;
pub mod u256;

pub use base58::{decode_check, encode_check, Base58Error};
pub use error::KeyError;
pub use grid::{BitGrid, EntropyLevel, GridError};
pub use hash::{double_sha256, hash160};
pub use keys::{derive_from_bytes, derive_from_grid, derive_from_hex, to_address, to_wif, DerivedKeys, PrivateKey};
pub use pubkey::{derive_public_key, PublicKey};

//! Errors raised while deriving keys.

use thiserror::Error;
use crate::grid::GridError;

/// Key derivation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The entropy is all zeros, the "no key yet" state of the grid
    #[error("Not enough entropy: activate at least one bit")]
    InsufficientEntropy,
    /// Scalar is zero or not below the curve order
    #[error("Private key is zero or not below the curve order")]
    InvalidScalar,
    /// Bytes do not encode a point on the curve
    #[error("Invalid public key")]
    InvalidPublicKey,
    /// Malformed grid or hex input
    #[error(transparent)]
    Grid(#[from] GridError),
}

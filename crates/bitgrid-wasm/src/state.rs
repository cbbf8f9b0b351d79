//! Serializable records handed to the page.

use bitgrid_core::{BitGrid, DerivedKeys};
use bitgrid_core::grid::GRID_BITS;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Derived key material for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyInfo {
    /// Private key as 64 uppercase hex digits.
    pub private_key_hex: String,
    /// Private key in Wallet Import Format.
    pub wif: String,
    /// Serialized public key in hex.
    pub public_key_hex: String,
    /// Legacy P2PKH address.
    pub address: String,
    /// Whether the compressed public key form was used.
    pub compressed: bool,
    /// "Compressed" or "Uncompressed".
    pub key_type: String,
    /// Always "Legacy (P2PKH)".
    pub address_type: String,
}

impl From<DerivedKeys> for KeyInfo {
    fn from(keys: DerivedKeys) -> Self {
        KeyInfo {
            key_type: key_format(keys.compressed).to_string(),
            address_type: "Legacy (P2PKH)".to_string(),
            private_key_hex: keys.private_key_hex,
            wif: keys.wif,
            public_key_hex: keys.public_key_hex,
            address: keys.address,
            compressed: keys.compressed,
        }
    }
}

impl KeyInfo {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Grid statistics panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStats {
    /// Number of set cells.
    pub active_bits: u32,
    /// Total cells (256).
    pub total_bits: u32,
    /// Share of set cells, 0 to 100.
    pub percentage: f64,
    /// "Low", "Medium" or "High".
    pub entropy_level: String,
    /// "Compressed" or "Uncompressed".
    pub key_format: String,
}

impl GridStats {
    pub fn new(grid: &BitGrid, compressed: bool) -> Self {
        GridStats {
            active_bits: grid.count_ones() as u32,
            total_bits: GRID_BITS as u32,
            percentage: grid.fill_ratio() * 100.0,
            entropy_level: grid.entropy_level().name().to_string(),
            key_format: key_format(compressed).to_string(),
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

fn key_format(compressed: bool) -> &'static str {
    if compressed {
        "Compressed"
    } else {
        "Uncompressed"
    }
}

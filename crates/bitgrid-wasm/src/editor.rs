//! Grid editing session for the page.

use wasm_bindgen::prelude::*;
use bitgrid_core::{derive_from_grid, derive_from_hex, BitGrid, DerivedKeys, KeyError};
use crate::state::{GridStats, KeyInfo};

/// The editing session: one grid plus the key format toggle.
#[wasm_bindgen]
pub struct KeyGrid {
    /// The 256 cells being edited.
    grid: BitGrid,
    /// Whether keys are derived in compressed form.
    compressed: bool,
}

#[wasm_bindgen]
impl KeyGrid {
    /// Create an empty grid with compressed keys selected.
    #[wasm_bindgen(constructor)]
    pub fn new() -> KeyGrid {
        KeyGrid {
            grid: BitGrid::new(),
            compressed: true,
        }
    }

    /// Read one cell.
    #[wasm_bindgen]
    pub fn cell(&self, row: usize, col: usize) -> Result<bool, JsValue> {
        self.grid.get(row, col).map_err(to_js_error)
    }

    /// Set one cell.
    #[wasm_bindgen]
    pub fn set_cell(&mut self, row: usize, col: usize, value: bool) -> Result<(), JsValue> {
        self.grid.set(row, col, value).map_err(to_js_error)
    }

    /// Flip one cell and return its new value.
    #[wasm_bindgen]
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, JsValue> {
        self.grid.toggle(row, col).map_err(to_js_error)
    }

    /// Clear the entire grid.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Invert all bits.
    #[wasm_bindgen]
    pub fn invert(&mut self) {
        self.grid.invert();
    }

    /// Rotate the grid 90 degrees clockwise.
    #[wasm_bindgen]
    pub fn rotate(&mut self) {
        self.grid.rotate_clockwise();
    }

    /// Fill every cell at random.
    ///
    /// A drawing aid only. Do not treat the result as a generated key for
    /// real funds.
    #[wasm_bindgen]
    pub fn randomize(&mut self) -> Result<(), JsValue> {
        self.randomize_cells()
            .map_err(|e| JsValue::from_str(&format!("Random source unavailable: {}", e)))
    }

    /// Set one randomly chosen empty cell. Returns false when the grid is full.
    #[wasm_bindgen]
    pub fn flip_coin(&mut self) -> Result<bool, JsValue> {
        self.fill_random_empty_cell()
            .map(|cell| cell.is_some())
            .map_err(|e| JsValue::from_str(&format!("Random source unavailable: {}", e)))
    }

    /// Replace the grid with a 64-digit hex key.
    #[wasm_bindgen]
    pub fn load_hex(&mut self, hex: &str) -> Result<(), JsValue> {
        self.grid = BitGrid::from_hex(hex).map_err(to_js_error)?;
        Ok(())
    }

    /// The grid as 64 uppercase hex digits.
    #[wasm_bindgen(getter)]
    pub fn hex(&self) -> String {
        self.grid.to_hex()
    }

    /// Whether compressed keys are selected.
    #[wasm_bindgen(getter)]
    pub fn compressed(&self) -> bool {
        self.compressed
    }

    /// Select compressed or uncompressed keys.
    #[wasm_bindgen(setter)]
    pub fn set_compressed(&mut self, compressed: bool) {
        self.compressed = compressed;
    }

    /// Whether at least one bit is set.
    #[wasm_bindgen(getter)]
    pub fn has_entropy(&self) -> bool {
        !self.grid.is_empty()
    }

    /// All cells as a 16x16 array of booleans.
    #[wasm_bindgen]
    pub fn rows(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.grid.rows())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }

    /// Derive the private key, WIF, public key and address for the grid.
    #[wasm_bindgen]
    pub fn derive(&self) -> Result<JsValue, JsValue> {
        match self.derive_keys() {
            Ok(keys) => KeyInfo::from(keys).to_js(),
            Err(e) => {
                crate::log(&format!("Key derivation refused: {}", e));
                Err(to_js_error(e))
            }
        }
    }

    /// Get the statistics panel values.
    #[wasm_bindgen]
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        GridStats::new(&self.grid, self.compressed).to_js()
    }
}

impl KeyGrid {
    /// The grid being edited.
    pub fn grid(&self) -> &BitGrid {
        &self.grid
    }

    pub fn derive_keys(&self) -> Result<DerivedKeys, KeyError> {
        derive_from_grid(&self.grid, self.compressed)
    }

    fn randomize_cells(&mut self) -> Result<(), getrandom::Error> {
        let mut bytes = [0u8; 32];
        getrandom::getrandom(&mut bytes)?;
        self.grid = BitGrid::from_bytes(&bytes);
        Ok(())
    }

    /// Pick an empty cell (with slight modulo bias), set it and return it.
    fn fill_random_empty_cell(&mut self) -> Result<Option<(usize, usize)>, getrandom::Error> {
        let empty: Vec<(usize, usize)> = self.grid.empty_cells().collect();
        if empty.is_empty() {
            return Ok(None);
        }

        let mut bytes = [0u8; 4];
        getrandom::getrandom(&mut bytes)?;
        let (row, col) = empty[u32::from_le_bytes(bytes) as usize % empty.len()];

        // Coordinates come from the grid itself, so they are in bounds
        if self.grid.set(row, col, true).is_err() {
            return Ok(None);
        }
        Ok(Some((row, col)))
    }
}

impl Default for KeyGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive key material from a hex key without a session.
#[wasm_bindgen]
pub fn derive_keys(hex: &str, compressed: bool) -> Result<JsValue, JsValue> {
    let keys = derive_from_hex(hex, compressed).map_err(to_js_error)?;
    KeyInfo::from(keys).to_js()
}

fn to_js_error(e: impl core::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";

    #[test]
    fn test_new_session_defaults() {
        let session = KeyGrid::new();
        assert!(session.compressed());
        assert!(!session.has_entropy());
        assert_eq!(session.hex(), "0".repeat(64));
        assert_eq!(session.derive_keys(), Err(KeyError::InsufficientEntropy));
    }

    #[test]
    fn test_derive_follows_compressed_flag() {
        let mut session = KeyGrid::new();
        session.grid = BitGrid::from_hex(ONE).unwrap();

        let keys = session.derive_keys().unwrap();
        assert_eq!(keys.address, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");

        session.set_compressed(false);
        let keys = session.derive_keys().unwrap();
        assert_eq!(keys.address, "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
        assert!(!keys.compressed);
    }

    #[test]
    fn test_randomize_fills_from_entropy() {
        let mut session = KeyGrid::new();
        session.randomize_cells().unwrap();
        // 2^-256 chance of a false failure
        assert!(session.has_entropy());
    }

    #[test]
    fn test_flip_coin_sets_one_empty_cell() {
        let mut session = KeyGrid::new();
        let (row, col) = session.fill_random_empty_cell().unwrap().unwrap();
        assert_eq!(session.grid().get(row, col), Ok(true));
        assert_eq!(session.grid().count_ones(), 1);
    }

    #[test]
    fn test_flip_coin_on_full_grid() {
        let mut session = KeyGrid::new();
        session.invert();
        assert_eq!(session.fill_random_empty_cell().unwrap(), None);
        assert_eq!(session.grid().count_ones(), 256);
    }

    #[test]
    fn test_editing_actions() {
        let mut session = KeyGrid::new();
        session.grid.set(0, 0, true).unwrap();
        session.rotate();
        assert_eq!(session.grid().get(0, 15), Ok(true));
        session.invert();
        assert_eq!(session.grid().count_ones(), 255);
        session.clear();
        assert!(!session.has_entropy());
    }
}

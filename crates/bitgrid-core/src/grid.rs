//! The 16x16 bit grid and its hex form.
//!
//! Cells are read row-major, most significant bit first: cell (0, 0) is the
//! top bit of the key and cell (15, 15) the bottom bit.

use alloc::string::String;
use thiserror::Error;

/// Cells per side.
pub const GRID_SIZE: usize = 16;

/// Total cells, one per key bit.
pub const GRID_BITS: usize = GRID_SIZE * GRID_SIZE;

/// Hex digits in the canonical key string.
pub const HEX_LEN: usize = GRID_BITS / 4;

/// Grid parsing and indexing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Hex string is not exactly 64 digits
    #[error("Expected 64 hex digits, got {0}")]
    InvalidLength(usize),
    /// Non-hex character in the key string
    #[error("Invalid hex string")]
    InvalidHex,
    /// Cell index outside the grid
    #[error("Cell ({row}, {col}) is outside the 16x16 grid")]
    OutOfBounds { row: usize, col: usize },
}

/// Coarse fill indicator shown next to the grid.
///
/// Based only on how many cells are set. It says nothing about how the
/// pattern was chosen, which is what actually matters for key strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyLevel {
    Low,
    Medium,
    High,
}

impl EntropyLevel {
    /// More than 100 active cells is High, more than 50 is Medium.
    pub fn from_active_bits(active: usize) -> Self {
        if active > 100 {
            EntropyLevel::High
        } else if active > 50 {
            EntropyLevel::Medium
        } else {
            EntropyLevel::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntropyLevel::Low => "Low",
            EntropyLevel::Medium => "Medium",
            EntropyLevel::High => "High",
        }
    }
}

impl core::fmt::Display for EntropyLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A 16x16 matrix of bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitGrid {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl BitGrid {
    /// An all-false grid.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[bool; GRID_SIZE]; GRID_SIZE]) -> Self {
        BitGrid { cells }
    }

    pub fn rows(&self) -> &[[bool; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Spread 32 big-endian bytes over the grid, row-major.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut cells = [[false; GRID_SIZE]; GRID_SIZE];
        for (index, cell) in cells.iter_mut().flatten().enumerate() {
            *cell = (bytes[index / 8] >> (7 - index % 8)) & 1 == 1;
        }
        BitGrid { cells }
    }

    /// Pack the grid into 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (index, &cell) in self.cells.iter().flatten().enumerate() {
            if cell {
                bytes[index / 8] |= 1 << (7 - index % 8);
            }
        }
        bytes
    }

    /// Parse a 64-digit hex key (either case).
    pub fn from_hex(hex_str: &str) -> Result<Self, GridError> {
        Ok(Self::from_bytes(&parse_key_hex(hex_str)?))
    }

    /// Render as 64 uppercase hex digits, zero-padded.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.to_bytes())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), GridError> {
        check_bounds(row, col)?;
        self.cells[row][col] = value;
        Ok(())
    }

    /// Flip one cell and return its new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        check_bounds(row, col)?;
        let cell = &mut self.cells[row][col];
        *cell = !*cell;
        Ok(*cell)
    }

    pub fn clear(&mut self) {
        self.cells = [[false; GRID_SIZE]; GRID_SIZE];
    }

    /// Flip every cell.
    pub fn invert(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            *cell = !*cell;
        }
    }

    /// Rotate the pattern 90 degrees clockwise.
    pub fn rotate_clockwise(&mut self) {
        let mut rotated = [[false; GRID_SIZE]; GRID_SIZE];
        for (i, row) in self.cells.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                rotated[j][GRID_SIZE - 1 - i] = cell;
            }
        }
        self.cells = rotated;
    }

    /// Coordinates of all unset cells, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(j, &cell)| (!cell).then_some((i, j)))
        })
    }

    pub fn count_ones(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell).count()
    }

    /// True when no cell is set. Such a grid is the "no key yet" sentinel.
    pub fn is_empty(&self) -> bool {
        self.count_ones() == 0
    }

    /// Fraction of cells that are set, in [0, 1].
    pub fn fill_ratio(&self) -> f64 {
        self.count_ones() as f64 / GRID_BITS as f64
    }

    pub fn entropy_level(&self) -> EntropyLevel {
        EntropyLevel::from_active_bits(self.count_ones())
    }
}

/// Parse exactly 64 hex digits into 32 bytes.
pub(crate) fn parse_key_hex(hex_str: &str) -> Result<[u8; 32], GridError> {
    if hex_str.len() != HEX_LEN {
        return Err(GridError::InvalidLength(hex_str.len()));
    }
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(hex_str, &mut bytes).map_err(|_| GridError::InvalidHex)?;
    Ok(bytes)
}

fn check_bounds(row: usize, col: usize) -> Result<(), GridError> {
    if row >= GRID_SIZE || col >= GRID_SIZE {
        return Err(GridError::OutOfBounds { row, col });
    }
    Ok(())
}

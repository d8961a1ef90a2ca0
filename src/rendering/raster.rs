//! Downsampling the painted surface into the classifier grid

use serde::{Deserialize, Serialize};

use crate::rendering::SourceBitmap;
use crate::{BLOCK_SIZE, GRID_SIZE};

/// The 28x28 binary grid handed to the classifier.
///
/// Cells are exactly 0 or 255, row-major with row 0 at the top. The type
/// serializes as a nested array of integers, which is the wire shape the
/// classifier endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetGrid(pub [[u8; GRID_SIZE]; GRID_SIZE]);

impl TargetGrid {
    /// An all-zero grid.
    pub fn zeroed() -> Self {
        Self([[0; GRID_SIZE]; GRID_SIZE])
    }

    /// Cell value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row][col]
    }

    /// Number of cells carrying ink.
    pub fn inked_cells(&self) -> usize {
        self.0
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell != 0)
            .count()
    }

    pub fn is_blank(&self) -> bool {
        self.inked_cells() == 0
    }

    /// Render the grid as 28 lines of `#` (inked) and `.` (blank), for
    /// terminal output and quick inspection.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(GRID_SIZE * (GRID_SIZE + 1));
        for row in &self.0 {
            for &cell in row {
                out.push(if cell == 0 { '.' } else { '#' });
            }
            out.push('\n');
        }
        out
    }
}

impl Default for TargetGrid {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Downsample the surface into the classifier grid.
///
/// Each output cell is backed by one 10x10 block of source pixels. The
/// block's alpha values are accumulated and the cell becomes 255 when the
/// total is nonzero, 0 otherwise. Comparing the sum against zero instead of
/// averaging first means a single inked pixel anywhere in a block is enough
/// to set its cell, so faint antialiased edges and full-opacity strokes
/// rasterize the same way.
///
/// The operation is total and deterministic: any well-formed surface yields
/// a grid, a blank surface yields an all-zero grid, and the source is never
/// mutated.
pub fn rasterize(source: &SourceBitmap) -> TargetGrid {
    let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
    for (row, row_cells) in cells.iter_mut().enumerate() {
        for (col, cell) in row_cells.iter_mut().enumerate() {
            let mut coverage: u32 = 0;
            for dy in 0..BLOCK_SIZE {
                for dx in 0..BLOCK_SIZE {
                    let x = (col * BLOCK_SIZE + dx) as u32;
                    let y = (row * BLOCK_SIZE + dy) as u32;
                    coverage += source.alpha_at(x, y) as u32;
                }
            }
            *cell = if coverage > 0 { 255 } else { 0 };
        }
    }
    TargetGrid(cells)
}

//! The 4×4 play area and its labelled text grid.

use alloc::string::String;
use core::fmt::{self, Write};
use core::ops::{Index, IndexMut};

use crate::config::{
    BOARD_SIZE, CELL_DIVIDER, CELL_RULE, COLUMN_LABELS, ROW_LABELS, RULE_JUNCTION,
};
use crate::piece::{format_piece, Cell};

type Rows = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Board cells in storage order. Row 0 is drawn at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "std",
    derive(serde::Deserialize),
    serde(try_from = "crate::domain::BoardRecord")
)]
pub struct Board {
    rows: Rows,
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Rows) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &Rows {
        &self.rows
    }
}

/// Panics when `row` or `col` is outside the board.
impl Index<(usize, usize)> for Board {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        &self.rows[row][col]
    }
}

impl IndexMut<(usize, usize)> for Board {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Cell {
        &mut self.rows[row][col]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (row, label)) in self.rows.iter().zip(ROW_LABELS).enumerate() {
            if i > 0 {
                f.write_char(' ')?;
                for col in 0..BOARD_SIZE {
                    if col > 0 {
                        f.write_char(RULE_JUNCTION)?;
                    }
                    f.write_str(CELL_RULE)?;
                }
                f.write_char('\n')?;
            }
            f.write_char(label)?;
            for (col, &cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_char(CELL_DIVIDER)?;
                }
                f.write_str(&format_piece(cell))?;
            }
            f.write_char('\n')?;
        }
        // column labels sit under the glyph position of each cell
        f.write_char(' ')?;
        for (col, label) in COLUMN_LABELS.iter().enumerate() {
            if col > 0 {
                f.write_char(' ')?;
            }
            write!(f, " {} ", label)?;
        }
        Ok(())
    }
}

/// Render the labelled grid: row labels 3 down to 0 on the left, ruled
/// separators between rows and column labels along the bottom. The text
/// has no trailing newline.
pub fn format_board(board: &Board) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write!(out, "{}", board);
    out
}

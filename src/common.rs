//! Errors raised when untyped game-state data is turned into pieces,
//! players and boards.

/// Shape problems found while converting producer data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// Owner outside of 1 and 2.
    UnknownOwner(u8),
    /// Size outside of 0..=3.
    UnknownSize(u8),
    /// A slot that is neither empty nor an `[owner, size]` pair.
    MalformedPiece(usize),
    /// A reserve that does not hold exactly three slots.
    ReserveLength(usize),
    /// A board that does not hold exactly four rows.
    RowCount(usize),
    /// A board row that does not hold exactly four cells.
    ColumnCount { row: usize, len: usize },
}

impl core::fmt::Display for StateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StateError::UnknownOwner(owner) => write!(f, "Unknown piece owner {}", owner),
            StateError::UnknownSize(size) => write!(f, "Unknown piece size {}", size),
            StateError::MalformedPiece(len) => {
                write!(f, "Piece must be empty or an [owner, size] pair, got {} values", len)
            }
            StateError::ReserveLength(len) => {
                write!(f, "Reserve must hold exactly 3 stacks, got {}", len)
            }
            StateError::RowCount(len) => write!(f, "Board must hold exactly 4 rows, got {}", len),
            StateError::ColumnCount { row, len } => {
                write!(f, "Board row {} must hold exactly 4 cells, got {}", row, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StateError {}

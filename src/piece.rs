//! Pieces and their one-cell text rendering.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::common::StateError;
use crate::config::{EMPTY_CELL, GLYPHS};

/// Owner of a piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Owner {
    One = 1,
    Two = 2,
}

impl Owner {
    /// Convert from the producer's 1/2 encoding.
    pub fn from_bits(bits: u8) -> Option<Owner> {
        match bits {
            1 => Some(Owner::One),
            2 => Some(Owner::Two),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize - 1
    }
}

/// Size rank of a piece, smallest first.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Size {
    Tiny = 0,
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::Tiny, Size::Small, Size::Medium, Size::Large];

    /// Convert from the producer's 0..=3 encoding.
    pub fn from_bits(bits: u8) -> Option<Size> {
        Size::ALL.get(bits as usize).copied()
    }
}

/// A single stackable token.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    pub owner: Owner,
    pub size: Size,
}

/// A reserve slot or board cell: empty, or holding one piece.
pub type Cell = Option<Piece>;

impl Piece {
    pub const fn new(owner: Owner, size: Size) -> Self {
        Self { owner, size }
    }

    /// The glyph drawn for this piece.
    pub fn glyph(self) -> &'static str {
        GLYPHS[self.owner.index()][self.size as usize]
    }
}

impl TryFrom<(u8, u8)> for Piece {
    type Error = StateError;

    fn try_from((owner, size): (u8, u8)) -> Result<Self, Self::Error> {
        let owner = Owner::from_bits(owner).ok_or(StateError::UnknownOwner(owner))?;
        let size = Size::from_bits(size).ok_or(StateError::UnknownSize(size))?;
        Ok(Piece { owner, size })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Render a cell as exactly three characters: the glyph between two
/// spaces, or blanks when the cell is empty.
pub fn format_piece(cell: Cell) -> String {
    match cell {
        Some(piece) => format!(" {} ", piece.glyph()),
        None => String::from(EMPTY_CELL),
    }
}

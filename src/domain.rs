//! Wire shapes produced by the game server, and their conversion into the
//! typed board and player model.

use std::string::String;
use std::vec::Vec;

use crate::board::Board;
use crate::common::StateError;
use crate::config::{BOARD_SIZE, RESERVE_SLOTS};
use crate::piece::{Cell, Piece};
use crate::player::Player;

/// A slot as sent by the server: `[]` or `[owner, size]`.
pub type SlotRecord = Vec<u8>;

/// A board as sent by the server: four rows of four slots, top row first.
pub type BoardRecord = Vec<Vec<SlotRecord>>;

/// A player as sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "nom", alias = "name")]
    pub name: String,
    #[serde(rename = "piles", alias = "reserve")]
    pub reserve: Vec<SlotRecord>,
}

/// Convert one wire slot into a cell.
pub fn cell_from_slot(slot: &[u8]) -> Result<Cell, StateError> {
    match slot {
        [] => Ok(None),
        [owner, size] => Piece::try_from((*owner, *size)).map(Some),
        _ => Err(StateError::MalformedPiece(slot.len())),
    }
}

impl TryFrom<PlayerRecord> for Player {
    type Error = StateError;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        if record.reserve.len() != RESERVE_SLOTS {
            return Err(StateError::ReserveLength(record.reserve.len()));
        }
        let mut reserve = [None; RESERVE_SLOTS];
        for (cell, slot) in reserve.iter_mut().zip(&record.reserve) {
            *cell = cell_from_slot(slot)?;
        }
        Ok(Player::new(record.name, reserve))
    }
}

impl TryFrom<BoardRecord> for Board {
    type Error = StateError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        if record.len() != BOARD_SIZE {
            return Err(StateError::RowCount(record.len()));
        }
        let mut board = Board::new();
        for (row, slots) in record.iter().enumerate() {
            if slots.len() != BOARD_SIZE {
                return Err(StateError::ColumnCount {
                    row,
                    len: slots.len(),
                });
            }
            for (col, slot) in slots.iter().enumerate() {
                board[(row, col)] = cell_from_slot(slot)?;
            }
        }
        Ok(board)
    }
}

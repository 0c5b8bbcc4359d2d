use alloc::format;
use alloc::string::String;

use crate::config::RESERVE_SLOTS;
use crate::piece::{format_piece, Cell, Owner, Piece, Size};

/// A player's name and off-board reserve stacks. Only the top piece of
/// each stack is tracked.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Deserialize),
    serde(try_from = "crate::domain::PlayerRecord")
)]
pub struct Player {
    pub name: String,
    pub reserve: [Cell; RESERVE_SLOTS],
}

impl Player {
    pub fn new(name: impl Into<String>, reserve: [Cell; RESERVE_SLOTS]) -> Self {
        Self {
            name: name.into(),
            reserve,
        }
    }

    /// A player as the game starts: every stack topped by the largest piece.
    pub fn opening(name: impl Into<String>, owner: Owner) -> Self {
        Self::new(name, [Some(Piece::new(owner, Size::Large)); RESERVE_SLOTS])
    }
}

/// Render `"<name>: <cell0> <cell1> <cell2>"`.
pub fn format_player(player: &Player) -> String {
    let [first, second, third] = player.reserve;
    format!(
        "{}: {} {} {}",
        player.name,
        format_piece(first),
        format_piece(second),
        format_piece(third)
    )
}

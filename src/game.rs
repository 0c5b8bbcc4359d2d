use alloc::format;
use alloc::string::String;

use crate::board::{format_board, Board};
use crate::config::{PLAYER_LINE_SUFFIX, RESERVE_HEADER};
use crate::player::{format_player, Player};

/// Render both players' reserves above the board.
///
/// The reserve header and both player lines are right-aligned to the
/// longest name plus [`PLAYER_LINE_SUFFIX`], so the stack columns line up
/// under the header whatever the names are.
pub fn format_game(board: &Board, players: &[Player; 2]) -> String {
    let [first, second] = players;
    let width = first.name.chars().count().max(second.name.chars().count()) + PLAYER_LINE_SUFFIX;
    format!(
        "{:>width$}\n{:>width$}\n{:>width$}\n\n{}",
        RESERVE_HEADER,
        format_player(first),
        format_player(second),
        format_board(board),
        width = width
    )
}

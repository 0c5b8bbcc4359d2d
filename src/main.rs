#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use gobblet::{
    format_game, format_matches, init_logging, parse_command_line, read_move, Board, Owner,
    Player,
};

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let options = parse_command_line();

    if let Some(idul) = options.idul {
        log::info!("listing matches for player {}", idul);
        log::warn!("no match history source attached; nothing to list");
        print!("{}", format_matches(&[]));
        return Ok(());
    }

    let board = Board::new();
    let players = [
        Player::opening("Joueur 1", Owner::One),
        Player::opening("Joueur 2", Owner::Two),
    ];
    println!("{}\n", format_game(&board, &players));

    let mv = read_move().context("failed to read move")?;
    println!("{} -> {}", mv.origin, mv.destination);
    Ok(())
}

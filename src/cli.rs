//! Command-line options.

#![cfg(feature = "std")]

use clap::Parser;

/// Startup options.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gobblet", about = "prend l'IDUL du joueur")]
pub struct Options {
    /// Lister les parties existantes
    #[arg(short = 'l', long = "lister", value_name = "IDUL", allow_negative_numbers = true)]
    pub idul: Option<i64>,
}

/// Parse the process arguments. Malformed arguments print a usage message
/// and exit.
pub fn parse_command_line() -> Options {
    Options::parse()
}

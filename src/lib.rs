#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
#[cfg(feature = "std")]
mod cli;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod domain;
mod game;
mod history;
#[cfg(feature = "std")]
mod logging;
mod piece;
mod player;
#[cfg(feature = "std")]
mod player_cli;

pub use board::*;
#[cfg(feature = "std")]
pub use cli::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use history::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use piece::*;
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;

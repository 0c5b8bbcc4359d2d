#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::config::{DESTINATION_PROMPT, ORIGIN_PROMPT};

/// A move exactly as typed. The origin is a reserve stack number or an
/// `x,y` board position; the destination is an `x,y` board position.
/// Neither is parsed or checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMove {
    pub origin: String,
    pub destination: String,
}

impl From<RawMove> for (String, String) {
    fn from(mv: RawMove) -> Self {
        (mv.origin, mv.destination)
    }
}

/// Ask for the next move on stdin/stdout. Blocks until both answers are
/// entered.
pub fn read_move() -> io::Result<RawMove> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    read_move_from(&mut input, &mut output)
}

/// Ask for the origin, then the destination, on the given streams.
pub fn read_move_from<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<RawMove> {
    let origin = prompt(input, output, ORIGIN_PROMPT)?;
    let destination = prompt(input, output, DESTINATION_PROMPT)?;
    log::debug!("read move origin={:?} destination={:?}", origin, destination);
    Ok(RawMove {
        origin,
        destination,
    })
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> io::Result<String> {
    output.write_all(text.as_bytes())?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for a move",
        ));
    }
    let len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
    line.truncate(len);
    Ok(line)
}

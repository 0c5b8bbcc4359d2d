use alloc::string::String;
use core::fmt::Write;

/// One finished match as reported by the game server.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRecord {
    pub date: String,
    #[cfg_attr(feature = "std", serde(rename = "joueurs", alias = "players"))]
    pub players: [String; 2],
}

impl MatchRecord {
    pub fn new(date: impl Into<String>, first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            players: [first.into(), second.into()],
        }
    }
}

/// Render one numbered line per match, in the order given.
pub fn format_matches(matches: &[MatchRecord]) -> String {
    let mut out = String::new();
    for (i, record) in matches.iter().enumerate() {
        let [first, second] = &record.players;
        // writing into a String cannot fail
        let _ = writeln!(out, "{} : {}, {} vs {}", i + 1, record.date, first, second);
    }
    out
}

#![cfg(feature = "std")]

use gobblet::{level_from, LOG_ENV};
use log::LevelFilter;

#[test]
fn test_level_parsing() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("TRACE")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
}

#[test]
fn test_level_defaults_to_info() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("loud")), LevelFilter::Info);
}

#[test]
fn test_env_name() {
    assert_eq!(LOG_ENV, "GOBBLET_LOG");
}

use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn given_mixed_case_level_when_parsed_then_matches() {
    assert_eq!(LogLevel::from_str("DeBuG").unwrap(), LogLevel(LevelFilter::Debug));
    assert_eq!(LogLevel::from_str("off").unwrap(), LogLevel(LevelFilter::Off));
}

#[test]
fn given_unknown_level_when_parsed_then_falls_back_to_warn() {
    assert_eq!(LogLevel::from_str("verbose").unwrap(), LogLevel(LevelFilter::Warn));
}

#[test]
fn given_log_level_when_converted_then_yields_level_filter() {
    let filter: LevelFilter = LogLevel(LevelFilter::Warn).into();
    assert_eq!(filter, LevelFilter::Warn);
}

use boxes::{log_level, DEFAULT_LOG_LEVEL};
use log::LevelFilter;

#[test]
fn test_log_level_names() {
    assert_eq!(log_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(log_level(Some("INFO")), LevelFilter::Info);
    assert_eq!(log_level(Some(" trace\n")), LevelFilter::Trace);
    assert_eq!(log_level(Some("off")), LevelFilter::Off);
}

#[test]
fn test_log_level_fallback() {
    assert_eq!(DEFAULT_LOG_LEVEL, LevelFilter::Warn);
    assert_eq!(log_level(None), LevelFilter::Warn);
    assert_eq!(log_level(Some("loud")), LevelFilter::Warn);
    assert_eq!(log_level(Some("")), LevelFilter::Warn);
}

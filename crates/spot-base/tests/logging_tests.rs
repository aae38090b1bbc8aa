use log::{LevelFilter, Log};
use spot_base::logging::{FileLogger, StdoutLogger, init_file_logger, parse_level};
use std::fs;

fn record_args(logger: &dyn Log, level: log::Level, message: &str) {
    logger.log(
        &log::RecordBuilder::new()
            .level(level)
            .target("spot_test")
            .file(Some("detect.rs"))
            .line(Some(7))
            .args(format_args!("{message}"))
            .build(),
    );
}

#[test]
fn test_parse_level_names() {
    assert_eq!(parse_level("off"), Some(LevelFilter::Off));
    assert_eq!(parse_level("WARN"), Some(LevelFilter::Warn));
    assert_eq!(parse_level(" debug "), Some(LevelFilter::Debug));
    assert_eq!(parse_level("trace"), Some(LevelFilter::Trace));
    assert_eq!(parse_level("loud"), None);
}

#[test]
fn test_stdout_logger_does_not_panic() {
    log::set_max_level(LevelFilter::Info);
    let logger = StdoutLogger;
    record_args(&logger, log::Level::Info, "frame skipped");
    logger.flush();
}

#[test]
fn test_file_logger_writes_record() {
    let dir = std::env::temp_dir().join(format!("spot-log-test-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    log::set_max_level(LevelFilter::Trace);
    let logger = FileLogger::new(&dir).expect("Failed to create FileLogger");
    record_args(&logger, log::Level::Error, "draw failed: rectangle out of bounds");
    logger.flush();

    let entries: Vec<_> = fs::read_dir(&dir).unwrap().filter_map(|e| e.ok()).collect();
    assert_eq!(entries.len(), 1);

    let content = fs::read_to_string(entries[0].path()).unwrap();
    assert!(content.contains("[ERROR]"));
    assert!(content.contains("spot_test"));
    assert!(content.contains("detect.rs:7"));
    assert!(content.contains("rectangle out of bounds"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_init_file_logger_invalid_dir_returns_error() {
    assert!(init_file_logger("/proc/nonexistent/spot").is_err());
}

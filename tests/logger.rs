use chrono::{NaiveDate, TimeZone};
use chrono_tz::Europe::Berlin;
use localdate::config::LoggingConfig;
use localdate::logger;
use localdate::ZoneContext;

#[test]
fn test_logging_disabled_is_noop() {
    let config = LoggingConfig::default();
    assert!(!config.enabled);
    assert_eq!(logger::init(&config).unwrap(), None);
}

#[test]
fn test_invalid_level_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        enabled: true,
        level: "chatty".to_string(),
    };
    assert!(logger::init_with_file(&config, dir.path().join("never.log")).is_err());
}

#[test]
fn test_file_logging_records_gap_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("logs").join("localdate.log");
    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
    };

    logger::init_with_file(&config, &log_path).unwrap();

    // 02:30 does not exist in Berlin on 2018-03-25
    let ctx = ZoneContext::new(Berlin);
    let gap = NaiveDate::from_ymd_opt(2018, 3, 25).unwrap().and_hms_opt(2, 30, 0).unwrap();
    let resolved = ctx.resolve(&gap).unwrap();
    assert_eq!(resolved, Berlin.with_ymd_and_hms(2018, 3, 25, 3, 30, 0).unwrap());
    log::logger().flush();

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("falls in a transition gap"));
    assert!(content.contains("DEBUG"));

    // A second global logger cannot be installed
    assert!(logger::init_with_file(&config, dir.path().join("other.log")).is_err());
}

#[test]
fn test_default_log_file_path() {
    if let Ok(path) = logger::get_log_file_path() {
        assert!(path.ends_with("localdate/localdate.log"));
    }
}

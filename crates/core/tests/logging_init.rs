use chrono::{TimeZone, Utc};
use tempfile::tempdir;
use timemacro_core::config::LoggingConfig;
use timemacro_core::expand_time_macros;
use timemacro_core::logging::{self, LoggingError};

// Installs the global subscriber, so it must stay the only test in this binary.
#[test]
fn init_with_file_then_reinit_fails() {
    let tmp = tempdir().unwrap();
    let log_path = tmp.path().join("timemacro.log");
    let cfg = LoggingConfig {
        level: "warn".into(),
        file_level: Some("debug".into()),
        file: Some(log_path.clone()),
    };

    logging::init(&cfg).expect("first init ok");
    assert!(log_path.exists());

    let anchor = Utc.with_ymd_and_hms(2023, 2, 28, 0, 0, 0).unwrap();
    let out = expand_time_macros("${date+99999999999999999999}", &anchor);
    assert_eq!(out, "${date+99999999999999999999}");

    let err = logging::init(&LoggingConfig::default()).unwrap_err();
    assert!(matches!(err, LoggingError::AlreadyInitialized(_)), "got {err:?}");
}

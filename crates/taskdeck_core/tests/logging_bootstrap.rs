use taskdeck_core::{init_logging, init_logging_from_config, logging_status, DashboardConfig};

#[test]
fn config_level_drives_logger_and_conflicts_are_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log_dir = dir.path().to_str().expect("utf-8 path").to_string();
    let config = DashboardConfig::from_json_str(r#"{"log_level":"WARNING"}"#)
        .expect("valid config");

    init_logging_from_config(&config, &log_dir).expect("first init should succeed");
    init_logging_from_config(&config, &log_dir).expect("same config should be idempotent");
    init_logging("warn", &log_dir).expect("normalized level matches");

    let error = init_logging("error", &log_dir).expect_err("level conflict");
    assert!(error.contains("refusing to switch"));

    let (level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "warn");
    assert_eq!(active_dir, dir.path());
}

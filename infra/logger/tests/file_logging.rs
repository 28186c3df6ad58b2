use raft_domain::config::LoggingConfig;
use raft_logger::Logger;
use std::fs;
use std::time::Duration;

#[test]
fn config_with_directory_writes_json_log_files() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let log_dir = tmp.path().join("logs");
    let config = LoggingConfig {
        level: "info".to_owned(),
        filter: None,
        directory: Some(log_dir.clone()),
        json: true,
    };

    let logger = Logger::builder()
        .name("raft-file-test")
        .console(false)
        .config(&config)
        .expect("valid config")
        .init()
        .expect("logger should initialize");
    assert!(logger.writes_files());

    tracing::info!(feature = "cloudSync", "resolved flags");
    std::thread::sleep(Duration::from_millis(50));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)
        .expect("log directory created")
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|e| e.to_str()) == Some("log"))
        .expect("a .log file");

    let contents = fs::read_to_string(log_file).expect("read log");
    assert!(contents.contains("resolved flags"), "log contents: {contents}");
    assert!(contents.trim_start().starts_with('{'), "json lines expected: {contents}");
}

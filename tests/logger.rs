use timekit::logger;

#[test]
fn test_default_log_file_location() {
    if let Some(path) = logger::default_log_file() {
        assert!(path.ends_with("timekit/timekit.log"));
    }
}

#[test]
fn test_logger_installs_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timekit.log");

    logger::init_with_file(log::LevelFilter::Debug, path.clone()).unwrap();
    log::info!("logger smoke test");
    assert!(path.exists());

    // only one dispatcher per process
    assert!(logger::init(log::LevelFilter::Debug).is_err());
}

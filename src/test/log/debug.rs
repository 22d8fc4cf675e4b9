use super::{DebugLogger, create_private_directory, open_private_append_file};
use crate::log::LogLevel;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

fn temp_path(prefix: &str) -> PathBuf {
    let unique = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock should be after epoch").as_nanos();
    std::env::temp_dir().join(format!("dbsel-log-debug-{prefix}-{unique}"))
}

#[test]
fn writes_formatted_lines_in_order() {
    let root = temp_path("lines");
    let log_path = root.join("logs").join("dbsel.log");
    let logger = DebugLogger::with_path(log_path.clone());

    logger.log(LogLevel::Info, "first").expect("write first entry");
    logger.log(LogLevel::Error, "second").expect("write second entry");
    logger.flush().expect("flush");

    let contents = fs::read_to_string(&log_path).expect("read log file");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[INFO] first"));
    assert!(lines[1].ends_with("[ERROR] second"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn appends_to_existing_log() {
    let root = temp_path("append");
    let log_path = root.join("dbsel.log");
    fs::create_dir_all(&root).expect("create temp dir");
    fs::write(&log_path, "previous run\n").expect("seed log file");

    let logger = DebugLogger::with_path(log_path.clone());
    logger.log(LogLevel::Debug, "next run").expect("append entry");

    let contents = fs::read_to_string(&log_path).expect("read log file");
    assert!(contents.starts_with("previous run\n"));
    assert!(contents.trim_end().ends_with("[DEBUG] next run"));

    let _ = fs::remove_dir_all(root);
}

#[cfg(unix)]
#[test]
fn private_directory_and_file_permissions_are_restrictive() {
    let root = temp_path("permissions");
    let log_dir = root.join("logs");
    let log_path = log_dir.join("dbsel.log");

    create_private_directory(&log_dir).expect("create private log directory");
    let _file = open_private_append_file(&log_path).expect("create private log file");

    let dir_mode = fs::metadata(&log_dir).expect("directory metadata").permissions().mode() & 0o777;
    let file_mode = fs::metadata(&log_path).expect("file metadata").permissions().mode() & 0o777;

    assert_eq!(dir_mode, 0o700);
    assert_eq!(file_mode, 0o600);

    let _ = fs::remove_dir_all(root);
}

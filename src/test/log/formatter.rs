use super::{format_record, format_record_at};
use crate::log::LogLevel;
use chrono::{DateTime, Local, TimeZone};

fn fixed_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 14, 9, 5, 7).single().expect("unambiguous local time")
}

#[test]
fn record_has_timestamp_level_and_message() {
    assert_eq!(
        format_record_at(fixed_time(), LogLevel::Warning, "mycli exited with status 2"),
        "2026-03-14 09:05:07.000 [WARN] mycli exited with status 2"
    );
}

#[test]
fn multi_line_messages_stay_on_one_line() {
    let line = format_record_at(fixed_time(), LogLevel::Error, "failed to launch mysql:\r\ndenied");
    assert_eq!(line, "2026-03-14 09:05:07.000 [ERROR] failed to launch mysql:\\r\\ndenied");
    assert!(!line.contains('\n'));
}

#[test]
fn current_time_uses_millisecond_timestamp() {
    let line = format_record(LogLevel::Info, "hello");

    assert!(line.ends_with(" [INFO] hello"), "unexpected line: {line}");
    let timestamp = &line[..line.len() - " [INFO] hello".len()];
    assert_eq!(timestamp.len(), 23, "unexpected timestamp: {timestamp}");
    assert_eq!(&timestamp[10..11], " ");
    assert_eq!(&timestamp[19..20], ".");
}

//! Log record layout: `<local time> [LEVEL] <message>`, one record per line.

use super::LogLevel;
use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub(super) fn format_record(level: LogLevel, message: &str) -> String {
    format_record_at(Local::now(), level, message)
}

fn format_record_at(at: DateTime<Local>, level: LogLevel, message: &str) -> String {
    // Client errors can carry multi-line OS messages.
    let message = message.replace('\r', "\\r").replace('\n', "\\n");
    format!("{} [{}] {}", at.format(TIMESTAMP_FORMAT), level.as_str(), message)
}

#[cfg(test)]
#[path = "../test/log/formatter.rs"]
mod tests;

//! Time related utils.

use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a datetime of the current moment in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a datetime as whole seconds since the Unix epoch.
///
/// ```text
/// 1318622958
/// ```
pub fn format_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}

//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in the system time zone.
///
/// The format is `YYYY-MM-DD HH:MM:SS`, the stamp written into plan files.
///
/// # Examples
///
/// ```rust
/// use markplan_core::display::LocalDateTime;
///
/// let now = jiff::Timestamp::now();
/// let stamp = LocalDateTime(&now).to_string();
/// assert_eq!(stamp.len(), "2025-01-01 09:00:00".len());
/// ```
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl LocalDateTime<'_> {
    /// Current time, formatted.
    pub fn now() -> String {
        LocalDateTime(&Timestamp::now()).to_string()
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S")
        )
    }
}

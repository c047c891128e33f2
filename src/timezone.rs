//! Helpers for showing timestamps in the configured local timezone.

use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};
use time_tz::{Offset, TimeZone};

/// Get the current UTC offset for a canonical timezone name, e.g. "Pacific/Auckland".
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

const LONG_DATE_FORMAT: &[BorrowedFormatItem] = format_description!(
    "[weekday repr:long], [month repr:long] [day padding:none], [year]"
);

/// Format `timestamp` as a long date in the given offset, e.g. "Sunday, October 18, 2026".
pub fn format_long_date(timestamp: OffsetDateTime, offset: UtcOffset) -> String {
    let local = timestamp.to_offset(offset);

    local
        .format(LONG_DATE_FORMAT)
        .unwrap_or_else(|_| local.date().to_string())
}

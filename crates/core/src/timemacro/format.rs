//! Rendering a shifted instant for each macro kind.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use super::types::{MacroKind, WeekOfYearFormat};

/// Render `t` the way `kind` is defined to look.
///
/// Calendar fields come from the instant's own timezone.
pub fn format_kind<Tz: TimeZone>(
    kind: MacroKind,
    t: &DateTime<Tz>,
    week_of_year: WeekOfYearFormat,
) -> String {
    let local = t.naive_local();
    match kind {
        MacroKind::DateHyphen => local.format("%Y-%m-%d").to_string(),
        MacroKind::Date => local.format("%Y%m%d").to_string(),
        MacroKind::HourPlain => local.hour().to_string(),
        MacroKind::Hour => format!("{:02}", local.hour()),
        MacroKind::Day => local.day().to_string(),
        MacroKind::Month => format!("{:02}", local.month()),
        MacroKind::Timestamp => t.timestamp().to_string(),
        MacroKind::WeekOfYear => match week_of_year {
            WeekOfYearFormat::Weekday => {
                format!("{:02}", local.weekday().num_days_from_sunday())
            }
            WeekOfYearFormat::IsoWeek => format!("{:02}", local.iso_week().week()),
        },
    }
}

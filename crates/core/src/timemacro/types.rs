//! Time macro types.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::errors::TimeMacroError;

/// The variable named inside a `${...}` placeholder.
///
/// Names are case-sensitive: `DATE` and `date` are different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroKind {
    /// `${DATE}`: hyphenated date, e.g. `2015-05-17`
    DateHyphen,
    /// `${date}`: compact date, e.g. `20150526`
    Date,
    /// `${HOUR}`: hour of day without padding, e.g. `2`
    HourPlain,
    /// `${hour}`: hour of day padded to two digits, e.g. `02`
    Hour,
    /// `${day}`: day of month without padding, e.g. `15`
    Day,
    /// `${month}`: month padded to two digits, e.g. `03`
    Month,
    /// `${timestamp}`: Unix seconds
    Timestamp,
    /// `${week_of_year}`: see [`WeekOfYearFormat`]
    WeekOfYear,
}

impl MacroKind {
    /// Every kind, in grammar order.
    pub const ALL: [MacroKind; 8] = [
        MacroKind::DateHyphen,
        MacroKind::Date,
        MacroKind::HourPlain,
        MacroKind::Hour,
        MacroKind::Day,
        MacroKind::Month,
        MacroKind::Timestamp,
        MacroKind::WeekOfYear,
    ];

    /// The exact spelling used inside a placeholder.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MacroKind::DateHyphen => "DATE",
            MacroKind::Date => "date",
            MacroKind::HourPlain => "HOUR",
            MacroKind::Hour => "hour",
            MacroKind::Day => "day",
            MacroKind::Month => "month",
            MacroKind::Timestamp => "timestamp",
            MacroKind::WeekOfYear => "week_of_year",
        }
    }

    /// Unit of the bare offset that directly follows the variable name.
    ///
    /// `None` means a bare offset is accepted by the grammar but ignored.
    #[must_use]
    pub fn primary_unit(self) -> Option<OffsetUnit> {
        match self {
            MacroKind::DateHyphen | MacroKind::Date | MacroKind::Day => {
                Some(OffsetUnit::Days)
            }
            MacroKind::HourPlain | MacroKind::Hour => Some(OffsetUnit::Hours),
            MacroKind::Month => Some(OffsetUnit::Months),
            MacroKind::Timestamp => Some(OffsetUnit::Seconds),
            MacroKind::WeekOfYear => None,
        }
    }
}

impl fmt::Display for MacroKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MacroKind {
    type Err = TimeMacroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MacroKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| TimeMacroError::UnknownVariable(s.to_string()))
    }
}

/// Units an offset term can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetUnit {
    /// Calendar months
    Months,
    /// Calendar days
    Days,
    /// Fixed 3600-second hours
    Hours,
    /// Seconds
    Seconds,
}

/// A single parsed placeholder.
///
/// Every offset is optional. An absent offset and a zero offset produce the
/// same result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMacro {
    pub kind: MacroKind,
    /// Bare `+n`/`-n` right after the name, in [`MacroKind::primary_unit`].
    pub offset: Option<i64>,
    /// `+nm` / `-nm`
    pub offset_month: Option<i64>,
    /// `+nd` / `-nd`
    pub offset_day: Option<i64>,
    /// `+nh` / `-nh`
    pub offset_hour: Option<i64>,
    /// `+ns` / `-ns`
    pub offset_second: Option<i64>,
}

impl ParsedMacro {
    /// A placeholder with no offsets at all.
    #[must_use]
    pub fn bare(kind: MacroKind) -> Self {
        Self {
            kind,
            offset: None,
            offset_month: None,
            offset_day: None,
            offset_hour: None,
            offset_second: None,
        }
    }
}

/// Output of `${week_of_year}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekOfYearFormat {
    /// Day of week, 00 (Sunday) to 06 (Saturday).
    ///
    /// This is what `week_of_year` has always produced, despite its name.
    #[default]
    Weekday,
    /// ISO 8601 week number, 01 to 53.
    IsoWeek,
}

/// Settings for a [`MacroExpander`](super::MacroExpander).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExpanderConfig {
    #[serde(default)]
    pub week_of_year: WeekOfYearFormat,
    /// Accept `${HOUR}` in addition to the default variable set.
    #[serde(default)]
    pub upper_hour: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_name() {
        for kind in MacroKind::ALL {
            assert_eq!(kind.name().parse::<MacroKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_names_are_case_sensitive() {
        assert_eq!("DATE".parse::<MacroKind>().unwrap(), MacroKind::DateHyphen);
        assert_eq!("date".parse::<MacroKind>().unwrap(), MacroKind::Date);
        assert!("Date".parse::<MacroKind>().is_err());
        assert!("MONTH".parse::<MacroKind>().is_err());
    }

    #[test]
    fn test_primary_unit_dispatch() {
        assert_eq!(MacroKind::Date.primary_unit(), Some(OffsetUnit::Days));
        assert_eq!(MacroKind::Day.primary_unit(), Some(OffsetUnit::Days));
        assert_eq!(MacroKind::Hour.primary_unit(), Some(OffsetUnit::Hours));
        assert_eq!(MacroKind::Month.primary_unit(), Some(OffsetUnit::Months));
        assert_eq!(MacroKind::Timestamp.primary_unit(), Some(OffsetUnit::Seconds));
        assert_eq!(MacroKind::WeekOfYear.primary_unit(), None);
    }

    #[test]
    fn test_config_defaults() {
        let cfg = ExpanderConfig::default();
        assert_eq!(cfg.week_of_year, WeekOfYearFormat::Weekday);
        assert!(!cfg.upper_hour);
    }
}

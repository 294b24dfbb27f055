//! Time macro expansion for templated text.
//!
//! Replaces placeholders such as `${date}`, `${DATE+3}` or `${date-1m+2d}`
//! with values computed from a caller-supplied anchor instant:
//!
//! - `${DATE}` -> `2015-05-17`, `${date}` -> `20150517`
//! - `${hour}` -> `02`, `${HOUR}` -> `2` (only with `upper_hour`)
//! - `${day}` -> `17`, `${month}` -> `05`
//! - `${timestamp}` -> Unix seconds
//! - `${week_of_year}` -> day of week `00`..`06`, or ISO week with `iso_week`
//!
//! A bare `+n`/`-n` after the name shifts by the kind's own unit (days for
//! dates, hours for hours, months for `month`, seconds for `timestamp`).
//! `±nm`, `±nd`, `±nh`, `±ns` terms then shift by months, days, hours and
//! seconds, in that order. With an anchor of 2018-01-01, `${date+1+2m}` is
//! `20180302` and `${date-1m}` is `20171201`.

pub mod errors;
pub mod expander;
pub mod format;
pub mod offset;
pub mod parser;
pub mod types;

pub use errors::TimeMacroError;
pub use expander::{MacroExpander, MacroMatch, expand_time_macros, unresolved_placeholders};
pub use format::format_kind;
pub use parser::{macro_regex, parse_macro};
pub use types::{ExpanderConfig, MacroKind, OffsetUnit, ParsedMacro, WeekOfYearFormat};

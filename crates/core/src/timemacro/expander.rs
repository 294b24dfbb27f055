//! Placeholder substitution over arbitrary text.

use std::ops::Range;
use std::sync::LazyLock;

use chrono::{DateTime, TimeZone};
use regex::{Captures, Regex};

use super::errors::TimeMacroError;
use super::format::format_kind;
use super::parser::{macro_regex, parse_captures};
use super::types::{ExpanderConfig, ParsedMacro};

// Anything shaped like a placeholder, whether or not it is a valid one.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^{}]*\}").expect("valid regex"));

/// Expands time macros in text according to an [`ExpanderConfig`].
#[derive(Debug, Clone, Default)]
pub struct MacroExpander {
    config: ExpanderConfig,
}

/// One placeholder found by [`MacroExpander::find_macros`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroMatch<'t> {
    /// Byte range of the placeholder in the scanned text.
    pub range: Range<usize>,
    /// The placeholder as written, braces included.
    pub raw: &'t str,
    pub parsed: Result<ParsedMacro, TimeMacroError>,
}

impl MacroExpander {
    #[must_use]
    pub fn new(config: ExpanderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ExpanderConfig {
        &self.config
    }

    /// Replace every time macro in `text` with its value relative to `anchor`.
    ///
    /// A placeholder whose offsets cannot be parsed, or whose result falls
    /// outside the representable range, is left exactly as written.
    pub fn expand<Tz: TimeZone>(&self, text: &str, anchor: &DateTime<Tz>) -> String {
        let re = macro_regex(self.config.upper_hour);
        re.replace_all(text, |caps: &Captures<'_>| {
            let raw = &caps[0];
            match self.expand_one(caps, anchor) {
                Ok(value) => {
                    tracing::trace!(placeholder = raw, %value, "expanded time macro");
                    value
                }
                Err(e) => {
                    tracing::debug!(placeholder = raw, error = %e, "leaving time macro unexpanded");
                    raw.to_string()
                }
            }
        })
        .into_owned()
    }

    fn expand_one<Tz: TimeZone>(
        &self,
        caps: &Captures<'_>,
        anchor: &DateTime<Tz>,
    ) -> Result<String, TimeMacroError> {
        let parsed = parse_captures(caps)?;
        let shifted = parsed
            .offset_time(anchor)
            .ok_or_else(|| TimeMacroError::OutOfRange { raw: caps[0].to_string() })?;
        Ok(format_kind(parsed.kind, &shifted, self.config.week_of_year))
    }

    /// List every placeholder this expander would act on, with its parse result.
    ///
    /// Useful for callers that want to reject malformed offsets instead of
    /// silently keeping them.
    #[must_use]
    pub fn find_macros<'t>(&self, text: &'t str) -> Vec<MacroMatch<'t>> {
        macro_regex(self.config.upper_hour)
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(MacroMatch {
                    range: whole.range(),
                    raw: whole.as_str(),
                    parsed: parse_captures(&caps),
                })
            })
            .collect()
    }
}

/// Expand time macros with the default configuration.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use timemacro_core::expand_time_macros;
///
/// let anchor = Utc.with_ymd_and_hms(2023, 2, 28, 0, 0, 0).unwrap();
/// let sql = expand_time_macros("where dt = ${date-3+1m+2d}", &anchor);
/// assert_eq!(sql, "where dt = 20230327");
/// ```
pub fn expand_time_macros<Tz: TimeZone>(text: &str, anchor: &DateTime<Tz>) -> String {
    MacroExpander::default().expand(text, anchor)
}

/// Every `${...}` span in `text`, valid macro or not.
///
/// Run this over expanded output to find anything that was left in place.
#[must_use]
pub fn unresolved_placeholders(text: &str) -> Vec<&str> {
    PLACEHOLDER_RE.find_iter(text).map(|m| m.as_str()).collect()
}

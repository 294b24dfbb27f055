//! Placeholder grammar and parsing.
//!
//! ```text
//! ${<var>[±n][±nm][±nd][±nh][±ns]}
//! ```
//!
//! The suffixed terms are all optional but must appear in month, day, hour,
//! second order. Anything else is not a placeholder and is left alone.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::errors::TimeMacroError;
use super::types::{MacroKind, ParsedMacro};

/// Variables accepted unless `upper_hour` is enabled.
const DEFAULT_KINDS: [MacroKind; 7] = [
    MacroKind::DateHyphen,
    MacroKind::Date,
    MacroKind::Hour,
    MacroKind::Day,
    MacroKind::Month,
    MacroKind::Timestamp,
    MacroKind::WeekOfYear,
];

const GROUP_VAR: &str = "var";
const GROUP_OFFSET: &str = "offset";
const GROUP_OFFSET_MONTH: &str = "offset_month";
const GROUP_OFFSET_DAY: &str = "offset_day";
const GROUP_OFFSET_HOUR: &str = "offset_hour";
const GROUP_OFFSET_SECOND: &str = "offset_second";

static DEFAULT_RE: LazyLock<Regex> = LazyLock::new(|| build_regex(&DEFAULT_KINDS));

static UPPER_HOUR_RE: LazyLock<Regex> = LazyLock::new(|| build_regex(&MacroKind::ALL));

// Anchored variant of UPPER_HOUR_RE, used to parse a standalone placeholder.
static SINGLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}$", pattern(&MacroKind::ALL))).expect("valid regex")
});

fn pattern(kinds: &[MacroKind]) -> String {
    let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
    format!(
        r"\$\{{(?P<{GROUP_VAR}>{})(?P<{GROUP_OFFSET}>[+\-]\d+)?(?:(?P<{GROUP_OFFSET_MONTH}>[+\-]\d+)m)?(?:(?P<{GROUP_OFFSET_DAY}>[+\-]\d+)d)?(?:(?P<{GROUP_OFFSET_HOUR}>[+\-]\d+)h)?(?:(?P<{GROUP_OFFSET_SECOND}>[+\-]\d+)s)?\}}",
        names.join("|")
    )
}

fn build_regex(kinds: &[MacroKind]) -> Regex {
    Regex::new(&pattern(kinds)).expect("valid regex")
}

/// The compiled placeholder grammar.
///
/// With `upper_hour` the grammar also accepts `${HOUR}`.
pub fn macro_regex(upper_hour: bool) -> &'static Regex {
    if upper_hour { &*UPPER_HOUR_RE } else { &*DEFAULT_RE }
}

/// Build a [`ParsedMacro`] from one match of [`macro_regex`].
pub fn parse_captures(caps: &Captures<'_>) -> Result<ParsedMacro, TimeMacroError> {
    let var = caps
        .name(GROUP_VAR)
        .ok_or_else(|| TimeMacroError::NotAMacro(caps[0].to_string()))?;
    let kind: MacroKind = var.as_str().parse()?;

    Ok(ParsedMacro {
        kind,
        offset: parse_group(caps, GROUP_OFFSET, "primary")?,
        offset_month: parse_group(caps, GROUP_OFFSET_MONTH, "month")?,
        offset_day: parse_group(caps, GROUP_OFFSET_DAY, "day")?,
        offset_hour: parse_group(caps, GROUP_OFFSET_HOUR, "hour")?,
        offset_second: parse_group(caps, GROUP_OFFSET_SECOND, "second")?,
    })
}

/// Parse a single standalone placeholder such as `${date-1m}`.
///
/// All variable names, including `HOUR`, are accepted here.
pub fn parse_macro(input: &str) -> Result<ParsedMacro, TimeMacroError> {
    let caps = SINGLE_RE
        .captures(input)
        .ok_or_else(|| TimeMacroError::NotAMacro(input.to_string()))?;
    parse_captures(&caps)
}

fn parse_group(
    caps: &Captures<'_>,
    group: &str,
    term: &'static str,
) -> Result<Option<i64>, TimeMacroError> {
    let Some(m) = caps.name(group) else {
        return Ok(None);
    };
    let value = m.as_str();
    if value.is_empty() {
        return Ok(None);
    }

    value.parse::<i64>().map(Some).map_err(|source| TimeMacroError::InvalidOffset {
        term,
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare() {
        let m = parse_macro("${date}").unwrap();
        assert_eq!(m, ParsedMacro::bare(MacroKind::Date));
    }

    #[test]
    fn test_parse_primary_offset() {
        let m = parse_macro("${DATE+3}").unwrap();
        assert_eq!(m.kind, MacroKind::DateHyphen);
        assert_eq!(m.offset, Some(3));
        assert_eq!(m.offset_day, None);
    }

    #[test]
    fn test_parse_full_chain() {
        let m = parse_macro("${timestamp+1-2m+3d-4h+5s}").unwrap();
        assert_eq!(
            m,
            ParsedMacro {
                kind: MacroKind::Timestamp,
                offset: Some(1),
                offset_month: Some(-2),
                offset_day: Some(3),
                offset_hour: Some(-4),
                offset_second: Some(5),
            }
        );
    }

    #[test]
    fn test_suffixed_term_without_primary() {
        // The bare group must give way so `+1` can be read as a month term.
        let m = parse_macro("${date+1m}").unwrap();
        assert_eq!(m.offset, None);
        assert_eq!(m.offset_month, Some(1));
    }

    #[test]
    fn test_out_of_order_terms_do_not_match() {
        assert!(matches!(parse_macro("${date+1d+1m}"), Err(TimeMacroError::NotAMacro(_))));
        assert!(matches!(parse_macro("${date+1s+1h}"), Err(TimeMacroError::NotAMacro(_))));
    }

    #[test]
    fn test_unknown_names_do_not_match() {
        assert!(parse_macro("${Date}").is_err());
        assert!(parse_macro("${year}").is_err());
        assert!(parse_macro("${ date}").is_err());
        assert!(parse_macro("${date +1}").is_err());
    }

    #[test]
    fn test_overflowing_offset_is_invalid() {
        let err = parse_macro("${date+99999999999999999999}").unwrap_err();
        match err {
            TimeMacroError::InvalidOffset { term, value, .. } => {
                assert_eq!(term, "primary");
                assert_eq!(value, "+99999999999999999999");
            }
            other => panic!("expected InvalidOffset, got {other:?}"),
        }
    }

    #[test]
    fn test_non_ascii_digits_are_invalid() {
        // `\d` is Unicode-aware, so these match the grammar but fail to parse.
        let err = parse_macro("${date-\u{0663}d}").unwrap_err();
        assert!(matches!(err, TimeMacroError::InvalidOffset { term: "day", .. }));
    }

    #[test]
    fn test_default_grammar_skips_upper_hour() {
        assert!(!macro_regex(false).is_match("${HOUR}"));
        assert!(macro_regex(true).is_match("${HOUR}"));
        assert!(macro_regex(false).is_match("${hour}"));
    }
}

//! Expansion of `${date}`-style time macros in templated text.
//!
//! See [`timemacro`] for the placeholder syntax.

pub mod config;
pub mod logging;
pub mod timemacro;

pub use timemacro::{
    ExpanderConfig, MacroExpander, MacroKind, ParsedMacro, TimeMacroError,
    WeekOfYearFormat, expand_time_macros, unresolved_placeholders,
};

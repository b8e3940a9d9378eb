//! Formatter objects embedded in compiled patterns.
//!
//! Each formatter captures everything it needs at compile time - the
//! argument id it reads, the locale-bound formatting closure, and any
//! sub-patterns for plural and select branches - so rendering never
//!  consults the source tree.

use std::collections::BTreeMap;
use std::fmt;

use crate::ast::PluralKind;
use crate::compiler::CompiledPattern;
use crate::intl::{DateTimeFormatFn, NumberFormatFn, PluralSelectFn};
use crate::skeleton::SkeletonFormat;
use crate::types::{Selector, Value};

/// A compiled formatter bound to a named argument.
#[derive(Clone)]
pub enum Formatter {
    /// Plain string interpolation. Falsy values render as the empty string.
    String { id: String },
    /// Locale number formatting with a resolved style.
    Number {
        id: String,
        format: NumberFormatFn,
    },
    /// Locale date or time formatting with a resolved named style.
    DateTime {
        id: String,
        format: DateTimeFormatFn,
    },
    /// Date formatting driven by a compiled field skeleton.
    Skeleton { id: String, format: SkeletonFormat },
    /// Literal text from a plural branch containing `#` markers. Rendering
    /// substitutes the offset-adjusted, number-formatted value for each
    /// unescaped `#`.
    PluralOffsetText {
        id: String,
        offset: i64,
        number_format: NumberFormatFn,
        text: String,
    },
    /// Branching on the plural category of a numeric argument.
    Plural {
        id: String,
        kind: PluralKind,
        offset: i64,
        options: BTreeMap<Selector, CompiledPattern>,
        select: PluralSelectFn,
    },
    /// Branching on the string value of an argument.
    Select {
        id: String,
        options: BTreeMap<Selector, CompiledPattern>,
    },
}

impl Formatter {
    /// The argument id this formatter reads at render time.
    pub fn id(&self) -> &str {
        match self {
            Self::String { id }
            | Self::Number { id, .. }
            | Self::DateTime { id, .. }
            | Self::Skeleton { id, .. }
            | Self::PluralOffsetText { id, .. }
            | Self::Plural { id, .. }
            | Self::Select { id, .. } => id,
        }
    }

    /// Format an argument value to text.
    ///
    /// Values of the wrong type render as the empty string rather than
    /// failing. [`Formatter::Plural`] and [`Formatter::Select`] do not
    /// produce text themselves; renderers resolve a branch with
    /// [`Formatter::get_option`] and walk its sub-pattern instead.
    pub fn format(&self, value: &Value) -> String {
        match self {
            Self::String { .. } => {
                if value.is_falsy() {
                    String::new()
                } else {
                    value.to_string()
                }
            }
            Self::Number { format, .. } => value.as_f64().map(|n| format(n)).unwrap_or_default(),
            Self::DateTime { format, .. } => {
                value.as_date().map(|d| format(d)).unwrap_or_default()
            }
            Self::Skeleton { format, .. } => {
                value.as_date().map(|d| format.format(d)).unwrap_or_default()
            }
            Self::PluralOffsetText {
                offset,
                number_format,
                text,
                ..
            } => {
                let Some(n) = value.as_f64() else {
                    return String::new();
                };
                let number = number_format(n - *offset as f64);
                unescape_hash(&replace_unescaped_hash(text, &number))
            }
            Self::Plural { .. } | Self::Select { .. } => String::new(),
        }
    }

    /// Resolve the sub-pattern for a plural or select branch.
    ///
    /// Plural resolution tries an exact `=N` selector first, then the
    /// CLDR category of the offset-adjusted value, then `other`. Select
    /// resolution tries the value's string form, then `other`. Returns
    /// `None` for non-branching formatters.
    pub fn get_option(&self, value: &Value) -> Option<&CompiledPattern> {
        match self {
            Self::Plural {
                offset,
                kind,
                options,
                select,
                ..
            } => {
                if let Some(pattern) = options.get(&Selector::exact(value)) {
                    return Some(pattern);
                }
                if let Some(n) = value.as_f64() {
                    let category = select(n - *offset as f64, *kind);
                    if let Some(pattern) = options.get(&Selector::new(category)) {
                        return Some(pattern);
                    }
                }
                options.get(&Selector::other())
            }
            Self::Select { options, .. } => options
                .get(&Selector::new(value.to_string()))
                .or_else(|| options.get(&Selector::other())),
            _ => None,
        }
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String { id } => f.debug_struct("String").field("id", id).finish(),
            Self::Number { id, .. } => f.debug_struct("Number").field("id", id).finish_non_exhaustive(),
            Self::DateTime { id, .. } => {
                f.debug_struct("DateTime").field("id", id).finish_non_exhaustive()
            }
            Self::Skeleton { id, format } => f
                .debug_struct("Skeleton")
                .field("id", id)
                .field("format", format)
                .finish(),
            Self::PluralOffsetText {
                id, offset, text, ..
            } => f
                .debug_struct("PluralOffsetText")
                .field("id", id)
                .field("offset", offset)
                .field("text", text)
                .finish_non_exhaustive(),
            Self::Plural {
                id,
                kind,
                offset,
                options,
                ..
            } => f
                .debug_struct("Plural")
                .field("id", id)
                .field("kind", kind)
                .field("offset", offset)
                .field("options", options)
                .finish_non_exhaustive(),
            Self::Select { id, options } => f
                .debug_struct("Select")
                .field("id", id)
                .field("options", options)
                .finish(),
        }
    }
}

/// Whether `text` contains a `#` not preceded by a backslash.
pub(crate) fn contains_unescaped_hash(text: &str) -> bool {
    let mut prev = None;
    for c in text.chars() {
        if c == '#' && prev != Some('\\') {
            return true;
        }
        prev = Some(c);
    }
    false
}

/// Replace each unescaped `#` in `text` with `replacement`.
pub(crate) fn replace_unescaped_hash(text: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = None;
    for c in text.chars() {
        if c == '#' && prev != Some('\\') {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// Turn each `\#` escape sequence into a literal `#`.
pub(crate) fn unescape_hash(text: &str) -> String {
    text.replace("\\#", "#")
}

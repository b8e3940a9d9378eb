//! Locale formatting services consumed by compiled patterns.
//!
//! This module defines the collaborator contracts the compiler calls out to
//! (number, date/time, and plural-category services), a built-in English
//! [`DefaultProvider`], and the icu-backed default plural selector.

mod plural;
mod provider;

pub use plural::{plural_category, plural_select};
pub use provider::{
    DateTimeFormatFn, DateTimeOptions, DefaultProvider, FormatProvider, FormatStyles, NamedStyle,
    NumberFormatFn, NumberOptions, NumberStyle, PluralSelectFn, TextWidth,
};

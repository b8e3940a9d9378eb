//! Core public types used across the crate.

mod date;
mod selector;
mod value;

pub use date::CalendarDate;
pub use selector::Selector;
pub use value::Value;

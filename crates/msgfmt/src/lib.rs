//! Message pattern compiler.
//!
//! Compiles ICU MessageFormat-style syntax trees into render-ready
//! patterns: ordered literal text and formatter objects bound to a locale.
//! Number, date, and plural formatting are delegated to a pluggable
//! [`FormatProvider`]; a built-in English provider and icu-backed plural
//! rules make the crate usable out of the box. Date arguments may use CLDR
//! field skeletons such as `yMMMd`, expanded by the [`skeleton`] module.
//!
//! ```
//! use msgfmt::{Compiler, FormatSpec, Node, PatternPart, PluralKind, Selector, Value};
//!
//! let message = Node::message(vec![Node::formatted(
//!     "count",
//!     FormatSpec::Plural {
//!         kind: PluralKind::Cardinal,
//!         offset: 0,
//!         options: vec![
//!             (Selector::new("one"), Node::message(vec![Node::text("# item")])),
//!             (Selector::new("other"), Node::message(vec![Node::text("# items")])),
//!         ],
//!     },
//! )]);
//!
//! let pattern = Compiler::builder().locale("en").build().compile(&message).unwrap();
//! let PatternPart::Format(plural) = &pattern.parts()[0] else {
//!     panic!("expected a formatter");
//! };
//! let branch = plural.get_option(&Value::from(3)).unwrap();
//! let PatternPart::Format(text) = &branch.parts()[0] else {
//!     panic!("expected deferred # substitution");
//! };
//! assert_eq!(text.format(&Value::from(3)), "3 items");
//! ```

pub mod ast;
pub mod compiler;
pub mod intl;
pub mod skeleton;
pub mod types;

pub use ast::{DateStyle, FormatSpec, Node, PluralKind};
pub use compiler::{
    CompileError, CompiledPattern, Compiler, Formatter, PatternPart, compute_suggestions,
};
pub use intl::{
    DateTimeFormatFn, DateTimeOptions, DefaultProvider, FormatProvider, FormatStyles, NamedStyle,
    NumberFormatFn, NumberOptions, NumberStyle, PluralSelectFn, TextWidth, plural_category,
    plural_select,
};
pub use skeleton::SkeletonFormat;
pub use types::{CalendarDate, Selector, Value};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or `CalendarDate` values directly. Renderers
/// consume this map to supply argument values to a compiled pattern.
///
/// # Example
///
/// ```
/// use msgfmt::{args, Value};
///
/// let a = args! { "count" => 3, "name" => "Alice" };
/// assert_eq!(a.len(), 2);
/// assert_eq!(a["count"].as_f64(), Some(3.0));
/// assert_eq!(a["name"].as_str(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! args {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}

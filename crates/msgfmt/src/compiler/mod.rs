//! Pattern compilation.
//!
//! Turns a parsed message tree into a [`CompiledPattern`]: an ordered list of
//! literal strings and [`Formatter`] objects that a renderer interleaves with
//! runtime argument values. Compilation resolves format styles, binds locale
//! formatting closures, and validates structure; nothing in the output needs
//! to consult the source tree again.

mod compile;
mod error;
mod format;
mod pattern;

pub use compile::Compiler;
pub use error::{CompileError, compute_suggestions};
pub use format::Formatter;
pub use pattern::{CompiledPattern, PatternPart};

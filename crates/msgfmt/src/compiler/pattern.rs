//! Compiled pattern representation.

use crate::compiler::Formatter;

/// A single element of a compiled pattern: either literal text to emit
/// verbatim, or a formatter that turns a runtime argument value into text.
#[derive(Debug, Clone)]
pub enum PatternPart {
    Literal(String),
    Format(Formatter),
}

/// The output of compilation: an ordered sequence of pattern parts.
///
/// Rendering a message is a single pass over the parts, emitting literals
/// as-is and invoking each formatter with the argument value it names.
#[derive(Debug, Clone, Default)]
pub struct CompiledPattern {
    parts: Vec<PatternPart>,
}

impl CompiledPattern {
    pub fn new(parts: Vec<PatternPart>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

//! Syntax tree types for parsed message templates.
//!
//! These nodes are produced by an external parser; this crate only compiles
//! them. The shapes are public to enable external tooling (parsers,
//! serializers, linters).

use serde::{Deserialize, Serialize};

use crate::types::Selector;

/// A node of the message syntax tree.
///
/// An external parser supplies a tree of these; `Compiler::compile` requires
/// the root to be a [`Node::Message`] and every message element to be a
/// [`Node::Text`] or [`Node::Argument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// An ordered sequence of text and argument elements.
    Message(Vec<Node>),
    /// Literal text. May contain `\#` as an escaped literal hash.
    Text(String),
    /// An argument placeholder with an optional format specification.
    Argument {
        id: String,
        spec: Option<FormatSpec>,
    },
}

impl Node {
    /// A message pattern from its elements.
    pub fn message(elements: Vec<Node>) -> Node {
        Node::Message(elements)
    }

    /// A literal text element.
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(text.into())
    }

    /// An argument element with no format specification.
    pub fn argument(id: impl Into<String>) -> Node {
        Node::Argument {
            id: id.into(),
            spec: None,
        }
    }

    /// An argument element with a format specification.
    pub fn formatted(id: impl Into<String>, spec: FormatSpec) -> Node {
        Node::Argument {
            id: id.into(),
            spec: Some(spec),
        }
    }

    /// Human-readable node kind, used in structural error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Message(_) => "message pattern",
            Node::Text(_) => "text element",
            Node::Argument { .. } => "argument element",
        }
    }
}

/// How an argument value is formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormatSpec {
    /// Locale number formatting. `style` names an entry in the compiler's
    /// number style table; `None` uses the default decimal options.
    Number { style: Option<String> },
    /// Locale date formatting, either by named style or by skeleton.
    Date { style: DateStyle },
    /// Locale time formatting by named style.
    Time { style: String },
    /// Plural-category selection over sub-patterns.
    ///
    /// `offset` is subtracted from the argument value before category
    /// selection and before `#` substitution. The options mapping must
    /// contain an `other` entry.
    Plural {
        kind: PluralKind,
        offset: i64,
        options: Vec<(Selector, Node)>,
    },
    /// Exact-match selection over sub-patterns. The options mapping must
    /// contain an `other` entry.
    Select { options: Vec<(Selector, Node)> },
}

/// A date argument's style: a named entry in the date style table, or a
/// CLDR skeleton compiled by the skeleton expander.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DateStyle {
    Named(String),
    Skeleton(String),
}

/// Whether plural selection uses cardinal or ordinal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluralKind {
    Cardinal,
    Ordinal,
}

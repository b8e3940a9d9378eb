use serde::{Deserialize, Serialize};

use super::Value;

/// A key choosing among a plural/select argument's sub-patterns.
///
/// Selectors are either an exact-match form (`=5`), a plural-category name
/// (`one`, `few`, ...), the required fallback `other`, or an arbitrary
/// select key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Selector(String);

impl Selector {
    /// Create a selector from any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The required `other` fallback selector.
    pub fn other() -> Self {
        Self("other".to_string())
    }

    /// The exact-match selector for a value, e.g. `=5`.
    pub fn exact(value: &Value) -> Self {
        Self(format!("={value}"))
    }

    /// Whether this is an exact-match selector (`=N`).
    pub fn is_exact(&self) -> bool {
        self.0.starts_with('=')
    }

    /// Get the selector as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for Selector {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Selector {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Compilation errors.

use std::cmp::Ordering;

/// Errors produced while compiling a message tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A node appeared somewhere its kind is not allowed, for example a
    /// nested message used directly as a message element.
    #[error("Invalid structure: expected {expected}, found {found}")]
    InvalidStructure {
        expected: &'static str,
        found: &'static str,
    },

    /// A plural or select argument has no `other` option to fall back to.
    #[error("Missing required 'other' option in {kind} argument '{argument}'")]
    MissingOtherOption {
        kind: &'static str,
        argument: String,
    },

    /// A named format style was not found in the style tables.
    #[error("Unknown {kind} style '{style}'{}", format_suggestions(.suggestions))]
    UnknownStyle {
        kind: &'static str,
        style: String,
        available: Vec<String>,
        suggestions: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute "did you mean?" suggestions for an unknown name.
///
/// Uses Jaro-Winkler similarity to find candidates resembling the input,
/// returning at most three matches above the similarity threshold, best
/// first.
pub fn compute_suggestions(input: &str, candidates: &[String]) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(input, candidate), candidate))
        .filter(|&(score, _)| score > 0.7)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_ranked_by_similarity() {
        let candidates = vec![
            "percent".to_string(),
            "currency".to_string(),
            "decimal".to_string(),
        ];
        let suggestions = compute_suggestions("percnt", &candidates);
        assert_eq!(suggestions, vec!["percent".to_string()]);
    }

    #[test]
    fn no_suggestions_for_dissimilar_input() {
        let candidates = vec!["short".to_string(), "medium".to_string()];
        assert!(compute_suggestions("zzzzz", &candidates).is_empty());
    }

    #[test]
    fn unknown_style_message_includes_suggestions() {
        let err = CompileError::UnknownStyle {
            kind: "number",
            style: "percnt".to_string(),
            available: vec!["percent".to_string()],
            suggestions: vec!["percent".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unknown number style 'percnt', did you mean: percent?"
        );
    }
}

//! Integration tests for compile-time validation and pattern structure.

use msgfmt::{
    CompileError, Compiler, DateStyle, FormatSpec, Node, PluralKind, Selector,
};

fn compiler() -> Compiler {
    Compiler::builder().locale("en").build()
}

fn plural_options(selectors: &[&str]) -> Vec<(Selector, Node)> {
    selectors
        .iter()
        .map(|s| (Selector::new(*s), Node::message(vec![Node::text("x")])))
        .collect()
}

// =============================================================================
// Required `other` Option
// =============================================================================

#[test]
fn plural_without_other_is_rejected() {
    let message = Node::message(vec![Node::formatted(
        "n",
        FormatSpec::Plural {
            kind: PluralKind::Cardinal,
            offset: 0,
            options: plural_options(&["one", "few"]),
        },
    )]);
    assert_eq!(
        compiler().compile(&message).unwrap_err(),
        CompileError::MissingOtherOption {
            kind: "plural",
            argument: "n".to_string(),
        }
    );
}

#[test]
fn select_without_other_is_rejected() {
    let message = Node::message(vec![Node::formatted(
        "g",
        FormatSpec::Select {
            options: plural_options(&["male", "female"]),
        },
    )]);
    assert_eq!(
        compiler().compile(&message).unwrap_err(),
        CompileError::MissingOtherOption {
            kind: "select",
            argument: "g".to_string(),
        }
    );
}

#[test]
fn exact_selectors_do_not_satisfy_the_other_requirement() {
    let message = Node::message(vec![Node::formatted(
        "n",
        FormatSpec::Plural {
            kind: PluralKind::Cardinal,
            offset: 0,
            options: plural_options(&["=0", "=1"]),
        },
    )]);
    assert!(matches!(
        compiler().compile(&message).unwrap_err(),
        CompileError::MissingOtherOption { .. }
    ));
}

// =============================================================================
// Style Resolution
// =============================================================================

#[test]
fn unknown_number_style_suggests_close_names() {
    let message = Node::message(vec![Node::formatted(
        "n",
        FormatSpec::Number {
            style: Some("percnt".to_string()),
        },
    )]);
    let Err(CompileError::UnknownStyle {
        kind,
        style,
        available,
        suggestions,
    }) = compiler().compile(&message)
    else {
        panic!("expected an unknown style error");
    };
    assert_eq!(kind, "number");
    assert_eq!(style, "percnt");
    assert!(available.contains(&"decimal".to_string()));
    assert_eq!(suggestions, vec!["percent".to_string()]);
}

#[test]
fn unknown_date_style_is_rejected() {
    let message = Node::message(vec![Node::formatted(
        "d",
        FormatSpec::Date {
            style: DateStyle::Named("med".to_string()),
        },
    )]);
    let Err(CompileError::UnknownStyle {
        kind, suggestions, ..
    }) = compiler().compile(&message)
    else {
        panic!("expected an unknown style error");
    };
    assert_eq!(kind, "date");
    assert!(suggestions.contains(&"medium".to_string()));
}

#[test]
fn unknown_time_style_is_rejected() {
    let message = Node::message(vec![Node::formatted(
        "t",
        FormatSpec::Time {
            style: "instant".to_string(),
        },
    )]);
    assert!(matches!(
        compiler().compile(&message).unwrap_err(),
        CompileError::UnknownStyle { kind: "time", .. }
    ));
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn repeated_compilation_is_structurally_identical() {
    let message = Node::message(vec![
        Node::text("You have "),
        Node::formatted(
            "n",
            FormatSpec::Plural {
                kind: PluralKind::Cardinal,
                offset: 0,
                options: vec![
                    (
                        Selector::new("one"),
                        Node::message(vec![Node::text("# message")]),
                    ),
                    (
                        Selector::new("other"),
                        Node::message(vec![Node::text("# messages")]),
                    ),
                ],
            },
        ),
        Node::text("."),
    ]);
    let first = compiler().compile(&message).unwrap();
    let second = compiler().compile(&message).unwrap();
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
}

#[test]
fn option_order_in_the_source_does_not_change_structure() {
    let ordered = |options: Vec<(&str, &str)>| {
        let message = Node::message(vec![Node::formatted(
            "n",
            FormatSpec::Plural {
                kind: PluralKind::Cardinal,
                offset: 0,
                options: options
                    .into_iter()
                    .map(|(s, t)| (Selector::new(s), Node::message(vec![Node::text(t)])))
                    .collect(),
            },
        )]);
        compiler().compile(&message).unwrap()
    };
    let a = ordered(vec![("one", "1"), ("other", "n")]);
    let b = ordered(vec![("other", "n"), ("one", "1")]);
    assert_eq!(format!("{a:?}"), format!("{b:?}"));
}

//! Integration tests for plural and select branching, offsets, and `#`
//! substitution scope.

use std::collections::HashMap;
use std::sync::Arc;

use msgfmt::{
    CompiledPattern, Compiler, FormatSpec, Node, PatternPart, PluralKind, Selector, Value, args,
};

fn render(pattern: &CompiledPattern, arguments: &HashMap<String, Value>) -> String {
    let mut out = String::new();
    for part in pattern.parts() {
        match part {
            PatternPart::Literal(text) => out.push_str(text),
            PatternPart::Format(formatter) => {
                let value = arguments
                    .get(formatter.id())
                    .cloned()
                    .unwrap_or_else(|| Value::from(""));
                match formatter.get_option(&value) {
                    Some(branch) => out.push_str(&render(branch, arguments)),
                    None => out.push_str(&formatter.format(&value)),
                }
            }
        }
    }
    out
}

fn compiler() -> Compiler {
    Compiler::builder().locale("en").build()
}

fn plural(options: Vec<(&str, Node)>) -> FormatSpec {
    plural_with_offset(0, options)
}

fn plural_with_offset(offset: i64, options: Vec<(&str, Node)>) -> FormatSpec {
    FormatSpec::Plural {
        kind: PluralKind::Cardinal,
        offset,
        options: options
            .into_iter()
            .map(|(selector, body)| (Selector::new(selector), body))
            .collect(),
    }
}

fn select(options: Vec<(&str, Node)>) -> FormatSpec {
    FormatSpec::Select {
        options: options
            .into_iter()
            .map(|(selector, body)| (Selector::new(selector), body))
            .collect(),
    }
}

// =============================================================================
// Category Selection
// =============================================================================

#[test]
fn cardinal_categories_select_branches() {
    let message = Node::message(vec![Node::formatted(
        "n",
        plural(vec![
            ("one", Node::message(vec![Node::text("one item")])),
            ("other", Node::message(vec![Node::text("many items")])),
        ]),
    )]);
    let pattern = compiler().compile(&message).unwrap();
    assert_eq!(render(&pattern, &args! { "n" => 1 }), "one item");
    assert_eq!(render(&pattern, &args! { "n" => 5 }), "many items");
}

#[test]
fn missing_category_falls_back_to_other() {
    let message = Node::message(vec![Node::formatted(
        "n",
        plural(vec![(
            "other",
            Node::message(vec![Node::text("fallback")]),
        )]),
    )]);
    let pattern = compiler().compile(&message).unwrap();
    assert_eq!(render(&pattern, &args! { "n" => 1 }), "fallback");
}

#[test]
fn ordinal_categories_select_branches() {
    let options = FormatSpec::Plural {
        kind: PluralKind::Ordinal,
        offset: 0,
        options: vec![
            (
                Selector::new("one"),
                Node::message(vec![Node::text("#st")]),
            ),
            (
                Selector::new("two"),
                Node::message(vec![Node::text("#nd")]),
            ),
            (
                Selector::new("few"),
                Node::message(vec![Node::text("#rd")]),
            ),
            (
                Selector::new("other"),
                Node::message(vec![Node::text("#th")]),
            ),
        ],
    };
    let message = Node::message(vec![Node::formatted("n", options)]);
    let pattern = compiler().compile(&message).unwrap();
    assert_eq!(render(&pattern, &args! { "n" => 1 }), "1st");
    assert_eq!(render(&pattern, &args! { "n" => 2 }), "2nd");
    assert_eq!(render(&pattern, &args! { "n" => 3 }), "3rd");
    assert_eq!(render(&pattern, &args! { "n" => 11 }), "11th");
}

#[test]
fn exact_selector_beats_category() {
    let message = Node::message(vec![Node::formatted(
        "n",
        plural(vec![
            ("=0", Node::message(vec![Node::text("no items")])),
            ("one", Node::message(vec![Node::text("one item")])),
            ("other", Node::message(vec![Node::text("# items")])),
        ]),
    )]);
    let pattern = compiler().compile(&message).unwrap();
    assert_eq!(render(&pattern, &args! { "n" => 0 }), "no items");
    assert_eq!(render(&pattern, &args! { "n" => 1 }), "one item");
    assert_eq!(render(&pattern, &args! { "n" => 2 }), "2 items");
}

#[test]
fn select_matches_string_value() {
    let message = Node::message(vec![Node::formatted(
        "gender",
        select(vec![
            ("female", Node::message(vec![Node::text("her")])),
            ("male", Node::message(vec![Node::text("his")])),
            ("other", Node::message(vec![Node::text("their")])),
        ]),
    )]);
    let pattern = compiler().compile(&message).unwrap();
    assert_eq!(render(&pattern, &args! { "gender" => "female" }), "her");
    assert_eq!(render(&pattern, &args! { "gender" => "robot" }), "their");
}

// =============================================================================
// Offsets and `#` Substitution
// =============================================================================

#[test]
fn hash_substitutes_the_plural_value() {
    let message = Node::message(vec![Node::formatted(
        "n",
        plural(vec![
            ("one", Node::message(vec![Node::text("# item")])),
            ("other", Node::message(vec![Node::text("# items")])),
        ]),
    )]);
    let pattern = compiler().compile(&message).unwrap();
    assert_eq!(render(&pattern, &args! { "n" => 1 }), "1 item");
    assert_eq!(render(&pattern, &args! { "n" => 1500 }), "1,500 items");
}

#[test]
fn offset_applies_to_category_and_hash() {
    // "You and # others": with offset 1, a value of 2 selects "one".
    let message = Node::message(vec![Node::formatted(
        "guests",
        plural_with_offset(
            1,
            vec![
                ("one", Node::message(vec![Node::text("You and # other")])),
                ("other", Node::message(vec![Node::text("You and # others")])),
            ],
        ),
    )]);
    let pattern = compiler().compile(&message).unwrap();
    assert_eq!(render(&pattern, &args! { "guests" => 2 }), "You and 1 other");
    assert_eq!(
        render(&pattern, &args! { "guests" => 4 }),
        "You and 3 others"
    );
}

#[test]
fn escaped_hash_in_plural_branch_stays_literal() {
    let message = Node::message(vec![Node::formatted(
        "n",
        plural(vec![(
            "other",
            Node::message(vec![Node::text(r"\# items")]),
        )]),
    )]);
    let pattern = compiler().compile(&message).unwrap();
    assert_eq!(render(&pattern, &args! { "n" => 5 }), "# items");
}

#[test]
fn escaped_and_bare_hash_in_the_same_branch() {
    let message = Node::message(vec![Node::formatted(
        "n",
        plural(vec![(
            "other",
            Node::message(vec![Node::text(r"\# marks # items")]),
        )]),
    )]);
    let pattern = compiler().compile(&message).unwrap();
    assert_eq!(render(&pattern, &args! { "n" => 5 }), "# marks 5 items");
}

// =============================================================================
// Scope Nesting
// =============================================================================

#[test]
fn select_clears_the_enclosing_plural_scope() {
    // A `#` inside a select branch is literal text even when the select is
    // nested under a plural.
    let inner = Node::formatted(
        "g",
        select(vec![
            ("x", Node::message(vec![Node::text("a # b")])),
            ("other", Node::message(vec![Node::text("c")])),
        ]),
    );
    let message = Node::message(vec![Node::formatted(
        "n",
        plural(vec![("other", Node::message(vec![inner]))]),
    )]);
    let pattern = compiler().compile(&message).unwrap();
    assert_eq!(render(&pattern, &args! { "n" => 5, "g" => "x" }), "a # b");
}

#[test]
fn inner_plural_scope_shadows_the_outer() {
    let inner = Node::formatted(
        "inner",
        plural(vec![("other", Node::message(vec![Node::text("# inner")]))]),
    );
    let message = Node::message(vec![Node::formatted(
        "outer",
        plural(vec![("other", Node::message(vec![inner]))]),
    )]);
    let pattern = compiler().compile(&message).unwrap();
    assert_eq!(
        render(&pattern, &args! { "outer" => 2, "inner" => 7 }),
        "7 inner"
    );
}

#[test]
fn text_around_a_nested_select_still_substitutes() {
    let inner = Node::formatted(
        "g",
        select(vec![("other", Node::message(vec![Node::text("them")]))]),
    );
    let message = Node::message(vec![Node::formatted(
        "n",
        plural(vec![(
            "other",
            Node::message(vec![Node::text("# for "), inner]),
        )]),
    )]);
    let pattern = compiler().compile(&message).unwrap();
    assert_eq!(
        render(&pattern, &args! { "n" => 3, "g" => "any" }),
        "3 for them"
    );
}

// =============================================================================
// Custom Plural Selection
// =============================================================================

#[test]
fn custom_plural_select_overrides_the_default() {
    let custom = Compiler::builder()
        .locale("en")
        .plural_select(Arc::new(|_, _| "other".to_string()))
        .build();
    let message = Node::message(vec![Node::formatted(
        "n",
        plural(vec![
            ("one", Node::message(vec![Node::text("one")])),
            ("other", Node::message(vec![Node::text("other")])),
        ]),
    )]);
    let pattern = custom.compile(&message).unwrap();
    assert_eq!(render(&pattern, &args! { "n" => 1 }), "other");
}

#[test]
fn locale_changes_category_selection() {
    // Russian: 2 is "few", 5 is "many".
    let russian = Compiler::builder().locale("ru").build();
    let message = Node::message(vec![Node::formatted(
        "n",
        plural(vec![
            ("one", Node::message(vec![Node::text("товар")])),
            ("few", Node::message(vec![Node::text("товара")])),
            ("many", Node::message(vec![Node::text("товаров")])),
            ("other", Node::message(vec![Node::text("товара")])),
        ]),
    )]);
    let pattern = russian.compile(&message).unwrap();
    assert_eq!(render(&pattern, &args! { "n" => 2 }), "товара");
    assert_eq!(render(&pattern, &args! { "n" => 5 }), "товаров");
}

//! CLDR plural category resolution.
//!
//! Default plural-category selector used when the compiler is not given an
//! external one. Different languages have different plural rules - English
//! has "one" and "other", while Russian has "one", "few", "many", and
//! "other", and Arabic uses all six categories. Ordinal rules differ again:
//! English ordinals use "one", "two", "few", and "other" (1st, 2nd, 3rd,
//! 4th).
//!
//! Plural rules are cached per thread per language and rule kind to avoid
//! re-creating `PluralRules` instances on every call. The cache is
//! initialized lazily on first access within each thread.

use std::cell::RefCell;
use std::sync::Arc;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

use crate::ast::PluralKind;
use crate::intl::PluralSelectFn;

/// Supported language codes for plural rule resolution.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "de", "el", "en", "es", "fa", "fr", "he", "hi", "id", "it", "ja", "ko", "nl", "pl",
    "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language code and rule kind.
    static PLURAL_RULES_CACHE: RefCell<Vec<((&'static str, PluralKind), PluralRules)>> =
        const { RefCell::new(Vec::new()) };
}

/// Normalize a language code to a supported static string reference.
///
/// Returns the canonical `&'static str` for the language, or `"en"` for
/// unrecognized codes. A BCP 47 tag is reduced to its primary subtag.
fn normalize_lang(lang: &str) -> &'static str {
    let primary = lang.split('-').next().unwrap_or(lang);
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == primary)
        .copied()
        .unwrap_or("en")
}

/// Build `PluralRules` for a normalized language code and rule kind.
fn build_rules(lang: &'static str, kind: PluralKind) -> PluralRules {
    let loc = match lang {
        "en" => locale!("en"),
        "ru" => locale!("ru"),
        "ar" => locale!("ar"),
        "de" => locale!("de"),
        "es" => locale!("es"),
        "fr" => locale!("fr"),
        "it" => locale!("it"),
        "pt" => locale!("pt"),
        "ja" => locale!("ja"),
        "zh" => locale!("zh"),
        "ko" => locale!("ko"),
        "nl" => locale!("nl"),
        "pl" => locale!("pl"),
        "tr" => locale!("tr"),
        "uk" => locale!("uk"),
        "vi" => locale!("vi"),
        "th" => locale!("th"),
        "id" => locale!("id"),
        "el" => locale!("el"),
        "ro" => locale!("ro"),
        "fa" => locale!("fa"),
        "bn" => locale!("bn"),
        "hi" => locale!("hi"),
        "he" => locale!("he"),
        _ => locale!("en"),
    };
    let rule_type = match kind {
        PluralKind::Cardinal => PluralRuleType::Cardinal,
        PluralKind::Ordinal => PluralRuleType::Ordinal,
    };
    PluralRules::try_new(loc.into(), rule_type.into()).expect("locale should be supported")
}

/// Translate a `PluralCategory` enum to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Get the CLDR plural category for a number in a given language.
///
/// Returns one of: "zero", "one", "two", "few", "many", "other". Rules are
/// cached per thread per language and kind, so repeated calls reuse the
/// previously constructed `PluralRules`.
///
/// # Examples
///
/// ```
/// use msgfmt::{PluralKind, plural_category};
///
/// // English cardinals: 1 = "one", everything else = "other"
/// assert_eq!(plural_category("en", 1, PluralKind::Cardinal), "one");
/// assert_eq!(plural_category("en", 2, PluralKind::Cardinal), "other");
///
/// // English ordinals: 1st, 2nd, 3rd, 4th
/// assert_eq!(plural_category("en", 2, PluralKind::Ordinal), "two");
/// assert_eq!(plural_category("en", 3, PluralKind::Ordinal), "few");
///
/// // Russian: complex rules for "one", "few", "many", "other"
/// assert_eq!(plural_category("ru", 2, PluralKind::Cardinal), "few");
/// assert_eq!(plural_category("ru", 5, PluralKind::Cardinal), "many");
/// ```
pub fn plural_category(lang: &str, n: i64, kind: PluralKind) -> &'static str {
    let lang = normalize_lang(lang);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|(key, _)| *key == (lang, kind)) {
            return category_str(entry.1.category_for(n));
        }
        let rules = build_rules(lang, kind);
        let category = category_str(rules.category_for(n));
        cache.push(((lang, kind), rules));
        category
    })
}

/// The default [`PluralSelectFn`] for a locale, backed by icu plural rules.
///
/// Fractional values are truncated toward zero before category selection.
pub fn plural_select(locale: &str) -> PluralSelectFn {
    let lang = normalize_lang(locale);
    Arc::new(move |n, kind| plural_category(lang, n as i64, kind).to_string())
}

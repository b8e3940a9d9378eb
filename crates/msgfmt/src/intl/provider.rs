//! Collaborator contracts for locale-aware formatting, plus the built-in
//! English provider.
//!
//! The compiler never formats numbers or dates itself: it asks a
//! [`FormatProvider`] for a formatting function up front and stores that
//! function inside the compiled pattern. The returned closures are `Arc`ed
//! so compiled patterns stay immutable and safe for concurrent reads.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::ast::PluralKind;
use crate::types::CalendarDate;

/// A locale-bound number formatting function.
pub type NumberFormatFn = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// A locale-bound date/time formatting function.
pub type DateTimeFormatFn = Arc<dyn Fn(&CalendarDate) -> String + Send + Sync>;

/// A plural category selector: value (already offset-adjusted) and rule
/// kind to a category name such as `"one"` or `"other"`.
pub type PluralSelectFn = Arc<dyn Fn(f64, PluralKind) -> String + Send + Sync>;

/// Locale formatting service the compiler delegates to.
///
/// Implementations receive a locale descriptor and style options and return
/// a ready-to-use formatting function. Both methods are called during
/// compilation only; the returned functions are called at render time.
pub trait FormatProvider: Send + Sync {
    /// A number formatting function for the locale and options.
    fn number_format(&self, locale: &str, options: &NumberOptions) -> NumberFormatFn;

    /// A date/time formatting function for the locale and options.
    fn date_time_format(&self, locale: &str, options: &DateTimeOptions) -> DateTimeFormatFn;
}

/// Number formatting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStyle {
    #[default]
    Decimal,
    Percent,
    Currency,
}

/// Number formatting configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberOptions {
    pub style: NumberStyle,
    /// ISO 4217 currency code, used when `style` is `Currency`.
    pub currency: Option<String>,
    pub use_grouping: bool,
    pub minimum_fraction_digits: u8,
    pub maximum_fraction_digits: u8,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            style: NumberStyle::Decimal,
            currency: None,
            use_grouping: true,
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 3,
        }
    }
}

/// Rendering width for a named date component (era, month, weekday).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextWidth {
    Narrow,
    Short,
    Long,
}

/// A named overall date or time style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedStyle {
    Short,
    Medium,
    Long,
    Full,
}

/// Date/time formatting configuration.
///
/// When one of the single-component fields (`era`, `month`, `weekday`) is
/// set, the provider renders just that component; otherwise it renders the
/// configured `date_style`/`time_style` combination. The skeleton expander
/// uses the single-component form to look up localized names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateTimeOptions {
    pub date_style: Option<NamedStyle>,
    pub time_style: Option<NamedStyle>,
    pub era: Option<TextWidth>,
    pub month: Option<TextWidth>,
    pub weekday: Option<TextWidth>,
}

/// Named style tables used to resolve `{arg, number, percent}`-style
/// arguments. Keys are the style names a message may reference.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatStyles {
    pub number: BTreeMap<String, NumberOptions>,
    pub date: BTreeMap<String, DateTimeOptions>,
    pub time: BTreeMap<String, DateTimeOptions>,
}

impl Default for FormatStyles {
    fn default() -> Self {
        let mut number = BTreeMap::new();
        number.insert("decimal".to_string(), NumberOptions::default());
        number.insert(
            "integer".to_string(),
            NumberOptions {
                maximum_fraction_digits: 0,
                ..NumberOptions::default()
            },
        );
        number.insert(
            "percent".to_string(),
            NumberOptions {
                style: NumberStyle::Percent,
                ..NumberOptions::default()
            },
        );
        number.insert(
            "currency".to_string(),
            NumberOptions {
                style: NumberStyle::Currency,
                currency: Some("USD".to_string()),
                minimum_fraction_digits: 2,
                maximum_fraction_digits: 2,
                ..NumberOptions::default()
            },
        );

        let mut date = BTreeMap::new();
        let mut time = BTreeMap::new();
        for (name, style) in [
            ("short", NamedStyle::Short),
            ("medium", NamedStyle::Medium),
            ("long", NamedStyle::Long),
            ("full", NamedStyle::Full),
        ] {
            date.insert(
                name.to_string(),
                DateTimeOptions {
                    date_style: Some(style),
                    ..DateTimeOptions::default()
                },
            );
            time.insert(
                name.to_string(),
                DateTimeOptions {
                    time_style: Some(style),
                    ..DateTimeOptions::default()
                },
            );
        }

        Self { number, date, time }
    }
}

// -- Built-in English provider ----------------------------------------------

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_NARROW: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

const WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKDAYS_LONG: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const WEEKDAYS_NARROW: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Built-in English [`FormatProvider`].
///
/// Renders grouping-separated numbers and English era/month/weekday names
/// and named date/time styles, so the crate is usable without wiring an
/// external locale service. The locale argument is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProvider;

impl FormatProvider for DefaultProvider {
    fn number_format(&self, _locale: &str, options: &NumberOptions) -> NumberFormatFn {
        let options = options.clone();
        Arc::new(move |n| format_number(&options, n))
    }

    fn date_time_format(&self, _locale: &str, options: &DateTimeOptions) -> DateTimeFormatFn {
        let options = options.clone();
        Arc::new(move |date| format_date_time(&options, date))
    }
}

fn format_number(options: &NumberOptions, n: f64) -> String {
    let (value, prefix, suffix) = match options.style {
        NumberStyle::Decimal => (n, String::new(), ""),
        NumberStyle::Percent => (n * 100.0, String::new(), "%"),
        NumberStyle::Currency => (n, currency_prefix(options.currency.as_deref()), ""),
    };

    let min = usize::from(options.minimum_fraction_digits);
    let max = usize::from(options.maximum_fraction_digits).max(min);
    let digits = if value.fract() == 0.0 { min } else { max };
    let formatted = format!("{value:.digits$}");

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f),
        None => (unsigned, ""),
    };

    let grouped = if options.use_grouping {
        group_thousands(integer)
    } else {
        integer.to_string()
    };

    // Trim trailing zeros down to the minimum fraction digits.
    let mut fraction = fraction.to_string();
    while fraction.len() > min && fraction.ends_with('0') {
        fraction.pop();
    }

    if fraction.is_empty() {
        format!("{sign}{prefix}{grouped}{suffix}")
    } else {
        format!("{sign}{prefix}{grouped}.{fraction}{suffix}")
    }
}

fn currency_prefix(code: Option<&str>) -> String {
    match code {
        None | Some("USD") => "$".to_string(),
        Some(other) => format!("{other} "),
    }
}

/// Insert `,` separators every three digits from the right.
fn group_thousands(integer: &str) -> String {
    let digits: Vec<char> = integer.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len().div_euclid(3));
    for (i, c) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining.rem_euclid(3) == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

fn format_date_time(options: &DateTimeOptions, date: &CalendarDate) -> String {
    if let Some(width) = options.era {
        return era_name(date.year, width).to_string();
    }
    if let Some(width) = options.month {
        return month_name(date.month, width).to_string();
    }
    if let Some(width) = options.weekday {
        return weekday_name(date.weekday(), width).to_string();
    }

    let date_part = options.date_style.map(|style| render_date_style(style, date));
    let time_part = options.time_style.map(|style| render_time_style(style, date));
    match (date_part, time_part) {
        (Some(d), Some(t)) => format!("{d}, {t}"),
        (Some(d), None) => d,
        (None, Some(t)) => t,
        (None, None) => render_date_style(NamedStyle::Medium, date),
    }
}

fn era_name(year: i32, width: TextWidth) -> &'static str {
    let common_era = year > 0;
    match width {
        TextWidth::Narrow => {
            if common_era {
                "A"
            } else {
                "B"
            }
        }
        TextWidth::Short => {
            if common_era {
                "AD"
            } else {
                "BC"
            }
        }
        TextWidth::Long => {
            if common_era {
                "Anno Domini"
            } else {
                "Before Christ"
            }
        }
    }
}

fn month_name(month: u32, width: TextWidth) -> &'static str {
    let index = (month.clamp(1, 12) - 1) as usize;
    match width {
        TextWidth::Narrow => MONTHS_NARROW[index],
        TextWidth::Short => MONTHS_SHORT[index],
        TextWidth::Long => MONTHS_LONG[index],
    }
}

fn weekday_name(weekday: u32, width: TextWidth) -> &'static str {
    let index = weekday.clamp(0, 6) as usize;
    match width {
        TextWidth::Narrow => WEEKDAYS_NARROW[index],
        TextWidth::Short => WEEKDAYS_SHORT[index],
        TextWidth::Long => WEEKDAYS_LONG[index],
    }
}

fn render_date_style(style: NamedStyle, date: &CalendarDate) -> String {
    match style {
        NamedStyle::Short => format!(
            "{}/{}/{:02}",
            date.month,
            date.day,
            date.year.rem_euclid(100)
        ),
        NamedStyle::Medium => format!(
            "{} {}, {}",
            month_name(date.month, TextWidth::Short),
            date.day,
            date.year
        ),
        NamedStyle::Long => format!(
            "{} {}, {}",
            month_name(date.month, TextWidth::Long),
            date.day,
            date.year
        ),
        NamedStyle::Full => format!(
            "{}, {} {}, {}",
            weekday_name(date.weekday(), TextWidth::Long),
            month_name(date.month, TextWidth::Long),
            date.day,
            date.year
        ),
    }
}

fn render_time_style(style: NamedStyle, date: &CalendarDate) -> String {
    let hour12 = match date.hour.rem_euclid(12) {
        0 => 12,
        h => h,
    };
    let meridiem = if date.hour < 12 { "AM" } else { "PM" };
    match style {
        NamedStyle::Short => format!("{hour12}:{:02} {meridiem}", date.minute),
        NamedStyle::Medium | NamedStyle::Long | NamedStyle::Full => {
            // No time zone on a naive date, so long/full match medium.
            format!("{hour12}:{:02}:{:02} {meridiem}", date.minute, date.second)
        }
    }
}

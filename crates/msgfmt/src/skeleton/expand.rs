//! Skeleton compilation and rendering.
//!
//! A skeleton such as `yMMMd` is compiled once into a sequence of render
//! steps. Numeric fields are computed from the date, named fields (era,
//! month and weekday names) are delegated to the locale provider, and
//! unknown field letters render as themselves so unsupported CLDR fields
//! degrade to visible literals rather than errors.

use std::fmt;

use crate::intl::{DateTimeFormatFn, DateTimeOptions, FormatProvider, TextWidth};
use crate::skeleton::helpers::{
    Period, add_days, day_of_week, day_of_year, milliseconds_in_day, pad, start_of,
};
use crate::skeleton::tokens::{Token, tokenize};
use crate::types::CalendarDate;

/// A compiled date skeleton.
#[derive(Clone)]
pub struct SkeletonFormat {
    source: String,
    steps: Vec<RenderStep>,
}

#[derive(Clone)]
enum RenderStep {
    Literal(String),
    Field { field: Field, count: usize },
    Localized(DateTimeFormatFn),
}

/// Date fields computed directly from the calendar date.
#[derive(Clone, Copy)]
enum Field {
    Year,
    WeekYear,
    Month,
    WeekOfYear,
    WeekOfMonth,
    DayOfMonth,
    DayOfYear,
    DayOfWeekInMonth,
    WeekdayNumber,
    Hour12,
    Hour23,
    Hour11,
    Hour24,
    Minute,
    Second,
    FractionalSecond,
    MillisInDay,
}

impl SkeletonFormat {
    /// Compile a skeleton for a locale, binding localized name lookups
    /// through the provider.
    pub fn compile(skeleton: &str, provider: &dyn FormatProvider, locale: &str) -> Self {
        let steps = tokenize(skeleton)
            .into_iter()
            .map(|token| match token {
                Token::Literal(text) => RenderStep::Literal(text),
                Token::Field { letter, count } => bind(letter, count, provider, locale),
            })
            .collect();
        Self {
            source: skeleton.to_string(),
            steps,
        }
    }

    /// The skeleton text this format was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render a date through the compiled steps.
    pub fn format(&self, date: &CalendarDate) -> String {
        let mut out = String::new();
        for step in &self.steps {
            match step {
                RenderStep::Literal(text) => out.push_str(text),
                RenderStep::Field { field, count } => {
                    out.push_str(&render_field(*field, *count, date));
                }
                RenderStep::Localized(format) => out.push_str(&format(date)),
            }
        }
        out
    }
}

impl fmt::Debug for SkeletonFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SkeletonFormat").field(&self.source).finish()
    }
}

/// Resolve one field run to a render step.
///
/// `Z` runs alias to the `x`/`O`/`X` zone fields, which (like all zone
/// fields on a zone-less date) render literally. Unknown letters render as
/// the run itself.
fn bind(letter: char, count: usize, provider: &dyn FormatProvider, locale: &str) -> RenderStep {
    let localized = |options: DateTimeOptions| {
        RenderStep::Localized(provider.date_time_format(locale, &options))
    };
    let field = |field| RenderStep::Field { field, count };

    match letter {
        'G' => {
            let width = if count < 4 {
                TextWidth::Short
            } else {
                TextWidth::Long
            };
            localized(DateTimeOptions {
                era: Some(width),
                ..DateTimeOptions::default()
            })
        }
        'y' => field(Field::Year),
        'Y' => field(Field::WeekYear),
        'M' | 'L' => match count {
            3 => localized(DateTimeOptions {
                month: Some(TextWidth::Short),
                ..DateTimeOptions::default()
            }),
            4 => localized(DateTimeOptions {
                month: Some(TextWidth::Long),
                ..DateTimeOptions::default()
            }),
            5 => localized(DateTimeOptions {
                month: Some(TextWidth::Narrow),
                ..DateTimeOptions::default()
            }),
            _ => field(Field::Month),
        },
        'w' => field(Field::WeekOfYear),
        'W' => field(Field::WeekOfMonth),
        'd' => field(Field::DayOfMonth),
        'D' => field(Field::DayOfYear),
        'F' => field(Field::DayOfWeekInMonth),
        'e' | 'c' if count <= 2 => field(Field::WeekdayNumber),
        'e' | 'c' | 'E' => {
            let width = if count < 3 {
                TextWidth::Short
            } else if count == 4 {
                TextWidth::Long
            } else {
                TextWidth::Narrow
            };
            localized(DateTimeOptions {
                weekday: Some(width),
                ..DateTimeOptions::default()
            })
        }
        'h' => field(Field::Hour12),
        'H' => field(Field::Hour23),
        'K' => field(Field::Hour11),
        'k' => field(Field::Hour24),
        'm' => field(Field::Minute),
        's' => field(Field::Second),
        'S' => field(Field::FractionalSecond),
        'A' => field(Field::MillisInDay),
        'Z' => RenderStep::Literal(
            match count {
                0..4 => "xxxx",
                4 => "OOOO",
                _ => "XXXXX",
            }
            .to_string(),
        ),
        _ => RenderStep::Literal(letter.to_string().repeat(count)),
    }
}

fn render_field(field: Field, count: usize, date: &CalendarDate) -> String {
    match field {
        Field::Year => format_year(date.year, count),
        Field::WeekYear => {
            let shifted = add_days(date, 7 - day_of_week(date, 1) - 1 - 4);
            format_year(shifted.year, count)
        }
        Field::Month => date.month.to_string(),
        Field::WeekOfYear => {
            let first = day_of_week(&start_of(date, Period::Year), 1);
            week_number(day_of_year(date), first).to_string()
        }
        Field::WeekOfMonth => {
            let first = day_of_week(&start_of(date, Period::Month), 1);
            week_number(i64::from(date.day), first).to_string()
        }
        Field::DayOfMonth => pad(i64::from(date.day), count),
        Field::DayOfYear => (day_of_year(date) + 1).to_string(),
        Field::DayOfWeekInMonth => (i64::from(date.day).div_euclid(7) + 1).to_string(),
        Field::WeekdayNumber => (day_of_week(date, 1) + 1).to_string(),
        Field::Hour12 => match date.hour.rem_euclid(12) {
            0 => 12,
            h => h,
        }
        .to_string(),
        Field::Hour23 => date.hour.to_string(),
        Field::Hour11 => date.hour.rem_euclid(12).to_string(),
        Field::Hour24 => match date.hour {
            0 => 24,
            h => h,
        }
        .to_string(),
        Field::Minute => date.minute.to_string(),
        Field::Second => date.second.to_string(),
        Field::FractionalSecond => scale_millis(i64::from(date.millisecond), count),
        Field::MillisInDay => scale_millis(milliseconds_in_day(date), count),
    }
}

/// Two-letter years keep only the last two digits, rendered as a plain
/// number (2005 becomes "5"). Other lengths render the full year.
fn format_year(year: i32, count: usize) -> String {
    if count == 2 {
        year.rem_euclid(100).to_string()
    } else {
        year.to_string()
    }
}

/// Week-of-period number for a day offset into the period. The period's
/// first partial week counts only when it holds at least four days.
fn week_number(day: i64, first_weekday: i64) -> i64 {
    let week = (day + first_weekday + 6).div_euclid(7);
    if 7 - first_weekday >= 4 { week } else { week - 1 }
}

/// Milliseconds scaled to `count` digits of precision, rounded.
#[expect(
    clippy::cast_possible_truncation,
    reason = "rounded millisecond scale fits i64"
)]
fn scale_millis(millis: i64, count: usize) -> String {
    let scaled = (millis as f64 * 10f64.powi(count as i32 - 3)).round() as i64;
    scaled.to_string()
}

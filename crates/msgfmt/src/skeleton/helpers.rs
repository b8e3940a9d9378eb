//! Calendar arithmetic for skeleton field rendering.

use crate::types::CalendarDate;

/// Granularity for [`start_of`]. Each period zeroes the period's own
/// sub-fields and everything smaller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Year,
    Month,
    Day,
}

/// The date truncated to the start of the given period, with the time of
/// day zeroed.
pub fn start_of(date: &CalendarDate, period: Period) -> CalendarDate {
    let mut out = *date;
    match period {
        Period::Year => {
            out.month = 1;
            out.day = 1;
        }
        Period::Month => out.day = 1,
        Period::Day => {}
    }
    out.hour = 0;
    out.minute = 0;
    out.second = 0;
    out.millisecond = 0;
    out
}

/// Whole days from `from` to `to`. Negative when `to` precedes `from`.
pub fn distance_in_days(from: &CalendarDate, to: &CalendarDate) -> i64 {
    to.epoch_days() - from.epoch_days()
}

/// Zero-based day of year: January 1st is day 0.
pub fn day_of_year(date: &CalendarDate) -> i64 {
    distance_in_days(&start_of(date, Period::Year), date)
}

/// Day of week as an offset from `first_day`, in `0..7`. Weekday numbering
/// follows [`CalendarDate::weekday`]: 0 is Sunday. With `first_day` 1
/// (Monday), Monday is 0 and Sunday is 6.
pub fn day_of_week(date: &CalendarDate, first_day: i64) -> i64 {
    (i64::from(date.weekday()) - first_day).rem_euclid(7)
}

/// The calendar date `days` days after `date`, keeping the time of day.
pub fn add_days(date: &CalendarDate, days: i64) -> CalendarDate {
    let mut out = CalendarDate::from_epoch_days(date.epoch_days() + days);
    out.hour = date.hour;
    out.minute = date.minute;
    out.second = date.second;
    out.millisecond = date.millisecond;
    out
}

/// Milliseconds elapsed since the start of the date's day.
pub fn milliseconds_in_day(date: &CalendarDate) -> i64 {
    i64::from(date.hour) * 3_600_000
        + i64::from(date.minute) * 60_000
        + i64::from(date.second) * 1_000
        + i64::from(date.millisecond)
}

/// Zero-pad a number to at least `width` digits.
pub fn pad(n: i64, width: usize) -> String {
    format!("{n:0width$}")
}

use bon::Builder;
use serde::{Deserialize, Serialize};

/// A naive civil date-time in the proleptic Gregorian calendar.
///
/// Carries no time zone; the skeleton expander and the default provider
/// treat it as wall-clock time. Month and day are 1-based.
///
/// # Example
///
/// ```
/// use msgfmt::CalendarDate;
///
/// let date = CalendarDate::new(2014, 11, 4);
/// assert_eq!(date.weekday(), 2); // Tuesday
///
/// let with_time = CalendarDate::builder()
///     .year(2014)
///     .month(11)
///     .day(4)
///     .hour(13)
///     .minute(5)
///     .build();
/// assert_eq!(with_time.hour, 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    /// Month of year, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    #[builder(default)]
    pub hour: u32,
    #[builder(default)]
    pub minute: u32,
    #[builder(default)]
    pub second: u32,
    #[builder(default)]
    pub millisecond: u32,
}

impl CalendarDate {
    /// A date at midnight.
    pub fn new(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::builder().year(year).month(month).day(day).build()
    }

    /// Days since 1970-01-01 (negative before the epoch).
    ///
    /// Uses the standard civil-from-days/days-from-civil algorithms; valid
    /// across the full `i32` year range.
    pub fn epoch_days(&self) -> i64 {
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let m = i64::from(self.month);
        let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2).div_euclid(5) + i64::from(self.day)
            - 1;
        let doe = yoe * 365 + yoe.div_euclid(4) - yoe.div_euclid(100) + doy;
        era * 146097 + doe - 719468
    }

    /// The date at midnight `days` after 1970-01-01.
    pub fn from_epoch_days(days: i64) -> CalendarDate {
        let z = days + 719468;
        let era = z.div_euclid(146097);
        let doe = z - era * 146097;
        let yoe = (doe - doe.div_euclid(1460) + doe.div_euclid(36524) - doe.div_euclid(146096))
            .div_euclid(365);
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe.div_euclid(4) - yoe.div_euclid(100));
        let mp = (5 * doy + 2).div_euclid(153);
        let day = doy - (153 * mp + 2).div_euclid(5) + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        CalendarDate::new((y + i64::from(month <= 2)) as i32, month as u32, day as u32)
    }

    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub fn weekday(&self) -> u32 {
        // 1970-01-01 was a Thursday
        (self.epoch_days() + 4).rem_euclid(7) as u32
    }
}

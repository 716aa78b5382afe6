use crate::Month;
use core::fmt;

/// A year, month and day as produced by [`crate::ordinal_to_date`]
///
/// This is deliberately not validated.  For ordinals the conversion handles
/// well the fields form a real proleptic-Gregorian date, but `year` may be
/// zero or negative and `day` may fall outside 1..=31 for pathological
/// input.  Use the `TryFrom` impls to get a checked date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    pub year: i64,
    pub month: Month,
    pub day: i64,
}

/// `YYYY-M-D`, unpadded
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month.number(), self.day)
    }
}

/// Divisible by 4 and not by 100, or divisible by 400.  Year 0 counts as
/// a leap year.
pub const fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in all full years before `year`, counting from year 1
///
/// Negative for years before 1.  Wraps once `year` is far enough from zero
/// that the count no longer fits in an `i64`.
pub fn days_before_year(year: i64) -> i64 {
    days_before_year_wide(i128::from(year)) as i64
}

pub(crate) fn days_before_year_wide(year: i128) -> i128 {
    let y = year - 1;
    y * 365 + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Why a [`CalendarDate`] couldn't be turned into a checked date type
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DateError {
    YearOutOfRange,
    DayOutOfRange,
    Invalid,
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::YearOutOfRange => f.write_str("year out of range"),
            DateError::DayOutOfRange => f.write_str("day out of range"),
            DateError::Invalid => f.write_str("not a valid calendar date"),
        }
    }
}

impl std::error::Error for DateError {}

impl From<jiff::civil::Date> for CalendarDate {
    fn from(date: jiff::civil::Date) -> Self {
        CalendarDate {
            year: date.year().into(),
            // jiff guarantees 1..=12
            month: Month::try_from(date.month() as u8).unwrap_or(Month::January),
            day: date.day().into(),
        }
    }
}

impl TryFrom<CalendarDate> for jiff::civil::Date {
    type Error = DateError;
    fn try_from(date: CalendarDate) -> Result<Self, Self::Error> {
        let year = i16::try_from(date.year).map_err(|_| DateError::YearOutOfRange)?;
        let day = i8::try_from(date.day).map_err(|_| DateError::DayOutOfRange)?;
        jiff::civil::Date::new(year, date.month.number() as i8, day)
            .map_err(|_| DateError::Invalid)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<CalendarDate> for chrono::NaiveDate {
    type Error = DateError;
    fn try_from(date: CalendarDate) -> Result<Self, Self::Error> {
        let year = i32::try_from(date.year).map_err(|_| DateError::YearOutOfRange)?;
        let day = u32::try_from(date.day).map_err(|_| DateError::DayOutOfRange)?;
        chrono::NaiveDate::from_ymd_opt(year, date.month.number().into(), day)
            .ok_or(DateError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i64, month: u8, day: i64) -> CalendarDate {
        CalendarDate {
            year,
            month: Month::try_from(month).unwrap(),
            day,
        }
    }

    #[test]
    fn test_fmt() {
        assert_eq!(date(1, 1, 1).to_string(), "1-1-1");
        assert_eq!(date(2024, 3, 9).to_string(), "2024-3-9");
        assert_eq!(date(-1, 12, 31).to_string(), "-1-12-31");
        assert_eq!(date(24660873952898, 1, 9).to_string(), "24660873952898-1-9");
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1));
    }

    #[test]
    fn test_days_before_year() {
        assert_eq!(days_before_year(1), 0);
        assert_eq!(days_before_year(2), 365);
        assert_eq!(days_before_year(5), 4 * 365 + 1);
        assert_eq!(days_before_year(401), 146097);
        // Year 0 is a leap year
        assert_eq!(days_before_year(0), -366);
    }

    #[test]
    fn test_ord() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
        assert!(date(2024, 2, 1) < date(2024, 2, 2));
    }

    #[test]
    fn test_jiff() {
        let d: jiff::civil::Date = date(2024, 2, 29).try_into().unwrap();
        assert_eq!(d, jiff::civil::date(2024, 2, 29));
        assert_eq!(CalendarDate::from(d), date(2024, 2, 29));

        assert_eq!(
            jiff::civil::Date::try_from(date(2023, 2, 29)),
            Err(DateError::Invalid)
        );
        assert_eq!(
            jiff::civil::Date::try_from(date(40000, 1, 1)),
            Err(DateError::YearOutOfRange)
        );
        assert_eq!(
            jiff::civil::Date::try_from(date(2024, 1, 400)),
            Err(DateError::DayOutOfRange)
        );
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono() {
        let d: chrono::NaiveDate = date(2000, 2, 29).try_into().unwrap();
        assert_eq!(d, chrono::NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());
        assert_eq!(
            chrono::NaiveDate::try_from(date(1900, 2, 29)),
            Err(DateError::Invalid)
        );
        assert_eq!(
            chrono::NaiveDate::try_from(date(2024, 1, -3)),
            Err(DateError::DayOutOfRange)
        );
    }
}

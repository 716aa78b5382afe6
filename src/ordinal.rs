use crate::{CalendarDate, convert::ordinal_to_date};
use core::fmt;

/// Days since the start of the proleptic Gregorian calendar, 1-indexed
///
/// Day 1 is 0001-01-01.  This is the same numbering as Python's
/// `date.toordinal()` and chrono's `num_days_from_ce()`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Ordinal(pub i64);

impl Ordinal {
    pub fn to_date(self) -> CalendarDate {
        ordinal_to_date(self.0)
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for Ordinal {
    fn from(value: i64) -> Self {
        Ordinal(value)
    }
}

impl From<Ordinal> for i64 {
    fn from(value: Ordinal) -> Self {
        value.0
    }
}

impl From<Ordinal> for CalendarDate {
    fn from(value: Ordinal) -> Self {
        value.to_date()
    }
}

impl From<jiff::civil::Date> for Ordinal {
    fn from(date: jiff::civil::Date) -> Self {
        let days = (date - jiff::civil::date(1, 1, 1)).get_days();
        Ordinal(i64::from(days) + 1)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Ordinal {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Ordinal(date.num_days_from_ce().into())
    }
}

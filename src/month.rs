use core::fmt;
use linearize::{Linearize, LinearizeExt};

/// A month of the Gregorian year
///
/// Variants are declared in calendar order, so `Month::variants()` walks
/// January through December and `linearize()` gives the 0-based index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Linearize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// 1 for January, 12 for December
    pub fn number(self) -> u8 {
        self.linearize() as u8 + 1
    }

    /// Number of days in this month.  Only February cares about `leap`.
    pub const fn length(self, leap: bool) -> u8 {
        match self {
            Month::January => 31,
            Month::February if leap => 29,
            Month::February => 28,
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Month::January => f.write_str("January"),
            Month::February => f.write_str("February"),
            Month::March => f.write_str("March"),
            Month::April => f.write_str("April"),
            Month::May => f.write_str("May"),
            Month::June => f.write_str("June"),
            Month::July => f.write_str("July"),
            Month::August => f.write_str("August"),
            Month::September => f.write_str("September"),
            Month::October => f.write_str("October"),
            Month::November => f.write_str("November"),
            Month::December => f.write_str("December"),
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = ();
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let idx = usize::from(value).checked_sub(1).ok_or(())?;
        Month::from_linear(idx).ok_or(())
    }
}
impl From<Month> for u8 {
    fn from(value: Month) -> Self {
        value.number()
    }
}

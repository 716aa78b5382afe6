use crate::{
    CalendarDate, Month,
    date::{days_before_year_wide, is_leap_year},
};
use linearize::LinearizeExt;
use tracing::trace;

/// Mean length of a Gregorian year, in days
const MEAN_YEAR: f64 = 365.2425;

/// Convert a day ordinal (day 1 is 0001-01-01) into a calendar date
///
/// The year is first estimated from the mean Gregorian year length, then
/// the exact number of days in the preceding years is subtracted to get a
/// day-of-year.  Walking the month table corrects the estimate when it came
/// out one year short: if the day-of-year runs past December, the date rolls
/// over to January of the following year, keeping whatever was left after
/// the walk as the day of the month.
///
/// This never fails or panics.  Ordinals below 1 still produce a date, using
/// year 0 and negative years as the arithmetic dictates.
pub fn ordinal_to_date(ordinal: i64) -> CalendarDate {
    let ordinal = i128::from(ordinal);
    let estimate = ((ordinal - 1) as f64 / MEAN_YEAR).floor() as i64 + 1;
    let mut day = ordinal - days_before_year_wide(estimate.into());
    let leap = is_leap_year(estimate);

    for month in Month::variants() {
        let len = i128::from(month.length(leap));
        if day <= len {
            return CalendarDate {
                year: estimate,
                month,
                day: day as i64,
            };
        }
        day -= len;
    }

    trace!(
        ordinal = ordinal as i64,
        estimate,
        residual = day as i64,
        "day-of-year ran past December; rolling into the next year"
    );
    CalendarDate {
        year: estimate.saturating_add(1),
        month: Month::January,
        day: day as i64,
    }
}

/// [`ordinal_to_date`], formatted as `YYYY-M-D` without zero-padding
pub fn ordinal_to_date_str(ordinal: i64) -> String {
    ordinal_to_date(ordinal).to_string()
}

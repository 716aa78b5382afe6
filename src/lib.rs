mod convert;
mod date;
mod month;
mod ordinal;

pub use crate::convert::{ordinal_to_date, ordinal_to_date_str};
pub use crate::date::{CalendarDate, DateError, days_before_year, is_leap_year};
pub use crate::month::Month;
pub use crate::ordinal::Ordinal;

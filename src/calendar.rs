//! Day-of-year conversions for the 365-day model year.
//!
//! The solar model has no leap days: day 60 is always 1 March. With the `chrono` feature,
//! queries can be built from naive local dates and times; no timezone is involved, the
//! clock reading is used as is.

use crate::error::check_day_of_year;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use crate::{SolarHours, SolarQuery};
#[cfg(feature = "chrono")]
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Days per month in the model year.
const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

#[cfg(feature = "chrono")]
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Month (1-12) and day of month for a day of year.
///
/// The input is clamped to 1..=365, so 0 maps to 1 January.
///
/// # Example
/// ```
/// # use solar_facade::calendar::month_and_day;
/// assert_eq!(month_and_day(1), (1, 1));
/// assert_eq!(month_and_day(60), (3, 1));
/// assert_eq!(month_and_day(172), (6, 21));
/// assert_eq!(month_and_day(0), (1, 1));
/// ```
#[must_use]
pub fn month_and_day(day_of_year: u32) -> (u32, u32) {
    let mut remaining = day_of_year.clamp(1, 365);
    for (month, &length) in (1..).zip(MONTH_LENGTHS.iter()) {
        if remaining <= length {
            return (month, remaining);
        }
        remaining -= length;
    }
    (12, 31)
}

/// Day of year for a month and day of month.
///
/// # Errors
/// Returns `InvalidDate` for a month outside 1-12 or a day beyond the month's length
/// (29 February included).
pub fn day_of_year(month: u32, day: u32) -> Result<u32> {
    let index = month
        .checked_sub(1)
        .map(|m| m as usize)
        .filter(|&m| m < MONTH_LENGTHS.len())
        .ok_or(Error::invalid_date(month, day))?;
    if day == 0 || day > MONTH_LENGTHS[index] {
        return Err(Error::invalid_date(month, day));
    }

    let ordinal = MONTH_LENGTHS[..index].iter().sum::<u32>() + day;
    check_day_of_year(ordinal)?;
    Ok(ordinal)
}

/// Day of year of a calendar date, with 31 December of leap years mapped to 365.
#[cfg(feature = "chrono")]
#[must_use]
pub fn day_of_year_from_date(date: NaiveDate) -> u32 {
    date.ordinal().min(365)
}

/// Fractional hours of a clock time.
#[cfg(feature = "chrono")]
#[must_use]
pub fn hours_from_time(time: NaiveTime) -> f64 {
    f64::from(time.hour())
        + f64::from(time.minute()) / 60.0
        + (f64::from(time.second()) + f64::from(time.nanosecond()) / 1e9) / SECONDS_PER_HOUR
}

#[cfg(feature = "chrono")]
impl SolarQuery {
    /// Creates a query from a local date and clock time.
    ///
    /// # Example
    /// ```
    /// # use solar_facade::SolarQuery;
    /// use chrono::NaiveDate;
    ///
    /// let datetime = NaiveDate::from_ymd_opt(2024, 6, 20)
    ///     .unwrap()
    ///     .and_hms_opt(13, 30, 0)
    ///     .unwrap();
    /// let query = SolarQuery::from_naive_datetime(datetime, 48.8566, 2.3522);
    /// assert_eq!(query.day_of_year(), 172);
    /// assert_eq!(query.local_time_hours(), 13.5);
    /// ```
    #[must_use]
    pub fn from_naive_datetime(datetime: NaiveDateTime, latitude: f64, longitude: f64) -> Self {
        Self::new(
            day_of_year_from_date(datetime.date()),
            hours_from_time(datetime.time()),
            latitude,
            longitude,
        )
    }
}

#[cfg(feature = "chrono")]
impl SolarHours {
    /// Converts to a clock time, rounded to the second and wrapped into one day.
    ///
    /// Returns `None` for non-finite hours.
    #[must_use]
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        if !self.hours().is_finite() {
            return None;
        }
        let seconds = crate::math::round(self.hours() * SECONDS_PER_HOUR) % 86_400.0;
        let seconds = if seconds < 0.0 { seconds + 86_400.0 } else { seconds };
        NaiveTime::from_num_seconds_from_midnight_opt(seconds as u32, 0)
    }
}

//! Error types for the strict input paths of the library.
//!
//! The core computations never fail: out-of-range inputs are clamped or wrapped before use.
//! The errors here are only produced by the validating constructors such as
//! [`SolarQuery::try_new`](crate::SolarQuery::try_new) and by calendar conversions.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by validating constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid day of year (must be between 1 and 365).
    InvalidDayOfYear {
        /// The invalid day of year provided.
        value: u32,
    },
    /// Invalid local time (must be finite).
    InvalidLocalTime {
        /// The invalid time value provided, in hours.
        value: f64,
    },
    /// Invalid scene radius (must be finite and positive).
    InvalidSceneRadius {
        /// The invalid radius provided.
        value: f64,
    },
    /// Month/day combination that does not exist in the 365-day model year.
    InvalidDate {
        /// Month (1-12).
        month: u32,
        /// Day of month.
        day: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDayOfYear { value } => {
                write!(f, "invalid day of year {value} (must be between 1 and 365)")
            }
            Self::InvalidLocalTime { value } => {
                write!(f, "invalid local time {value} h (must be finite)")
            }
            Self::InvalidSceneRadius { value } => {
                write!(f, "invalid scene radius {value} (must be positive)")
            }
            Self::InvalidDate { month, day } => {
                write!(f, "invalid date: month {month}, day {day}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid day of year error.
    #[must_use]
    pub const fn invalid_day_of_year(value: u32) -> Self {
        Self::InvalidDayOfYear { value }
    }

    /// Creates an invalid local time error.
    #[must_use]
    pub const fn invalid_local_time(value: f64) -> Self {
        Self::InvalidLocalTime { value }
    }

    /// Creates an invalid scene radius error.
    #[must_use]
    pub const fn invalid_scene_radius(value: f64) -> Self {
        Self::InvalidSceneRadius { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(month: u32, day: u32) -> Self {
        Self::InvalidDate { month, day }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates the day of year lies in the 365-day model year.
///
/// # Errors
/// Returns `InvalidDayOfYear` outside 1..=365.
pub fn check_day_of_year(day_of_year: u32) -> Result<()> {
    if !(1..=365).contains(&day_of_year) {
        return Err(Error::invalid_day_of_year(day_of_year));
    }
    Ok(())
}

/// Validates the local time is a finite number of hours.
///
/// # Errors
/// Returns `InvalidLocalTime` for NaN or infinite values.
pub fn check_local_time(hours: f64) -> Result<()> {
    if !hours.is_finite() {
        return Err(Error::invalid_local_time(hours));
    }
    Ok(())
}

/// Validates a scene radius is finite and strictly positive.
///
/// # Errors
/// Returns `InvalidSceneRadius` otherwise.
pub fn check_scene_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Error::invalid_scene_radius(radius));
    }
    Ok(())
}

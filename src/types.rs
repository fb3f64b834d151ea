//! Core data types for solar geometry and event calculations.

use crate::error::{
    check_coordinates, check_day_of_year, check_local_time, check_scene_radius,
};
use crate::math::{floor, normalize_degrees_0_to_360, round, wrap_degrees_180};
use crate::Result;
use core::fmt;

/// Scene radius used for [`Placement`] when none is given.
pub const DEFAULT_SCENE_RADIUS: f64 = 10.0;

/// Input of a solar position calculation.
///
/// Construction through [`SolarQuery::new`] is lenient: latitude is clamped to ±90°,
/// longitude is wrapped into ±180°, the day of year is clamped to 1..=365 and the facade
/// orientation is normalized into [0°, 360°). The adjusted values are what the accessors
/// return, and what [`SolarPosition::query`] echoes back.
///
/// [`SolarQuery::try_new`] rejects out-of-range values instead.
///
/// # Example
/// ```
/// # use solar_facade::SolarQuery;
/// let query = SolarQuery::new(400, 12.0, 95.0, 190.0);
/// assert_eq!(query.day_of_year(), 365);
/// assert_eq!(query.latitude(), 90.0);
/// assert_eq!(query.longitude(), -170.0);
///
/// assert!(SolarQuery::try_new(400, 12.0, 95.0, 190.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarQuery {
    day_of_year: u32,
    local_time_hours: f64,
    latitude: f64,
    longitude: f64,
    facade_orientation: f64,
    scene_radius: f64,
}

impl SolarQuery {
    /// Creates a query, clamping or wrapping out-of-range inputs.
    ///
    /// Facade orientation defaults to 0° (north) and scene radius to [`DEFAULT_SCENE_RADIUS`].
    ///
    /// # Arguments
    /// * `day_of_year` - Day of year (1 to 365)
    /// * `local_time_hours` - Local clock time in hours, e.g. 13.5 for 13:30
    /// * `latitude` - Observer latitude in degrees (-90 to +90)
    /// * `longitude` - Observer longitude in degrees (-180 to +180)
    #[must_use]
    pub fn new(day_of_year: u32, local_time_hours: f64, latitude: f64, longitude: f64) -> Self {
        let query = Self {
            day_of_year: day_of_year.clamp(1, 365),
            local_time_hours: finite_or_zero(local_time_hours),
            latitude: finite_or_zero(latitude).clamp(-90.0, 90.0),
            longitude: wrap_degrees_180(finite_or_zero(longitude)),
            facade_orientation: 0.0,
            scene_radius: DEFAULT_SCENE_RADIUS,
        };

        #[cfg(feature = "tracing")]
        if query.day_of_year != day_of_year
            || query.latitude.to_bits() != latitude.to_bits()
            || query.longitude.to_bits() != longitude.to_bits()
            || query.local_time_hours.to_bits() != local_time_hours.to_bits()
        {
            tracing::trace!(
                day_of_year,
                latitude,
                longitude,
                local_time_hours,
                adjusted = ?query,
                "solar query inputs adjusted"
            );
        }

        query
    }

    /// Creates a query, rejecting out-of-range inputs.
    ///
    /// # Errors
    /// Returns `InvalidDayOfYear`, `InvalidLocalTime`, `InvalidLatitude` or
    /// `InvalidLongitude` for values the lenient constructor would have adjusted.
    pub fn try_new(
        day_of_year: u32,
        local_time_hours: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        check_day_of_year(day_of_year)?;
        check_local_time(local_time_hours)?;
        check_coordinates(latitude, longitude)?;
        Ok(Self::new(day_of_year, local_time_hours, latitude, longitude))
    }

    /// Sets the facade orientation in degrees clockwise from north (normalized into [0, 360)).
    #[must_use]
    pub fn with_facade_orientation(mut self, orientation: f64) -> Self {
        self.facade_orientation = normalize_degrees_0_to_360(finite_or_zero(orientation));
        self
    }

    /// Sets the radius used for [`Placement`]. Non-positive or non-finite radii fall back
    /// to [`DEFAULT_SCENE_RADIUS`].
    #[must_use]
    pub fn with_scene_radius(mut self, radius: f64) -> Self {
        self.scene_radius = if check_scene_radius(radius).is_ok() {
            radius
        } else {
            DEFAULT_SCENE_RADIUS
        };
        self
    }

    /// Sets the local clock time, keeping every other field.
    #[must_use]
    pub fn at_time(mut self, local_time_hours: f64) -> Self {
        self.local_time_hours = finite_or_zero(local_time_hours);
        self
    }

    /// Gets the day of year (1 to 365).
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Gets the local clock time in hours.
    #[must_use]
    pub const fn local_time_hours(&self) -> f64 {
        self.local_time_hours
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the facade orientation in degrees clockwise from north.
    #[must_use]
    pub const fn facade_orientation(&self) -> f64 {
        self.facade_orientation
    }

    /// Gets the scene radius used for the Cartesian placement.
    #[must_use]
    pub const fn scene_radius(&self) -> f64 {
        self.scene_radius
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Cartesian placement of the sun in a scene.
///
/// `y` points up, `z` towards north and `x` towards east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// East component
    pub x: f64,
    /// Up component
    pub y: f64,
    /// North component
    pub z: f64,
}

impl Placement {
    /// Gets the components as `[x, y, z]`.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Apparent position of the sun and derived irradiance for one [`SolarQuery`].
///
/// Uses the compass convention:
/// - Azimuth: 0° = North, measured clockwise to 360°
/// - Altitude: 90° = directly overhead, 0° = horizon, -90° = nadir
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub(crate) query: SolarQuery,
    pub(crate) altitude: f64,
    pub(crate) azimuth: f64,
    pub(crate) azimuth_from_facade: f64,
    pub(crate) declination: f64,
    pub(crate) equation_of_time: f64,
    pub(crate) local_solar_time: f64,
    pub(crate) hour_angle: f64,
    pub(crate) earth_sun_distance: f64,
    pub(crate) air_mass: f64,
    pub(crate) incidence_angle: f64,
    pub(crate) direct_irradiance: f64,
    pub(crate) placement: Placement,
}

impl SolarPosition {
    /// Gets the sanitized query this position was computed from.
    #[must_use]
    pub const fn query(&self) -> &SolarQuery {
        &self.query
    }

    /// Gets the altitude above the horizon in degrees (-90° to 90°).
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the zenith angle in degrees: 90° - altitude.
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.altitude
    }

    /// Gets the azimuth in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the azimuth measured from the facade orientation, in [0°, 360°).
    #[must_use]
    pub const fn azimuth_from_facade(&self) -> f64 {
        self.azimuth_from_facade
    }

    /// Gets the solar declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the equation of time in minutes.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Gets the local solar time in hours. Not wrapped, so it can leave [0, 24).
    #[must_use]
    pub const fn local_solar_time(&self) -> f64 {
        self.local_solar_time
    }

    /// Gets the hour angle in degrees (0° at solar noon, 15° per hour).
    #[must_use]
    pub const fn hour_angle(&self) -> f64 {
        self.hour_angle
    }

    /// Gets the earth-sun distance in astronomical units.
    #[must_use]
    pub const fn earth_sun_distance(&self) -> f64 {
        self.earth_sun_distance
    }

    /// Gets the relative air mass, `f64::INFINITY` at or below the horizon.
    #[must_use]
    pub const fn air_mass(&self) -> f64 {
        self.air_mass
    }

    /// Gets the incidence angle relative to the facade in degrees (0° to 180°).
    #[must_use]
    pub const fn incidence_angle(&self) -> f64 {
        self.incidence_angle
    }

    /// Gets the direct-beam irradiance on the facade in W/m².
    #[must_use]
    pub const fn direct_irradiance(&self) -> f64 {
        self.direct_irradiance
    }

    /// Gets the Cartesian placement scaled by the query's scene radius.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Checks if the sun is above the horizon (altitude > 0°).
    #[must_use]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Hours on the local solar clock.
///
/// Event times are reported on the same clock as [`SolarQuery::local_time_hours`]; no
/// timezone or civil-time correction is applied.
///
/// # Example
/// ```
/// # use solar_facade::SolarHours;
/// let sunrise = SolarHours::from_hours(3.859);
/// assert_eq!(sunrise.hours_and_minutes(), (3, 52));
/// assert_eq!(sunrise.to_string(), "03:52");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SolarHours(f64);

impl SolarHours {
    /// Creates a new `SolarHours` from fractional hours.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets whole hours and rounded minutes on a 24-hour dial.
    ///
    /// Minutes that round up to 60 carry into the hour, and the hour wraps into 0..24.
    ///
    /// # Example
    /// ```
    /// # use solar_facade::SolarHours;
    /// assert_eq!(SolarHours::from_hours(23.999).hours_and_minutes(), (0, 0));
    /// assert_eq!(SolarHours::from_hours(-0.5).hours_and_minutes(), (23, 30));
    /// ```
    #[must_use]
    pub fn hours_and_minutes(&self) -> (u32, u32) {
        if !self.0.is_finite() {
            return (0, 0);
        }

        let mut whole_hours = floor(self.0);
        let mut minutes = round((self.0 - whole_hours) * 60.0);
        if minutes >= 60.0 {
            whole_hours += 1.0;
            minutes = 0.0;
        }

        let wrapped = whole_hours % 24.0;
        let wrapped = if wrapped < 0.0 { wrapped + 24.0 } else { wrapped };

        (wrapped as u32, minutes as u32)
    }
}

impl fmt::Display for SolarHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            return f.write_str("--:--");
        }
        let (hours, minutes) = self.hours_and_minutes();
        write!(f, "{hours:02}:{minutes:02}")
    }
}

/// Sunrise, sunset and solar noon for one day and location.
///
/// A missing sunrise or sunset is a regular outcome: the sun did not cross the horizon in
/// that direction during the day (polar day or polar night).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEvents {
    pub(crate) sunrise: Option<SolarHours>,
    pub(crate) sunset: Option<SolarHours>,
    pub(crate) solar_noon: SolarHours,
    pub(crate) max_altitude: f64,
}

impl SunEvents {
    /// Gets the sunrise time, if the sun rose during the day.
    #[must_use]
    pub const fn sunrise(&self) -> Option<SolarHours> {
        self.sunrise
    }

    /// Gets the sunset time, if the sun set during the day.
    #[must_use]
    pub const fn sunset(&self) -> Option<SolarHours> {
        self.sunset
    }

    /// Gets the time of maximum altitude.
    #[must_use]
    pub const fn solar_noon(&self) -> SolarHours {
        self.solar_noon
    }

    /// Gets the maximum altitude in degrees. Negative when the sun never rises.
    #[must_use]
    pub const fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    /// Checks if both a sunrise and a sunset were found.
    #[must_use]
    pub const fn is_regular_day(&self) -> bool {
        self.sunrise.is_some() && self.sunset.is_some()
    }

    /// Hours between sunrise and sunset, when both exist and sunset follows sunrise.
    #[must_use]
    pub fn daylight_hours(&self) -> Option<f64> {
        match (self.sunrise, self.sunset) {
            (Some(rise), Some(set)) if set.hours() > rise.hours() => {
                Some(set.hours() - rise.hours())
            }
            _ => None,
        }
    }
}

/// Search configuration for [`find_sun_events`](crate::events::find_sun_events).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventSearch {
    step_hours: f64,
}

impl EventSearch {
    /// Requested sampling step when none is given.
    pub const DEFAULT_STEP_HOURS: f64 = 0.25;

    /// Lower bound of the coarse scan step, so refinement always starts from a wide bracket.
    pub const MIN_COARSE_STEP_HOURS: f64 = 0.5;

    /// Creates a search with the requested sampling step in hours.
    #[must_use]
    pub const fn new(step_hours: f64) -> Self {
        Self { step_hours }
    }

    /// Gets the requested step in hours.
    #[must_use]
    pub const fn step_hours(&self) -> f64 {
        self.step_hours
    }

    /// Gets the step actually used by the coarse scan: at least half an hour.
    #[must_use]
    pub fn coarse_step(&self) -> f64 {
        if self.step_hours.is_finite() {
            self.step_hours.max(Self::MIN_COARSE_STEP_HOURS)
        } else {
            Self::MIN_COARSE_STEP_HOURS
        }
    }
}

impl Default for EventSearch {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP_HOURS)
    }
}

/// Orientation of a tilted panel for efficiency calculations.
///
/// # Example
/// ```
/// # use solar_facade::PanelOrientation;
/// let panel = PanelOrientation::default();
/// assert_eq!(panel.azimuth(), 180.0);
/// assert_eq!(panel.tilt(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelOrientation {
    azimuth: f64,
    tilt: f64,
}

impl PanelOrientation {
    /// Creates a panel orientation.
    ///
    /// # Arguments
    /// * `azimuth` - Direction the panel faces, degrees clockwise from north (180 = south)
    /// * `tilt` - Inclination from horizontal in degrees (0 = flat, 90 = vertical)
    #[must_use]
    pub const fn new(azimuth: f64, tilt: f64) -> Self {
        Self { azimuth, tilt }
    }

    /// Gets the panel azimuth in degrees.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the panel tilt in degrees.
    #[must_use]
    pub const fn tilt(&self) -> f64 {
        self.tilt
    }
}

impl Default for PanelOrientation {
    fn default() -> Self {
        Self::new(180.0, 30.0)
    }
}

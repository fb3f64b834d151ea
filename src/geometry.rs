//! Closed-form solar geometry for a day of year and local clock time.
//!
//! Every step of [`compute_solar_position`] is exposed as its own pure function so that
//! callers can evaluate a single quantity (e.g. the declination for a whole year)
//! without building a [`SolarQuery`].
//!
//! The model is the usual low-precision one used in building physics:
//! - Cooper's declination, `23.45° · sin(2π (284 + N) / 365)`
//! - a four-term Fourier equation of time, scaled by 4 (so its amplitude is well under a
//!   minute; the reference tables in `tests/data` are built with the same scaling)
//! - Kasten & Young (1989) relative air mass
//! - a clear-sky beam attenuation of `0.7^(AM^0.678)` (Meinel & Meinel)
//!
//! Accuracy is a fraction of a degree, which is ample for facade studies but far from SPA.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{
    TAU, asin, atan2, cos, degrees_to_radians, minimal_angular_separation,
    normalize_degrees_0_to_360, powf, radians_to_degrees, sin, tan,
};
use crate::{PanelOrientation, Placement, SolarPosition, SolarQuery};

/// Solar constant in W/m².
pub const SOLAR_CONSTANT: f64 = 1361.0;

/// Axial tilt used by the declination formula, in degrees.
const MAX_DECLINATION: f64 = 23.45;

/// Days in the model year.
const DAYS_PER_YEAR: f64 = 365.0;

/// Upper bound on air mass in the attenuation term; larger values only occur a hair above
/// the horizon.
const MAX_AIR_MASS: f64 = 38.0;

/// Orbital eccentricity term of the earth-sun distance.
const ECCENTRICITY: f64 = 0.0167;

/// Calculate the solar position for a query.
///
/// The query is already sanitized by its constructor, so this never fails.
///
/// # Example
/// ```rust
/// use solar_facade::{SolarQuery, compute_solar_position};
///
/// // Paris, summer solstice, 13:30 local clock time, south-facing facade
/// let query = SolarQuery::new(172, 13.5, 48.8566, 2.3522).with_facade_orientation(180.0);
/// let position = compute_solar_position(&query);
///
/// assert!(position.is_above_horizon());
/// assert!((0.0..360.0).contains(&position.azimuth()));
/// assert!(position.direct_irradiance() > 0.0);
/// ```
#[must_use]
pub fn compute_solar_position(query: &SolarQuery) -> SolarPosition {
    let day = query.day_of_year();
    let latitude = query.latitude();

    let declination = declination(day);
    let equation_of_time = equation_of_time(day);
    let local_solar_time =
        local_solar_time(query.local_time_hours(), query.longitude(), equation_of_time);
    let hour_angle = hour_angle(local_solar_time);

    let altitude = altitude(latitude, declination, hour_angle);
    let azimuth = azimuth(latitude, declination, hour_angle);
    let azimuth_from_facade = normalize_degrees_0_to_360(azimuth - query.facade_orientation());
    let incidence_angle = minimal_angular_separation(azimuth_from_facade);

    let earth_sun_distance = earth_sun_distance(day);
    let air_mass = air_mass(altitude);
    let direct_irradiance =
        direct_irradiance(altitude, incidence_angle, air_mass, earth_sun_distance);

    SolarPosition {
        query: *query,
        altitude,
        azimuth,
        azimuth_from_facade,
        declination,
        equation_of_time,
        local_solar_time,
        hour_angle,
        earth_sun_distance,
        air_mass,
        incidence_angle,
        direct_irradiance,
        placement: placement(azimuth, altitude, query.scene_radius()),
    }
}

/// Solar declination in degrees for a day of year.
#[must_use]
pub fn declination(day_of_year: u32) -> f64 {
    MAX_DECLINATION * sin(TAU * (284.0 + f64::from(day_of_year)) / DAYS_PER_YEAR)
}

/// Equation of time in minutes for a day of year.
#[must_use]
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let b = TAU * (f64::from(day_of_year) - 1.0) / DAYS_PER_YEAR;
    4.0 * (0.000075 + 0.001868 * cos(b)
        - 0.032077 * sin(b)
        - 0.014615 * cos(2.0 * b)
        - 0.04089 * sin(2.0 * b))
}

/// Local solar time in hours, from the local clock time, longitude and equation of time.
///
/// The result is not wrapped into a single day.
#[must_use]
pub fn local_solar_time(local_time_hours: f64, longitude: f64, equation_of_time: f64) -> f64 {
    local_time_hours + longitude / 15.0 + equation_of_time / 60.0
}

/// Hour angle in degrees: 15° per hour away from solar noon.
#[must_use]
pub fn hour_angle(local_solar_time: f64) -> f64 {
    15.0 * (local_solar_time - 12.0)
}

/// Sun altitude in degrees.
///
/// The sine is clamped to [-1, 1] before the inverse sine so round-off at the poles
/// cannot produce NaN.
#[must_use]
pub fn altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let h = degrees_to_radians(hour_angle);

    let sin_altitude = sin(phi) * sin(delta) + cos(phi) * cos(delta) * cos(h);
    radians_to_degrees(asin(sin_altitude.clamp(-1.0, 1.0)))
}

/// Sun azimuth in degrees clockwise from north, in [0, 360).
#[must_use]
pub fn azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let h = degrees_to_radians(hour_angle);

    // atan2 measures from south; +180° turns it into a compass bearing
    let gamma = atan2(sin(h), cos(h) * sin(phi) - tan(delta) * cos(phi));
    normalize_degrees_0_to_360(radians_to_degrees(gamma) + 180.0)
}

/// Incidence angle between the sun's azimuth and a facade orientation, in [0, 180].
#[must_use]
pub fn incidence_angle(azimuth: f64, facade_orientation: f64) -> f64 {
    minimal_angular_separation(azimuth - facade_orientation)
}

/// Earth-sun distance in astronomical units.
#[must_use]
pub fn earth_sun_distance(day_of_year: u32) -> f64 {
    1.0 - ECCENTRICITY * cos(TAU * (f64::from(day_of_year) - 4.0) / DAYS_PER_YEAR)
}

/// Relative air mass after Kasten & Young (1989).
///
/// Returns `f64::INFINITY` at or below the horizon.
#[must_use]
pub fn air_mass(altitude: f64) -> f64 {
    if altitude <= 0.0 {
        return f64::INFINITY;
    }
    1.0 / (sin(degrees_to_radians(altitude)) + 0.50572 * powf(altitude + 6.07995, -1.6364))
}

/// Direct-beam irradiance on a facade in W/m².
///
/// Zero when the sun is at or below the horizon or behind the facade (incidence ≥ 90°).
#[must_use]
pub fn direct_irradiance(
    altitude: f64,
    incidence_angle: f64,
    air_mass: f64,
    earth_sun_distance: f64,
) -> f64 {
    if altitude <= 0.0 || incidence_angle >= 90.0 {
        return 0.0;
    }

    let attenuation = powf(0.7, powf(air_mass.min(MAX_AIR_MASS), 0.678));
    SOLAR_CONSTANT * attenuation * cos(degrees_to_radians(incidence_angle))
        / (earth_sun_distance * earth_sun_distance)
}

/// Cartesian placement for an azimuth/altitude pair at the given radius.
#[must_use]
pub fn placement(azimuth: f64, altitude: f64, radius: f64) -> Placement {
    let theta = degrees_to_radians(azimuth);
    let phi = degrees_to_radians(altitude);
    Placement {
        x: radius * cos(phi) * sin(theta),
        y: radius * sin(phi),
        z: radius * cos(phi) * cos(theta),
    }
}

/// Share of the beam a tilted panel intercepts, as a percentage in [0, 100].
///
/// Computed as the cosine of the angle between the sun direction and the panel normal,
/// floored at zero when the sun is behind the panel.
///
/// # Arguments
/// * `altitude` - Sun altitude in degrees
/// * `azimuth` - Sun azimuth in degrees clockwise from north
/// * `panel` - Panel azimuth and tilt
///
/// # Example
/// ```rust
/// use solar_facade::{PanelOrientation, compute_panel_efficiency};
///
/// // sun straight along the normal of a south-facing panel tilted 30°
/// let efficiency = compute_panel_efficiency(60.0, 180.0, &PanelOrientation::default());
/// assert!((efficiency - 100.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn compute_panel_efficiency(altitude: f64, azimuth: f64, panel: &PanelOrientation) -> f64 {
    let alt = degrees_to_radians(altitude);
    let az = degrees_to_radians(azimuth);
    let tilt = degrees_to_radians(panel.tilt());
    let panel_az = degrees_to_radians(panel.azimuth());

    let sun = [cos(alt) * sin(az), cos(alt) * cos(az), sin(alt)];
    let normal = [sin(tilt) * sin(panel_az), sin(tilt) * cos(panel_az), cos(tilt)];
    let cosine = sun[0] * normal[0] + sun[1] * normal[1] + sun[2] * normal[2];

    (cosine.max(0.0) * 100.0).min(100.0)
}

/// [`compute_panel_efficiency`] for the default south-facing panel tilted 30°.
#[must_use]
pub fn panel_efficiency(altitude: f64, azimuth: f64) -> f64 {
    compute_panel_efficiency(altitude, azimuth, &PanelOrientation::default())
}

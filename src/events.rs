//! Sunrise, sunset and solar noon by coarse sampling and bounded refinement.
//!
//! The day is scanned at a coarse step (at least half an hour) to bracket horizon crossings
//! and the altitude maximum. Each crossing is then bisected a fixed number of times and the
//! maximum is narrowed by a fixed number of ternary-search steps, so the cost of a call is
//! bounded regardless of the requested step:
//! at most 49 coarse samples, 2 × 10 bisection samples and 12 + 1 noon samples.
//!
//! Samples are memoized in a small table that lives on the stack for the duration of one
//! call; nothing is shared between calls.

use crate::geometry::compute_solar_position;
use crate::math::round;
use crate::{EventSearch, SolarHours, SolarQuery, SunEvents};

/// Hours in the scanned day.
const DAY_HOURS: f64 = 24.0;

/// Bisection steps per crossing: 0.5 h / 2^10 is under two seconds.
const BISECTION_ITERATIONS: u32 = 10;

/// Ternary-search steps for the altitude maximum.
const NOON_ITERATIONS: u32 = 6;

/// Noon search half-width lower bound, in hours.
const MIN_NOON_WINDOW_HOURS: f64 = 1.0;

/// Sample times are keyed at microhour resolution.
const TIME_KEY_SCALE: f64 = 1e6;

/// Enough for a full scan at the minimum coarse step plus every refinement sample.
const CACHE_CAPACITY: usize = 96;

/// Locate sunrise, sunset and solar noon for a day and location.
///
/// Times are hours on the same local clock as [`SolarQuery::local_time_hours`].
/// Sunrise is the first rising horizon crossing of the day and sunset the last falling
/// one; either is `None` when no such crossing exists (polar day or polar night).
///
/// # Arguments
/// * `day_of_year` - Day of year (1 to 365)
/// * `latitude` - Observer latitude in degrees
/// * `longitude` - Observer longitude in degrees
/// * `facade_orientation` - Facade orientation in degrees; does not move any event
/// * `search` - Sampling configuration
///
/// # Example
/// ```rust
/// use solar_facade::{EventSearch, find_sun_events};
///
/// // Paris, summer solstice
/// let events = find_sun_events(172, 48.8566, 2.3522, 0.0, &EventSearch::default());
/// let sunrise = events.sunrise().expect("Paris has a sunrise in June");
/// assert!((sunrise.hours() - 3.86).abs() < 0.05);
/// assert!((events.max_altitude() - 64.6).abs() < 0.3);
///
/// // Tromsø, midnight sun
/// let events = find_sun_events(172, 69.6492, 18.9553, 0.0, &EventSearch::default());
/// assert!(events.sunrise().is_none() && events.sunset().is_none());
/// ```
#[must_use]
pub fn find_sun_events(
    day_of_year: u32,
    latitude: f64,
    longitude: f64,
    facade_orientation: f64,
    search: &EventSearch,
) -> SunEvents {
    let query = SolarQuery::new(day_of_year, 0.0, latitude, longitude)
        .with_facade_orientation(facade_orientation);
    let mut sampler = AltitudeSampler::new(query);

    let coarse_step = search.coarse_step();
    let scan = coarse_scan(&mut sampler, coarse_step);

    let sunrise = scan
        .rising
        .map(|bracket| SolarHours::from_hours(refine_crossing(&mut sampler, bracket)));
    let sunset = scan
        .falling
        .map(|bracket| SolarHours::from_hours(refine_crossing(&mut sampler, bracket)));
    let (solar_noon, max_altitude) = refine_noon(&mut sampler, scan.peak_time, coarse_step);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        day_of_year,
        latitude,
        longitude,
        coarse_step,
        samples = sampler.len(),
        sunrise = ?sunrise.map(|t| t.hours()),
        sunset = ?sunset.map(|t| t.hours()),
        solar_noon,
        max_altitude,
        "sun events located"
    );

    SunEvents {
        sunrise,
        sunset,
        solar_noon: SolarHours::from_hours(solar_noon),
        max_altitude,
    }
}

/// [`find_sun_events`] with the default search step.
#[must_use]
pub fn sun_events(
    day_of_year: u32,
    latitude: f64,
    longitude: f64,
    facade_orientation: f64,
) -> SunEvents {
    find_sun_events(
        day_of_year,
        latitude,
        longitude,
        facade_orientation,
        &EventSearch::default(),
    )
}

/// Memoized altitude lookups for one day and location.
struct AltitudeSampler {
    query: SolarQuery,
    entries: [(i64, f64); CACHE_CAPACITY],
    len: usize,
}

impl AltitudeSampler {
    fn new(query: SolarQuery) -> Self {
        Self {
            query,
            entries: [(0, 0.0); CACHE_CAPACITY],
            len: 0,
        }
    }

    /// Altitude in degrees at `hours`, clamped into the day.
    fn sample(&mut self, hours: f64) -> f64 {
        let hours = hours.clamp(0.0, DAY_HOURS);
        let key = round(hours * TIME_KEY_SCALE) as i64;

        if let Some(&(_, altitude)) = self.entries[..self.len].iter().find(|(k, _)| *k == key) {
            return altitude;
        }

        let altitude = compute_solar_position(&self.query.at_time(hours)).altitude();
        // at most 49 coarse + 20 bisection + 13 noon samples per search
        if self.len < CACHE_CAPACITY {
            self.entries[self.len] = (key, altitude);
            self.len += 1;
        }
        altitude
    }

    #[cfg(any(test, feature = "tracing"))]
    const fn len(&self) -> usize {
        self.len
    }
}

/// Two sample times whose altitudes lie on opposite sides of the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bracket {
    start: f64,
    end: f64,
}

#[derive(Debug, Clone, Copy)]
struct CoarseScan {
    rising: Option<Bracket>,
    falling: Option<Bracket>,
    peak_time: f64,
}

fn coarse_scan(sampler: &mut AltitudeSampler, step: f64) -> CoarseScan {
    let mut rising = None;
    let mut falling = None;
    let mut peak_time = 0.0;
    let mut peak_altitude = f64::NEG_INFINITY;
    let mut previous: Option<(f64, f64)> = None;
    let mut time = 0.0;

    loop {
        let altitude = sampler.sample(time);
        if altitude > peak_altitude {
            peak_altitude = altitude;
            peak_time = time;
        }

        if let Some((previous_time, previous_altitude)) = previous {
            let bracket = Bracket {
                start: previous_time,
                end: time,
            };
            if previous_altitude <= 0.0 && altitude > 0.0 {
                if rising.is_none() {
                    rising = Some(bracket);
                }
            } else if previous_altitude > 0.0 && altitude <= 0.0 {
                // the last falling crossing wins
                falling = Some(bracket);
            }
        }

        previous = Some((time, altitude));
        if time >= DAY_HOURS {
            break;
        }
        time = (time + step).min(DAY_HOURS);
    }

    CoarseScan {
        rising,
        falling,
        peak_time,
    }
}

/// Bisects a horizon crossing and returns the midpoint of the final bracket.
fn refine_crossing(sampler: &mut AltitudeSampler, bracket: Bracket) -> f64 {
    let Bracket { mut start, mut end } = bracket;
    let start_is_up = sampler.sample(start) > 0.0;

    for _ in 0..BISECTION_ITERATIONS {
        let middle = 0.5 * (start + end);
        if (sampler.sample(middle) > 0.0) == start_is_up {
            start = middle;
        } else {
            end = middle;
        }
    }

    0.5 * (start + end)
}

/// Narrows the window around the coarse maximum; returns the time and altitude of the
/// final midpoint.
fn refine_noon(sampler: &mut AltitudeSampler, center: f64, coarse_step: f64) -> (f64, f64) {
    let half_width = coarse_step.max(MIN_NOON_WINDOW_HOURS);
    let mut low = (center - half_width).max(0.0);
    let mut high = (center + half_width).min(DAY_HOURS);

    for _ in 0..NOON_ITERATIONS {
        let third = (high - low) / 3.0;
        let left = low + third;
        let right = high - third;
        if sampler.sample(left) < sampler.sample(right) {
            low = left;
        } else {
            high = right;
        }
    }

    let noon = 0.5 * (low + high);
    (noon, sampler.sample(noon))
}

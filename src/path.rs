//! Visible sun trajectory over part of a day.
//!
//! Used to draw seasonal reference arcs: the positions between two clock times, sampled at a
//! fixed step, keeping only those above the horizon.

use crate::geometry::compute_solar_position;
use crate::math::floor;
use crate::types::DEFAULT_SCENE_RADIUS;
use crate::{SolarPosition, SolarQuery};

/// Sampling window and resolution for [`sun_path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSampling {
    start_hour: f64,
    end_hour: f64,
    step_hours: f64,
    scene_radius: f64,
}

impl PathSampling {
    /// Step used when the requested one is not positive.
    pub const DEFAULT_STEP_HOURS: f64 = 0.5;

    /// Creates a sampling window from `start_hour` to `end_hour` (inclusive).
    ///
    /// A non-positive or non-finite step falls back to [`Self::DEFAULT_STEP_HOURS`].
    #[must_use]
    pub fn new(start_hour: f64, end_hour: f64, step_hours: f64) -> Self {
        let step_hours = if step_hours.is_finite() && step_hours > 0.0 {
            step_hours
        } else {
            Self::DEFAULT_STEP_HOURS
        };
        Self {
            start_hour,
            end_hour,
            step_hours,
            scene_radius: DEFAULT_SCENE_RADIUS,
        }
    }

    /// Sets the scene radius of the sampled placements.
    #[must_use]
    pub const fn with_scene_radius(mut self, radius: f64) -> Self {
        self.scene_radius = radius;
        self
    }

    /// Gets the first sampled hour.
    #[must_use]
    pub const fn start_hour(&self) -> f64 {
        self.start_hour
    }

    /// Gets the last hour that may be sampled.
    #[must_use]
    pub const fn end_hour(&self) -> f64 {
        self.end_hour
    }

    /// Gets the step between samples in hours.
    #[must_use]
    pub const fn step_hours(&self) -> f64 {
        self.step_hours
    }

    fn sample_count(&self) -> u32 {
        if !(self.end_hour >= self.start_hour) {
            return 0;
        }
        // tolerate round-off so that 6 → 18 by 0.5 includes 18
        let steps = floor((self.end_hour - self.start_hour) / self.step_hours + 1e-9);
        steps.min(f64::from(u32::MAX - 1)) as u32 + 1
    }
}

impl Default for PathSampling {
    /// 06:00 to 18:00 every half hour.
    fn default() -> Self {
        Self::new(6.0, 18.0, Self::DEFAULT_STEP_HOURS)
    }
}

/// Iterator over the above-horizon positions of one day. Created by [`sun_path`].
#[derive(Debug, Clone)]
pub struct SunPath {
    query: SolarQuery,
    start_hour: f64,
    step_hours: f64,
    index: u32,
    count: u32,
}

impl Iterator for SunPath {
    type Item = SolarPosition;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.count {
            let hour = self.start_hour + f64::from(self.index) * self.step_hours;
            self.index += 1;

            let position = compute_solar_position(&self.query.at_time(hour));
            if position.is_above_horizon() {
                return Some(position);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some((self.count - self.index) as usize))
    }
}

/// Sample the visible sun path of a day.
///
/// # Example
/// ```rust
/// use solar_facade::{PathSampling, sun_path};
///
/// let arc: Vec<_> = sun_path(172, 48.8566, 0.0, &PathSampling::default()).collect();
/// assert_eq!(arc.len(), 25);
/// assert!(arc.iter().all(|p| p.is_above_horizon()));
/// ```
#[must_use]
pub fn sun_path(day_of_year: u32, latitude: f64, longitude: f64, sampling: &PathSampling) -> SunPath {
    let query = SolarQuery::new(day_of_year, sampling.start_hour, latitude, longitude)
        .with_scene_radius(sampling.scene_radius);
    SunPath {
        query,
        start_hour: sampling.start_hour,
        step_hours: sampling.step_hours,
        index: 0,
        count: sampling.sample_count(),
    }
}

/// Reference days drawn as seasonal sun paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonalDay {
    /// Northern summer solstice (21 June)
    SummerSolstice,
    /// Northern winter solstice (21 December)
    WinterSolstice,
    /// March equinox (21 March)
    SpringEquinox,
    /// September equinox (23 September)
    AutumnEquinox,
}

impl SeasonalDay {
    /// All reference days, in drawing order.
    pub const ALL: [Self; 4] = [
        Self::SummerSolstice,
        Self::WinterSolstice,
        Self::SpringEquinox,
        Self::AutumnEquinox,
    ];

    /// Gets the day of year of this reference day.
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        match self {
            Self::SummerSolstice => 172,
            Self::WinterSolstice => 355,
            Self::SpringEquinox => 80,
            Self::AutumnEquinox => 266,
        }
    }

    /// Gets a display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SummerSolstice => "Summer solstice",
            Self::WinterSolstice => "Winter solstice",
            Self::SpringEquinox => "Spring equinox",
            Self::AutumnEquinox => "Autumn equinox",
        }
    }

    /// Sun path of this day at the given latitude, on the prime meridian with the
    /// default 06:00-18:00 window.
    #[must_use]
    pub fn path(&self, latitude: f64) -> SunPath {
        sun_path(self.day_of_year(), latitude, 0.0, &PathSampling::default())
    }
}

//! Scenario tests for positions, events and paths across hemispheres and seasons.

use solar_facade::{
    DEFAULT_SCENE_RADIUS, Error, EventSearch, PathSampling, SeasonalDay, SolarQuery,
    compute_solar_position, find_sun_events, geometry, sun_events, sun_path,
};

const PARIS: (f64, f64) = (48.8566, 2.3522);
const SYDNEY: (f64, f64) = (-33.8688, 151.2093);
const TROMSO: (f64, f64) = (69.6492, 18.9553);

/// Horizontal coordinates from an east/north/up unit vector.
fn reference_horizontal(latitude: f64, declination: f64, hour_angle: f64) -> (f64, f64) {
    let (phi, delta, h) = (
        latitude.to_radians(),
        declination.to_radians(),
        hour_angle.to_radians(),
    );
    let east = -delta.cos() * h.sin();
    let north = delta.sin() * phi.cos() - delta.cos() * h.cos() * phi.sin();
    let up = delta.sin() * phi.sin() + delta.cos() * h.cos() * phi.cos();

    let altitude = up.asin().to_degrees();
    let azimuth = east.atan2(north).to_degrees().rem_euclid(360.0);
    (altitude, azimuth)
}

#[test]
fn test_position_matches_vector_model() {
    for (latitude, longitude) in [PARIS, SYDNEY] {
        for day in [80, 172, 355] {
            for time in [8.0, 12.0, 16.5] {
                for facade in [90.0, 180.0] {
                    let query = SolarQuery::new(day, time, latitude, longitude)
                        .with_facade_orientation(facade);
                    let position = compute_solar_position(&query);

                    let declination = 23.45
                        * (std::f64::consts::TAU * (284.0 + f64::from(day)) / 365.0).sin();
                    let solar_time =
                        time + longitude / 15.0 + position.equation_of_time() / 60.0;
                    let hour_angle = 15.0 * (solar_time - 12.0);
                    let (altitude, azimuth) =
                        reference_horizontal(latitude, declination, hour_angle);

                    let context = format!("lat {latitude} day {day} time {time} facade {facade}");
                    assert!((position.declination() - declination).abs() < 1e-9, "{context}");
                    assert!((position.hour_angle() - hour_angle).abs() < 1e-9, "{context}");
                    assert!((position.altitude() - altitude).abs() < 1e-7, "{context}");
                    assert!((position.azimuth() - azimuth).abs() < 1e-7, "{context}");

                    let separation = (azimuth - facade).rem_euclid(360.0);
                    let incidence = separation.min(360.0 - separation);
                    assert!((position.incidence_angle() - incidence).abs() < 1e-7, "{context}");
                }
            }
        }
    }
}

#[test]
fn test_position_invariants_over_a_year() {
    for (latitude, longitude) in [PARIS, SYDNEY, TROMSO, (0.0, -78.4678)] {
        for day in (1..=365).step_by(11) {
            for step in 0..=48 {
                let time = f64::from(step) * 0.5;
                let position = compute_solar_position(
                    &SolarQuery::new(day, time, latitude, longitude).with_facade_orientation(135.0),
                );

                assert!((-90.0..=90.0).contains(&position.altitude()));
                assert!((0.0..360.0).contains(&position.azimuth()));
                assert!((0.0..360.0).contains(&position.azimuth_from_facade()));
                assert!((0.0..=180.0).contains(&position.incidence_angle()));
                assert!((position.zenith_angle() + position.altitude() - 90.0).abs() < 1e-12);

                let irradiance = position.direct_irradiance();
                assert!(irradiance >= 0.0);
                let ceiling = geometry::SOLAR_CONSTANT
                    / (position.earth_sun_distance() * position.earth_sun_distance());
                assert!(irradiance <= ceiling);
                if position.altitude() <= 0.0 || position.incidence_angle() >= 90.0 {
                    assert_eq!(irradiance, 0.0);
                    assert!(position.altitude() > 0.0 || position.air_mass().is_infinite());
                }

                let [x, y, z] = position.placement().to_array();
                let radius = (x * x + y * y + z * z).sqrt();
                assert!((radius - DEFAULT_SCENE_RADIUS).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn test_facade_faces_the_sun() {
    // Paris, summer afternoon: a west facade is lit, an east facade is not
    let query = SolarQuery::new(172, 17.0, PARIS.0, PARIS.1);
    let west = compute_solar_position(&query.with_facade_orientation(270.0));
    let east = compute_solar_position(&query.with_facade_orientation(90.0));

    assert!(west.incidence_angle() < 90.0);
    assert!(west.direct_irradiance() > 0.0);
    assert!(east.incidence_angle() > 90.0);
    assert_eq!(east.direct_irradiance(), 0.0);
    assert_eq!(west.altitude(), east.altitude());
}

#[test]
fn test_lenient_inputs_are_sanitized() {
    let query = SolarQuery::new(0, f64::NAN, f64::NAN, f64::INFINITY)
        .with_facade_orientation(-90.0)
        .with_scene_radius(-1.0);
    assert_eq!(query.day_of_year(), 1);
    assert_eq!(query.local_time_hours(), 0.0);
    assert_eq!(query.latitude(), 0.0);
    assert_eq!(query.longitude(), 0.0);
    assert_eq!(query.facade_orientation(), 270.0);
    assert_eq!(query.scene_radius(), DEFAULT_SCENE_RADIUS);

    let position = compute_solar_position(&query);
    assert!(position.altitude().is_finite());
    assert!(position.azimuth().is_finite());

    assert_eq!(SolarQuery::new(200, 12.0, -120.0, 540.0).latitude(), -90.0);
    assert_eq!(SolarQuery::new(200, 12.0, -120.0, 540.0).longitude(), -180.0);
    assert_eq!(SolarQuery::new(200, 12.0, 10.0, -180.0).longitude(), -180.0);
    assert_eq!(SolarQuery::new(200, 12.0, 10.0, 370.0).longitude(), 10.0);
}

#[test]
fn test_strict_constructor_rejects_what_lenient_adjusts() {
    assert_eq!(
        SolarQuery::try_new(366, 12.0, 0.0, 0.0),
        Err(Error::InvalidDayOfYear { value: 366 })
    );
    assert!(matches!(
        SolarQuery::try_new(100, f64::NAN, 0.0, 0.0),
        Err(Error::InvalidLocalTime { .. })
    ));
    assert_eq!(
        SolarQuery::try_new(100, 12.0, 91.0, 0.0),
        Err(Error::InvalidLatitude { value: 91.0 })
    );
    assert_eq!(
        SolarQuery::try_new(100, 12.0, 0.0, -181.0),
        Err(Error::InvalidLongitude { value: -181.0 })
    );
    assert_eq!(
        SolarQuery::try_new(100, 12.0, 45.0, 9.0),
        Ok(SolarQuery::new(100, 12.0, 45.0, 9.0))
    );
}

#[test]
fn test_paris_seasons() {
    let summer = sun_events(172, PARIS.0, PARIS.1, 0.0);
    let winter = sun_events(355, PARIS.0, PARIS.1, 0.0);

    assert!(summer.is_regular_day() && winter.is_regular_day());
    let summer_daylight = summer.daylight_hours().unwrap();
    let winter_daylight = winter.daylight_hours().unwrap();
    assert!((summer_daylight - 15.97).abs() < 0.05, "summer {summer_daylight}");
    assert!(winter_daylight < 8.5, "winter {winter_daylight}");
    assert!(summer.max_altitude() > winter.max_altitude() + 45.0);

    for events in [summer, winter] {
        let (sunrise, sunset) = (events.sunrise().unwrap(), events.sunset().unwrap());
        assert!(sunrise < events.solar_noon() && events.solar_noon() < sunset);
    }
}

#[test]
fn test_southern_hemisphere_seasons_are_reversed() {
    // clock hours follow the prime meridian, so stay on it to keep sunrise before sunset
    let june = sun_events(172, SYDNEY.0, 0.0, 0.0);
    let december = sun_events(355, SYDNEY.0, 0.0, 0.0);

    assert!(june.daylight_hours().unwrap() < december.daylight_hours().unwrap());
    assert!(june.max_altitude() < december.max_altitude());

    // noon sun stands in the north
    let noon = compute_solar_position(&SolarQuery::new(
        172,
        june.solar_noon().hours(),
        SYDNEY.0,
        0.0,
    ));
    assert!(noon.azimuth() < 10.0 || noon.azimuth() > 350.0, "{}", noon.azimuth());
}

#[test]
fn test_tromso_polar_day_and_night() {
    let midsummer = sun_events(172, TROMSO.0, TROMSO.1, 0.0);
    assert_eq!(midsummer.sunrise(), None);
    assert_eq!(midsummer.sunset(), None);
    assert!(midsummer.max_altitude() > 40.0);
    assert_eq!(midsummer.daylight_hours(), None);

    let midwinter = sun_events(355, TROMSO.0, TROMSO.1, 0.0);
    assert!(!midwinter.is_regular_day());
    assert!(midwinter.max_altitude() < 0.0);
    assert_eq!(SeasonalDay::WinterSolstice.path(TROMSO.0).count(), 0);
}

#[test]
fn test_events_are_repeatable() {
    let search = EventSearch::new(0.25);
    for day in [1, 80, 172, 266, 355] {
        let first = find_sun_events(day, PARIS.0, PARIS.1, 0.0, &search);
        let second = find_sun_events(day, PARIS.0, PARIS.1, 0.0, &search);
        assert_eq!(first, second, "day {day}");
    }
}

#[test]
fn test_step_only_coarsens_the_scan() {
    let default = find_sun_events(172, PARIS.0, PARIS.1, 0.0, &EventSearch::new(0.1));
    let floored = find_sun_events(172, PARIS.0, PARIS.1, 0.0, &EventSearch::new(0.5));
    assert_eq!(default, floored);

    let coarse = find_sun_events(172, PARIS.0, PARIS.1, 0.0, &EventSearch::new(2.0));
    let sunrise = coarse.sunrise().unwrap().hours();
    assert!((sunrise - floored.sunrise().unwrap().hours()).abs() < 0.01);
}

#[test]
fn test_paths_follow_events() {
    let events = sun_events(80, PARIS.0, 0.0, 0.0);
    let sampling = PathSampling::new(0.0, 24.0, 0.25);
    let path: Vec<_> = sun_path(80, PARIS.0, 0.0, &sampling).collect();

    let first = path.first().unwrap().query().local_time_hours();
    let last = path.last().unwrap().query().local_time_hours();
    assert!(first >= events.sunrise().unwrap().hours());
    assert!(first - events.sunrise().unwrap().hours() <= 0.25);
    assert!(last <= events.sunset().unwrap().hours());
    assert!(events.sunset().unwrap().hours() - last <= 0.25);
}

#[test]
fn test_seasonal_paths_at_mid_latitude() {
    let counts: Vec<usize> = SeasonalDay::ALL
        .iter()
        .map(|day| day.path(PARIS.0).count())
        .collect();
    // summer fills the whole 06:00-18:00 window, winter the fewest samples
    assert_eq!(counts[0], 25);
    assert!(counts[1] < counts[2] && counts[1] < counts[3]);
}

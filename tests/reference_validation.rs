//! Validate positions and sun events against tabulated reference data.

use csv::ReaderBuilder;
use solar_facade::{SolarQuery, compute_solar_position, sun_events};
use std::error::Error;
use std::fs::File;

const ANGLE_EPSILON: f64 = 1e-6;
const IRRADIANCE_EPSILON: f64 = 1e-3;
const EVENT_EPSILON_HOURS: f64 = 1e-4;
const ALTITUDE_EPSILON: f64 = 1e-4;

#[derive(Debug)]
struct PositionRecord {
    location: String,
    day_of_year: u32,
    local_time_hours: f64,
    latitude: f64,
    longitude: f64,
    facade_orientation: f64,
    altitude: f64,
    azimuth: f64,
    declination: f64,
    hour_angle: f64,
    equation_of_time: f64,
    incidence_angle: f64,
    direct_irradiance: f64,
}

impl PositionRecord {
    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            location: record[0].to_string(),
            day_of_year: record[1].parse()?,
            local_time_hours: record[2].parse()?,
            latitude: record[3].parse()?,
            longitude: record[4].parse()?,
            facade_orientation: record[5].parse()?,
            altitude: record[6].parse()?,
            azimuth: record[7].parse()?,
            declination: record[8].parse()?,
            hour_angle: record[9].parse()?,
            equation_of_time: record[10].parse()?,
            incidence_angle: record[11].parse()?,
            direct_irradiance: record[12].parse()?,
        })
    }
}

#[derive(Debug)]
struct EventRecord {
    location: String,
    day_of_year: u32,
    latitude: f64,
    longitude: f64,
    sunrise: Option<f64>,
    sunset: Option<f64>,
    solar_noon: f64,
    max_altitude: f64,
}

impl EventRecord {
    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, Box<dyn Error>> {
        let optional = |field: &str| -> Result<Option<f64>, Box<dyn Error>> {
            if field.is_empty() {
                Ok(None)
            } else {
                Ok(Some(field.parse()?))
            }
        };
        Ok(Self {
            location: record[0].to_string(),
            day_of_year: record[1].parse()?,
            latitude: record[2].parse()?,
            longitude: record[3].parse()?,
            sunrise: optional(&record[4])?,
            sunset: optional(&record[5])?,
            solar_noon: record[6].parse()?,
            max_altitude: record[7].parse()?,
        })
    }
}

fn open_reader(path: &str) -> Result<csv::Reader<File>, Box<dyn Error>> {
    let file = File::open(path)?;
    Ok(ReaderBuilder::new().has_headers(true).from_reader(file))
}

fn assert_close(label: &str, actual: f64, expected: f64, epsilon: f64, context: &str) {
    assert!(
        (actual - expected).abs() < epsilon,
        "{label}: got {actual:.10}, expected {expected:.10} ({context})"
    );
}

#[test]
fn test_positions_against_reference_data() -> Result<(), Box<dyn Error>> {
    let mut reader = open_reader("tests/data/solar_position_reference.csv")?;
    let mut count = 0;

    for result in reader.records() {
        let record = PositionRecord::from_csv_record(&result?)?;
        let context = format!(
            "{} day {} at {}h, facade {}",
            record.location, record.day_of_year, record.local_time_hours, record.facade_orientation
        );

        let query = SolarQuery::try_new(
            record.day_of_year,
            record.local_time_hours,
            record.latitude,
            record.longitude,
        )?
        .with_facade_orientation(record.facade_orientation);
        let position = compute_solar_position(&query);

        assert_close("altitude", position.altitude(), record.altitude, ANGLE_EPSILON, &context);
        assert_close("azimuth", position.azimuth(), record.azimuth, ANGLE_EPSILON, &context);
        assert_close(
            "declination",
            position.declination(),
            record.declination,
            ANGLE_EPSILON,
            &context,
        );
        assert_close(
            "hour angle",
            position.hour_angle(),
            record.hour_angle,
            ANGLE_EPSILON,
            &context,
        );
        assert_close(
            "equation of time",
            position.equation_of_time(),
            record.equation_of_time,
            ANGLE_EPSILON,
            &context,
        );
        assert_close(
            "incidence angle",
            position.incidence_angle(),
            record.incidence_angle,
            ANGLE_EPSILON,
            &context,
        );
        assert_close(
            "direct irradiance",
            position.direct_irradiance(),
            record.direct_irradiance,
            IRRADIANCE_EPSILON,
            &context,
        );
        count += 1;
    }

    assert_eq!(count, 240, "reference file should cover the full grid");
    Ok(())
}

#[test]
fn test_sun_events_against_reference_data() -> Result<(), Box<dyn Error>> {
    let mut reader = open_reader("tests/data/sun_events_reference.csv")?;
    let mut count = 0;

    for result in reader.records() {
        let record = EventRecord::from_csv_record(&result?)?;
        let context = format!("{} day {}", record.location, record.day_of_year);
        let events = sun_events(record.day_of_year, record.latitude, record.longitude, 0.0);

        match (events.sunrise(), record.sunrise) {
            (Some(actual), Some(expected)) => {
                assert_close("sunrise", actual.hours(), expected, EVENT_EPSILON_HOURS, &context);
            }
            (None, None) => {}
            (actual, expected) => {
                panic!("sunrise mismatch: got {actual:?}, expected {expected:?} ({context})")
            }
        }
        match (events.sunset(), record.sunset) {
            (Some(actual), Some(expected)) => {
                assert_close("sunset", actual.hours(), expected, EVENT_EPSILON_HOURS, &context);
            }
            (None, None) => {}
            (actual, expected) => {
                panic!("sunset mismatch: got {actual:?}, expected {expected:?} ({context})")
            }
        }
        assert_close(
            "solar noon",
            events.solar_noon().hours(),
            record.solar_noon,
            EVENT_EPSILON_HOURS,
            &context,
        );
        assert_close(
            "max altitude",
            events.max_altitude(),
            record.max_altitude,
            ALTITUDE_EPSILON,
            &context,
        );
        count += 1;
    }

    assert_eq!(count, 24);
    Ok(())
}

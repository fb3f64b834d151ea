//! Sunrise, sunset and solar noon across latitudes, with search tracing.
//!
//! Run with `--features tracing` to see every search.

use solar_facade::{EventSearch, SunEvents, calendar, find_sun_events};
use tracing_subscriber::filter::LevelFilter;

fn describe(name: &str, day: u32, events: &SunEvents) {
    let (month, day_of_month) = calendar::month_and_day(day);
    print!("{name:<10} {day_of_month:>2}/{month:<2} ");
    match (events.sunrise(), events.sunset()) {
        (Some(sunrise), Some(sunset)) => println!(
            "sunrise {sunrise}  noon {}  sunset {sunset}  daylight {:.2} h  max {:.1}°",
            events.solar_noon(),
            events.daylight_hours().unwrap_or_default(),
            events.max_altitude()
        ),
        _ if events.max_altitude() > 0.0 => println!(
            "no sunrise/sunset, sun up at noon {} (max {:.1}°)",
            events.solar_noon(),
            events.max_altitude()
        ),
        _ => println!(
            "no sunrise/sunset, sun down all day (max {:.1}°)",
            events.max_altitude()
        ),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let locations = [
        ("Paris", 48.8566, 2.3522),
        ("Quito", -0.1807, -78.4678),
        ("Sydney", -33.8688, 0.0),
        ("Tromsø", 69.6492, 18.9553),
    ];
    let search = EventSearch::default();

    for day in [80, 172, 355] {
        for (name, latitude, longitude) in locations {
            let events = find_sun_events(day, latitude, longitude, 0.0, &search);
            describe(name, day, &events);
        }
        println!();
    }

    // A coarse step trades a little precision for fewer samples
    let coarse = find_sun_events(172, 48.8566, 2.3522, 0.0, &EventSearch::new(2.0));
    describe("Paris/2h", 172, &coarse);
}

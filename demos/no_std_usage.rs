//! Example using only the numeric API, as available without std or chrono.
//!
//! Every step of the model is also exposed on its own in `geometry`.

use solar_facade::{SolarQuery, compute_solar_position, geometry, sun_events};

fn main() {
    // Paris on the March equinox, 10:00 local clock time
    let (day, time, latitude, longitude) = (80, 10.0, 48.8566, 2.3522);

    println!("Solar geometry from plain numbers\n");

    let declination = geometry::declination(day);
    let equation_of_time = geometry::equation_of_time(day);
    let solar_time = geometry::local_solar_time(time, longitude, equation_of_time);
    let hour_angle = geometry::hour_angle(solar_time);
    let altitude = geometry::altitude(latitude, declination, hour_angle);
    let azimuth = geometry::azimuth(latitude, declination, hour_angle);

    println!("Step by step:");
    println!("  Declination: {declination:.3}°");
    println!("  Equation of time: {equation_of_time:.3} min");
    println!("  Local solar time: {solar_time:.3} h");
    println!("  Hour angle: {hour_angle:.3}°");
    println!("  Altitude: {altitude:.3}°");
    println!("  Azimuth: {azimuth:.3}°\n");

    let position = compute_solar_position(&SolarQuery::new(day, time, latitude, longitude));
    println!("All at once:");
    println!("  Altitude: {:.3}°", position.altitude());
    println!("  Azimuth: {:.3}°\n", position.azimuth());

    let events = sun_events(day, latitude, longitude, 0.0);
    let (hours, minutes) = events.solar_noon().hours_and_minutes();
    println!("Solar noon at {hours:02}:{minutes:02}, altitude {:.2}°", events.max_altitude());
    if let (Some(sunrise), Some(sunset)) = (events.sunrise(), events.sunset()) {
        println!("Sunrise {:.4} h, sunset {:.4} h", sunrise.hours(), sunset.hours());
    }
}

//! Basic solar position calculation for a facade.

use chrono::NaiveDate;
use solar_facade::{SolarQuery, calendar, compute_solar_position, panel_efficiency};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let latitude = 48.8566; // Paris
    let longitude = 2.3522;

    // Strict construction rejects out-of-range inputs
    let day = calendar::day_of_year(6, 21)?;
    let query = SolarQuery::try_new(day, 15.0, latitude, longitude)?.with_facade_orientation(225.0);
    let position = compute_solar_position(&query);

    println!("Solar position for Paris on 21 June at 15:00, south-west facade:");
    println!("  Altitude: {:.2}°", position.altitude());
    println!("  Azimuth: {:.2}°", position.azimuth());
    println!("  Azimuth from facade: {:.2}°", position.azimuth_from_facade());
    println!("  Incidence angle: {:.2}°", position.incidence_angle());
    println!("  Air mass: {:.3}", position.air_mass());
    println!("  Direct irradiance: {:.0} W/m²", position.direct_irradiance());
    println!(
        "  Panel efficiency (south, 30° tilt): {:.1}%",
        panel_efficiency(position.altitude(), position.azimuth())
    );

    let placement = position.placement();
    println!(
        "  Scene placement: ({:.2}, {:.2}, {:.2})",
        placement.x, placement.y, placement.z
    );

    // Same instant from a calendar date
    let datetime = NaiveDate::from_ymd_opt(2025, 6, 21)
        .ok_or("invalid date")?
        .and_hms_opt(15, 0, 0)
        .ok_or("invalid time")?;
    let from_chrono = compute_solar_position(
        &SolarQuery::from_naive_datetime(datetime, latitude, longitude)
            .with_facade_orientation(225.0),
    );
    println!(
        "\nFrom {datetime}: identical result: {}",
        from_chrono == position
    );

    // Lenient construction clamps and wraps instead
    let lenient = SolarQuery::new(400, 12.0, 95.0, 190.0);
    println!(
        "\nLenient query: day {}, latitude {}, longitude {}",
        lenient.day_of_year(),
        lenient.latitude(),
        lenient.longitude()
    );
    if let Err(err) = SolarQuery::try_new(400, 12.0, 95.0, 190.0) {
        println!("Strict query: {err}");
    }

    Ok(())
}

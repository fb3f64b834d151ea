//! Seasonal sun paths as scene coordinates, e.g. for drawing arcs around a building.

use solar_facade::{PathSampling, SeasonalDay, sun_path};

fn main() {
    let latitude = 48.8566;

    for day in SeasonalDay::ALL {
        let arc: Vec<[f64; 3]> = day
            .path(latitude)
            .map(|position| position.placement().to_array())
            .collect();
        println!("{} (day {}): {} points", day.label(), day.day_of_year(), arc.len());
        for [x, y, z] in arc.iter().step_by(4) {
            println!("  ({x:6.2}, {y:6.2}, {z:6.2})");
        }
    }

    // Custom window and radius: the whole day on a larger sphere
    let sampling = PathSampling::new(0.0, 24.0, 1.0).with_scene_radius(25.0);
    println!("\nSummer solstice, hourly, radius 25:");
    for position in sun_path(172, latitude, 0.0, &sampling) {
        println!(
            "  {:>5.2} h  altitude {:5.1}°  azimuth {:5.1}°",
            position.query().local_time_hours(),
            position.altitude(),
            position.azimuth()
        );
    }
}

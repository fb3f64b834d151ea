//! # Solar Facade
//!
//! Sun geometry for architectural facade studies: where the sun is, how strongly it hits a
//! facade, and when it rises, culminates and sets on a given day of the year.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The model is a compact textbook one (cosine declination, simple equation of time, no
//! refraction) working on a 365-day year and local solar clock hours. It is meant for
//! interactive visualisation and design exploration, not for ephemeris-grade accuracy.
//!
//! ## Features
//!
//! - Instant solar geometry: altitude, azimuth, facade-relative azimuth, incidence angle,
//!   air mass and clear-sky direct irradiance on the facade
//! - 3D scene placement of the sun on a sphere around the building
//! - Sunrise, sunset and solar noon found by a coarse scan refined with bisection and a
//!   ternary search, with polar days and nights reported as missing events
//! - Visible sun paths for the solstices and equinoxes
//! - Stateless and thread-safe; works in `no_std`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library math
//! - `chrono` (default): Build queries from `NaiveDateTime` and convert event times to `NaiveTime`
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `tracing`: Emit `tracing` events for input adjustments and event searches
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-facade = "0.1"
//!
//! # Minimal std
//! solar-facade = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std
//! solar-facade = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Solar Position
//! ```rust
//! use solar_facade::{SolarQuery, compute_solar_position};
//!
//! // Paris, 21 June, 14:30 local clock time, facade facing south-west
//! let query = SolarQuery::new(172, 14.5, 48.8566, 2.3522).with_facade_orientation(225.0);
//! let position = compute_solar_position(&query);
//!
//! println!("Altitude: {:.2}°", position.altitude());
//! println!("Azimuth: {:.2}°", position.azimuth());
//! println!("Incidence on facade: {:.2}°", position.incidence_angle());
//! println!("Direct irradiance: {:.0} W/m²", position.direct_irradiance());
//! assert!(position.is_above_horizon());
//! ```
//!
//! ### Sunrise and Sunset
//! ```rust
//! use solar_facade::sun_events;
//!
//! let events = sun_events(172, 48.8566, 2.3522, 0.0);
//! match (events.sunrise(), events.sunset()) {
//!     (Some(sunrise), Some(sunset)) => {
//!         println!("Sunrise: {sunrise}");
//!         println!("Solar noon: {}", events.solar_noon());
//!         println!("Sunset: {sunset}");
//!     }
//!     _ => println!("No sunrise/sunset (polar day/night)"),
//! }
//! ```
//!
//! ### Seasonal Paths
//! ```rust
//! use solar_facade::SeasonalDay;
//!
//! for day in SeasonalDay::ALL {
//!     let visible = day.path(48.8566).count();
//!     println!("{}: {visible} visible samples", day.label());
//! }
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Altitude**: 0° = horizon, 90° = directly overhead (-90° to +90°)
//! - **Facade orientation**: direction the facade faces, in azimuth degrees
//! - **Scene placement**: `y` up, `x` towards east, `z` towards north

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of clamped inputs in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::events::{find_sun_events, sun_events};
pub use crate::geometry::{compute_panel_efficiency, compute_solar_position, panel_efficiency};
pub use crate::path::{PathSampling, SeasonalDay, SunPath, sun_path};
pub use crate::types::{
    DEFAULT_SCENE_RADIUS, EventSearch, PanelOrientation, Placement, SolarHours, SolarPosition,
    SolarQuery, SunEvents,
};

// Computation modules
pub mod events;
pub mod geometry;
pub mod path;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod calendar;

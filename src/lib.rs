//! # Orrery
//!
//! Apparent sky positions of the five classical planets from a Keplerian two-body model.
//!
//! For a body and a UTC instant the library solves Kepler's equation, rotates the orbit into the
//! heliocentric ecliptic frame, moves the origin to a simplified Earth, rotates into the
//! equatorial frame with a fixed obliquity, and reports right ascension, declination, distance,
//! an approximate magnitude and the zodiacal constellation. It also gives the sidereal time and
//! zenith of an observer, and a y-up projection of (RA, Dec) onto a sphere for 3D scenes.
//!
//! The entry point is [`Orrery`](crate::orrery::Orrery).
pub mod body_position;
pub mod config;
pub mod constants;
pub mod constellations;
pub mod kepler;
pub mod magnitude;
pub mod observers;
pub mod orbital_elements;
pub mod orrery;
pub mod orrery_errors;
pub mod projection;
pub mod ref_system;
pub mod time;

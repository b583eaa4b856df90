//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! aliases** used throughout the `orrery` library.
//!
//! ## Overview
//!
//! - Unit conversions (hours ↔ degrees, milliseconds ↔ days)
//! - Julian-date anchors (J2000.0, Unix epoch)
//! - The fixed obliquity of the ecliptic used by the equatorial conversion
//! - Core type aliases that document the unit carried by a plain `f64`
//!
//! Every angle that crosses a public boundary is expressed in **degrees** (or **hours** for
//! right ascension); radians only appear inside the trigonometric kernels.

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees of right ascension per hour
pub const DEG_PER_HOUR: f64 = 15.0;

/// Number of milliseconds in a day
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

// -------------------------------------------------------------------------------------------------
// Time anchors
// -------------------------------------------------------------------------------------------------

/// Julian date of J2000.0 (2000-01-01 12:00:00 UTC)
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian date of the Unix epoch (1970-01-01 00:00:00 UTC)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Unix timestamp of J2000.0 in milliseconds
pub const J2000_UNIX_MILLIS: f64 = 946_728_000_000.0;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2_400_000.5;

/// Largest absolute Unix timestamp (ms) an [`Instant`](crate::time::Instant) may hold.
/// ±100 000 000 days around 1970.
pub const MAX_UNIX_MILLIS: f64 = 8.64e15;

// -------------------------------------------------------------------------------------------------
// Model constants
// -------------------------------------------------------------------------------------------------

/// Fixed obliquity of the ecliptic (degrees)
pub const OBLIQUITY: Degree = 23.4367;

/// Convergence threshold on the Newton step of the Kepler solver (radians)
pub const KEPLER_TOLERANCE: Radian = 1e-6;

/// Iteration cap of the Kepler solver
pub const KEPLER_MAX_ITERATIONS: usize = 100;

/// Name returned by the constellation lookup when no box contains the query point
pub const UNKNOWN_CONSTELLATION: &str = "Unknown";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Right ascension or sidereal time in hours
pub type Hour = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Date (days)
pub type JulianDate = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

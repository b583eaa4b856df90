//! # Body position result
//!
//! [`BodyPosition`] is the record returned for one body at one instant by
//! [`Orrery::compute_position`](crate::orrery::Orrery::compute_position). It is a plain value,
//! created fresh for every query and never mutated afterwards; every intermediate quantity of
//! the pipeline is kept so the presentation layer can display it without recomputing anything.
//!
//! ## Contents
//!
//! - **Orbital angles** ([`OrbitalAngles`]): mean, eccentric and true anomaly (degrees,
//!   [0, 360)) and heliocentric distance (AU).
//! - **Cartesian vectors** (AU): heliocentric ecliptic, geocentric ecliptic, geocentric
//!   equatorial.
//! - **Sky position**: [`EquatorialCoordinates`] (RA hours in [0, 24), Dec degrees).
//! - **Readouts**: geocentric distance, apparent magnitude, constellation name.
//!
//! ## Display
//!
//! `BodyPosition` implements [`Display`](std::fmt::Display) with a compact multi-line readout.
use std::fmt;

use nalgebra::Vector3;
use serde::Serialize;

use crate::{
    constants::{AstronomicalUnit, Degree},
    projection::project_to_sphere,
    ref_system::EquatorialCoordinates,
    time::Instant,
};

/// Intermediate angles of the two-body solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalAngles {
    pub mean_anomaly: Degree,
    pub eccentric_anomaly: Degree,
    pub true_anomaly: Degree,
    pub heliocentric_distance: AstronomicalUnit,
}

/// Apparent position of one body at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyPosition {
    /// Lowercase body id, as found in the element table.
    pub body: String,
    pub instant: Instant,
    pub angles: OrbitalAngles,
    pub heliocentric_ecliptic: Vector3<f64>,
    pub geocentric_ecliptic: Vector3<f64>,
    pub geocentric_equatorial: Vector3<f64>,
    pub equatorial: EquatorialCoordinates,
    pub geocentric_distance: AstronomicalUnit,
    pub magnitude: f64,
    pub constellation: &'static str,
}

impl BodyPosition {
    pub fn ra_hours(&self) -> f64 {
        self.equatorial.ra_hours
    }

    pub fn dec_deg(&self) -> Degree {
        self.equatorial.dec_deg
    }

    /// Scene coordinates of the body on a sphere of `radius` (y-up convention, see
    /// [`project_to_sphere`]).
    pub fn scene_position(&self, radius: f64) -> Vector3<f64> {
        project_to_sphere(self.equatorial.ra_hours, self.equatorial.dec_deg, radius)
    }
}

/// Split a right ascension into whole hours and minutes rounded to 0.01, carrying a
/// minute count that rounds to 60 into the next hour (24h wraps to 0h).
fn hours_minutes(ra_hours: f64) -> (u32, f64) {
    let total_minutes = (ra_hours * 60.0 * 100.0).round() / 100.0;
    let hours = (total_minutes / 60.0).floor();
    let minutes = total_minutes - hours * 60.0;
    ((hours as u32) % 24, minutes.max(0.0))
}

impl fmt::Display for BodyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (ra_h, ra_m) = hours_minutes(self.equatorial.ra_hours);

        writeln!(f, "{} @ {}", self.body, self.instant)?;
        writeln!(f, "  RA   = {:02}h {:05.2}m", ra_h, ra_m)?;
        writeln!(f, "  Dec  = {:+.3}°", self.equatorial.dec_deg)?;
        writeln!(f, "  Δ    = {:.4} AU", self.geocentric_distance)?;
        writeln!(f, "  r    = {:.4} AU", self.angles.heliocentric_distance)?;
        writeln!(f, "  mag  = {:+.2}", self.magnitude)?;
        write!(f, "  in   {}", self.constellation)
    }
}

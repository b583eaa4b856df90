//! # Orrery: planet positions and sky orientation
//!
//! This module defines the [`Orrery`](crate::orrery::Orrery) struct, the façade the
//! presentation layer talks to. It owns:
//!
//! 1. **Configuration** ([`OrreryConfig`](crate::config::OrreryConfig)) – obliquity and Kepler
//!    solver settings.
//! 2. **Element table** ([`ElementTable`](crate::orbital_elements::ElementTable)) – the bodies
//!    that can be queried.
//! 3. **Precomputed rotation** – the ecliptic → equatorial matrix for the configured obliquity,
//!    built once in the constructor.
//!
//! Everything is read-only after construction: an `Orrery` can be shared by reference between
//! threads and queried at any instant, in any order, with no caching.
//!
//! ## Pipeline
//!
//! For one body at one instant, [`compute_position`](crate::orrery::Orrery::compute_position)
//! runs:
//!
//! ```text
//! days since J2000 ─▶ M = M₀ + n·d (mod 360) ─▶ E (Kepler) ─▶ ν, r
//!     ─▶ (r·cosν, r·sinν, 0) ─▶ R(ω, i, Ω) ─▶ heliocentric ecliptic
//!     ─▶ − Earth(d) ─▶ geocentric ecliptic ─▶ R_x(ε) ─▶ geocentric equatorial
//!     ─▶ (α, δ) ─▶ constellation, magnitude
//! ```
//!
//! ## Typical usage
//!
//! ```rust
//! use orrery::orrery::Orrery;
//! use orrery::time::Instant;
//!
//! let orrery = Orrery::new();
//! let instant: Instant = "2000-01-01T12:00:00 UTC".parse()?;
//!
//! let mercury = orrery.compute_position("mercury", &instant)?;
//! assert!((mercury.angles.mean_anomaly - 174.8).abs() < 0.01);
//!
//! for (body, result) in orrery.compute_all_positions(&instant) {
//!     match result {
//!         Ok(position) => println!("{position}"),
//!         Err(e) => eprintln!("{body}: {e}"),
//!     }
//! }
//!
//! let zenith = orrery.compute_zenith(&instant, 48.85, 2.35)?;
//! assert_eq!(zenith.dec_deg, 48.85);
//! # Ok::<(), orrery::orrery_errors::OrreryError>(())
//! ```
use std::collections::BTreeMap;

use log::{debug, warn};
use nalgebra::Matrix3;

use crate::{
    body_position::{BodyPosition, OrbitalAngles},
    config::OrreryConfig,
    constellations::constellation_at,
    constants::Degree,
    kepler::{solve_kepler_equation, true_anomaly_and_distance},
    magnitude::apparent_magnitude,
    observers::{earth_position::earth_heliocentric_position, zenith, ObserverLocation},
    orbital_elements::{Body, ElementTable, OrbitalElements},
    orrery_errors::OrreryError,
    ref_system::{ecliptic_to_equatorial_matrix, orbital_to_ecliptic, EquatorialCoordinates},
    time::Instant,
};

#[derive(Debug, Clone)]
pub struct Orrery {
    config: OrreryConfig,
    elements: ElementTable,
    rot_ecl_to_equ: Matrix3<f64>,
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Orrery {
    /// Orrery with the default configuration and the five built-in planets.
    pub fn new() -> Self {
        Orrery::with_config(OrreryConfig::default())
    }

    /// Orrery with a custom configuration and the five built-in planets.
    pub fn with_config(config: OrreryConfig) -> Self {
        Orrery {
            rot_ecl_to_equ: ecliptic_to_equatorial_matrix(config.obliquity),
            config,
            elements: ElementTable::default(),
        }
    }

    /// Replace the element table, keeping the configuration.
    pub fn with_elements(self, elements: ElementTable) -> Self {
        Orrery { elements, ..self }
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn elements(&self) -> &ElementTable {
        &self.elements
    }

    /// Get the rotation matrix from geocentric ecliptic to geocentric equatorial coordinates.
    pub fn get_rot_ecl_to_equ(&self) -> &Matrix3<f64> {
        &self.rot_ecl_to_equ
    }

    /// Apparent position of one body.
    ///
    /// Arguments
    /// -----------------
    /// * `body`: body id (case-insensitive), e.g. `"mars"`.
    /// * `instant`: UTC instant of the observation.
    ///
    /// Return
    /// ----------
    /// * A fresh [`BodyPosition`].
    ///
    /// Errors
    /// ----------
    /// * [`OrreryError::UnknownBody`] if `body` is not in the element table.
    /// * Numerical errors from the Kepler solver, the equatorial conversion or the magnitude
    ///   law (see [`OrreryError::kind`]).
    pub fn compute_position(
        &self,
        body: &str,
        instant: &Instant,
    ) -> Result<BodyPosition, OrreryError> {
        let elements = self.elements.get(body)?;
        self.position_from_elements(&body.trim().to_ascii_lowercase(), elements, instant)
    }

    /// Same as [`compute_position`](Orrery::compute_position) for a built-in [`Body`].
    pub fn compute_body_position(
        &self,
        body: Body,
        instant: &Instant,
    ) -> Result<BodyPosition, OrreryError> {
        self.compute_position(body.name(), instant)
    }

    /// Positions of every body of the element table.
    ///
    /// A failure on one body is logged and stored in its slot; it never discards the
    /// results of the other bodies.
    pub fn compute_all_positions(
        &self,
        instant: &Instant,
    ) -> BTreeMap<String, Result<BodyPosition, OrreryError>> {
        self.elements
            .iter()
            .map(|(name, elements)| {
                let result = self.position_from_elements(name, elements, instant);
                if let Err(e) = &result {
                    warn!("Position of {name} at {instant} failed: {e}");
                }
                (name.to_string(), result)
            })
            .collect()
    }

    /// Equatorial coordinates of the zenith of an observer.
    ///
    /// Errors
    /// ----------
    /// * [`OrreryError::InvalidObserverLocation`] if latitude ∉ [-90, 90] or
    ///   longitude ∉ [-180, 180].
    pub fn compute_zenith(
        &self,
        instant: &Instant,
        latitude: Degree,
        longitude: Degree,
    ) -> Result<EquatorialCoordinates, OrreryError> {
        let observer = ObserverLocation::new(latitude, longitude)?;
        let z = zenith(instant, &observer);
        debug!(
            "Zenith at {instant} for ({latitude}°, {longitude}°): RA = {:.6}h, Dec = {:.6}°",
            z.ra_hours, z.dec_deg
        );
        Ok(z)
    }

    fn position_from_elements(
        &self,
        name: &str,
        elements: &OrbitalElements,
        instant: &Instant,
    ) -> Result<BodyPosition, OrreryError> {
        let kepler = &self.config.kepler;
        let days = instant.days_since_j2000();

        let mean_anomaly = elements.mean_anomaly_at(days);
        let eccentric_anomaly =
            solve_kepler_equation(mean_anomaly, elements.eccentricity, kepler)?;
        let (true_anomaly, heliocentric_distance) = true_anomaly_and_distance(
            eccentric_anomaly,
            elements.eccentricity,
            elements.semi_major_axis,
        );

        let (sin_nu, cos_nu) = true_anomaly.to_radians().sin_cos();
        let heliocentric_ecliptic = orbital_to_ecliptic(
            heliocentric_distance * cos_nu,
            heliocentric_distance * sin_nu,
            elements.inclination,
            elements.periapsis_argument,
            elements.ascending_node,
        );

        let earth = earth_heliocentric_position(days, kepler)?;
        let geocentric_ecliptic = heliocentric_ecliptic - earth;
        let geocentric_equatorial = self.rot_ecl_to_equ * geocentric_ecliptic;

        let equatorial = EquatorialCoordinates::from_cartesian(&geocentric_equatorial)?;
        let geocentric_distance = geocentric_equatorial.norm();

        let constellation = constellation_at(equatorial.ra_hours, equatorial.dec_deg);
        let magnitude = apparent_magnitude(
            elements.base_magnitude,
            heliocentric_distance,
            geocentric_distance,
        )?;

        debug!(
            "{name} at {instant}: M = {mean_anomaly:.6}°, RA = {:.6}h, Dec = {:.6}°, Δ = {geocentric_distance:.6} AU",
            equatorial.ra_hours, equatorial.dec_deg
        );

        Ok(BodyPosition {
            body: name.to_string(),
            instant: *instant,
            angles: OrbitalAngles {
                mean_anomaly,
                eccentric_anomaly,
                true_anomaly,
                heliocentric_distance,
            },
            heliocentric_ecliptic,
            geocentric_ecliptic,
            geocentric_equatorial,
            equatorial,
            geocentric_distance,
            magnitude,
            constellation,
        })
    }
}

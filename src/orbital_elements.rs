//! # Orbital elements and the planet table
//!
//! This module defines the static data the position pipeline runs on:
//!
//! - [`OrbitalElements`] – the classical element set of one body, referred to J2000.0, plus its
//!   mean daily motion and base magnitude.
//! - [`Body`] – the five modeled planets.
//! - [`ElementTable`] – an ordered, immutable mapping `body id → elements`. The default table
//!   holds the five planets; other tables can be assembled in code or read from CSV.
//!
//! ## Units
//!
//! - Lengths: **AU**
//! - Angles: **degrees**
//! - Rates: **degrees per day**
//!
//! ## Data source
//!
//! The built-in values are the JPL "approximate positions of the planets" elements at J2000.0,
//! converted from (L, ϖ) to (M₀ = L − ϖ, ω = ϖ − Ω) and reduced to [0, 360).
//!
//! ## CSV layout
//!
//! ```text
//! name,semi_major_axis,eccentricity,inclination,ascending_node,periapsis_argument,mean_anomaly_at_epoch,mean_daily_motion,base_magnitude
//! mercury,0.38709927,0.20563593,7.00497902,48.33076593,29.12703035,174.79252722,4.09233445,-0.42
//! ```
use std::{fmt, io::Read, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{AstronomicalUnit, Degree},
    kepler::normalize_degrees,
    orrery_errors::OrreryError,
};

/// Keplerian elements of a body at J2000.0.
///
/// Units
/// -----
/// * `semi_major_axis`: AU.
/// * `eccentricity`: unitless, in [0, 1).
/// * `inclination`, `ascending_node`, `periapsis_argument`: degrees (i, Ω, ω).
/// * `mean_anomaly_at_epoch`: degrees (M₀ at J2000.0).
/// * `mean_daily_motion`: degrees per day (n).
/// * `base_magnitude`: absolute magnitude used by the brightness estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub ascending_node: Degree,
    pub periapsis_argument: Degree,
    pub mean_anomaly_at_epoch: Degree,
    pub mean_daily_motion: Degree,
    pub base_magnitude: f64,
}

impl OrbitalElements {
    /// Check that the elements describe a bound elliptic orbit.
    pub fn validate(&self) -> Result<(), OrreryError> {
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(OrreryError::InvalidEccentricity(self.eccentricity));
        }
        if !(self.semi_major_axis > 0.0 && self.semi_major_axis.is_finite()) {
            return Err(OrreryError::InvalidSemiMajorAxis(self.semi_major_axis));
        }
        Ok(())
    }

    /// Mean anomaly `days` days after J2000.0, in [0, 360).
    ///
    /// `days` may be negative; the reduction is a Euclidean modulo so the result never
    /// goes below zero.
    pub fn mean_anomaly_at(&self, days: f64) -> Degree {
        normalize_degrees(self.mean_anomaly_at_epoch + self.mean_daily_motion * days)
    }

    /// Sidereal period in days.
    pub fn orbital_period_days(&self) -> f64 {
        360.0 / self.mean_daily_motion
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital Elements @ J2000.0")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(f, "  a   (semi-major axis)       = {:.6} AU", self.semi_major_axis)?;
        writeln!(f, "  e   (eccentricity)          = {:.6}", self.eccentricity)?;
        writeln!(f, "  i   (inclination)           = {:.6}°", self.inclination)?;
        writeln!(f, "  Ω   (longitude of node)     = {:.6}°", self.ascending_node)?;
        writeln!(f, "  ω   (argument of periapsis) = {:.6}°", self.periapsis_argument)?;
        writeln!(f, "  M₀  (mean anomaly)          = {:.6}°", self.mean_anomaly_at_epoch)?;
        writeln!(f, "  n   (mean daily motion)     = {:.8}°/day", self.mean_daily_motion)?;
        write!(f, "  H   (base magnitude)        = {:.2}", self.base_magnitude)
    }
}

/// The planets modeled by the default element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Body {
    /// All bodies, in table order.
    pub const ALL: [Body; 5] = [
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    /// Identifier used as key in an [`ElementTable`].
    pub fn name(&self) -> &'static str {
        match self {
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
        }
    }

    /// Built-in J2000.0 elements.
    pub fn elements(&self) -> OrbitalElements {
        match self {
            Body::Mercury => OrbitalElements {
                semi_major_axis: 0.38709927,
                eccentricity: 0.20563593,
                inclination: 7.00497902,
                ascending_node: 48.33076593,
                periapsis_argument: 29.12703035,
                mean_anomaly_at_epoch: 174.79252722,
                mean_daily_motion: 4.09233445,
                base_magnitude: -0.42,
            },
            Body::Venus => OrbitalElements {
                semi_major_axis: 0.72333566,
                eccentricity: 0.00677672,
                inclination: 3.39467605,
                ascending_node: 76.67984255,
                periapsis_argument: 54.92262463,
                mean_anomaly_at_epoch: 50.37663232,
                mean_daily_motion: 1.60213034,
                base_magnitude: -4.40,
            },
            Body::Mars => OrbitalElements {
                semi_major_axis: 1.52371034,
                eccentricity: 0.09339410,
                inclination: 1.84969142,
                ascending_node: 49.55953891,
                periapsis_argument: 286.49683150,
                mean_anomaly_at_epoch: 19.39019754,
                mean_daily_motion: 0.52402068,
                base_magnitude: -1.52,
            },
            Body::Jupiter => OrbitalElements {
                semi_major_axis: 5.20288700,
                eccentricity: 0.04838624,
                inclination: 1.30439695,
                ascending_node: 100.47390909,
                periapsis_argument: 274.25457074,
                mean_anomaly_at_epoch: 19.66796068,
                mean_daily_motion: 0.08308529,
                base_magnitude: -9.40,
            },
            Body::Saturn => OrbitalElements {
                semi_major_axis: 9.53667594,
                eccentricity: 0.05386179,
                inclination: 2.48599187,
                ascending_node: 113.66242448,
                periapsis_argument: 338.93645383,
                mean_anomaly_at_epoch: 317.35536592,
                mean_daily_motion: 0.03344414,
                base_magnitude: -8.88,
            },
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Body {
    type Err = OrreryError;

    /// Case-insensitive parse of a body name (`"Mars"`, `"mars"`, `"MARS"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Body::ALL
            .into_iter()
            .find(|body| body.name() == key)
            .ok_or_else(|| OrreryError::UnknownBody(s.to_string()))
    }
}

/// One CSV record of an element table.
#[derive(Debug, Deserialize)]
struct ElementRecord {
    name: String,
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    ascending_node: f64,
    periapsis_argument: f64,
    mean_anomaly_at_epoch: f64,
    mean_daily_motion: f64,
    base_magnitude: f64,
}

impl From<ElementRecord> for (String, OrbitalElements) {
    fn from(r: ElementRecord) -> Self {
        (
            r.name,
            OrbitalElements {
                semi_major_axis: r.semi_major_axis,
                eccentricity: r.eccentricity,
                inclination: r.inclination,
                ascending_node: r.ascending_node,
                periapsis_argument: r.periapsis_argument,
                mean_anomaly_at_epoch: r.mean_anomaly_at_epoch,
                mean_daily_motion: r.mean_daily_motion,
                base_magnitude: r.base_magnitude,
            },
        )
    }
}

/// Ordered table of orbital elements keyed by lowercase body id.
///
/// Insertion order is preserved and is the order in which
/// [`Orrery::compute_all_positions`](crate::orrery::Orrery::compute_all_positions) logs its work.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTable {
    entries: Vec<(String, OrbitalElements)>,
}

impl Default for ElementTable {
    fn default() -> Self {
        ElementTable {
            entries: Body::ALL
                .iter()
                .map(|body| (body.name().to_string(), body.elements()))
                .collect(),
        }
    }
}

impl ElementTable {
    /// An empty table.
    pub fn empty() -> Self {
        ElementTable {
            entries: Vec::new(),
        }
    }

    /// Add a body, or replace the elements of an existing one.
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::InvalidEccentricity`] / [`OrreryError::InvalidSemiMajorAxis`] if the
    ///   elements are not those of a bound orbit.
    pub fn insert(&mut self, name: &str, elements: OrbitalElements) -> Result<(), OrreryError> {
        elements.validate()?;
        let key = name.trim().to_ascii_lowercase();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = elements,
            None => self.entries.push((key, elements)),
        }
        Ok(())
    }

    /// Look a body up by id (case-insensitive).
    pub fn get(&self, name: &str) -> Result<&OrbitalElements, OrreryError> {
        let key = name.trim().to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, elements)| elements)
            .ok_or_else(|| OrreryError::UnknownBody(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrbitalElements)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read a table from CSV (header row required, see the module docs for the columns).
    ///
    /// Arguments
    /// ---------
    /// * `reader`: any byte source (file, in-memory buffer, …).
    ///
    /// Return
    /// ------
    /// * The table, rows kept in file order.
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::ElementTableParse`] on malformed CSV or non-numeric fields.
    /// * [`OrreryError::InvalidEccentricity`] / [`OrreryError::InvalidSemiMajorAxis`] if a row
    ///   does not describe a bound orbit.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, OrreryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut table = ElementTable::empty();
        for record in csv_reader.deserialize::<ElementRecord>() {
            let (name, elements) = record?.into();
            table.insert(&name, elements)?;
        }
        Ok(table)
    }
}

//! # Observer & sky orientation
//!
//! This module gathers what depends on **where the sky is seen from**:
//!
//! - [`ObserverLocation`](crate::observers::ObserverLocation) – a geodetic site (latitude,
//!   east-positive longitude), validated at construction.
//! - [`zenith`](crate::observers::zenith) – the equatorial coordinates of the observer's
//!   zenith at an instant, used by the renderer to orient the celestial sphere.
//! - [`earth_position`](crate::observers::earth_position) – the simplified heliocentric Earth
//!   orbit that turns heliocentric planet positions into geocentric ones.
//!
//! ## Zenith
//!
//! The zenith of a site lies on the local meridian, so its right ascension equals the local
//! sidereal time and its declination equals the site latitude:
//!
//! ```text
//! α_zenith = LST / 15   (hours)
//! δ_zenith = φ          (degrees)
//! ```
//!
//! with `LST = GMST + λ` from [`local_sidereal_time`](crate::time::local_sidereal_time).
//!
//! ## Units
//!
//! - Latitude, longitude: **degrees** (longitude east positive).
//! - Right ascension: **hours**, declination: **degrees**.
pub mod earth_position;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Degree, DEG_PER_HOUR},
    orrery_errors::OrreryError,
    ref_system::EquatorialCoordinates,
    time::{local_sidereal_time, Instant},
};

/// Geodetic location of an observer on Earth.
///
/// Deserialization goes through [`ObserverLocation::new`], so out-of-range angles are
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ObserverLocationRecord")]
pub struct ObserverLocation {
    /// Geodetic latitude in **degrees**, in [-90, 90].
    latitude: Degree,
    /// Longitude in **degrees** east of Greenwich, in [-180, 180].
    longitude: Degree,
}

/// Unchecked wire form of [`ObserverLocation`].
#[derive(Deserialize)]
struct ObserverLocationRecord {
    latitude: Degree,
    longitude: Degree,
}

impl TryFrom<ObserverLocationRecord> for ObserverLocation {
    type Error = OrreryError;

    fn try_from(record: ObserverLocationRecord) -> Result<Self, Self::Error> {
        ObserverLocation::new(record.latitude, record.longitude)
    }
}

impl ObserverLocation {
    /// Create a new observer location.
    ///
    /// Arguments
    /// -----------------
    /// * `latitude`: Geodetic latitude in **degrees**, in [-90, 90].
    /// * `longitude`: Longitude in **degrees** (east positive), in [-180, 180].
    ///
    /// Return
    /// ----------
    /// * The location, or [`OrreryError::InvalidObserverLocation`] if either angle is out of
    ///   range or not finite.
    pub fn new(latitude: Degree, longitude: Degree) -> Result<Self, OrreryError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(OrreryError::InvalidObserverLocation {
                latitude,
                longitude,
            });
        }
        Ok(ObserverLocation {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> Degree {
        self.latitude
    }

    pub fn longitude(&self) -> Degree {
        self.longitude
    }

    /// Local mean sidereal time at this site, in degrees in [0, 360).
    pub fn local_sidereal_time(&self, instant: &Instant) -> Degree {
        local_sidereal_time(instant, self.longitude)
    }
}

/// Equatorial coordinates of the zenith of `observer` at `instant`.
///
/// See also
/// ------------
/// * [`Orrery::compute_zenith`](crate::orrery::Orrery::compute_zenith) – same computation from
///   raw latitude/longitude.
pub fn zenith(instant: &Instant, observer: &ObserverLocation) -> EquatorialCoordinates {
    let mut ra_hours = observer.local_sidereal_time(instant) / DEG_PER_HOUR;
    if ra_hours >= 24.0 {
        ra_hours = 0.0;
    }

    EquatorialCoordinates {
        ra_hours,
        dec_deg: observer.latitude,
    }
}

//! Heliocentric position of the Earth.
//!
//! The Earth follows a fixed ellipse lying in the ecliptic plane (it *defines* that plane), so
//! inclination, node and argument of periapsis are all zero and the result needs no rotation:
//!
//! ```text
//! a = 1 AU, e = 0.017
//! M = 100.0° + 0.9856°/day · (days since J2000)
//! ```
use nalgebra::Vector3;

use crate::{
    config::KeplerSettings,
    constants::{AstronomicalUnit, Degree},
    kepler::{normalize_degrees, solve_kepler_equation, true_anomaly_and_distance},
    orrery_errors::OrreryError,
};

pub const EARTH_SEMI_MAJOR_AXIS: AstronomicalUnit = 1.0;
pub const EARTH_ECCENTRICITY: f64 = 0.017;
pub const EARTH_MEAN_ANOMALY_AT_EPOCH: Degree = 100.0;
pub const EARTH_MEAN_DAILY_MOTION: Degree = 0.9856;

/// Earth's heliocentric ecliptic position (AU) `days` days after J2000.0.
///
/// The z component is always zero.
pub fn earth_heliocentric_position(
    days: f64,
    settings: &KeplerSettings,
) -> Result<Vector3<f64>, OrreryError> {
    let mean_anomaly =
        normalize_degrees(EARTH_MEAN_ANOMALY_AT_EPOCH + EARTH_MEAN_DAILY_MOTION * days);
    let ecc_anom = solve_kepler_equation(mean_anomaly, EARTH_ECCENTRICITY, settings)?;
    let (true_anomaly, r) =
        true_anomaly_and_distance(ecc_anom, EARTH_ECCENTRICITY, EARTH_SEMI_MAJOR_AXIS);

    let (sin_nu, cos_nu) = true_anomaly.to_radians().sin_cos();
    Ok(Vector3::new(r * cos_nu, r * sin_nu, 0.0))
}

#[cfg(test)]
mod earth_pos_tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_earth_at_j2000() {
        let earth = earth_heliocentric_position(0.0, &KeplerSettings::default()).unwrap();
        assert_abs_diff_eq!(earth.x, -0.20705980151929498, epsilon = 1e-9);
        assert_abs_diff_eq!(earth.y, 0.9816306389446504, epsilon = 1e-9);
        assert_eq!(earth.z, 0.0);
    }

    #[test]
    fn test_earth_distance_bounds() {
        let settings = KeplerSettings::default();
        for days in (-36_500..36_500).step_by(97) {
            let earth = earth_heliocentric_position(days as f64, &settings).unwrap();
            let r = earth.norm();
            assert!(r >= 1.0 - EARTH_ECCENTRICITY - 1e-12, "r = {r}");
            assert!(r <= 1.0 + EARTH_ECCENTRICITY + 1e-12, "r = {r}");
        }
    }

    #[test]
    fn test_earth_returns_after_one_period() {
        let settings = KeplerSettings::default();
        let period = 360.0 / EARTH_MEAN_DAILY_MOTION;
        let a = earth_heliocentric_position(1234.5, &settings).unwrap();
        let b = earth_heliocentric_position(1234.5 + period, &settings).unwrap();
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }
}

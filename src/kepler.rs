//! # Kepler equation and true anomaly
//!
//! Elliptic two-body kernels used by the planet position pipeline:
//!
//! - [`solve_kepler_equation`] – Newton–Raphson root of `E − e·sin(E) = M`.
//! - [`true_anomaly_and_distance`] – eccentric anomaly → true anomaly and heliocentric radius.
//! - [`principal_angle`] / [`normalize_degrees`] – angle reduction helpers.
//!
//! All public inputs and outputs are in **degrees**; the iteration itself runs in radians.
use log::trace;

use crate::{
    config::KeplerSettings,
    constants::{AstronomicalUnit, Degree, Radian, DPI},
    orrery_errors::OrreryError,
};

/// Returns the principal value of an angle in radians, in [0, 2π).
pub fn principal_angle(a: Radian) -> Radian {
    reduce(a, DPI)
}

/// Returns the principal value of an angle in degrees, in [0, 360).
pub fn normalize_degrees(a: Degree) -> Degree {
    reduce(a, 360.0)
}

/// `rem_euclid` can round a tiny negative input up to exactly `period`.
fn reduce(a: f64, period: f64) -> f64 {
    let r = a.rem_euclid(period);
    if r >= period {
        0.0
    } else {
        r
    }
}

/// Solve Kepler's equation for the eccentric anomaly.
///
/// Finds `E` such that `E − e·sin(E) = M` with a Newton–Raphson iteration started at `E₀ = M`:
///
/// ```text
/// E ← E − (E − e·sin E − M) / (1 − e·cos E)
/// ```
///
/// The iteration stops as soon as the Newton step is smaller than
/// [`KeplerSettings::tolerance`] (radians).
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly M in degrees (any real value).
/// * `eccentricity`: orbital eccentricity, must lie in [0, 1).
/// * `settings`: tolerance and iteration cap.
///
/// Return
/// ------
/// * The eccentric anomaly in degrees, normalized to [0, 360).
///
/// Errors
/// ------
/// * [`OrreryError::InvalidEccentricity`] if `e ∉ [0, 1)`.
/// * [`OrreryError::KeplerNonConvergence`] if the step is still above tolerance after
///   `settings.max_iterations` iterations.
pub fn solve_kepler_equation(
    mean_anomaly: Degree,
    eccentricity: f64,
    settings: &KeplerSettings,
) -> Result<Degree, OrreryError> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(OrreryError::InvalidEccentricity(eccentricity));
    }

    let m = mean_anomaly.to_radians();
    let mut ecc_anom = m;

    for iteration in 1..=settings.max_iterations {
        let delta = (ecc_anom - eccentricity * ecc_anom.sin() - m)
            / (1.0 - eccentricity * ecc_anom.cos());
        ecc_anom -= delta;

        if delta.abs() < settings.tolerance {
            trace!(
                "Kepler solver converged in {iteration} iterations (M = {mean_anomaly}°, e = {eccentricity})"
            );
            return Ok(normalize_degrees(ecc_anom.to_degrees()));
        }
    }

    Err(OrreryError::KeplerNonConvergence {
        mean_anomaly,
        eccentricity,
        iterations: settings.max_iterations,
    })
}

/// Convert an eccentric anomaly into the true anomaly and the heliocentric distance.
///
/// ```text
/// ν = 2·atan2(√(1+e)·sin(E/2), √(1−e)·cos(E/2))
/// r = a·(1 − e·cos E)
/// ```
///
/// Arguments
/// ---------
/// * `eccentric_anomaly`: E in degrees.
/// * `eccentricity`: e in [0, 1).
/// * `semi_major_axis`: a in AU.
///
/// Return
/// ------
/// * `(ν, r)`: true anomaly in degrees in [0, 360), distance in AU.
pub fn true_anomaly_and_distance(
    eccentric_anomaly: Degree,
    eccentricity: f64,
    semi_major_axis: AstronomicalUnit,
) -> (Degree, AstronomicalUnit) {
    let half = eccentric_anomaly.to_radians() / 2.0;

    let true_anomaly = 2.0
        * f64::atan2(
            (1.0 + eccentricity).sqrt() * half.sin(),
            (1.0 - eccentricity).sqrt() * half.cos(),
        );

    let distance = semi_major_axis * (1.0 - eccentricity * eccentric_anomaly.to_radians().cos());

    (normalize_degrees(true_anomaly.to_degrees()), distance)
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn residual(ecc_anom_deg: f64, e: f64, mean_anom_deg: f64) -> f64 {
        let ecc = ecc_anom_deg.to_radians();
        let m = mean_anom_deg.to_radians();
        // Compare on the circle: both sides are only defined modulo 2π
        let diff = principal_angle(ecc - e * ecc.sin() - m);
        diff.min(DPI - diff)
    }

    #[test]
    fn test_principal_angle() {
        assert_eq!(principal_angle(0.0), 0.0);
        assert_abs_diff_eq!(principal_angle(-std::f64::consts::PI), std::f64::consts::PI);
        assert_abs_diff_eq!(principal_angle(3.0 * DPI + 1.0), 1.0, epsilon = 1e-12);
        assert!(principal_angle(-1e-20) < DPI);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_abs_diff_eq!(normalize_degrees(-3600.5), 359.5, epsilon = 1e-9);
        assert_abs_diff_eq!(normalize_degrees(725.25), 5.25, epsilon = 1e-12);
        assert!(normalize_degrees(-1e-15) < 360.0);
    }

    #[test]
    fn test_circular_orbit_is_identity() {
        let settings = KeplerSettings::default();
        for m in [0.0, 45.0, 179.9, 270.0, 359.0] {
            let ecc_anom = solve_kepler_equation(m, 0.0, &settings).unwrap();
            assert_abs_diff_eq!(ecc_anom, m, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_mercury_at_epoch() {
        let settings = KeplerSettings::default();
        let ecc_anom = solve_kepler_equation(174.79252722, 0.20563593, &settings).unwrap();
        assert_abs_diff_eq!(ecc_anom, 175.68002737127037, epsilon = 1e-7);
    }

    #[test]
    fn test_solver_residual_sweep() {
        let settings = KeplerSettings::default();
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

        for _ in 0..5_000 {
            let e = rng.random_range(0.0..0.9);
            let m = rng.random_range(0.0..360.0);
            let ecc_anom = solve_kepler_equation(m, e, &settings).unwrap();
            assert!(
                residual(ecc_anom, e, m) < 1e-6,
                "residual too large for e = {e}, M = {m}"
            );
            assert!((0.0..360.0).contains(&ecc_anom));
        }
    }

    #[test]
    fn test_negative_mean_anomaly() {
        let settings = KeplerSettings::default();
        let ecc_anom = solve_kepler_equation(-30.0, 0.1, &settings).unwrap();
        assert!(residual(ecc_anom, 0.1, -30.0) < 1e-6);
        assert!(ecc_anom > 300.0);
    }

    #[test]
    fn test_invalid_eccentricity() {
        let settings = KeplerSettings::default();
        assert_eq!(
            solve_kepler_equation(10.0, 1.0, &settings),
            Err(OrreryError::InvalidEccentricity(1.0))
        );
        assert_eq!(
            solve_kepler_equation(10.0, -0.1, &settings),
            Err(OrreryError::InvalidEccentricity(-0.1))
        );
    }

    #[test]
    fn test_iteration_cap() {
        let settings = KeplerSettings {
            tolerance: 1e-6,
            max_iterations: 1,
        };
        let res = solve_kepler_equation(100.0, 0.8, &settings);
        assert_eq!(
            res,
            Err(OrreryError::KeplerNonConvergence {
                mean_anomaly: 100.0,
                eccentricity: 0.8,
                iterations: 1,
            })
        );
    }

    #[test]
    fn test_true_anomaly_and_distance() {
        // Periapsis and apoapsis
        let (nu, r) = true_anomaly_and_distance(0.0, 0.2, 2.0);
        assert_abs_diff_eq!(nu, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r, 1.6, epsilon = 1e-12);

        let (nu, r) = true_anomaly_and_distance(180.0, 0.2, 2.0);
        assert_abs_diff_eq!(nu, 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r, 2.4, epsilon = 1e-12);

        // Mercury at J2000
        let (nu, r) = true_anomaly_and_distance(175.68002737127037, 0.20563593, 0.38709927);
        assert_abs_diff_eq!(nu, 176.4928618134165, epsilon = 1e-9);
        assert_abs_diff_eq!(r, 0.466474635400076, epsilon = 1e-12);
    }

    #[test]
    fn test_true_anomaly_leads_on_outbound_leg() {
        // Between periapsis and apoapsis the true anomaly runs ahead of E
        let (nu, _) = true_anomaly_and_distance(90.0, 0.3, 1.0);
        assert!(nu > 90.0 && nu < 180.0);

        let (nu, _) = true_anomaly_and_distance(270.0, 0.3, 1.0);
        assert!(nu < 270.0 && nu > 180.0);
    }
}

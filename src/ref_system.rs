//! # Reference frames
//!
//! Rigid rotations between the three frames the pipeline walks through:
//!
//! ```text
//! orbital plane ──(ω, i, Ω)──▶ heliocentric ecliptic ──(− Earth)──▶ geocentric ecliptic
//!                                                                        │
//!                                                                   (ε about X)
//!                                                                        ▼
//!                                                              geocentric equatorial ──▶ (α, δ)
//! ```
//!
//! Matrices follow the nalgebra convention `x₂ = R · x₁` (active rotation of the vector in a
//! fixed frame). The orbital → ecliptic matrix is written in closed form; the composed
//! product `R_z(Ω)·R_x(i)·R_z(ω)` built with [`rotmt`] yields the same matrix and is used to
//! cross-check it in the tests.
use nalgebra::{Matrix3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Degree, Hour, Radian, DEG_PER_HOUR},
    kepler::principal_angle,
    orrery_errors::OrreryError,
};

/// Principal axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes.
///
/// The rotation is **active** and follows the direct (counter-clockwise) sense when looking
/// down the axis toward the origin, so `rotmt(ε, Axis::X)` maps ecliptic coordinates onto
/// equatorial ones.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians**.
/// * `axis` - Axis of rotation.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotation from the orbital plane (periapsis on +X) to the heliocentric ecliptic frame.
///
/// Arguments
/// ---------
/// * `inclination`: i in degrees.
/// * `periapsis_argument`: ω in degrees.
/// * `ascending_node`: Ω in degrees.
///
/// Return
/// ------
/// * The matrix whose columns are the images of the orbital X and Y axes (and their normal):
///
/// ```text
/// | cosω·cosΩ − sinω·sinΩ·cosi   −sinω·cosΩ − cosω·sinΩ·cosi    sinΩ·sini |
/// | cosω·sinΩ + sinω·cosΩ·cosi   −sinω·sinΩ + cosω·cosΩ·cosi   −cosΩ·sini |
/// | sinω·sini                     cosω·sini                      cosi      |
/// ```
pub fn orbital_to_ecliptic_matrix(
    inclination: Degree,
    periapsis_argument: Degree,
    ascending_node: Degree,
) -> Matrix3<f64> {
    let (si, ci) = inclination.to_radians().sin_cos();
    let (sw, cw) = periapsis_argument.to_radians().sin_cos();
    let (so, co) = ascending_node.to_radians().sin_cos();

    Matrix3::new(
        cw * co - sw * so * ci,
        -sw * co - cw * so * ci,
        so * si,
        cw * so + sw * co * ci,
        -sw * so + cw * co * ci,
        -co * si,
        sw * si,
        cw * si,
        ci,
    )
}

/// Rotate planar orbital coordinates `(x, y, 0)` into heliocentric ecliptic coordinates.
pub fn orbital_to_ecliptic(
    x: f64,
    y: f64,
    inclination: Degree,
    periapsis_argument: Degree,
    ascending_node: Degree,
) -> Vector3<f64> {
    orbital_to_ecliptic_matrix(inclination, periapsis_argument, ascending_node)
        * Vector3::new(x, y, 0.0)
}

/// Rotation from ecliptic to equatorial coordinates for an obliquity `ε` in degrees.
///
/// ```text
/// x_eq = x
/// y_eq = y·cosε − z·sinε
/// z_eq = y·sinε + z·cosε
/// ```
pub fn ecliptic_to_equatorial_matrix(obliquity: Degree) -> Matrix3<f64> {
    rotmt(obliquity.to_radians(), Axis::X)
}

/// Right ascension / declination pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinates {
    /// Right ascension in hours, in [0, 24).
    pub ra_hours: Hour,
    /// Declination in degrees, in [-90, 90].
    pub dec_deg: Degree,
}

impl EquatorialCoordinates {
    /// Direction of an equatorial Cartesian vector.
    ///
    /// ```text
    /// α = atan2(y, x) mod 2π, expressed in hours
    /// δ = asin(z / |r|)
    /// ```
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::DegenerateVector`] if `|r| = 0` (or is not finite), since the
    ///   direction is then undefined.
    pub fn from_cartesian(equatorial: &Vector3<f64>) -> Result<Self, OrreryError> {
        let norm = equatorial.norm();
        if !(norm > 0.0 && norm.is_finite()) {
            return Err(OrreryError::DegenerateVector);
        }

        let ra = principal_angle(equatorial.y.atan2(equatorial.x));
        let mut ra_hours = ra.to_degrees() / DEG_PER_HOUR;
        if ra_hours >= 24.0 {
            ra_hours = 0.0;
        }

        let dec_deg = (equatorial.z / norm).clamp(-1.0, 1.0).asin().to_degrees();

        Ok(EquatorialCoordinates { ra_hours, dec_deg })
    }

    /// Right ascension in degrees, in [0, 360).
    pub fn ra_degrees(&self) -> Degree {
        self.ra_hours * DEG_PER_HOUR
    }
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotmt_is_orthonormal() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let r = rotmt(0.7, axis);
            assert_relative_eq!(r * r.transpose(), Matrix3::identity(), epsilon = 1e-14);
            assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_closed_form_matches_composed_rotations() {
        let cases: [(f64, f64, f64); 4] = [
            (7.00497902, 29.12703035, 48.33076593),
            (1.84969142, 286.4968315, 49.55953891),
            (90.0, 0.0, 0.0),
            (179.0, 123.0, 321.0),
        ];
        for (i, w, o) in cases {
            let composed = rotmt(o.to_radians(), Axis::Z)
                * rotmt(i.to_radians(), Axis::X)
                * rotmt(w.to_radians(), Axis::Z);
            assert_relative_eq!(
                orbital_to_ecliptic_matrix(i, w, o),
                composed,
                epsilon = 1e-14
            );
        }
    }

    #[test]
    fn test_orbital_to_ecliptic_zero_angles() {
        let v = orbital_to_ecliptic(0.3, -0.4, 0.0, 0.0, 0.0);
        assert_relative_eq!(v, Vector3::new(0.3, -0.4, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_orbital_to_ecliptic_mercury() {
        let (r, nu) = (0.466474635400076_f64, 176.4928618134165_f64.to_radians());
        let v = orbital_to_ecliptic(
            r * nu.cos(),
            r * nu.sin(),
            7.00497902,
            29.12703035,
            48.33076593,
        );
        assert_relative_eq!(v.x, -0.13008862039899763, epsilon = 1e-9);
        assert_relative_eq!(v.y, -0.4472923366020919, epsilon = 1e-9);
        assert_relative_eq!(v.z, -0.02459881971478095, epsilon = 1e-9);
        // Rotations preserve length
        assert_relative_eq!(v.norm(), r, epsilon = 1e-9);
    }

    #[test]
    fn test_ascending_node_lies_on_ecliptic() {
        // A point at the ascending node (argument of latitude 0) has z = 0
        let v = orbital_to_ecliptic(1.0, 0.0, 30.0, 0.0, 80.0);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-15);
        assert_relative_eq!(v.y.atan2(v.x).to_degrees(), 80.0, epsilon = 1e-12);

        // A quarter orbit later the body is at its highest ecliptic latitude
        let v = orbital_to_ecliptic(0.0, 1.0, 30.0, 0.0, 80.0);
        assert_relative_eq!(v.z, 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_ecliptic_to_equatorial_matrix() {
        let eps = 23.4367_f64;
        let m = ecliptic_to_equatorial_matrix(eps);
        let (s, c) = eps.to_radians().sin_cos();

        let v = m * Vector3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-15);
        assert_relative_eq!(v.y, 2.0 * c - 3.0 * s, epsilon = 1e-15);
        assert_relative_eq!(v.z, 2.0 * s + 3.0 * c, epsilon = 1e-15);
    }

    #[test]
    fn test_ecliptic_pole_declination() {
        // The north ecliptic pole sits at RA 18h, Dec 90° − ε
        let m = ecliptic_to_equatorial_matrix(23.4367);
        let eq = EquatorialCoordinates::from_cartesian(&(m * Vector3::z())).unwrap();
        assert_relative_eq!(eq.ra_hours, 18.0, epsilon = 1e-12);
        assert_relative_eq!(eq.dec_deg, 90.0 - 23.4367, epsilon = 1e-12);
    }

    #[test]
    fn test_from_cartesian() {
        let eq = EquatorialCoordinates::from_cartesian(&Vector3::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(eq.ra_hours, 0.0);
        assert_eq!(eq.dec_deg, 0.0);

        let eq = EquatorialCoordinates::from_cartesian(&Vector3::new(0.0, -2.0, 0.0)).unwrap();
        assert_relative_eq!(eq.ra_hours, 18.0, epsilon = 1e-12);
        assert_relative_eq!(eq.ra_degrees(), 270.0, epsilon = 1e-12);

        let eq = EquatorialCoordinates::from_cartesian(&Vector3::new(0.0, 0.0, -5.0)).unwrap();
        assert_relative_eq!(eq.dec_deg, -90.0, epsilon = 1e-12);
        assert!((0.0..24.0).contains(&eq.ra_hours));

        // Tiny negative y must not produce RA = 24h
        let eq = EquatorialCoordinates::from_cartesian(&Vector3::new(1.0, -1e-300, 0.0)).unwrap();
        assert!(eq.ra_hours < 24.0);
    }

    #[test]
    fn test_from_cartesian_degenerate() {
        assert_eq!(
            EquatorialCoordinates::from_cartesian(&Vector3::zeros()),
            Err(OrreryError::DegenerateVector)
        );
        assert_eq!(
            EquatorialCoordinates::from_cartesian(&Vector3::new(f64::NAN, 0.0, 0.0)),
            Err(OrreryError::DegenerateVector)
        );
    }
}

//! # Celestial → Cartesian projection
//!
//! Places a direction (RA, Dec) on a sphere of given radius for the 3D scene.
//!
//! The scene uses a **y-up** convention: the celestial pole is the +Y axis and the equator is
//! the XZ plane.
//!
//! ```text
//! x = r·cos(δ)·cos(α)
//! y = r·sin(δ)
//! z = r·cos(δ)·sin(α)
//! ```
//!
//! The convention belongs to the renderer; the orbital code never uses it, so a z-up
//! consumer only needs another function here.
use nalgebra::Vector3;

use crate::{
    constants::{Degree, Hour, DEG_PER_HOUR},
    orrery_errors::OrreryError,
    ref_system::EquatorialCoordinates,
};

/// Project a direction given with right ascension in **hours**.
pub fn project_to_sphere(ra_hours: Hour, dec_deg: Degree, radius: f64) -> Vector3<f64> {
    project_to_sphere_deg(ra_hours * DEG_PER_HOUR, dec_deg, radius)
}

/// Project a direction given with right ascension in **degrees**.
pub fn project_to_sphere_deg(ra_deg: Degree, dec_deg: Degree, radius: f64) -> Vector3<f64> {
    let (sin_ra, cos_ra) = ra_deg.to_radians().sin_cos();
    let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();

    Vector3::new(
        radius * cos_dec * cos_ra,
        radius * sin_dec,
        radius * cos_dec * sin_ra,
    )
}

/// Inverse of [`project_to_sphere`].
///
/// Return
/// ------
/// * `(coordinates, radius)` with RA in hours in [0, 24) and Dec in degrees.
///
/// Errors
/// ------
/// * [`OrreryError::DegenerateVector`] for the origin.
pub fn sphere_to_celestial(
    point: &Vector3<f64>,
) -> Result<(EquatorialCoordinates, f64), OrreryError> {
    // Swap back to the z-up layout the equatorial conversion expects
    let z_up = Vector3::new(point.x, point.z, point.y);
    let coordinates = EquatorialCoordinates::from_cartesian(&z_up)?;
    Ok((coordinates, point.norm()))
}

//! Apparent magnitude estimate.
//!
//! `m = H + 5·log₁₀(r·Δ)` with `r` the heliocentric and `Δ` the geocentric distance in AU.
//! There is no phase-angle term: the estimate is the distance-only part of the usual
//! planetary magnitude law.
use crate::{constants::AstronomicalUnit, orrery_errors::OrreryError};

/// Apparent magnitude of a body of base magnitude `base_magnitude`.
///
/// Errors
/// ------
/// * [`OrreryError::NonPositiveDistance`] if either distance is not strictly positive
///   (or is not finite).
pub fn apparent_magnitude(
    base_magnitude: f64,
    heliocentric_distance: AstronomicalUnit,
    geocentric_distance: AstronomicalUnit,
) -> Result<f64, OrreryError> {
    let valid = |d: f64| d > 0.0 && d.is_finite();
    if !valid(heliocentric_distance) || !valid(geocentric_distance) {
        return Err(OrreryError::NonPositiveDistance {
            heliocentric: heliocentric_distance,
            geocentric: geocentric_distance,
        });
    }

    Ok(base_magnitude + 5.0 * (heliocentric_distance * geocentric_distance).log10())
}

use approx::assert_abs_diff_eq;
use orrery::{body_position::BodyPosition, time::Instant};

pub fn instant(year: i32, month: u8, day: u8, hour: u8) -> Instant {
    Instant::from_gregorian_utc(year, month, day, hour, 0, 0).unwrap()
}

/// Angular separation between two RA values in hours, on the 24h circle.
pub fn ra_separation(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(24.0);
    d.min(24.0 - d)
}

pub fn assert_sky_close(actual: &BodyPosition, ra_hours: f64, dec_deg: f64, epsilon: f64) {
    assert!(
        ra_separation(actual.equatorial.ra_hours, ra_hours) < epsilon,
        "{}: RA {} vs {}",
        actual.body,
        actual.equatorial.ra_hours,
        ra_hours
    );
    assert_abs_diff_eq!(actual.equatorial.dec_deg, dec_deg, epsilon = epsilon);
}

pub fn assert_position_invariants(pos: &BodyPosition) {
    let angles = &pos.angles;
    for angle in [
        angles.mean_anomaly,
        angles.eccentric_anomaly,
        angles.true_anomaly,
    ] {
        assert!((0.0..360.0).contains(&angle), "{}: angle {angle}", pos.body);
    }
    assert!((0.0..24.0).contains(&pos.equatorial.ra_hours));
    assert!((-90.0..=90.0).contains(&pos.equatorial.dec_deg));
    assert!(angles.heliocentric_distance > 0.0);
    assert!(pos.geocentric_distance > 0.0);
    assert!(pos.magnitude.is_finite());
}

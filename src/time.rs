//! # Instants and sidereal time
//!
//! [`Instant`] is the time argument of every query. It stores a UTC instant as a Unix
//! timestamp in milliseconds, which is both what the presentation layer hands over and what
//! the sidereal-time formula consumes. Calendar parsing and construction are delegated to
//! [hifitime](https://docs.rs/hifitime).
//!
//! Day counts are derived from the Julian date `JD = ms / 86 400 000 + 2 440 587.5`, so leap
//! seconds are not counted, consistent with Unix time.
//!
//! The module also provides the Greenwich and local mean sidereal times used to orient the
//! sky for an observer ([`gmst`], [`local_sidereal_time`]).
use std::{fmt, str::FromStr};

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        Degree, JulianDate, DAYS_PER_JULIAN_CENTURY, J2000_JD, J2000_UNIX_MILLIS, JDTOMJD,
        MAX_UNIX_MILLIS, MILLIS_PER_DAY, MJD, UNIX_EPOCH_JD,
    },
    kepler::normalize_degrees,
    orrery_errors::OrreryError,
};

/// A UTC instant, stored as milliseconds since 1970-01-01T00:00:00 UTC.
///
/// Serialized as the bare Unix timestamp in milliseconds; deserialization goes through
/// [`Instant::from_unix_millis`] and rejects out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Instant {
    unix_millis: f64,
}

impl Instant {
    /// J2000.0, 2000-01-01T12:00:00 UTC.
    pub const J2000: Instant = Instant {
        unix_millis: J2000_UNIX_MILLIS,
    };

    /// Build an instant from a Unix timestamp in milliseconds.
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::InstantOutOfRange`] if the value is not finite or lies beyond
    ///   ±8.64·10¹⁵ ms.
    pub fn from_unix_millis(unix_millis: f64) -> Result<Self, OrreryError> {
        if !unix_millis.is_finite() || unix_millis.abs() > MAX_UNIX_MILLIS {
            return Err(OrreryError::InstantOutOfRange(unix_millis));
        }
        Ok(Instant { unix_millis })
    }

    /// Build an instant from a hifitime [`Epoch`] (any time scale).
    pub fn from_epoch(epoch: Epoch) -> Result<Self, OrreryError> {
        Instant::from_unix_millis(epoch.to_unix_milliseconds())
    }

    /// Build an instant from a Gregorian UTC date and time.
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::InvalidDate`] if the calendar fields are invalid (e.g. February 30).
    pub fn from_gregorian_utc(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, OrreryError> {
        let epoch = Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, second, 0)?;
        Instant::from_epoch(epoch)
    }

    /// Build an instant from a Julian date (UTC).
    pub fn from_julian_date(jd: JulianDate) -> Result<Self, OrreryError> {
        Instant::from_unix_millis((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY)
    }

    pub fn unix_millis(&self) -> f64 {
        self.unix_millis
    }

    /// Julian date of the instant.
    pub fn julian_date(&self) -> JulianDate {
        self.unix_millis / MILLIS_PER_DAY + UNIX_EPOCH_JD
    }

    /// Modified Julian date of the instant.
    pub fn modified_julian_date(&self) -> MJD {
        self.julian_date() - JDTOMJD
    }

    /// Days elapsed since J2000.0 (negative before).
    pub fn days_since_j2000(&self) -> f64 {
        self.julian_date() - J2000_JD
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn julian_centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }

    /// Convert back to a hifitime [`Epoch`] in the UTC time scale.
    pub fn to_epoch(&self) -> Epoch {
        Epoch::from_unix_milliseconds(self.unix_millis)
    }
}

impl TryFrom<f64> for Instant {
    type Error = OrreryError;

    fn try_from(unix_millis: f64) -> Result<Self, Self::Error> {
        Instant::from_unix_millis(unix_millis)
    }
}

impl From<Instant> for f64 {
    fn from(instant: Instant) -> Self {
        instant.unix_millis
    }
}

impl FromStr for Instant {
    type Err = OrreryError;

    /// Parse any date string hifitime understands, e.g. `"2000-01-01T12:00:00 UTC"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let epoch = Epoch::from_str(s.trim())?;
        Instant::from_epoch(epoch)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_epoch())
    }
}

/// Greenwich Mean Sidereal Time, in degrees in [0, 360).
///
/// ```text
/// JD   = ms / 86 400 000 + 2 440 587.5
/// T    = (JD − 2 451 545.0) / 36 525
/// GMST = 280.46061837 + 360.98564736629·(JD − 2 451 545.0) + 0.000387933·T² − T³ / 38 710 000
/// ```
///
/// # References
/// * Meeus, *Astronomical Algorithms*, 2nd ed., eq. 12.4.
pub fn gmst(instant: &Instant) -> Degree {
    let d = instant.days_since_j2000();
    let t = d / DAYS_PER_JULIAN_CENTURY;

    let gmst = 280.46061837 + 360.98564736629 * d + 0.000387933 * t * t
        - t * t * t / 38_710_000.0;

    normalize_degrees(gmst)
}

/// Local mean sidereal time at an east-positive `longitude` (degrees), in [0, 360).
pub fn local_sidereal_time(instant: &Instant, longitude: Degree) -> Degree {
    normalize_degrees(gmst(instant) + longitude)
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_j2000() {
        let from_str: Instant = "2000-01-01T12:00:00 UTC".parse().unwrap();
        let from_greg = Instant::from_gregorian_utc(2000, 1, 1, 12, 0, 0).unwrap();

        assert_eq!(Instant::J2000.julian_date(), 2_451_545.0);
        assert_eq!(Instant::J2000.days_since_j2000(), 0.0);
        assert_eq!(Instant::J2000.modified_julian_date(), 51_544.5);
        assert_abs_diff_eq!(from_greg.unix_millis(), J2000_UNIX_MILLIS, epsilon = 1e-3);
        assert_abs_diff_eq!(from_str.unix_millis(), J2000_UNIX_MILLIS, epsilon = 1e-3);
    }

    #[test]
    fn test_julian_date() {
        let unix_epoch = Instant::from_unix_millis(0.0).unwrap();
        assert_eq!(unix_epoch.julian_date(), UNIX_EPOCH_JD);

        let instant = Instant::from_gregorian_utc(2021, 1, 1, 0, 0, 0).unwrap();
        assert_abs_diff_eq!(instant.modified_julian_date(), 59215.0, epsilon = 1e-9);

        let instant = Instant::from_julian_date(2459215.5).unwrap();
        assert_eq!(instant.modified_julian_date(), 59215.0);
    }

    #[test]
    fn test_days_since_j2000_ignores_leap_seconds() {
        // 2017-01-01T12:00:00 UTC: 6210 calendar days, several leap seconds later
        let instant = Instant::from_gregorian_utc(2017, 1, 1, 12, 0, 0).unwrap();
        assert_abs_diff_eq!(instant.days_since_j2000(), 6210.0, epsilon = 1e-9);
    }

    #[test]
    fn test_epoch_round_trip() {
        let instant = Instant::from_gregorian_utc(1987, 4, 10, 19, 21, 0).unwrap();
        assert_abs_diff_eq!(instant.unix_millis(), 545_080_860_000.0, epsilon = 1e-3);
        let back = Instant::from_epoch(instant.to_epoch()).unwrap();
        assert_abs_diff_eq!(back.unix_millis(), instant.unix_millis(), epsilon = 1e-3);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            Instant::from_unix_millis(f64::NAN).unwrap_err().kind(),
            crate::orrery_errors::ErrorKind::InvalidInput
        );
        assert_eq!(
            Instant::from_unix_millis(8.7e15),
            Err(OrreryError::InstantOutOfRange(8.7e15))
        );
        assert!(Instant::from_unix_millis(-8.64e15).is_ok());
    }

    #[test]
    fn test_deserialize_checks_range() {
        use serde::de::{value::Error as ValueError, IntoDeserializer};

        fn from_millis(unix_millis: f64) -> Result<Instant, ValueError> {
            Instant::deserialize(unix_millis.into_deserializer())
        }

        assert_eq!(from_millis(J2000_UNIX_MILLIS).unwrap(), Instant::J2000);
        assert_eq!(f64::from(Instant::J2000), J2000_UNIX_MILLIS);

        let err = from_millis(1e300).unwrap_err();
        assert!(
            err.to_string().contains("outside the representable range"),
            "{err}"
        );
        assert!(from_millis(f64::NAN).is_err());
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(
            Instant::from_gregorian_utc(2021, 2, 30, 0, 0, 0),
            Err(OrreryError::InvalidDate(String::new()))
        );
        assert_eq!(
            "not a date".parse::<Instant>(),
            Err(OrreryError::InvalidDate(String::new()))
        );
    }

    #[test]
    fn test_gmst_at_j2000() {
        assert_abs_diff_eq!(gmst(&Instant::J2000), 280.46061837, epsilon = 1e-9);
    }

    #[test]
    fn test_gmst_meeus() {
        // Meeus example 12.a: 1987-04-10 0h UT → 13h10m46.3668s
        let instant = Instant::from_gregorian_utc(1987, 4, 10, 0, 0, 0).unwrap();
        let expected = (13.0 + 10.0 / 60.0 + 46.3668 / 3600.0) * 15.0;
        assert_abs_diff_eq!(gmst(&instant), expected, epsilon = 0.01);
        assert_abs_diff_eq!(gmst(&instant), 197.693195090862, epsilon = 1e-6);

        // Meeus example 12.b: 1987-04-10 19h21m UT → 8h34m57.0896s
        let instant = Instant::from_gregorian_utc(1987, 4, 10, 19, 21, 0).unwrap();
        let expected = (8.0 + 34.0 / 60.0 + 57.0896 / 3600.0) * 15.0;
        assert_abs_diff_eq!(gmst(&instant), expected, epsilon = 0.01);
    }

    #[test]
    fn test_local_sidereal_time() {
        let instant = Instant::from_gregorian_utc(1987, 4, 10, 19, 21, 0).unwrap();
        assert_eq!(local_sidereal_time(&instant, 0.0), gmst(&instant));
        // Washington, 77°W
        assert_abs_diff_eq!(
            local_sidereal_time(&instant, -77.0),
            51.73787324433215,
            epsilon = 1e-6
        );
        // Wrap past 360
        let lst = local_sidereal_time(&Instant::J2000, 100.0);
        assert_abs_diff_eq!(lst, 20.46061837, epsilon = 1e-9);
    }

    #[test]
    fn test_gmst_always_normalized() {
        for days in [-73_000.0, -1.5, 0.25, 36_525.0, 1e6] {
            let instant = Instant::from_julian_date(J2000_JD + days).unwrap();
            let g = gmst(&instant);
            assert!((0.0..360.0).contains(&g), "days = {days}: {g}");
        }
    }
}

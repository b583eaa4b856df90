//! # Zodiacal constellation lookup
//!
//! The twelve zodiacal constellations are approximated by rectangles in (right ascension,
//! declination). The rectangles are coarse: neighbouring boxes overlap in places and leave
//! gaps in others, and none of them follows the real IAU boundaries.
//!
//! ## Lookup rule
//!
//! [`constellation_at`] scans [`ZODIAC`] in order and returns the **first** box containing
//! the point. A point in an overlap therefore always resolves to the earlier entry, and a
//! point in a gap resolves to [`UNKNOWN_CONSTELLATION`].
//!
//! ## Box semantics
//!
//! - RA interval `[ra_min, ra_max)` in hours. When `ra_min > ra_max` the box wraps through
//!   RA = 0h (Pisces).
//! - Dec interval `[dec_min, dec_max]` in degrees, both edges inclusive.
use serde::Serialize;

use crate::constants::{Degree, Hour, UNKNOWN_CONSTELLATION};

/// Rectangular approximation of a constellation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Constellation {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub ra_min: Hour,
    pub ra_max: Hour,
    pub dec_min: Degree,
    pub dec_max: Degree,
}

impl Constellation {
    const fn new(
        name: &'static str,
        abbreviation: &'static str,
        ra: (Hour, Hour),
        dec: (Degree, Degree),
    ) -> Self {
        Constellation {
            name,
            abbreviation,
            ra_min: ra.0,
            ra_max: ra.1,
            dec_min: dec.0,
            dec_max: dec.1,
        }
    }

    /// Whether the box wraps through RA = 0h.
    pub fn wraps(&self) -> bool {
        self.ra_min > self.ra_max
    }

    pub fn contains(&self, ra_hours: Hour, dec_deg: Degree) -> bool {
        let in_ra = if self.wraps() {
            ra_hours >= self.ra_min || ra_hours < self.ra_max
        } else {
            ra_hours >= self.ra_min && ra_hours < self.ra_max
        };
        in_ra && (self.dec_min..=self.dec_max).contains(&dec_deg)
    }
}

/// Zodiacal boxes, in lookup order.
pub static ZODIAC: [Constellation; 12] = [
    Constellation::new("Aries", "Ari", (1.75, 3.40), (10.0, 31.0)),
    Constellation::new("Taurus", "Tau", (3.40, 5.90), (0.0, 31.0)),
    Constellation::new("Gemini", "Gem", (5.90, 8.10), (10.0, 35.0)),
    Constellation::new("Cancer", "Cnc", (8.10, 9.30), (7.0, 33.0)),
    Constellation::new("Leo", "Leo", (9.30, 11.90), (-6.0, 33.0)),
    Constellation::new("Virgo", "Vir", (11.90, 15.20), (-22.0, 14.0)),
    Constellation::new("Libra", "Lib", (14.30, 16.00), (-30.0, 0.0)),
    Constellation::new("Scorpius", "Sco", (15.80, 17.90), (-45.0, -8.0)),
    Constellation::new("Sagittarius", "Sgr", (17.90, 20.40), (-45.0, -12.0)),
    Constellation::new("Capricornus", "Cap", (20.10, 21.90), (-28.0, -8.0)),
    Constellation::new("Aquarius", "Aqr", (20.60, 23.90), (-25.0, 3.0)),
    Constellation::new("Pisces", "Psc", (22.90, 2.00), (-7.0, 33.0)),
];

/// First zodiacal box containing the point, if any.
pub fn find_constellation(ra_hours: Hour, dec_deg: Degree) -> Option<&'static Constellation> {
    ZODIAC.iter().find(|c| c.contains(ra_hours, dec_deg))
}

/// Name of the constellation at `(ra_hours, dec_deg)`, or `"Unknown"`.
pub fn constellation_at(ra_hours: Hour, dec_deg: Degree) -> &'static str {
    find_constellation(ra_hours, dec_deg)
        .map(|c| c.name)
        .unwrap_or(UNKNOWN_CONSTELLATION)
}

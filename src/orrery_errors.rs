use thiserror::Error;

/// Coarse classification of an [`OrreryError`].
///
/// Both kinds are local and recoverable: the caller decides how a failed body is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The computation itself failed (non-convergence, degenerate geometry, bad distance).
    Numerical,
    /// The caller supplied something the library cannot interpret.
    InvalidInput,
}

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error(
        "Kepler equation did not converge after {iterations} iterations (M = {mean_anomaly}°, e = {eccentricity})"
    )]
    KeplerNonConvergence {
        mean_anomaly: f64,
        eccentricity: f64,
        iterations: usize,
    },

    #[error(
        "Non-positive distance in magnitude law (heliocentric = {heliocentric} AU, geocentric = {geocentric} AU)"
    )]
    NonPositiveDistance { heliocentric: f64, geocentric: f64 },

    #[error("Degenerate position vector: zero length, direction undefined")]
    DegenerateVector,

    #[error("Eccentricity must lie in [0, 1) for an elliptic orbit: {0}")]
    InvalidEccentricity(f64),

    #[error("Semi-major axis must be strictly positive: {0}")]
    InvalidSemiMajorAxis(f64),

    #[error("Unknown body: {0}")]
    UnknownBody(String),

    #[error("Instant outside the representable range: {0} ms since Unix epoch")]
    InstantOutOfRange(f64),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid observer location: latitude = {latitude}°, longitude = {longitude}°")]
    InvalidObserverLocation { latitude: f64, longitude: f64 },

    #[error("Unable to read orbital element table: {0}")]
    ElementTableParse(String),
}

impl OrreryError {
    /// Map the error onto the two-level taxonomy exposed to callers.
    pub fn kind(&self) -> ErrorKind {
        use OrreryError::*;
        match self {
            KeplerNonConvergence { .. } | NonPositiveDistance { .. } | DegenerateVector => {
                ErrorKind::Numerical
            }
            InvalidEccentricity(_)
            | InvalidSemiMajorAxis(_)
            | UnknownBody(_)
            | InstantOutOfRange(_)
            | InvalidDate(_)
            | InvalidObserverLocation { .. }
            | ElementTableParse(_) => ErrorKind::InvalidInput,
        }
    }
}

impl From<hifitime::HifitimeError> for OrreryError {
    fn from(err: hifitime::HifitimeError) -> Self {
        OrreryError::InvalidDate(err.to_string())
    }
}

impl From<csv::Error> for OrreryError {
    fn from(err: csv::Error) -> Self {
        OrreryError::ElementTableParse(err.to_string())
    }
}

impl PartialEq for OrreryError {
    fn eq(&self, other: &Self) -> bool {
        use OrreryError::*;
        match (self, other) {
            (
                KeplerNonConvergence {
                    mean_anomaly: m1,
                    eccentricity: e1,
                    iterations: i1,
                },
                KeplerNonConvergence {
                    mean_anomaly: m2,
                    eccentricity: e2,
                    iterations: i2,
                },
            ) => m1 == m2 && e1 == e2 && i1 == i2,
            (
                NonPositiveDistance {
                    heliocentric: h1,
                    geocentric: g1,
                },
                NonPositiveDistance {
                    heliocentric: h2,
                    geocentric: g2,
                },
            ) => h1 == h2 && g1 == g2,
            (InvalidEccentricity(a), InvalidEccentricity(b)) => a == b,
            (InvalidSemiMajorAxis(a), InvalidSemiMajorAxis(b)) => a == b,
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (InstantOutOfRange(a), InstantOutOfRange(b)) => a == b,
            (
                InvalidObserverLocation {
                    latitude: la1,
                    longitude: lo1,
                },
                InvalidObserverLocation {
                    latitude: la2,
                    longitude: lo2,
                },
            ) => la1 == la2 && lo1 == lo2,

            // Wrapped library messages are not compared: same variant means equal
            (InvalidDate(_), InvalidDate(_)) => true,
            (ElementTableParse(_), ElementTableParse(_)) => true,

            (DegenerateVector, DegenerateVector) => true,

            _ => false,
        }
    }
}

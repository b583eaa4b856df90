//! # Orrery configuration
//!
//! [`OrreryConfig`] gathers the few numerical knobs of the model: the fixed obliquity used by
//! the ecliptic → equatorial rotation, and the Kepler solver tolerance and iteration cap.
//!
//! The configuration is a plain immutable value. It is built once, handed to
//! [`Orrery::with_config`](crate::orrery::Orrery::with_config), and then only read. It derives
//! `serde` traits so a host application can keep it next to its own settings.
//!
//! ```rust
//! use orrery::config::{KeplerSettings, OrreryConfig};
//!
//! let config = OrreryConfig {
//!     kepler: KeplerSettings {
//!         tolerance: 1e-10,
//!         ..KeplerSettings::default()
//!     },
//!     ..OrreryConfig::default()
//! };
//! assert_eq!(config.obliquity, 23.4367);
//! ```
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Radian, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE, OBLIQUITY};

/// Stopping rule of the Newton–Raphson Kepler solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeplerSettings {
    /// Convergence threshold on `|ΔE|`, in radians.
    pub tolerance: Radian,
    /// Maximum number of Newton steps before reporting non-convergence.
    pub max_iterations: usize,
}

impl Default for KeplerSettings {
    fn default() -> Self {
        KeplerSettings {
            tolerance: KEPLER_TOLERANCE,
            max_iterations: KEPLER_MAX_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Obliquity of the ecliptic in degrees.
    pub obliquity: Degree,
    pub kepler: KeplerSettings,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        OrreryConfig {
            obliquity: OBLIQUITY,
            kepler: KeplerSettings::default(),
        }
    }
}

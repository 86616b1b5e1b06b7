//! Calibration constants and per-detonation configuration.
//!
//! Distances are feet, charge weights are pounds and pressures are psi. The
//! blast curve coefficients were fit in those units, so every input handed to
//! the engine has to use them too.

use serde::{Deserialize, Serialize};

use crate::core::types::{ChargeType, SurfaceLocation};
use crate::error::{BlastError, Result};

/// TNT-equivalence factor of TNT itself.
pub const TNT_EQUIVALENCE: f64 = 1.0;

/// TNT-equivalence factor of PETN.
pub const PETN_EQUIVALENCE: f64 = 1.66;

/// Square inches per square foot; turns psi into psf.
pub const PSI_TO_PSF: f64 = 144.0;

/// Smallest scaled range (ft/lb^(1/3)) covered by the curve fit.
pub const MIN_SCALED_RANGE: f64 = 0.5;

/// Largest scaled range covered by the curve fit. Beyond it overpressure is zero.
pub const MAX_SCALED_RANGE: f64 = 500.0;

/// Default charge weight offered to operators (lb).
pub const DEFAULT_EXPLOSIVE_WEIGHT: f64 = 4.41;

/// Operator-facing charge weight range (lb).
pub const EXPLOSIVE_WEIGHT_RANGE: (f64, f64) = (0.001, 25.0);

/// Default pressure below which a surface is considered unaffected (psi).
pub const DEFAULT_MINIMUM_RELEVANT_PRESSURE: f64 = 7.5;

/// Operator-facing minimum relevant pressure range (psi).
pub const MINIMUM_RELEVANT_PRESSURE_RANGE: (f64, f64) = (5.0, 10.0);

/// Compound preselected for a new charge.
pub const DEFAULT_CHARGE_TYPE: ChargeType = ChargeType::Petn;

/// Cell size of the surface broad-phase grid (ft).
pub const DEFAULT_BROADPHASE_CELL_SIZE: f32 = 5.0;

/// Pins an operator-entered charge weight to [`EXPLOSIVE_WEIGHT_RANGE`].
///
/// NaN passes through unchanged so that charge construction reports it.
pub fn clamp_explosive_weight(pounds: f64) -> f64 {
    let (low, high) = EXPLOSIVE_WEIGHT_RANGE;
    pounds.clamp(low, high)
}

/// Direction used to turn a force magnitude into a force vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ForceDirection {
    /// Unit vector from the charge to the surface. Force comes out in lbf.
    #[default]
    Unit,
    /// Raw charge-to-surface displacement, which scales the force by the
    /// distance. Kept for scenes tuned against that behaviour.
    RawDisplacement,
}

/// Everything a single detonation needs besides the charge itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    /// Only surfaces tagged with this location are loaded.
    pub location: SurfaceLocation,
    /// Overpressure (psi) at which the radius search stops.
    pub minimum_relevant_pressure: f64,
    pub force_direction: ForceDirection,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            location: SurfaceLocation::Exterior,
            minimum_relevant_pressure: DEFAULT_MINIMUM_RELEVANT_PRESSURE,
            force_direction: ForceDirection::Unit,
        }
    }
}

impl ExplosionConfig {
    pub fn new(location: SurfaceLocation, minimum_relevant_pressure: f64) -> Self {
        Self {
            location,
            minimum_relevant_pressure,
            ..Self::default()
        }
    }

    pub fn with_force_direction(mut self, direction: ForceDirection) -> Self {
        self.force_direction = direction;
        self
    }

    /// Pins the threshold to [`MINIMUM_RELEVANT_PRESSURE_RANGE`], as the
    /// operator controls do.
    pub fn clamped_to_operator_range(mut self) -> Self {
        let (low, high) = MINIMUM_RELEVANT_PRESSURE_RANGE;
        self.minimum_relevant_pressure = self.minimum_relevant_pressure.clamp(low, high);
        self
    }

    /// A non-positive threshold would never stop the radius search.
    pub fn validate(&self) -> Result<()> {
        BlastError::require_positive("minimum_relevant_pressure", self.minimum_relevant_pressure)?;
        Ok(())
    }
}

use crate::blast::curve::overpressure;
use crate::config::MAX_SCALED_RANGE;
use crate::core::types::EffectiveWeight;
use crate::error::{BlastError, Result};
use crate::utils::logging::ScopedTimer;

/// Smallest whole distance in feet at which overpressure has dropped to
/// `minimum_relevant_pressure` psi or below.
///
/// Walks outward one foot at a time from 1 ft. The curve jumps at its segment
/// edges (upward at scaled range 60), so the predicate is not monotonic and a
/// bisection could settle on a different, later crossing; the unit-step scan
/// is kept for that reason. Near-field distances count as above threshold.
/// The scan always stops once the scaled range passes the far edge of the fit,
/// where overpressure is zero.
pub fn effective_radius(weight: EffectiveWeight, minimum_relevant_pressure: f64) -> Result<u32> {
    BlastError::require_positive("minimum_relevant_pressure", minimum_relevant_pressure)?;

    let far_edge = (MAX_SCALED_RANGE * weight.cube_root()).floor() + 1.0;
    if far_edge > f64::from(u32::MAX) {
        return Err(BlastError::InvalidArgument {
            name: "effective_weight",
            value: weight.pounds(),
            reason: "blast radius does not fit in a whole number of feet",
        });
    }

    let _timer = ScopedTimer::new("blast.effective_radius");
    let mut distance: u32 = 1;
    while overpressure(f64::from(distance), weight).exceeds(minimum_relevant_pressure) {
        distance += 1;
    }

    log::trace!(
        "effective radius {distance} ft for {:.3} lb TNT at {minimum_relevant_pressure} psi",
        weight.pounds()
    );
    Ok(distance)
}

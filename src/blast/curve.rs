//! Incident overpressure as a function of scaled range.
//!
//! Kingery–Bulmash style fit: for scaled range `Z = R / W^(1/3)` and
//! `T = ln Z`, `P = exp(A + B·T + C·T² + D·T³ + E·T⁴)` in psi, with one set of
//! five coefficients per range segment. The coefficients are a physical
//! calibration in feet and pounds of TNT and must not be altered.

use serde::Serialize;

use crate::config::{MAX_SCALED_RANGE, MIN_SCALED_RANGE};
use crate::core::types::EffectiveWeight;

/// One segment of the piecewise fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlastCurveSegment {
    pub range_low: f64,
    pub range_high: f64,
    pub low_inclusive: bool,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

/// The three calibrated segments, ordered by scaled range.
pub const BLAST_CURVE: [BlastCurveSegment; 3] = [
    BlastCurveSegment {
        range_low: MIN_SCALED_RANGE,
        range_high: 7.25,
        low_inclusive: true,
        a: 6.9137,
        b: -1.4398,
        c: -0.2815,
        d: -0.1416,
        e: 0.0685,
    },
    BlastCurveSegment {
        range_low: 7.25,
        range_high: 60.0,
        low_inclusive: false,
        a: 8.08035,
        b: -3.7001,
        c: 0.2709,
        d: 0.0733,
        e: -0.0127,
    },
    BlastCurveSegment {
        range_low: 60.0,
        range_high: MAX_SCALED_RANGE,
        low_inclusive: false,
        a: 5.4233,
        b: -1.4066,
        c: 0.0,
        d: 0.0,
        e: 0.0,
    },
];

impl BlastCurveSegment {
    pub fn coefficients(&self) -> [f64; 5] {
        [self.a, self.b, self.c, self.d, self.e]
    }

    fn contains(&self, scaled_range: f64) -> bool {
        let above_low = if self.low_inclusive {
            scaled_range >= self.range_low
        } else {
            scaled_range > self.range_low
        };
        above_low && scaled_range <= self.range_high
    }

    /// Overpressure in psi. Only meaningful inside the segment.
    pub fn evaluate(&self, scaled_range: f64) -> f64 {
        let t = scaled_range.ln();
        // Horner form of A + B·T + C·T² + D·T³ + E·T⁴.
        let exponent = self.a + t * (self.b + t * (self.c + t * (self.d + t * self.e)));
        exponent.exp()
    }
}

/// Result of evaluating the curve at one scaled range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Overpressure {
    /// Calibrated incident overpressure in psi. Zero past the far edge.
    Incident(f64),
    /// Closer than the fit reaches. The true value is above any practical
    /// threshold but cannot be computed.
    NearField,
}

impl Overpressure {
    /// Pressure to load a surface with. The near field has no calibrated
    /// value, so it loads nothing.
    pub fn psi_or_zero(self) -> f64 {
        match self {
            Overpressure::Incident(psi) => psi,
            Overpressure::NearField => 0.0,
        }
    }

    /// Whether this pressure is still above `threshold`. The near field
    /// always is.
    pub fn exceeds(self, threshold: f64) -> bool {
        match self {
            Overpressure::Incident(psi) => psi > threshold,
            Overpressure::NearField => true,
        }
    }
}

/// `distance / W^(1/3)`, in ft/lb^(1/3).
pub fn scaled_range(distance: f64, weight: EffectiveWeight) -> f64 {
    distance / weight.cube_root()
}

/// Segment covering `scaled_range`, if any.
pub fn segment_for(scaled_range: f64) -> Option<&'static BlastCurveSegment> {
    BLAST_CURVE.iter().find(|segment| segment.contains(scaled_range))
}

/// Incident overpressure at `distance` feet from a charge of `weight`.
pub fn overpressure(distance: f64, weight: EffectiveWeight) -> Overpressure {
    overpressure_at_scaled_range(scaled_range(distance, weight))
}

pub fn overpressure_at_scaled_range(scaled_range: f64) -> Overpressure {
    if scaled_range > MAX_SCALED_RANGE {
        return Overpressure::Incident(0.0);
    }
    match segment_for(scaled_range) {
        Some(segment) => Overpressure::Incident(segment.evaluate(scaled_range)),
        // Below the first segment, including zero and NaN distances.
        None => Overpressure::NearField,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_edges_follow_closed_open_rules() {
        assert_eq!(segment_for(0.5).map(|s| s.a), Some(6.9137));
        assert_eq!(segment_for(7.25).map(|s| s.a), Some(6.9137));
        assert_eq!(segment_for(7.250001).map(|s| s.a), Some(8.08035));
        assert_eq!(segment_for(60.0).map(|s| s.a), Some(8.08035));
        assert_eq!(segment_for(60.000001).map(|s| s.a), Some(5.4233));
        assert_eq!(segment_for(500.0).map(|s| s.a), Some(5.4233));
        assert!(segment_for(500.000001).is_none());
        assert!(segment_for(0.4999).is_none());
    }

    #[test]
    fn horner_form_matches_expanded_polynomial() {
        let segment = BLAST_CURVE[0];
        let z: f64 = 3.0;
        let t = z.ln();
        let expanded = (segment.a
            + segment.b * t
            + segment.c * t.powi(2)
            + segment.d * t.powi(3)
            + segment.e * t.powi(4))
        .exp();
        assert!((segment.evaluate(z) - expanded).abs() < 1e-9 * expanded);
    }

    #[test]
    fn near_field_exceeds_every_threshold_but_loads_nothing() {
        let near = overpressure_at_scaled_range(0.1);
        assert_eq!(near, Overpressure::NearField);
        assert!(near.exceeds(1.0e9));
        assert_eq!(near.psi_or_zero(), 0.0);
    }

    #[test]
    fn far_field_is_zero() {
        assert_eq!(overpressure_at_scaled_range(750.0), Overpressure::Incident(0.0));
    }
}

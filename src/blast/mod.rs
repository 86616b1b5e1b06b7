//! Blast physics: the overpressure curve, the radius search, exposed area and
//! the engine tying them to a set of target surfaces.

pub mod area;
pub mod curve;
pub mod engine;
pub mod radius;

pub use area::{exposed_area, triangle_exposure};
pub use curve::{
    overpressure, scaled_range, segment_for, BlastCurveSegment, Overpressure, BLAST_CURVE,
};
pub use engine::{surface_impact, BlastEngine, ExplosionResult, SurfaceImpact};
pub use radius::effective_radius;

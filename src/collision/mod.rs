//! Candidate enumeration: the collaborator traits and a uniform-grid broad phase.

pub mod broadphase;
pub mod queries;

pub use broadphase::SpatialGrid;
pub use queries::{sphere_overlaps, ForceSink, SurfaceQuery};

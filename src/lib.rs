//! Blastwave – explosive blast loading for Rust.
//!
//! Given a charge's weight, compound and position, the crate finds the
//! radius inside which incident overpressure stays above a threshold, picks
//! the target surfaces inside it, measures how much of each surface faces the
//! charge, and turns pressure over that area into a force on the surface's
//! rigid body. Units are feet, pounds (TNT) and psi throughout.
//!
//! Rendering, effects playback and user input belong to the host; the host
//! talks to the crate through [`SurfaceQuery`] and [`ForceSink`], or uses the
//! bundled [`SceneWorld`].

pub mod blast;
pub mod collision;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::{Quat, Vec3};

pub use blast::{
    curve::{overpressure, scaled_range, BlastCurveSegment, Overpressure, BLAST_CURVE},
    engine::{BlastEngine, ExplosionResult, SurfaceImpact},
    area::exposed_area,
    radius::effective_radius,
};
pub use collision::{ForceSink, SpatialGrid, SurfaceQuery};
pub use config::{ExplosionConfig, ForceDirection};
pub use crate::core::{
    body::SurfaceBody,
    mesh::{Aabb, MeshBuilder, Triangle, TriangleMesh},
    surface::TargetSurface,
    types::{Charge, ChargeType, EffectiveWeight, SurfaceLocation, Transform},
};
pub use error::{BlastError, Result};
pub use utils::allocator::SurfaceId;
pub use world::{join_detonation, spawn_detonation, SceneWorld, SharedSceneWorld};

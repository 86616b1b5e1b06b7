//! Core data types: charges, target surfaces, meshes and their rigid bodies.

pub mod body;
pub mod mesh;
pub mod surface;
pub mod types;

pub use body::SurfaceBody;
pub use mesh::{Aabb, MeshBuilder, Triangle, TriangleMesh};
pub use surface::TargetSurface;
pub use types::{Charge, ChargeType, EffectiveWeight, SurfaceLocation, Transform};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{
    body::SurfaceBody,
    mesh::{Triangle, TriangleMesh},
    types::{SurfaceLocation, Transform},
};
use crate::utils::allocator::SurfaceId;

/// A piece of the scene a blast can load: a wall panel, door, window.
///
/// The mesh is stored in the surface's local space; `transform` places it in
/// the world and its position doubles as the rigid-body position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSurface {
    pub id: SurfaceId,
    pub transform: Transform,
    /// `None` for untagged scenery, which never takes part in a blast.
    pub location: Option<SurfaceLocation>,
    pub body: Option<SurfaceBody>,
    pub mesh: Option<TriangleMesh>,
}

impl TargetSurface {
    pub fn new(location: SurfaceLocation, transform: Transform) -> Self {
        Self {
            id: SurfaceId::default(),
            transform,
            location: Some(location),
            body: None,
            mesh: None,
        }
    }

    pub fn untagged(transform: Transform) -> Self {
        Self {
            location: None,
            ..Self::new(SurfaceLocation::Exterior, transform)
        }
    }

    pub fn with_body(mut self, body: SurfaceBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_mesh(mut self, mesh: TriangleMesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub fn is_tagged(&self, location: SurfaceLocation) -> bool {
        self.location == Some(location)
    }

    /// Bounding sphere used by the broad phase. Mesh-less surfaces are points.
    pub fn bounding_sphere(&self) -> (Vec3, f32) {
        match &self.mesh {
            Some(mesh) => mesh.world_bounding_sphere(&self.transform),
            None => (self.position(), 0.0),
        }
    }

    pub fn world_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.mesh
            .iter()
            .flat_map(move |mesh| mesh.world_triangles(&self.transform))
    }
}

use glam::Vec3;

use crate::core::surface::TargetSurface;
use crate::utils::allocator::SurfaceId;

/// Scene-side spatial lookup used to enumerate blast candidates.
///
/// Implementations must return every surface whose bounding volume touches
/// the sphere. Extra surfaces are fine; the engine filters them by tag.
pub trait SurfaceQuery {
    fn surfaces_within(&self, center: Vec3, radius: f32) -> Vec<&TargetSurface>;
}

/// Receives the force computed for each loaded surface.
pub trait ForceSink {
    fn apply_force(&mut self, surface: SurfaceId, force: Vec3);
}

/// Whether a bounding sphere touches the query sphere.
pub fn sphere_overlaps(center: Vec3, radius: f32, other: Vec3, other_radius: f32) -> bool {
    let reach = radius + other_radius;
    center.distance_squared(other) <= reach * reach
}

/// Brute-force query over a plain list of surfaces.
impl SurfaceQuery for [TargetSurface] {
    fn surfaces_within(&self, center: Vec3, radius: f32) -> Vec<&TargetSurface> {
        self.iter()
            .filter(|surface| {
                let (sphere_center, sphere_radius) = surface.bounding_sphere();
                sphere_overlaps(center, radius, sphere_center, sphere_radius)
            })
            .collect()
    }
}

impl SurfaceQuery for Vec<TargetSurface> {
    fn surfaces_within(&self, center: Vec3, radius: f32) -> Vec<&TargetSurface> {
        self.as_slice().surfaces_within(center, radius)
    }
}

/// Sink that only records what it was given, in order.
impl ForceSink for Vec<(SurfaceId, Vec3)> {
    fn apply_force(&mut self, surface: SurfaceId, force: Vec3) {
        self.push((surface, force));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{mesh::TriangleMesh, types::SurfaceLocation, types::Transform};

    #[test]
    fn list_query_uses_bounding_spheres() {
        let mesh = TriangleMesh::from_triangles(&[[
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]]);
        let near = TargetSurface::new(
            SurfaceLocation::Exterior,
            Transform::from_position(Vec3::new(6.0, 0.0, 0.0)),
        )
        .with_mesh(mesh);
        let far = TargetSurface::new(
            SurfaceLocation::Exterior,
            Transform::from_position(Vec3::new(20.0, 0.0, 0.0)),
        );
        let surfaces = vec![near, far];

        // The mesh reaches ~1.4 ft toward the query sphere.
        assert_eq!(surfaces.surfaces_within(Vec3::ZERO, 5.0).len(), 1);
        assert_eq!(surfaces.surfaces_within(Vec3::ZERO, 4.0).len(), 0);
        assert_eq!(surfaces.surfaces_within(Vec3::ZERO, 20.0).len(), 2);
    }
}

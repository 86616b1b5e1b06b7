use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::types::Transform;
use crate::error::{BlastError, Result};

/// Axis-aligned bounds of a mesh in its local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Vec3]) -> Self {
        if points.is_empty() {
            return Self::new(Vec3::ZERO, Vec3::ZERO);
        }
        points.iter().fold(
            Self::new(Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |bounds, &p| Self::new(bounds.min.min(p), bounds.max.max(p)),
        )
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    pub fn radius(&self) -> f32 {
        self.half_extents().length()
    }
}

/// A single triangle in supplier winding order `(P1, P2, P3)`.
pub type Triangle = [Vec3; 3];

/// Indexed triangle mesh of a target surface.
///
/// Winding is counter-clockwise when seen from the side the surface faces,
/// so `(P3 - P2) x (P1 - P2)` points outward. Deserialized meshes go through
/// [`MeshBuilder::build`], and stored bounds are recomputed rather than read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMesh")]
pub struct TriangleMesh {
    vertices: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
    bounds: Aabb,
}

impl TriangleMesh {
    pub fn builder(vertices: Vec<Vec3>, indices: Vec<[u32; 3]>) -> MeshBuilder {
        MeshBuilder::new(vertices, indices)
    }

    /// Builds an unindexed mesh, one vertex triple per triangle.
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let vertices: Vec<Vec3> = triangles.iter().flatten().copied().collect();
        let indices = (0..triangles.len() as u32)
            .map(|t| [3 * t, 3 * t + 1, 3 * t + 2])
            .collect();
        let bounds = Aabb::from_points(&vertices);
        Self {
            vertices,
            indices,
            bounds,
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Triangles in mesh-local space.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices.iter().map(move |&[a, b, c]| {
            [
                self.vertices[a as usize],
                self.vertices[b as usize],
                self.vertices[c as usize],
            ]
        })
    }

    /// Triangles carried into world space by `transform`.
    pub fn world_triangles<'a>(
        &'a self,
        transform: &'a Transform,
    ) -> impl Iterator<Item = Triangle> + 'a {
        self.triangles()
            .map(move |tri| tri.map(|p| transform.transform_point(p)))
    }

    /// Sum of all triangle areas, regardless of orientation.
    pub fn surface_area(&self) -> f32 {
        self.triangles()
            .map(|[p1, p2, p3]| 0.5 * (p3 - p2).cross(p1 - p2).length())
            .sum()
    }

    /// Radius of a sphere around the transformed bounds center enclosing the mesh.
    pub fn world_bounding_sphere(&self, transform: &Transform) -> (Vec3, f32) {
        let center = transform.transform_point(self.bounds.center());
        (center, self.bounds.radius() * transform.max_scale())
    }
}

/// Wire form of a mesh before validation.
#[derive(Deserialize)]
struct RawMesh {
    vertices: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
}

impl TryFrom<RawMesh> for TriangleMesh {
    type Error = BlastError;

    fn try_from(raw: RawMesh) -> Result<Self> {
        MeshBuilder::new(raw.vertices, raw.indices).build()
    }
}

/// Cooks a [`TriangleMesh`] from raw supplier buffers.
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    vertices: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
}

impl MeshBuilder {
    pub fn new(vertices: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Self {
        Self { vertices, indices }
    }

    /// Merges vertices closer than `epsilon` on a quantized grid.
    pub fn weld_vertices(mut self, epsilon: f32) -> Self {
        if epsilon <= 0.0 || self.vertices.is_empty() {
            return self;
        }

        let inv = 1.0 / epsilon;
        let mut cells: HashMap<(i32, i32, i32), u32> = HashMap::new();
        let mut welded = Vec::new();
        let remap: Vec<u32> = self
            .vertices
            .iter()
            .map(|v| {
                let key = (
                    (v.x * inv).round() as i32,
                    (v.y * inv).round() as i32,
                    (v.z * inv).round() as i32,
                );
                *cells.entry(key).or_insert_with(|| {
                    welded.push(*v);
                    (welded.len() - 1) as u32
                })
            })
            .collect();

        for tri in &mut self.indices {
            for index in tri.iter_mut() {
                if let Some(&mapped) = remap.get(*index as usize) {
                    *index = mapped;
                }
            }
        }

        self.vertices = welded;
        self
    }

    /// Reverses the winding of every triangle, turning the mesh inside out.
    pub fn flip_winding(mut self) -> Self {
        for tri in &mut self.indices {
            tri.swap(0, 2);
        }
        self
    }

    pub fn build(self) -> Result<TriangleMesh> {
        let vertex_count = self.vertices.len();
        if let Some(bad) = self
            .indices
            .iter()
            .flatten()
            .find(|&&i| i as usize >= vertex_count)
        {
            return Err(BlastError::InvalidMesh(format!(
                "index {bad} out of range for {vertex_count} vertices"
            )));
        }
        if let Some(v) = self.vertices.iter().find(|v| !v.is_finite()) {
            return Err(BlastError::InvalidMesh(format!("non-finite vertex {v}")));
        }

        let bounds = Aabb::from_points(&self.vertices);
        Ok(TriangleMesh {
            vertices: self.vertices,
            indices: self.indices,
            bounds,
        })
    }
}

use std::collections::HashMap;

use glam::Vec3;

use crate::utils::allocator::SurfaceId;

type Cell = (i32, i32, i32);

/// Entries spanning more cells than this are kept out of the grid and
/// returned by every query instead.
const MAX_CELLS_PER_ENTRY: u64 = 4096;

/// Inclusive cell range covered by a box.
#[derive(Debug, Clone, Copy)]
struct CellRange {
    min: Cell,
    max: Cell,
}

impl CellRange {
    fn contains(&self, (x, y, z): Cell) -> bool {
        (self.min.0..=self.max.0).contains(&x)
            && (self.min.1..=self.max.1).contains(&y)
            && (self.min.2..=self.max.2).contains(&z)
    }

    fn cell_count(&self) -> u64 {
        let span = |lo: i32, hi: i32| (i64::from(hi) - i64::from(lo) + 1).max(0) as u64;
        span(self.min.0, self.max.0)
            .saturating_mul(span(self.min.1, self.max.1))
            .saturating_mul(span(self.min.2, self.max.2))
    }

    fn cells(self) -> impl Iterator<Item = Cell> {
        let (x0, y0, z0) = self.min;
        let (x1, y1, z1) = self.max;
        (x0..=x1).flat_map(move |x| (y0..=y1).flat_map(move |y| (z0..=z1).map(move |z| (x, y, z))))
    }
}

/// Uniform grid over surface bounding spheres.
///
/// A surface is registered in every cell its bounding box overlaps, so a
/// sphere query only has to visit the cells covering the query box. Queries
/// whose box spans more cells than the grid holds walk the occupied cells
/// instead, so query cost never grows past the number of stored cells.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f32,
    cells: HashMap<Cell, Vec<SurfaceId>>,
    oversized: Vec<SurfaceId>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: if cell_size.is_finite() && cell_size > 0.0 {
                cell_size
            } else {
                1.0
            },
            cells: HashMap::new(),
            oversized: Vec::new(),
        }
    }

    fn cell_of(&self, pos: Vec3) -> Cell {
        let scaled = (pos / self.cell_size).floor();
        (scaled.x as i32, scaled.y as i32, scaled.z as i32)
    }

    fn range_covering(&self, center: Vec3, radius: f32) -> CellRange {
        CellRange {
            min: self.cell_of(center - Vec3::splat(radius)),
            max: self.cell_of(center + Vec3::splat(radius)),
        }
    }

    pub fn insert(&mut self, id: SurfaceId, center: Vec3, radius: f32) {
        let range = self.range_covering(center, radius);
        if range.cell_count() > MAX_CELLS_PER_ENTRY {
            self.oversized.push(id);
            return;
        }
        for cell in range.cells() {
            self.cells.entry(cell).or_default().push(id);
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.oversized.clear();
    }

    /// Candidate ids whose cells overlap the query sphere's box, deduplicated.
    pub fn query(&self, center: Vec3, radius: f32) -> Vec<SurfaceId> {
        let range = self.range_covering(center, radius);
        let mut found = self.oversized.clone();
        if range.cell_count() > self.cells.len() as u64 {
            found.extend(
                self.cells
                    .iter()
                    .filter(|(cell, _)| range.contains(**cell))
                    .flat_map(|(_, ids)| ids.iter().copied()),
            );
        } else {
            found.extend(
                range
                    .cells()
                    .filter_map(|cell| self.cells.get(&cell))
                    .flatten()
                    .copied(),
            );
        }
        found.sort();
        found.dedup();
        found
    }
}

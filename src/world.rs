use std::sync::Arc;
use std::thread::{self, JoinHandle};

use glam::Vec3;
use parking_lot::Mutex;

use crate::{
    blast::engine::{BlastEngine, ExplosionResult},
    collision::{
        broadphase::SpatialGrid,
        queries::{sphere_overlaps, ForceSink, SurfaceQuery},
    },
    config::{ExplosionConfig, DEFAULT_BROADPHASE_CELL_SIZE},
    core::{surface::TargetSurface, types::Charge},
    error::{BlastError, Result},
    utils::allocator::{Arena, SurfaceId},
};

/// Scene container owning target surfaces and their broad-phase index.
#[derive(Debug, Clone)]
pub struct SceneWorld {
    surfaces: Arena<TargetSurface>,
    grid: SpatialGrid,
}

impl Default for SceneWorld {
    fn default() -> Self {
        Self::new(DEFAULT_BROADPHASE_CELL_SIZE)
    }
}

impl SceneWorld {
    pub fn new(cell_size: f32) -> Self {
        Self {
            surfaces: Arena::new(),
            grid: SpatialGrid::new(cell_size),
        }
    }

    pub fn add_surface(&mut self, surface: TargetSurface) -> SurfaceId {
        let (center, radius) = surface.bounding_sphere();
        let id = self.surfaces.insert(surface);
        if let Some(stored) = self.surfaces.get_mut(id) {
            stored.id = id;
        }
        self.grid.insert(id, center, radius);
        id
    }

    pub fn remove_surface(&mut self, id: SurfaceId) -> Option<TargetSurface> {
        let removed = self.surfaces.remove(id)?;
        self.rebuild_index();
        Some(removed)
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&TargetSurface> {
        self.surfaces.get(id)
    }

    /// Mutable access. Call [`SceneWorld::rebuild_index`] after moving a surface.
    pub fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut TargetSurface> {
        self.surfaces.get_mut(id)
    }

    pub fn surfaces(&self) -> impl Iterator<Item = &TargetSurface> + '_ {
        self.surfaces.iter().map(|(_, surface)| surface)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn rebuild_index(&mut self) {
        self.grid.clear();
        for (id, surface) in self.surfaces.iter() {
            let (center, radius) = surface.bounding_sphere();
            self.grid.insert(id, center, radius);
        }
    }

    /// Applies a force to one surface, failing if the id is stale.
    pub fn push_surface(&mut self, id: SurfaceId, force: Vec3) -> Result<()> {
        let surface = self
            .surfaces
            .get_mut(id)
            .ok_or(BlastError::UnknownSurface(id))?;
        if let Some(body) = surface.body.as_mut() {
            body.apply_force(force);
        }
        Ok(())
    }

    /// Detonates `charge` against this scene and pushes the surfaces it loads.
    pub fn detonate(
        &mut self,
        engine: &BlastEngine,
        charge: Charge,
        config: ExplosionConfig,
    ) -> Result<ExplosionResult> {
        let result = engine.evaluate(charge, config, &*self)?;
        result.apply(self);
        Ok(result)
    }
}

impl SurfaceQuery for SceneWorld {
    fn surfaces_within(&self, center: Vec3, radius: f32) -> Vec<&TargetSurface> {
        self.grid
            .query(center, radius)
            .into_iter()
            .filter_map(|id| self.surfaces.get(id))
            .filter(|surface| {
                let (sphere_center, sphere_radius) = surface.bounding_sphere();
                sphere_overlaps(center, radius, sphere_center, sphere_radius)
            })
            .collect()
    }
}

impl ForceSink for SceneWorld {
    fn apply_force(&mut self, surface: SurfaceId, force: Vec3) {
        if self.push_surface(surface, force).is_err() {
            log::warn!("dropping blast force for removed surface {surface:?}");
        }
    }
}

/// World shared between the host and a detonation worker.
pub type SharedSceneWorld = Arc<Mutex<SceneWorld>>;

/// Runs a detonation on its own thread; join the handle to collect the result.
///
/// The world stays locked for the whole evaluation so forces land on the
/// same surfaces that were measured.
pub fn spawn_detonation(
    world: SharedSceneWorld,
    engine: BlastEngine,
    charge: Charge,
    config: ExplosionConfig,
) -> JoinHandle<Result<ExplosionResult>> {
    thread::spawn(move || world.lock().detonate(&engine, charge, config))
}

/// Joins a detonation worker, turning a panic into an error.
pub fn join_detonation(handle: JoinHandle<Result<ExplosionResult>>) -> Result<ExplosionResult> {
    handle.join().map_err(|_| BlastError::DetonationPanicked)?
}

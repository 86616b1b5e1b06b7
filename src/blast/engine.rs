use std::collections::HashMap;

use glam::Vec3;
use log::debug;
use serde::Serialize;

use crate::{
    blast::{area::exposed_area, curve::overpressure, radius::effective_radius},
    collision::queries::{ForceSink, SurfaceQuery},
    config::{ExplosionConfig, ForceDirection, PSI_TO_PSF},
    core::{
        surface::TargetSurface,
        types::{Charge, ChargeType, EffectiveWeight},
    },
    error::Result,
    utils::{allocator::SurfaceId, logging::ScopedTimer},
};

/// Load computed for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceImpact {
    pub surface: SurfaceId,
    /// Charge to surface position, ft.
    pub distance: f32,
    /// Incident overpressure, psi.
    pub overpressure: f64,
    /// Area facing the charge, ft².
    pub exposed_area: f32,
    /// Force vector, lbf when the direction is a unit vector.
    pub force: Vec3,
}

/// Outcome of one detonation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplosionResult {
    pub charge_type: ChargeType,
    /// Charge weight in pounds of TNT.
    pub effective_weight: f64,
    /// Whole feet.
    pub effective_radius: u32,
    pub affected_count: usize,
    /// One entry per loaded surface, in enumeration order.
    pub impacts: Vec<SurfaceImpact>,
}

impl ExplosionResult {
    pub fn force_on(&self, surface: SurfaceId) -> Option<Vec3> {
        self.impacts
            .iter()
            .find(|impact| impact.surface == surface)
            .map(|impact| impact.force)
    }

    pub fn forces(&self) -> HashMap<SurfaceId, Vec3> {
        self.impacts
            .iter()
            .map(|impact| (impact.surface, impact.force))
            .collect()
    }

    pub fn total_force(&self) -> Vec3 {
        self.impacts.iter().map(|impact| impact.force).sum()
    }

    /// Destruction meter value shown to operators: one point per ten surfaces.
    pub fn destruction_meter(&self) -> usize {
        self.affected_count / 10
    }

    /// Pushes every force into `sink`, one surface at a time.
    pub fn apply<S: ForceSink + ?Sized>(&self, sink: &mut S) {
        for impact in &self.impacts {
            sink.apply_force(impact.surface, impact.force);
        }
    }
}

/// Turns a charge and a set of candidate surfaces into per-surface forces.
#[derive(Debug, Clone, Default)]
pub struct BlastEngine {
    parallel: bool,
}

impl BlastEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates surfaces on the rayon pool. Ignored without the `parallel` feature.
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn parallel_enabled(&self) -> bool {
        self.parallel && cfg!(feature = "parallel")
    }

    /// Detonates `charge` and applies the resulting forces to `sink`.
    pub fn explode<Q, S>(
        &self,
        charge: Charge,
        config: ExplosionConfig,
        query: &Q,
        sink: &mut S,
    ) -> Result<ExplosionResult>
    where
        Q: SurfaceQuery + ?Sized,
        S: ForceSink + ?Sized,
    {
        let result = self.evaluate(charge, config, query)?;
        result.apply(sink);
        Ok(result)
    }

    /// Detonates `charge` without touching any rigid body.
    pub fn evaluate<Q>(
        &self,
        charge: Charge,
        config: ExplosionConfig,
        query: &Q,
    ) -> Result<ExplosionResult>
    where
        Q: SurfaceQuery + ?Sized,
    {
        config.validate()?;
        let _timer = ScopedTimer::new("blast.evaluate");

        let weight = charge.effective_weight()?;
        let radius = effective_radius(weight, config.minimum_relevant_pressure)?;
        let origin = charge.position();

        let candidates: Vec<&TargetSurface> = query
            .surfaces_within(origin, radius as f32)
            .into_iter()
            .filter(|surface| surface.is_tagged(config.location))
            .collect();

        let impacts = self.collect_impacts(&candidates, origin, weight, config.force_direction);

        debug!("Explosive type = {:?}", charge.charge_type());
        debug!("Explosive weight = {:.3} lb TNT", weight.pounds());
        debug!("Explosive target = {:?}", config.location);
        debug!("Min Rel Pressure = {} psi", config.minimum_relevant_pressure);
        debug!("Effective Radius = {radius} ft");
        debug!(
            "Affected surfaces = {} of {} candidates",
            impacts.len(),
            candidates.len()
        );

        Ok(ExplosionResult {
            charge_type: charge.charge_type(),
            effective_weight: weight.pounds(),
            effective_radius: radius,
            affected_count: impacts.len(),
            impacts,
        })
    }

    fn collect_impacts(
        &self,
        candidates: &[&TargetSurface],
        origin: Vec3,
        weight: EffectiveWeight,
        direction: ForceDirection,
    ) -> Vec<SurfaceImpact> {
        let load = |surface: &&TargetSurface| surface_impact(surface, origin, weight, direction);

        #[cfg(feature = "parallel")]
        if self.parallel {
            use rayon::prelude::*;
            return candidates.par_iter().filter_map(load).collect();
        }

        candidates.iter().filter_map(load).collect()
    }
}

/// Load on a single surface, or `None` when it has no body or mesh to load.
pub fn surface_impact(
    surface: &TargetSurface,
    origin: Vec3,
    weight: EffectiveWeight,
    direction: ForceDirection,
) -> Option<SurfaceImpact> {
    if surface.body.is_none() {
        debug!("skipping surface {:?}: no rigid body", surface.id);
        return None;
    }
    if surface.mesh.is_none() {
        debug!("skipping surface {:?}: no mesh", surface.id);
        return None;
    }

    let displacement = surface.position() - origin;
    let distance = displacement.length();
    let psi = overpressure(f64::from(distance), weight).psi_or_zero();
    let area = exposed_area(surface.world_triangles(), origin);
    let magnitude = psi * PSI_TO_PSF * f64::from(area);

    let heading = match direction {
        ForceDirection::Unit => displacement.normalize_or_zero(),
        ForceDirection::RawDisplacement => displacement,
    };

    Some(SurfaceImpact {
        surface: surface.id,
        distance,
        overpressure: psi,
        exposed_area: area,
        force: heading * magnitude as f32,
    })
}

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::{PETN_EQUIVALENCE, TNT_EQUIVALENCE};
use crate::error::{BlastError, Result};

/// Position, orientation, and non-uniform scale of a surface in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Maps a mesh-local point into world space.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * (self.scale * point)
    }

    /// Largest axis scale; bounds a local radius once rotated.
    pub fn max_scale(&self) -> f32 {
        self.scale.abs().max_element()
    }
}

/// Explosive compound of a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeType {
    Tnt,
    Petn,
}

impl ChargeType {
    /// Multiplier turning a mass of this explosive into pounds of TNT.
    pub fn tnt_equivalence(self) -> f64 {
        match self {
            ChargeType::Tnt => TNT_EQUIVALENCE,
            ChargeType::Petn => PETN_EQUIVALENCE,
        }
    }
}

/// Which side of the structure a charge is set against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SurfaceLocation {
    #[default]
    Exterior,
    Interior,
}

/// Charge weight expressed in pounds of TNT. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct EffectiveWeight(f64);

impl EffectiveWeight {
    pub fn new(pounds_tnt: f64) -> Result<Self> {
        BlastError::require_positive("effective_weight", pounds_tnt).map(Self)
    }

    pub fn pounds(self) -> f64 {
        self.0
    }

    /// `W^(1/3)`, the divisor of the cube-root scaling law.
    pub fn cube_root(self) -> f64 {
        self.0.powf(1.0 / 3.0)
    }
}

/// A placed charge. Consumed by the detonation that uses it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Charge {
    charge_type: ChargeType,
    position: Vec3,
    weight: f64,
}

impl Charge {
    pub fn new(charge_type: ChargeType, position: Vec3, weight: f64) -> Result<Self> {
        let weight = BlastError::require_positive("explosive_weight", weight)?;
        Ok(Self {
            charge_type,
            position,
            weight,
        })
    }

    pub fn tnt(position: Vec3, weight: f64) -> Result<Self> {
        Self::new(ChargeType::Tnt, position, weight)
    }

    pub fn petn(position: Vec3, weight: f64) -> Result<Self> {
        Self::new(ChargeType::Petn, position, weight)
    }

    pub fn charge_type(&self) -> ChargeType {
        self.charge_type
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Raw mass of the charge in pounds of its own explosive.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn effective_weight(&self) -> Result<EffectiveWeight> {
        EffectiveWeight::new(self.weight * self.charge_type.tnt_equivalence())
    }
}

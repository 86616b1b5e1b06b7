use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Rigid-body binding of a target surface.
///
/// The crate does not integrate motion; it only accumulates the forces a
/// blast pushes into the body so the host physics step can consume them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBody {
    pub mass: f32,
    pub inverse_mass: f32,
    pub is_static: bool,
    pub is_kinematic: bool,
    pub is_awake: bool,
    pub linear_velocity: Vec3,
    pub accumulated_force: Vec3,
}

impl Default for SurfaceBody {
    fn default() -> Self {
        Self::with_mass(1.0)
    }
}

impl SurfaceBody {
    pub fn with_mass(mass: f32) -> Self {
        let inverse_mass = if mass.abs() < f32::EPSILON {
            0.0
        } else {
            1.0 / mass
        };
        Self {
            mass,
            inverse_mass,
            is_static: false,
            is_kinematic: false,
            is_awake: true,
            linear_velocity: Vec3::ZERO,
            accumulated_force: Vec3::ZERO,
        }
    }

    /// Kinematic walls stay put until a blast reaches them.
    pub fn kinematic(mass: f32) -> Self {
        Self {
            is_kinematic: true,
            is_awake: false,
            ..Self::with_mass(mass)
        }
    }

    /// Adds a continuous force. A kinematic body is released to dynamics first.
    pub fn apply_force(&mut self, force: Vec3) {
        if self.is_static {
            return;
        }
        self.is_kinematic = false;
        self.is_awake = true;
        self.accumulated_force += force;
    }

    /// Returns and clears the force gathered since the last call.
    pub fn take_force(&mut self) -> Vec3 {
        std::mem::take(&mut self.accumulated_force)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blast_force_releases_kinematic_body() {
        let mut body = SurfaceBody::kinematic(50.0);
        body.apply_force(Vec3::new(10.0, 0.0, 0.0));
        body.apply_force(Vec3::new(0.0, 5.0, 0.0));

        assert!(!body.is_kinematic);
        assert!(body.is_awake);
        assert_eq!(body.take_force(), Vec3::new(10.0, 5.0, 0.0));
        assert_eq!(body.accumulated_force, Vec3::ZERO);
    }

    #[test]
    fn static_bodies_ignore_forces() {
        let mut body = SurfaceBody {
            is_static: true,
            ..SurfaceBody::kinematic(10.0)
        };
        body.apply_force(Vec3::X);
        assert_eq!(body.accumulated_force, Vec3::ZERO);
        assert!(body.is_kinematic);
        assert!(!body.is_awake);
    }
}

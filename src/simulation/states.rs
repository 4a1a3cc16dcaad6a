//! Core state types for the particle simulation.
//!
//! Defines the vector alias and the `Particle` struct:
//! point masses with position, velocity, and a per-step force accumulator,
//! plus the fixed/free flag and accumulated age.

use nalgebra::Vector3;
pub type Vec3 = Vector3<f64>;

/// Euclidean distance between two points.
pub fn distance(p: &Vec3, q: &Vec3) -> f64 {
    (p - q).norm()
}

/// A point mass owned by the particle system.
///
/// Particles are created through the system's `make_particle` factory and
/// referenced by forces via their index in the particle collection. The `id`
/// is stable across removals and backs the by-id removal operations.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec3, // position
    pub velocity: Vec3, // velocity
    pub force: Vec3, // force accumulator, reset every evaluation pass
    pub mass: f64, // mass, must be positive
    pub age: f64, // accumulated simulated time
    pub fixed: bool, // pinned: excluded from integration
    id: u64, // stable identity, assigned by the system
}

impl Particle {
    pub(crate) fn new(mass: f64, position: Vec3, id: u64) -> Self {
        debug_assert!(mass > 0.0, "particle mass must be positive");
        Self {
            position,
            velocity: Vec3::zeros(),
            force: Vec3::zeros(),
            mass,
            age: 0.0,
            fixed: false,
            id,
        }
    }

    /// Stable identity of this particle within its system.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        distance(&self.position, &other.position)
    }

    /// Pin the particle. Velocity is zeroed at the moment of fixing;
    /// integrators never update a fixed particle's position or velocity,
    /// though its age still advances.
    pub fn make_fixed(&mut self) {
        self.fixed = true;
        self.velocity = Vec3::zeros();
    }

    /// Unpin the particle. Velocity is left as-is.
    pub fn make_free(&mut self) {
        self.fixed = false;
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn is_free(&self) -> bool {
        !self.fixed
    }

    pub fn set_mass(&mut self, m: f64) {
        debug_assert!(m > 0.0, "particle mass must be positive");
        self.mass = m;
    }

    pub fn set_velocity(&mut self, v: Vec3) {
        self.velocity = v;
    }

    /// Set the position directly, bypassing velocity. Used for externally
    /// driven particles (pointer-dragged anchors and the like).
    pub fn move_to(&mut self, x: f64, y: f64, z: f64) {
        self.position = Vec3::new(x, y, z);
    }
}

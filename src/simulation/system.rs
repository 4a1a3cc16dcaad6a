//! The particle system: owner and orchestrator of all particles and forces
//!
//! Holds the dense particle arena, the spring/attraction/custom force
//! collections, global gravity and drag, and the active integrator.
//! Hosts build the graph through the factory methods, call [`ParticleSystem::tick`]
//! once per frame, and read particle positions back for drawing.

use crate::configuration::config::IntegratorConfig;
use crate::error::PhysicsError;
use crate::simulation::forces::{Attraction, Force, Spring};
use crate::simulation::integrator::{modified_euler_step, runge_kutta_step};
use crate::simulation::states::{Particle, Vec3};

/// A host-supplied force together with the stable id handed back at
/// registration time.
struct CustomForce {
    id: u64,
    force: Box<dyn Force + Send + Sync>,
}

/// Owner and orchestrator of the particle/force graph.
///
/// Registration order is significant: each evaluation pass applies gravity,
/// then drag, then every spring, attraction, and custom force in the order
/// they were registered. Removing an element shifts the indices of all
/// subsequent elements in that collection, so index handles must not be
/// cached across a removal; the stable ids exist for that case.
impl std::fmt::Debug for ParticleSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleSystem")
            .field("particles", &self.particles)
            .field("springs", &self.springs)
            .field("attractions", &self.attractions)
            .field("custom", &self.custom.len())
            .field("gravity", &self.gravity)
            .field("drag", &self.drag)
            .field("integrator", &self.integrator)
            .field("next_id", &self.next_id)
            .finish()
    }
}

pub struct ParticleSystem {
    pub(crate) particles: Vec<Particle>,
    pub(crate) springs: Vec<Spring>,
    pub(crate) attractions: Vec<Attraction>,
    custom: Vec<CustomForce>,
    pub gravity: Vec3, // added to every accumulator when non-zero
    pub drag: f64, // velocity-proportional drag coefficient, non-negative
    integrator: IntegratorConfig,
    next_id: u64, // id counter shared by all collections
}

impl ParticleSystem {
    pub fn new(gravity: Vec3, drag: f64) -> Self {
        debug_assert!(drag >= 0.0, "drag must be non-negative");
        Self {
            particles: Vec::new(),
            springs: Vec::new(),
            attractions: Vec::new(),
            custom: Vec::new(),
            gravity,
            drag,
            integrator: IntegratorConfig::RungeKutta,
            next_id: 0,
        }
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // ==================================================================
    // Settings
    // ==================================================================

    /// Select the active integration strategy. Selection is exclusive per
    /// kind; it takes effect on the next `tick`.
    pub fn set_integrator(&mut self, integrator: IntegratorConfig) {
        self.integrator = integrator;
    }

    pub fn integrator(&self) -> IntegratorConfig {
        self.integrator
    }

    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    pub fn set_drag(&mut self, d: f64) {
        debug_assert!(d >= 0.0, "drag must be non-negative");
        self.drag = d;
    }

    // ==================================================================
    // Factories
    // ==================================================================

    /// Create a particle and return its index handle.
    pub fn make_particle(&mut self, mass: f64, position: Vec3) -> usize {
        let id = self.alloc_id();
        self.particles.push(Particle::new(mass, position, id));
        self.particles.len() - 1
    }

    /// Create a spring between two particle handles and return its index.
    pub fn make_spring(
        &mut self,
        a: usize,
        b: usize,
        spring_constant: f64,
        damping: f64,
        rest_length: f64,
    ) -> usize {
        let id = self.alloc_id();
        self.springs
            .push(Spring::new(a, b, spring_constant, damping, rest_length, id));
        self.springs.len() - 1
    }

    /// Create an attraction between two particle handles and return its index.
    pub fn make_attraction(
        &mut self,
        a: usize,
        b: usize,
        strength: f64,
        min_distance: f64,
    ) -> usize {
        let id = self.alloc_id();
        self.attractions
            .push(Attraction::new(a, b, strength, min_distance, id));
        self.attractions.len() - 1
    }

    /// Register a host-supplied force. Returns the stable id used by
    /// [`ParticleSystem::remove_custom_force_by_id`]; host types carry no id
    /// field of their own, so registration hands one back.
    pub fn add_custom_force(&mut self, force: Box<dyn Force + Send + Sync>) -> u64 {
        let id = self.alloc_id();
        self.custom.push(CustomForce { id, force });
        id
    }

    // ==================================================================
    // Counts and accessors
    // ==================================================================

    pub fn number_of_particles(&self) -> usize {
        self.particles.len()
    }

    pub fn number_of_springs(&self) -> usize {
        self.springs.len()
    }

    pub fn number_of_attractions(&self) -> usize {
        self.attractions.len()
    }

    pub fn number_of_custom_forces(&self) -> usize {
        self.custom.len()
    }

    /// Read-only view of the particle arena, for render read-back.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn get_particle(&self, i: usize) -> Result<&Particle, PhysicsError> {
        self.particles.get(i).ok_or(PhysicsError::IndexOutOfRange {
            what: "particle",
            index: i,
            count: self.particles.len(),
        })
    }

    /// Mutable particle access for host-driven state writes (`move_to`,
    /// `set_velocity`, `make_fixed`) in response to input.
    pub fn get_particle_mut(&mut self, i: usize) -> Result<&mut Particle, PhysicsError> {
        let count = self.particles.len();
        self.particles
            .get_mut(i)
            .ok_or(PhysicsError::IndexOutOfRange {
                what: "particle",
                index: i,
                count,
            })
    }

    pub fn get_spring(&self, i: usize) -> Result<&Spring, PhysicsError> {
        self.springs.get(i).ok_or(PhysicsError::IndexOutOfRange {
            what: "spring",
            index: i,
            count: self.springs.len(),
        })
    }

    pub fn get_spring_mut(&mut self, i: usize) -> Result<&mut Spring, PhysicsError> {
        let count = self.springs.len();
        self.springs
            .get_mut(i)
            .ok_or(PhysicsError::IndexOutOfRange {
                what: "spring",
                index: i,
                count,
            })
    }

    pub fn get_attraction(&self, i: usize) -> Result<&Attraction, PhysicsError> {
        self.attractions
            .get(i)
            .ok_or(PhysicsError::IndexOutOfRange {
                what: "attraction",
                index: i,
                count: self.attractions.len(),
            })
    }

    pub fn get_attraction_mut(&mut self, i: usize) -> Result<&mut Attraction, PhysicsError> {
        let count = self.attractions.len();
        self.attractions
            .get_mut(i)
            .ok_or(PhysicsError::IndexOutOfRange {
                what: "attraction",
                index: i,
                count,
            })
    }

    pub fn get_custom_force(&self, i: usize) -> Result<&(dyn Force + Send + Sync), PhysicsError> {
        self.custom
            .get(i)
            .map(|c| &*c.force)
            .ok_or(PhysicsError::IndexOutOfRange {
                what: "custom force",
                index: i,
                count: self.custom.len(),
            })
    }

    // ==================================================================
    // Removal
    // ==================================================================

    /// Remove a particle by index. Indices of subsequent particles shift
    /// down by one; forces still referencing the removed slot dangle, which
    /// is a caller error.
    pub fn remove_particle(&mut self, i: usize) -> Result<(), PhysicsError> {
        if i >= self.particles.len() {
            return Err(PhysicsError::IndexOutOfRange {
                what: "particle",
                index: i,
                count: self.particles.len(),
            });
        }
        self.particles.remove(i);
        Ok(())
    }

    /// Remove a particle by stable id. Linear scan; "not found" is an
    /// expected outcome and reports `false`.
    pub fn remove_particle_by_id(&mut self, id: u64) -> bool {
        match self.particles.iter().position(|p| p.id() == id) {
            Some(i) => {
                self.particles.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn remove_spring(&mut self, i: usize) -> Result<(), PhysicsError> {
        if i >= self.springs.len() {
            return Err(PhysicsError::IndexOutOfRange {
                what: "spring",
                index: i,
                count: self.springs.len(),
            });
        }
        self.springs.remove(i);
        Ok(())
    }

    pub fn remove_spring_by_id(&mut self, id: u64) -> bool {
        match self.springs.iter().position(|s| s.id() == id) {
            Some(i) => {
                self.springs.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn remove_attraction(&mut self, i: usize) -> Result<(), PhysicsError> {
        if i >= self.attractions.len() {
            return Err(PhysicsError::IndexOutOfRange {
                what: "attraction",
                index: i,
                count: self.attractions.len(),
            });
        }
        self.attractions.remove(i);
        Ok(())
    }

    pub fn remove_attraction_by_id(&mut self, id: u64) -> bool {
        match self.attractions.iter().position(|a| a.id() == id) {
            Some(i) => {
                self.attractions.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn remove_custom_force(&mut self, i: usize) -> Result<(), PhysicsError> {
        if i >= self.custom.len() {
            return Err(PhysicsError::IndexOutOfRange {
                what: "custom force",
                index: i,
                count: self.custom.len(),
            });
        }
        self.custom.remove(i);
        Ok(())
    }

    pub fn remove_custom_force_by_id(&mut self, id: u64) -> bool {
        match self.custom.iter().position(|c| c.id == id) {
            Some(i) => {
                self.custom.remove(i);
                true
            }
            None => false,
        }
    }

    /// Empty every collection: particles, springs, attractions, and custom
    /// forces alike. Custom forces are included so that a cleared system
    /// never holds forces whose endpoint handles dangle into a drained
    /// arena.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.springs.clear();
        self.attractions.clear();
        self.custom.clear();
        log::debug!("particle system cleared");
    }

    // ==================================================================
    // Force evaluation and stepping
    // ==================================================================

    /// One force-evaluation pass: gravity, drag, then every spring,
    /// attraction, and custom force in registration order. Invoked by the
    /// active integrator, once per Euler step and four times per
    /// Runge-Kutta step.
    pub fn apply_forces(&mut self) {
        if self.gravity != Vec3::zeros() {
            for p in self.particles.iter_mut() {
                p.force += self.gravity;
            }
        }

        // Drag opposes velocity on every particle
        for p in self.particles.iter_mut() {
            let mut vdrag = p.velocity;
            vdrag *= -self.drag;
            p.force += vdrag;
        }

        for s in self.springs.iter() {
            s.apply(&mut self.particles);
        }

        for a in self.attractions.iter() {
            a.apply(&mut self.particles);
        }

        for c in self.custom.iter() {
            c.force.apply(&mut self.particles);
        }
    }

    /// Zero every particle's force accumulator.
    pub fn clear_forces(&mut self) {
        for p in self.particles.iter_mut() {
            p.force = Vec3::zeros();
        }
    }

    /// Advance the simulation by one step of duration `dt`, delegating to
    /// the active integrator.
    pub fn tick(&mut self, dt: f64) {
        match self.integrator {
            IntegratorConfig::RungeKutta => runge_kutta_step(self, dt),
            IntegratorConfig::ModifiedEuler => modified_euler_step(self, dt),
        }
    }
}

impl Default for ParticleSystem {
    /// Zero gravity and a light drag of `0.001`.
    fn default() -> Self {
        Self::new(Vec3::zeros(), 0.001)
    }
}

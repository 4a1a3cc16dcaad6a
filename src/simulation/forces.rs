//! Force contributors for the particle system
//!
//! Defines the [`Force`] capability shared by springs, attractions, and
//! host-supplied custom forces, plus the two built-in variants:
//! a damped Hookean spring and a signed inverse-square attraction.

use crate::simulation::states::{distance, Particle, Vec3};

/// A unit of influence on the system's particles.
///
/// Implementations mutate the force accumulators of the particles they
/// affect during one evaluation pass. `apply` must be a no-op when the
/// force is off. Endpoint handles are indices into the particle slice;
/// a handle left dangling by a particle removal is a caller error and
/// panics on the out-of-bounds access rather than being skipped.
pub trait Force {
    fn turn_on(&mut self);
    fn turn_off(&mut self);
    fn is_on(&self) -> bool;
    fn is_off(&self) -> bool {
        !self.is_on()
    }
    fn apply(&self, particles: &mut [Particle]);
}

/// Damped Hookean spring between two particles with a rest length.
///
/// `spring_force = -(length - rest_length) * ks` along the unit direction
/// from `b` to `a`, plus a damping term proportional to the relative
/// velocity projected onto that direction.
#[derive(Debug)]
pub struct Spring {
    a: usize, // endpoint handle
    b: usize, // endpoint handle
    spring_constant: f64, // ks, must be positive
    damping: f64, // non-negative
    rest_length: f64, // non-negative
    on: bool,
    id: u64, // stable identity, assigned by the system
}

impl Spring {
    pub(crate) fn new(
        a: usize,
        b: usize,
        spring_constant: f64,
        damping: f64,
        rest_length: f64,
        id: u64,
    ) -> Self {
        debug_assert!(spring_constant > 0.0, "spring constant must be positive");
        debug_assert!(damping >= 0.0, "spring damping must be non-negative");
        debug_assert!(rest_length >= 0.0, "spring rest length must be non-negative");
        Self {
            a,
            b,
            spring_constant,
            damping,
            rest_length,
            on: true,
            id,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Distance between the endpoints in the given particle collection.
    pub fn current_length(&self, particles: &[Particle]) -> f64 {
        distance(&particles[self.a].position, &particles[self.b].position)
    }

    pub fn strength(&self) -> f64 {
        self.spring_constant
    }

    pub fn set_strength(&mut self, ks: f64) {
        self.spring_constant = ks;
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn set_damping(&mut self, d: f64) {
        self.damping = d;
    }

    pub fn rest_length(&self) -> f64 {
        self.rest_length
    }

    pub fn set_rest_length(&mut self, l: f64) {
        self.rest_length = l;
    }

    pub fn set_a(&mut self, p: usize) {
        self.a = p;
    }

    pub fn set_b(&mut self, p: usize) {
        self.b = p;
    }

    pub fn one_end(&self) -> usize {
        self.a
    }

    pub fn the_other_end(&self) -> usize {
        self.b
    }
}

impl Force for Spring {
    fn turn_on(&mut self) {
        self.on = true;
    }

    fn turn_off(&mut self) {
        self.on = false;
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn apply(&self, particles: &mut [Particle]) {
        // No-op when off or when both endpoints are pinned
        if !self.on {
            return;
        }
        let a_free = particles[self.a].is_free();
        let b_free = particles[self.b].is_free();
        if !a_free && !b_free {
            return;
        }

        // Displacement from b to a; zero direction at exact coincidence
        // to avoid dividing by zero
        let mut a2b = particles[self.a].position - particles[self.b].position;
        let length = a2b.norm();
        if length == 0.0 {
            a2b = Vec3::zeros();
        } else {
            a2b /= length;
        }

        let spring_force = -(length - self.rest_length) * self.spring_constant;

        // Damping opposes the relative velocity along the spring axis
        let v_a2b = particles[self.a].velocity - particles[self.b].velocity;
        let damping_force = -self.damping * a2b.dot(&v_a2b);

        let r = spring_force + damping_force;
        let f = a2b * r;

        // Equal and opposite, skipping pinned endpoints
        if a_free {
            particles[self.a].force += f;
        }
        if b_free {
            particles[self.b].force -= f;
        }
    }
}

/// Signed inverse-square radial force between two particles.
///
/// Positive strength pulls the endpoints together, negative pushes them
/// apart. The squared separation is clamped below by `min_distance²` to
/// bound the force near coincidence.
#[derive(Debug)]
pub struct Attraction {
    a: usize, // endpoint handle
    b: usize, // endpoint handle
    strength: f64, // k, any sign
    min_distance: f64, // positive; squared field kept in sync
    min_distance_squared: f64,
    on: bool,
    id: u64, // stable identity, assigned by the system
}

impl Attraction {
    pub(crate) fn new(a: usize, b: usize, strength: f64, min_distance: f64, id: u64) -> Self {
        debug_assert!(min_distance > 0.0, "attraction minimum distance must be positive");
        Self {
            a,
            b,
            strength,
            min_distance,
            min_distance_squared: min_distance * min_distance,
            on: true,
            id,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn minimum_distance(&self) -> f64 {
        self.min_distance
    }

    pub fn set_minimum_distance(&mut self, d: f64) {
        self.min_distance = d;
        self.min_distance_squared = d * d;
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn set_strength(&mut self, k: f64) {
        self.strength = k;
    }

    pub fn set_a(&mut self, p: usize) {
        self.a = p;
    }

    pub fn set_b(&mut self, p: usize) {
        self.b = p;
    }

    pub fn one_end(&self) -> usize {
        self.a
    }

    pub fn the_other_end(&self) -> usize {
        self.b
    }
}

impl Force for Attraction {
    fn turn_on(&mut self) {
        self.on = true;
    }

    fn turn_off(&mut self) {
        self.on = false;
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn apply(&self, particles: &mut [Particle]) {
        // No-op when off or when both endpoints are pinned
        if !self.on {
            return;
        }
        let a_free = particles[self.a].is_free();
        let b_free = particles[self.b].is_free();
        if !a_free && !b_free {
            return;
        }

        let a2b = particles[self.a].position - particles[self.b].position;

        // Clamp the squared separation to bound the force near coincidence
        let mut d2 = a2b.norm_squared();
        if d2 < self.min_distance_squared {
            d2 = self.min_distance_squared;
        }

        // Inverse-square law scaled by both masses
        let magnitude =
            self.strength * particles[self.a].mass * particles[self.b].mass / d2;

        // Normalize by the clamped separation; at exact coincidence a2b is
        // the zero vector and the contribution vanishes
        let f = a2b / d2.sqrt() * magnitude;

        // Positive strength pulls a toward b and b toward a
        if a_free {
            particles[self.a].force -= f;
        }
        if b_free {
            particles[self.b].force += f;
        }
    }
}

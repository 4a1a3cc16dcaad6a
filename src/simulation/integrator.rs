//! Fixed-step time integrators for the particle system
//!
//! Provides the two interchangeable strategies: a modified (semi-implicit)
//! Euler step with one force evaluation, and a classical 4th-order
//! Runge-Kutta step with four staged evaluations. Both advance every free
//! particle's position and velocity and every particle's age; fixed
//! particles are excluded from the update but still participate in force
//! evaluation.

use crate::simulation::states::Vec3;
use crate::simulation::system::ParticleSystem;

/// Advance the system by one step using modified Euler
/// One force evaluation per step; positions integrate the current velocity
/// and acceleration kinematically, velocities integrate the acceleration
pub fn modified_euler_step(sys: &mut ParticleSystem, dt: f64) {
    if sys.particles.is_empty() {
        return;
    }

    sys.clear_forces();
    sys.apply_forces();

    let half_dt2 = 0.5 * dt * dt; // dt^2/2 for the position term

    for p in sys.particles.iter_mut() {
        // Age advances for every particle, pinned or not
        p.age += dt;

        if p.fixed {
            continue;
        }

        // a = F / m
        let a = p.force / p.mass;

        // x_n+1 = x_n + v_n dt + a dt^2 / 2, using the current velocity
        p.position += p.velocity * dt + a * half_dt2;

        // v_n+1 = v_n + a dt
        p.velocity += a * dt;
    }
}

/// Advance the system by one step using classical 4th-order Runge-Kutta
///
/// Four force evaluations per step. Each stage repositions every free
/// particle from its snapshot along the previous stage's velocity and
/// force, re-evaluates forces across the whole graph, and records the
/// resulting per-particle force and velocity. The final state is the
/// standard 1-2-2-1 weighted combination.
pub fn runge_kutta_step(sys: &mut ParticleSystem, dt: f64) {
    let n = sys.particles.len();
    if n == 0 {
        return;
    }

    // Snapshot and stage buffers, one slot per particle
    let mut original_positions = vec![Vec3::zeros(); n];
    let mut original_velocities = vec![Vec3::zeros(); n];
    let mut k1_forces = vec![Vec3::zeros(); n];
    let mut k1_velocities = vec![Vec3::zeros(); n];
    let mut k2_forces = vec![Vec3::zeros(); n];
    let mut k2_velocities = vec![Vec3::zeros(); n];
    let mut k3_forces = vec![Vec3::zeros(); n];
    let mut k3_velocities = vec![Vec3::zeros(); n];
    let mut k4_forces = vec![Vec3::zeros(); n];
    let mut k4_velocities = vec![Vec3::zeros(); n];

    // k1: forces at the original state
    for (i, p) in sys.particles.iter().enumerate() {
        if p.is_free() {
            original_positions[i] = p.position;
            original_velocities[i] = p.velocity;
        }
    }
    sys.clear_forces();
    sys.apply_forces();
    for (i, p) in sys.particles.iter().enumerate() {
        if p.is_free() {
            k1_forces[i] = p.force;
            k1_velocities[i] = p.velocity;
        }
    }

    // k2: half step along k1
    for (i, p) in sys.particles.iter_mut().enumerate() {
        if p.fixed {
            continue;
        }
        p.position = original_positions[i] + k1_velocities[i] * (0.5 * dt);
        p.velocity = original_velocities[i] + k1_forces[i] * (0.5 * dt / p.mass);
    }
    sys.clear_forces();
    sys.apply_forces();
    for (i, p) in sys.particles.iter().enumerate() {
        if p.is_free() {
            k2_forces[i] = p.force;
            k2_velocities[i] = p.velocity;
        }
    }

    // k3: half step along k2
    for (i, p) in sys.particles.iter_mut().enumerate() {
        if p.fixed {
            continue;
        }
        p.position = original_positions[i] + k2_velocities[i] * (0.5 * dt);
        p.velocity = original_velocities[i] + k2_forces[i] * (0.5 * dt / p.mass);
    }
    sys.clear_forces();
    sys.apply_forces();
    for (i, p) in sys.particles.iter().enumerate() {
        if p.is_free() {
            k3_forces[i] = p.force;
            k3_velocities[i] = p.velocity;
        }
    }

    // k4: full step along k3
    for (i, p) in sys.particles.iter_mut().enumerate() {
        if p.fixed {
            continue;
        }
        p.position = original_positions[i] + k3_velocities[i] * dt;
        p.velocity = original_velocities[i] + k3_forces[i] * (dt / p.mass);
    }
    sys.clear_forces();
    sys.apply_forces();
    for (i, p) in sys.particles.iter().enumerate() {
        if p.is_free() {
            k4_forces[i] = p.force;
            k4_velocities[i] = p.velocity;
        }
    }

    // Weighted combination:
    // x_n+1 = x_n + dt/6 (k1v + 2 k2v + 2 k3v + k4v)
    // v_n+1 = v_n + dt/6 (k1f + 2 k2f + 2 k3f + k4f) / m
    let sixth_dt = dt / 6.0;
    for (i, p) in sys.particles.iter_mut().enumerate() {
        // Age advances for every particle, pinned or not
        p.age += dt;

        if p.fixed {
            continue;
        }

        p.position = original_positions[i]
            + (k1_velocities[i]
                + k2_velocities[i] * 2.0
                + k3_velocities[i] * 2.0
                + k4_velocities[i])
                * sixth_dt;

        p.velocity = original_velocities[i]
            + (k1_forces[i] + k2_forces[i] * 2.0 + k3_forces[i] * 2.0 + k4_forces[i])
                * (sixth_dt / p.mass);
    }
}

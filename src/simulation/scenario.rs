//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - the particle system with its graph built at t = 0 (`ParticleSystem`)
//!
//! Spring and attraction endpoint indices are validated against the
//! particle count before the graph is built.

use crate::configuration::config::ScenarioConfig;
use crate::error::PhysicsError;
use crate::simulation::params::Parameters;
use crate::simulation::states::Vec3;
use crate::simulation::system::ParticleSystem;

/// A fully-initialized simulation scenario
///
/// This is the runtime bundle constructed from a [`ScenarioConfig`]: the
/// run parameters and the particle system holding the configured graph.
/// The host (CLI runner, render loop) drives it by calling `system.tick`
/// with `parameters.h0` until `parameters.t_end`.
#[derive(Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: ParticleSystem,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, PhysicsError> {
        let e_cfg = cfg.engine;
        let gravity = Vec3::new(e_cfg.gravity[0], e_cfg.gravity[1], e_cfg.gravity[2]);

        let mut system = ParticleSystem::new(gravity, e_cfg.drag);
        system.set_integrator(e_cfg.integrator);

        // Particles: map `ParticleConfig` -> runtime particles via the
        // system factories
        for pc in &cfg.particles {
            let position = Vec3::new(pc.x[0], pc.x[1], pc.x[2]);
            let i = system.make_particle(pc.m.unwrap_or(1.0), position);

            if let Some(v) = &pc.v {
                system
                    .get_particle_mut(i)?
                    .set_velocity(Vec3::new(v[0], v[1], v[2]));
            }
            if pc.fixed.unwrap_or(false) {
                system.get_particle_mut(i)?.make_fixed();
            }
        }

        // Connectors: endpoint indices must land inside the arena built above
        let n = system.number_of_particles();

        for sc in cfg.springs.unwrap_or_default() {
            check_endpoint(sc.a, n)?;
            check_endpoint(sc.b, n)?;
            system.make_spring(sc.a, sc.b, sc.ks, sc.damping, sc.rest_length);
        }

        for ac in cfg.attractions.unwrap_or_default() {
            check_endpoint(ac.a, n)?;
            check_endpoint(ac.b, n)?;
            system.make_attraction(ac.a, ac.b, ac.strength, ac.min_distance);
        }

        let parameters = Parameters {
            t_end: cfg.parameters.t_end,
            h0: cfg.parameters.h0,
        };

        log::info!(
            "built scenario: {} particles, {} springs, {} attractions, h0 = {}, t_end = {}",
            system.number_of_particles(),
            system.number_of_springs(),
            system.number_of_attractions(),
            parameters.h0,
            parameters.t_end,
        );

        Ok(Self { parameters, system })
    }
}

fn check_endpoint(i: usize, count: usize) -> Result<(), PhysicsError> {
    if i >= count {
        return Err(PhysicsError::IndexOutOfRange {
            what: "particle",
            index: i,
            count,
        });
    }
    Ok(())
}

pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{distance, Particle, Vec3};
pub use simulation::forces::{Attraction, Force, Spring};
pub use simulation::system::ParticleSystem;
pub use simulation::integrator::{modified_euler_step, runge_kutta_step};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    AttractionConfig, EngineConfig, IntegratorConfig, ParametersConfig, ParticleConfig,
    ScenarioConfig, SpringConfig,
};

pub use error::PhysicsError;

pub use benchmark::benchmark::{bench_force_pass, bench_tick_curve};

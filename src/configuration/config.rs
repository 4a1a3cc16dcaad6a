//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – global engine options (integrator, gravity, drag)
//! - [`ParametersConfig`] – step size and run length
//! - [`ParticleConfig`]   – initial state for each particle
//! - [`SpringConfig`]     – a damped spring between two particle indices
//! - [`AttractionConfig`] – a radial attraction between two particle indices
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "runge_kutta"   # or "modified_euler"
//!   gravity: [ 0.0, -9.8, 0.0 ]
//!   drag: 0.001
//!
//! parameters:
//!   t_end: 10.0                 # total simulated time
//!   h0: 0.01                    # fixed step size
//!
//! particles:
//!   - x: [ 0.0, 0.0, 0.0 ]
//!     fixed: true               # pinned anchor
//!   - x: [ 1.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!     m: 1.0
//!
//! springs:
//!   - a: 0
//!     b: 1
//!     ks: 2.0
//!     damping: 0.1
//!     rest_length: 1.0
//!
//! attractions:
//!   - a: 0
//!     b: 1
//!     strength: -5.0            # negative repels
//!     min_distance: 0.1
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation via `Scenario::build_scenario`.

use serde::Deserialize;

/// Which integration strategy the engine advances with
/// `integrator: "runge_kutta"` or `integrator: "modified_euler"`
///
/// Defined once at module level; selection in the engine dispatches
/// exclusively per variant.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "runge_kutta")] // Classical 4th-order Runge-Kutta, four force evaluations per step
    RungeKutta,

    #[serde(rename = "modified_euler")] // Semi-implicit Euler, one force evaluation per step
    ModifiedEuler,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator used for advancing the system
    pub gravity: Vec<f64>, // global gravity vector, three components
    pub drag: f64, // velocity-proportional drag coefficient
}

/// Step size and run length for a headless scenario run
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // total simulated time
    pub h0: f64,    // fixed step size
}

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug)]
pub struct ParticleConfig {
    pub x: Vec<f64>,        // initial position, three components
    pub v: Option<Vec<f64>>, // initial velocity, defaults to zero
    pub m: Option<f64>,     // mass, defaults to 1.0
    pub fixed: Option<bool>, // pinned, defaults to false
}

/// A damped spring between two particle indices
#[derive(Deserialize, Debug)]
pub struct SpringConfig {
    pub a: usize, // first endpoint, index into `particles`
    pub b: usize, // second endpoint, index into `particles`
    pub ks: f64, // spring constant
    pub damping: f64, // damping coefficient
    pub rest_length: f64, // rest length
}

/// A signed radial attraction between two particle indices
#[derive(Deserialize, Debug)]
pub struct AttractionConfig {
    pub a: usize, // first endpoint, index into `particles`
    pub b: usize, // second endpoint, index into `particles`
    pub strength: f64, // positive attracts, negative repels
    pub min_distance: f64, // clamp on the separation used in the force law
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration
    pub parameters: ParametersConfig, // run parameters
    pub particles: Vec<ParticleConfig>, // initial particle states
    pub springs: Option<Vec<SpringConfig>>, // springs, defaults to none
    pub attractions: Option<Vec<AttractionConfig>>, // attractions, defaults to none
}

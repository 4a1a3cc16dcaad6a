//! Numerical parameters for headless scenario runs
//!
//! `Parameters` holds the fixed step size and the total simulated time a
//! scenario runs for. The engine itself takes `dt` per tick; these settings
//! only drive the scenario runner.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // total simulated time
    pub h0: f64, // fixed step size per tick
}

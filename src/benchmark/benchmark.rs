use std::time::Instant;
use crate::configuration::config::IntegratorConfig;
use crate::simulation::states::Vec3;
use crate::simulation::system::ParticleSystem;

/// Helper to build a chain of `n` particles linked by springs, first one
/// pinned. Deterministic positions, no rand needed
fn make_chain(n: usize) -> ParticleSystem {
    let mut sys = ParticleSystem::new(Vec3::new(0.0, -9.8, 0.0), 0.001);

    for i in 0..n {
        let i_f = i as f64;
        let x = Vec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );
        let h = sys.make_particle(1.0, x);
        if i == 0 {
            // pinned anchor at the head of the chain
            sys.get_particle_mut(h).expect("fresh handle").make_fixed();
        }
    }

    for i in 1..n {
        sys.make_spring(i - 1, i, 2.0, 0.1, 1.0);
    }

    sys
}

/// Time a single force-evaluation pass for a range of chain sizes
pub fn bench_force_pass() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let mut sys = make_chain(n);

        // Warm up
        sys.clear_forces();
        sys.apply_forces();

        sys.clear_forces();
        let t0 = Instant::now();
        sys.apply_forces();
        let dt_pass = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, force pass = {:8.6} s", dt_pass);
    }
}

/// Benchmark per-step cost of both integrators for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_tick_curve() {
    println!("N,euler_ms,rk4_ms");

    let h0 = 0.01;

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        // Euler
        let mut sys_euler = make_chain(n);
        sys_euler.set_integrator(IntegratorConfig::ModifiedEuler);

        // Warm-up one step
        sys_euler.tick(h0);

        let t0 = Instant::now();
        for _ in 0..steps {
            sys_euler.tick(h0);
        }
        let ms_euler = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        // Runge-Kutta
        let mut sys_rk4 = make_chain(n);
        sys_rk4.set_integrator(IntegratorConfig::RungeKutta);

        // Warm-up one step
        sys_rk4.tick(h0);

        let t1 = Instant::now();
        for _ in 0..steps {
            sys_rk4.tick(h0);
        }
        let ms_rk4 = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_euler, ms_rk4);
    }
}

use psim::{Scenario, ScenarioConfig};
use psim::{bench_force_pass, bench_tick_curve};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "pendulum.yaml")]
    file_name: String,

    /// Run the force-pass and integrator benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_force_pass();
        bench_tick_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    let h0 = scenario.parameters.h0;
    let steps = (scenario.parameters.t_end / h0).ceil() as u64;

    for _ in 0..steps {
        scenario.system.tick(h0);
    }

    for (i, p) in scenario.system.particles().iter().enumerate() {
        println!(
            "particle {i:4}: x = [{:12.6}, {:12.6}, {:12.6}], v = [{:12.6}, {:12.6}, {:12.6}], age = {:.3}",
            p.position.x, p.position.y, p.position.z,
            p.velocity.x, p.velocity.y, p.velocity.z,
            p.age,
        );
    }

    Ok(())
}

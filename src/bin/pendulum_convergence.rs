// src/bin/pendulum_convergence.rs
//
// Energy drift of the undamped pendulum versus step size, RK4 and Euler,
// released from 179 degrees (near the unstable top, the hardest case).
//
// Run:
//   cargo run --release --bin pendulum_convergence
//
// Output:
//   out/pendulum_convergence/
//     ├── config.json
//     ├── drift_rk4.csv
//     └── drift_euler.csv

use std::fs::{create_dir_all, File};
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

use physlab::config::{RunConfig, RunInfo};
use physlab::convergence::energy_drift_sweep;
use physlab::logging;
use physlab::params::PendulumParams;
use physlab::pendulum::PendulumState;
use physlab::rk4::Integrator;
use physlab::table::write_drift;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let release_deg = 179.0_f64;
    let duration = 10.0_f64;
    let step_sizes = [4e-3, 2e-3, 1e-3, 5e-4, 2.5e-4, 1.25e-4];

    let params = PendulumParams::default();
    let initial = PendulumState::from_degrees(release_deg);

    let out_dir = Path::new("out").join("pendulum_convergence");
    create_dir_all(&out_dir)?;

    RunConfig {
        parameters: params,
        numerics: None,
        inputs: Vec::new(),
        run: RunInfo::for_binary("pendulum_convergence"),
    }
    .write_to_dir(&out_dir)?;

    for integrator in [Integrator::Rk4, Integrator::Euler] {
        let points = energy_drift_sweep(&params, initial, &step_sizes, duration, integrator)?;
        let name = format!("drift_{}.csv", integrator.as_str());
        let mut w = BufWriter::new(File::create(out_dir.join(&name))?);
        write_drift(&mut w, &points)?;
        info!(integrator = integrator.as_str(), file = %name, "sweep written");
    }

    info!("Wrote outputs to {:?}", out_dir);
    Ok(())
}

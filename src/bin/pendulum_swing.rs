// src/bin/pendulum_swing.rs
//
// Lab pendulum released from rest at 30 degrees, RK4 at 100 frames/s with
// 10 sub-steps per frame. Runs once undamped and once with light damping.
//
// Run:
//   cargo run --release --bin pendulum_swing
//
// Output:
//   out/pendulum_swing/
//     ├── config.json
//     ├── trajectory.csv
//     └── trajectory_damped.csv

use std::fs::{create_dir_all, File};
use std::io::BufWriter;
use std::ops::ControlFlow;
use std::path::Path;

use tracing::info;

use physlab::config::{NumericsConfig, RunConfig, RunInfo};
use physlab::diagnostics::{estimate_period, max_energy_drift, small_angle_period};
use physlab::logging;
use physlab::params::PendulumParams;
use physlab::pendulum::{energy, PendulumState};
use physlab::table::write_trajectory;
use physlab::trajectory::{simulate, simulate_with, TrajectoryConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    // --- run parameters ---
    let release_deg = 30.0_f64;
    let damping = 0.5_f64; // 1/s, damped run only
    let duration = 20.0_f64; // s
    // ----------------------

    let params = PendulumParams::default();
    let initial = PendulumState::from_degrees(release_deg);
    let traj = TrajectoryConfig {
        duration,
        ..TrajectoryConfig::default()
    };

    let out_dir = Path::new("out").join("pendulum_swing");
    create_dir_all(&out_dir)?;

    RunConfig {
        parameters: params,
        numerics: Some(NumericsConfig::from(&traj)),
        inputs: Vec::new(),
        run: RunInfo::for_binary("pendulum_swing"),
    }
    .write_to_dir(&out_dir)?;

    // Undamped: log once per simulated second.
    let steps_per_second = (1.0 / traj.dt).round() as usize;
    let mut seen = 0usize;
    let samples = simulate_with(&params, initial, &traj, |s| {
        seen += 1;
        if seen % steps_per_second == 0 {
            info!(t = s.t, theta = s.theta, "swing");
        }
        ControlFlow::Continue(())
    })?;

    let mut w = BufWriter::new(File::create(out_dir.join("trajectory.csv"))?);
    write_trajectory(&mut w, &samples, &params)?;

    let e0 = energy(initial, &params);
    info!(
        samples = samples.len(),
        max_energy_drift = max_energy_drift(&samples, &params, e0),
        period = ?estimate_period(&samples),
        small_angle_period = small_angle_period(&params),
        "undamped run finished"
    );

    // Damped.
    let damped_params = params.with_damping(damping);
    let damped = simulate(&damped_params, initial, &traj)?;
    let mut w = BufWriter::new(File::create(out_dir.join("trajectory_damped.csv"))?);
    write_trajectory(&mut w, &damped, &damped_params)?;

    if let Some(last) = damped.last() {
        info!(t = last.t, theta = last.theta, omega = last.omega, "damped run finished");
    }

    info!("Wrote outputs to {:?}", out_dir);
    Ok(())
}

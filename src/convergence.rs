// src/convergence.rs
//
// Step-size convergence of the pendulum integrators. Each step size is an
// independent run, so the sweep is spread over the rayon pool.

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::diagnostics::max_energy_drift;
use crate::error::PhysResult;
use crate::params::PendulumParams;
use crate::pendulum::{energy, PendulumState};
use crate::rk4::Integrator;
use crate::trajectory::{simulate, TrajectoryConfig};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DriftPoint {
    pub dt: f64,
    pub max_drift: f64,
}

/// Max energy drift over `duration` for each step size, in input order.
pub fn energy_drift_sweep(
    params: &PendulumParams,
    initial: PendulumState,
    step_sizes: &[f64],
    duration: f64,
    integrator: Integrator,
) -> PhysResult<Vec<DriftPoint>> {
    let e0 = energy(initial, params);

    let points = step_sizes
        .par_iter()
        .map(|&dt| -> PhysResult<DriftPoint> {
            let cfg = TrajectoryConfig {
                dt,
                steps_per_frame: 1,
                duration,
                integrator,
            };
            let samples = simulate(params, initial, &cfg)?;
            Ok(DriftPoint {
                dt,
                max_drift: max_energy_drift(&samples, params, e0),
            })
        })
        .collect::<PhysResult<Vec<_>>>()?;

    for p in &points {
        info!(dt = p.dt, max_drift = p.max_drift, "energy drift");
    }
    Ok(points)
}

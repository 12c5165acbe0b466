// src/diagnostics.rs

use std::f64::consts::PI;

use crate::params::PendulumParams;
use crate::pendulum::energy;
use crate::trajectory::Sample;

/// Small-angle period 2 pi sqrt(l/g).
pub fn small_angle_period(params: &PendulumParams) -> f64 {
    2.0 * PI * (params.length / params.g).sqrt()
}

/// Largest |E(t) - e0| over the trajectory.
pub fn max_energy_drift(samples: &[Sample], params: &PendulumParams, e0: f64) -> f64 {
    samples
        .iter()
        .map(|s| (energy(s.state(), params) - e0).abs())
        .fold(0.0, f64::max)
}

/// Times at which theta crosses zero going upward, linearly interpolated
/// between the two bracketing samples.
pub fn upward_zero_crossings(samples: &[Sample]) -> Vec<f64> {
    samples
        .windows(2)
        .filter(|w| w[0].theta < 0.0 && w[1].theta >= 0.0)
        .map(|w| {
            let (a, b) = (w[0], w[1]);
            let frac = -a.theta / (b.theta - a.theta);
            a.t + frac * (b.t - a.t)
        })
        .collect()
}

/// Mean spacing between consecutive upward zero crossings.
///
/// Returns `None` if fewer than two crossings were recorded.
pub fn estimate_period(samples: &[Sample]) -> Option<f64> {
    let crossings = upward_zero_crossings(samples);
    if crossings.len() < 2 {
        return None;
    }
    let span = crossings[crossings.len() - 1] - crossings[0];
    Some(span / (crossings.len() - 1) as f64)
}

// src/trajectory.rs
//
// Fixed-step pendulum trajectory driver.
//
// The driver only integrates and records. Anything that wants to watch the
// run (a renderer, a progress printer, an early-stop condition) hooks in via
// the per-sample observer of `simulate_with`.

use std::ops::ControlFlow;

use serde::Serialize;
use tracing::debug;

use crate::error::{PhysError, PhysResult};
use crate::params::PendulumParams;
use crate::pendulum::{step_euler, step_rk4, PendulumState};
use crate::rk4::Integrator;

/// Output frame rate of the lab animation (frames/s).
pub const DEFAULT_FRAME_RATE: f64 = 100.0;

/// Integration sub-steps per output frame.
pub const DEFAULT_STEPS_PER_FRAME: usize = 10;

/// Largest number of recorded steps a single run may take.
pub const MAX_STEPS: usize = 50_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryConfig {
    pub dt: f64,
    pub steps_per_frame: usize,
    pub duration: f64,
    pub integrator: Integrator,
}

impl TrajectoryConfig {
    /// RK4 with dt = 1 / (frame_rate * steps_per_frame).
    pub fn new(frame_rate: f64, steps_per_frame: usize, duration: f64) -> Self {
        Self {
            dt: 1.0 / (frame_rate * steps_per_frame as f64),
            steps_per_frame,
            duration,
            integrator: Integrator::Rk4,
        }
    }

    pub fn with_integrator(mut self, integrator: Integrator) -> Self {
        self.integrator = integrator;
        self
    }

    pub fn validate(&self) -> PhysResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(PhysError::InvalidConfig(format!(
                "dt must be positive and finite, got {}",
                self.dt
            )));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(PhysError::InvalidConfig(format!(
                "duration must be non-negative and finite, got {}",
                self.duration
            )));
        }
        if self.steps_per_frame == 0 {
            return Err(PhysError::InvalidConfig(
                "steps_per_frame must be at least 1".to_string(),
            ));
        }
        let steps = (self.duration / self.dt).round();
        if steps > MAX_STEPS as f64 {
            return Err(PhysError::InvalidConfig(format!(
                "duration / dt = {steps:e} steps, limit is {MAX_STEPS}"
            )));
        }
        Ok(())
    }

    /// Number of integration steps covering `duration`.
    pub fn n_steps(&self) -> usize {
        (self.duration / self.dt).round() as usize
    }

    /// Number of output frames (the last one may be partial).
    pub fn n_frames(&self) -> usize {
        self.n_steps().div_ceil(self.steps_per_frame)
    }
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_RATE, DEFAULT_STEPS_PER_FRAME, 100.0)
    }
}

/// One recorded sub-step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub t: f64,
    pub theta: f64,
    pub omega: f64,
}

impl Sample {
    pub fn state(&self) -> PendulumState {
        PendulumState::new(self.theta, self.omega)
    }
}

/// Run the full trajectory and return every sub-step sample.
pub fn simulate(
    params: &PendulumParams,
    initial: PendulumState,
    cfg: &TrajectoryConfig,
) -> PhysResult<Vec<Sample>> {
    simulate_with(params, initial, cfg, |_| ControlFlow::Continue(()))
}

/// Run the trajectory, calling `observer` once per recorded sample.
///
/// Returning `ControlFlow::Break` stops the run; the sample that triggered the
/// stop is still part of the returned trajectory.
pub fn simulate_with<F>(
    params: &PendulumParams,
    initial: PendulumState,
    cfg: &TrajectoryConfig,
    mut observer: F,
) -> PhysResult<Vec<Sample>>
where
    F: FnMut(&Sample) -> ControlFlow<()>,
{
    cfg.validate()?;

    let n_steps = cfg.n_steps();
    let step: fn(PendulumState, f64, &PendulumParams) -> PendulumState = match cfg.integrator {
        Integrator::Euler => step_euler,
        Integrator::Rk4 => step_rk4,
    };

    debug!(
        n_steps,
        n_frames = cfg.n_frames(),
        dt = cfg.dt,
        integrator = cfg.integrator.as_str(),
        "starting pendulum run"
    );

    let mut samples = Vec::with_capacity(n_steps);
    let mut state = initial;

    'frames: for frame in 0..cfg.n_frames() {
        let first = frame * cfg.steps_per_frame;
        let last = (first + cfg.steps_per_frame).min(n_steps);
        for k in first..last {
            state = step(state, cfg.dt, params);
            let sample = Sample {
                t: (k + 1) as f64 * cfg.dt,
                theta: state.theta,
                omega: state.omega,
            };
            samples.push(sample);
            if observer(&sample).is_break() {
                debug!(recorded = samples.len(), "run stopped by observer");
                break 'frames;
            }
        }
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_lab_timing() {
        let cfg = TrajectoryConfig::default();
        assert!((cfg.dt - 1e-3).abs() < 1e-18);
        assert_eq!(cfg.n_steps(), 100_000);
        assert_eq!(cfg.n_frames(), 10_000);
    }

    #[test]
    fn partial_last_frame_is_counted() {
        let cfg = TrajectoryConfig {
            dt: 0.1,
            steps_per_frame: 4,
            duration: 1.0,
            integrator: Integrator::Rk4,
        };
        assert_eq!(cfg.n_steps(), 10);
        assert_eq!(cfg.n_frames(), 3);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let good = TrajectoryConfig::default();
        assert!(good.validate().is_ok());

        let bad_dt = TrajectoryConfig { dt: 0.0, ..good };
        assert!(matches!(bad_dt.validate(), Err(PhysError::InvalidConfig(_))));

        let bad_dur = TrajectoryConfig {
            duration: f64::NAN,
            ..good
        };
        assert!(bad_dur.validate().is_err());

        let bad_frames = TrajectoryConfig {
            steps_per_frame: 0,
            ..good
        };
        assert!(bad_frames.validate().is_err());
    }

    #[test]
    fn step_count_is_capped() {
        let tiny_dt = TrajectoryConfig {
            dt: 1e-300,
            steps_per_frame: 10,
            duration: 1.0,
            integrator: Integrator::Rk4,
        };
        assert!(matches!(tiny_dt.validate(), Err(PhysError::InvalidConfig(_))));
        let result = simulate(
            &PendulumParams::default(),
            PendulumState::from_degrees(10.0),
            &tiny_dt,
        );
        assert!(matches!(result, Err(PhysError::InvalidConfig(_))));

        let at_cap = TrajectoryConfig {
            dt: 1.0,
            duration: MAX_STEPS as f64,
            ..tiny_dt
        };
        assert!(at_cap.validate().is_ok());
        let over_cap = TrajectoryConfig {
            duration: (MAX_STEPS + 1) as f64,
            ..at_cap
        };
        assert!(over_cap.validate().is_err());
    }

    #[test]
    fn euler_config_takes_euler_steps() {
        let params = PendulumParams::default();
        let initial = PendulumState::from_degrees(10.0);
        let cfg = TrajectoryConfig {
            duration: 2e-3,
            ..TrajectoryConfig::default()
        }
        .with_integrator(Integrator::Euler);

        let samples = simulate(&params, initial, &cfg).unwrap();
        assert_eq!(samples.len(), 2);
        let expected = step_euler(step_euler(initial, cfg.dt, &params), cfg.dt, &params);
        assert_eq!(samples[1].state(), expected);
    }

    #[test]
    fn zero_duration_records_nothing() {
        let cfg = TrajectoryConfig {
            duration: 0.0,
            ..TrajectoryConfig::default()
        };
        let samples = simulate(
            &PendulumParams::default(),
            PendulumState::from_degrees(10.0),
            &cfg,
        )
        .unwrap();
        assert!(samples.is_empty());
    }
}

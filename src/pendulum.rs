// src/pendulum.rs

use serde::Serialize;

use crate::params::PendulumParams;
use crate::rk4::{euler_step, rk4_step};

/// Instantaneous pendulum state: angle from the downward vertical and its rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PendulumState {
    pub theta: f64, // rad
    pub omega: f64, // rad/s
}

impl PendulumState {
    pub fn new(theta: f64, omega: f64) -> Self {
        Self { theta, omega }
    }

    /// At rest, released from `deg` degrees.
    pub fn from_degrees(deg: f64) -> Self {
        Self::new(deg.to_radians(), 0.0)
    }

    #[inline]
    fn to_array(self) -> [f64; 2] {
        [self.theta, self.omega]
    }

    #[inline]
    fn from_array(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

/// Time derivative (theta', omega') = (omega, -(g/l) sin(theta) - c omega).
#[inline]
pub fn derivative(state: PendulumState, params: &PendulumParams) -> PendulumState {
    PendulumState {
        theta: state.omega,
        omega: -params.omega0_sq() * state.theta.sin() - params.damping * state.omega,
    }
}

#[inline]
fn rhs(y: &[f64; 2], params: &PendulumParams) -> [f64; 2] {
    derivative(PendulumState::from_array(*y), params).to_array()
}

/// One RK4 step of size `h`.
pub fn step_rk4(state: PendulumState, h: f64, params: &PendulumParams) -> PendulumState {
    PendulumState::from_array(rk4_step(&state.to_array(), h, |y| rhs(y, params)))
}

/// One explicit Euler step of size `h`.
pub fn step_euler(state: PendulumState, h: f64, params: &PendulumParams) -> PendulumState {
    PendulumState::from_array(euler_step(&state.to_array(), h, |y| rhs(y, params)))
}

/// Mechanical energy per unit m l^2: omega^2 / 2 + (g/l)(1 - cos theta).
pub fn energy(state: PendulumState, params: &PendulumParams) -> f64 {
    0.5 * state.omega * state.omega + params.omega0_sq() * (1.0 - state.theta.cos())
}

/// Bob position with the pivot at the origin and y pointing up.
pub fn bob_position(state: PendulumState, length: f64) -> (f64, f64) {
    (length * state.theta.sin(), -length * state.theta.cos())
}

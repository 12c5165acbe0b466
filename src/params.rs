// src/params.rs

use serde::Serialize;

/// Standard gravitational acceleration (m/s^2).
pub const G_STANDARD: f64 = 9.81;

/// Arm length used by the lab pendulum (m).
pub const LAB_ARM_LENGTH: f64 = 0.1;

/// Parameters for the pendulum equation of motion.
///
/// theta'' = -(g/l) sin(theta) - c theta'
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PendulumParams {
    pub g: f64,       // gravitational acceleration (m/s^2)
    pub length: f64,  // arm length (m)
    pub damping: f64, // linear damping coefficient c (1/s), 0 = undamped
}

impl PendulumParams {
    /// Undamped pendulum.
    pub fn new(g: f64, length: f64) -> Self {
        Self {
            g,
            length,
            damping: 0.0,
        }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// g / l, the square of the small-angle angular frequency.
    #[inline]
    pub fn omega0_sq(&self) -> f64 {
        self.g / self.length
    }
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self::new(G_STANDARD, LAB_ARM_LENGTH)
    }
}

// src/projectile.rs
//
// Planar projectile launched from a height, with and without a linear drag
// force F = m g - alpha v.

use std::f64::consts::PI;

use serde::Serialize;
use tracing::debug;

use crate::error::{PhysError, PhysResult};

/// Flight ends once the ball drops below `radius + GROUND_CLEARANCE`. The first
/// point under that line is still recorded.
pub const GROUND_CLEARANCE: f64 = 0.12;

/// Hard cap on simulated flight time (s).
pub const MAX_FLIGHT_TIME: f64 = 100.0;

/// The ground check only applies once the ball is this far downrange (m).
const LAUNCH_ZONE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Launch {
    pub speed: f64,     // m/s
    pub angle_deg: f64, // above horizontal
    pub height: f64,    // m
}

impl Launch {
    pub fn velocity(&self) -> (f64, f64) {
        let a = self.angle_deg.to_radians();
        (self.speed * a.cos(), self.speed * a.sin())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectileParams {
    pub mass: f64,             // kg
    pub radius: f64,           // m
    pub air_density: f64,      // kg/m^3
    pub drag_coefficient: f64, // dimensionless
    pub gravity: f64,          // m/s^2, magnitude
    pub dt: f64,               // s
}

impl Default for ProjectileParams {
    /// Baseball in sea-level air.
    fn default() -> Self {
        Self {
            mass: 0.145,
            radius: 0.075,
            air_density: 1.225,
            drag_coefficient: 0.5,
            gravity: 9.8,
            dt: 0.005,
        }
    }
}

impl ProjectileParams {
    /// rho Cd A / 2 with A the ball's cross-section.
    pub fn linear_drag_alpha(&self) -> f64 {
        let area = PI * self.radius * self.radius;
        self.air_density * self.drag_coefficient * area / 2.0
    }

    pub fn validate(&self) -> PhysResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(PhysError::InvalidConfig(format!(
                "dt must be positive and finite, got {}",
                self.dt
            )));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(PhysError::InvalidConfig(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        Ok(())
    }

    fn ground_level(&self) -> f64 {
        self.radius + GROUND_CLEARANCE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathPoint {
    pub t: f64,
    pub x: f64,
    pub y: f64,
}

fn landed(p: &PathPoint, params: &ProjectileParams) -> bool {
    p.y < params.ground_level() && p.x > LAUNCH_ZONE
}

/// Closed-form drag-free path sampled every `dt` from t = 0 until landing.
/// The last point is the first one below the ground line.
pub fn path_no_drag(launch: &Launch, params: &ProjectileParams) -> PhysResult<Vec<PathPoint>> {
    params.validate()?;
    let (vx, vy) = launch.velocity();
    let mut path = Vec::new();

    for k in 0u64.. {
        let t = k as f64 * params.dt;
        if t >= MAX_FLIGHT_TIME {
            break;
        }
        let p = PathPoint {
            t,
            x: vx * t,
            y: launch.height + vy * t - 0.5 * params.gravity * t * t,
        };
        path.push(p);
        if landed(&p, params) {
            break;
        }
    }

    debug!(points = path.len(), "drag-free path");
    Ok(path)
}

/// Explicit Euler path under gravity and linear drag, starting one step after
/// launch and ending on the first point below the ground line.
pub fn path_linear_drag(
    launch: &Launch,
    params: &ProjectileParams,
) -> PhysResult<Vec<PathPoint>> {
    params.validate()?;
    let alpha = params.linear_drag_alpha();
    let (mut vx, mut vy) = launch.velocity();
    let mut p = PathPoint {
        t: 0.0,
        x: 0.0,
        y: launch.height,
    };
    let mut path = Vec::new();

    for k in 1u64.. {
        if p.t >= MAX_FLIGHT_TIME {
            break;
        }
        let fx = -alpha * vx;
        let fy = -params.mass * params.gravity - alpha * vy;
        vx += fx / params.mass * params.dt;
        vy += fy / params.mass * params.dt;

        let next = PathPoint {
            t: k as f64 * params.dt,
            x: p.x + vx * params.dt,
            y: p.y + vy * params.dt,
        };
        path.push(next);
        if landed(&next, params) {
            break;
        }
        p = next;
    }

    debug!(points = path.len(), alpha, "linear-drag path");
    Ok(path)
}

/// Downrange distance of the last recorded point.
pub fn range(path: &[PathPoint]) -> f64 {
    path.last().map_or(0.0, |p| p.x)
}

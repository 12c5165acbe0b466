// src/lib.rs

pub mod balloon;
pub mod config;
pub mod convergence;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod params;
mod parse;
pub mod pendulum;
pub mod projectile;
pub mod rk4;
pub mod series;
pub mod table;
pub mod trajectory;
pub mod weather;

pub use error::{PhysError, PhysResult};

// src/rk4.rs
//
// Fixed-step explicit integrators for autonomous ODE systems y' = f(y),
// with the state held in a small fixed-size array.

use serde::Serialize;

/// y + s * k, componentwise.
#[inline]
fn axpy<const N: usize>(y: &[f64; N], s: f64, k: &[f64; N]) -> [f64; N] {
    let mut out = [0.0; N];
    for i in 0..N {
        out[i] = y[i] + s * k[i];
    }
    out
}

/// Advance `y` by one classical 4th-order Runge–Kutta step of size `h`.
///
/// Slopes are taken at y, y + k1 h/2, y + k2 h/2, y + k3 h and combined as
/// y + h (k1 + 2 k2 + 2 k3 + k4) / 6. No step-size control.
pub fn rk4_step<const N: usize, F>(y: &[f64; N], h: f64, f: F) -> [f64; N]
where
    F: Fn(&[f64; N]) -> [f64; N],
{
    let k1 = f(y);
    let k2 = f(&axpy(y, 0.5 * h, &k1));
    let k3 = f(&axpy(y, 0.5 * h, &k2));
    let k4 = f(&axpy(y, h, &k3));

    let mut out = [0.0; N];
    for i in 0..N {
        out[i] = y[i] + h * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]) / 6.0;
    }
    out
}

/// Advance `y` by one explicit Euler step of size `h`.
pub fn euler_step<const N: usize, F>(y: &[f64; N], h: f64, f: F) -> [f64; N]
where
    F: Fn(&[f64; N]) -> [f64; N],
{
    axpy(y, h, &f(y))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Integrator {
    Euler,
    Rk4,
}

impl Integrator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Euler => "euler",
            Self::Rk4 => "rk4",
        }
    }
}

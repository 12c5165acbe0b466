// src/table.rs
//
// Plain CSV tables: one header row, numeric cells in `{:.16e}`.

use std::io::{self, Write};

use crate::convergence::DriftPoint;
use crate::params::PendulumParams;
use crate::pendulum::{bob_position, energy};
use crate::projectile::PathPoint;
use crate::series::Aligned;
use crate::trajectory::Sample;
use crate::weather::{MonthStats, YearExtremes};

/// t, theta, omega, bob x/y and energy for every sample.
pub fn write_trajectory<W: Write>(
    w: &mut W,
    samples: &[Sample],
    params: &PendulumParams,
) -> io::Result<()> {
    writeln!(w, "t,theta,omega,x,y,energy")?;
    for s in samples {
        let (x, y) = bob_position(s.state(), params.length);
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
            s.t,
            s.theta,
            s.omega,
            x,
            y,
            energy(s.state(), params),
        )?;
    }
    Ok(())
}

pub fn write_drift<W: Write>(w: &mut W, points: &[DriftPoint]) -> io::Result<()> {
    writeln!(w, "dt,max_drift")?;
    for p in points {
        writeln!(w, "{:.16e},{:.16e}", p.dt, p.max_drift)?;
    }
    Ok(())
}

/// Two paths side by side; missing cells are left empty when lengths differ.
pub fn write_paths<W: Write>(w: &mut W, no_drag: &[PathPoint], drag: &[PathPoint]) -> io::Result<()> {
    writeln!(w, "t,x_no_drag,y_no_drag,x_drag,y_drag")?;
    let n = no_drag.len().max(drag.len());
    for i in 0..n {
        let t = no_drag.get(i).or_else(|| drag.get(i)).map_or(0.0, |p| p.t);
        write!(w, "{:.16e}", t)?;
        for p in [no_drag.get(i), drag.get(i)] {
            match p {
                Some(p) => write!(w, ",{:.16e},{:.16e}", p.x, p.y)?,
                None => write!(w, ",,")?,
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Aligned flight rows. `phase` is `up` through the apex and `down` after it.
pub fn write_flight<W: Write>(w: &mut W, flight: &Aligned) -> io::Result<()> {
    writeln!(w, "t_hours,temperature_f,altitude_ft,phase")?;
    let apex = flight.apex_index().unwrap_or(0);
    for i in 0..flight.len() {
        let phase = if i <= apex { "up" } else { "down" };
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{}",
            flight.times[i], flight.dense_values[i], flight.values[i], phase
        )?;
    }
    Ok(())
}

pub fn write_monthly<W: Write>(w: &mut W, stats: &[MonthStats]) -> io::Result<()> {
    writeln!(w, "month,count,mean,std_dev")?;
    for s in stats {
        writeln!(w, "{},{},{:.16e},{:.16e}", s.month, s.count, s.mean, s.std_dev)?;
    }
    Ok(())
}

pub fn write_yearly<W: Write>(w: &mut W, years: &[YearExtremes]) -> io::Result<()> {
    writeln!(w, "year,min,max")?;
    for y in years {
        match y.max {
            Some(max) => writeln!(w, "{},{:.16e},{:.16e}", y.year, y.min, max)?,
            None => writeln!(w, "{},{:.16e},", y.year, y.min)?,
        }
    }
    Ok(())
}

// src/series.rs
//
// Irregularly sampled time series and alignment of a dense series onto the
// time axis of a sparse one.

use tracing::debug;

use crate::error::{PhysError, PhysResult};

/// A non-empty series with strictly increasing, finite sample times.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl TimeSeries {
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> PhysResult<Self> {
        if times.len() != values.len() {
            return Err(PhysError::Series(format!(
                "length mismatch: {} times, {} values",
                times.len(),
                values.len()
            )));
        }
        if times.is_empty() {
            return Err(PhysError::Series("series is empty".to_string()));
        }
        if let Some(i) = times.iter().position(|t| !t.is_finite()) {
            return Err(PhysError::Series(format!("non-finite time at index {i}")));
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(PhysError::Series(format!("non-finite value at index {i}")));
        }
        if let Some(i) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(PhysError::Series(format!(
                "times not strictly increasing at index {}: {} -> {}",
                i + 1,
                times[i],
                times[i + 1]
            )));
        }
        Ok(Self { times, values })
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> PhysResult<Self> {
        let (times, values) = pairs.iter().copied().unzip();
        Self::new(times, values)
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn min_time(&self) -> f64 {
        self.times[0]
    }

    pub fn max_time(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Piecewise-linear value at `t`.
    ///
    /// Outside [min_time, max_time] the nearest endpoint value is returned
    /// (no extrapolation). At a sample time the sample value is returned exactly.
    pub fn interpolate(&self, t: f64) -> f64 {
        let n = self.times.len();
        // first index with times[i] > t
        let hi = self.times.partition_point(|&x| x <= t);
        if hi == 0 {
            return self.values[0];
        }
        if hi == n {
            return self.values[n - 1];
        }
        let lo = hi - 1;
        let (t0, t1) = (self.times[lo], self.times[hi]);
        let (v0, v1) = (self.values[lo], self.values[hi]);
        let frac = (t - t0) / (t1 - t0);
        v0 + frac * (v1 - v0)
    }
}

/// Dense series truncated to the sparse time range, with the sparse series
/// interpolated at every kept dense time.
#[derive(Debug, Clone, PartialEq)]
pub struct Aligned {
    pub times: Vec<f64>,
    /// Sparse series interpolated at `times`.
    pub values: Vec<f64>,
    /// Original dense values at `times`.
    pub dense_values: Vec<f64>,
}

/// Borrowed view of one side of the apex split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a> {
    pub times: &'a [f64],
    pub values: &'a [f64],
    pub dense_values: &'a [f64],
}

impl Segment<'_> {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Align `dense` onto `sparse`.
///
/// The dense series is cut at its first time strictly after `sparse.max_time()`;
/// dense times before `sparse.min_time()` get the first sparse value.
pub fn align(dense: &TimeSeries, sparse: &TimeSeries) -> Aligned {
    let t_max = sparse.max_time();
    let keep = dense.times.partition_point(|&t| t <= t_max);

    if keep < dense.len() {
        debug!(
            kept = keep,
            dropped = dense.len() - keep,
            t_max,
            "truncating dense series past end of sparse series"
        );
    }

    let times = dense.times[..keep].to_vec();
    let values = times.iter().map(|&t| sparse.interpolate(t)).collect();
    let dense_values = dense.values[..keep].to_vec();

    Aligned {
        times,
        values,
        dense_values,
    }
}

impl Aligned {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Index of the global maximum of the aligned values (first on ties).
    pub fn apex_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &v) in self.values.iter().enumerate() {
            match best {
                Some((_, b)) if v <= b => {}
                _ => best = Some((i, v)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Ascent `[0..=apex]` and descent `[apex..]`; the apex sample is in both.
    pub fn split_at_apex(&self) -> Option<(Segment<'_>, Segment<'_>)> {
        let apex = self.apex_index()?;
        let up = Segment {
            times: &self.times[..=apex],
            values: &self.values[..=apex],
            dense_values: &self.dense_values[..=apex],
        };
        let down = Segment {
            times: &self.times[apex..],
            values: &self.values[apex..],
            dense_values: &self.dense_values[apex..],
        };
        Some((up, down))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> TimeSeries {
        TimeSeries::from_pairs(&[(0.0, 0.0), (10.0, 100.0)]).unwrap()
    }

    #[test]
    fn midpoint_of_ramp() {
        assert_eq!(ramp().interpolate(5.0), 50.0);
    }

    #[test]
    fn clamps_outside_range() {
        let s = ramp();
        assert_eq!(s.interpolate(-3.0), 0.0);
        assert_eq!(s.interpolate(12.0), 100.0);
    }

    #[test]
    fn single_sample_is_constant() {
        let s = TimeSeries::from_pairs(&[(1.0, 7.0)]).unwrap();
        assert_eq!(s.min_time(), s.max_time());
        assert_eq!(s.interpolate(0.0), 7.0);
        assert_eq!(s.interpolate(1.0), 7.0);
        assert_eq!(s.interpolate(2.0), 7.0);
    }

    #[test]
    fn rejects_malformed_series() {
        assert!(TimeSeries::new(vec![], vec![]).is_err());
        assert!(TimeSeries::new(vec![0.0, 1.0], vec![1.0]).is_err());
        assert!(TimeSeries::new(vec![0.0, 0.0], vec![1.0, 2.0]).is_err());
        assert!(TimeSeries::new(vec![1.0, 0.5], vec![1.0, 2.0]).is_err());
        assert!(TimeSeries::new(vec![0.0, f64::NAN], vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn apex_is_first_maximum() {
        let a = Aligned {
            times: vec![0.0, 1.0, 2.0, 3.0],
            values: vec![1.0, 5.0, 5.0, 2.0],
            dense_values: vec![0.0; 4],
        };
        assert_eq!(a.apex_index(), Some(1));
    }

    #[test]
    fn empty_alignment_has_no_apex() {
        let a = Aligned {
            times: vec![],
            values: vec![],
            dense_values: vec![],
        };
        assert_eq!(a.apex_index(), None);
        assert!(a.split_at_apex().is_none());
    }
}

// src/balloon.rs
//
// Readers for the two balloon-flight logs:
//
//   weather logger (comma separated, 1 header line)
//     col 1 : clock time HH:MM:SS
//     col 3 : temperature (deg F)
//
//   GPS (tab separated, 2 header lines)
//     col 0,1,2 : hours, minutes, seconds
//     col 6     : altitude (ft)
//
// Both are returned as `TimeSeries` in hours elapsed since the first data row.
// Blank lines are skipped. Any other malformed row aborts the read and is
// reported at its line in the file.

use std::io::BufRead;

use tracing::debug;

use crate::error::PhysResult;
use crate::parse::{clock_seconds, column, column_f64, data_lines};
use crate::series::{align, Aligned, TimeSeries};

const WX_HEADER_LINES: usize = 1;
const WX_TIME_COL: usize = 1;
const WX_TEMP_COL: usize = 3;

const GPS_HEADER_LINES: usize = 2;
const GPS_ALT_COL: usize = 6;

/// Temperature series from the weather logger.
pub fn read_wx<R: BufRead>(reader: R) -> PhysResult<TimeSeries> {
    let mut times = Vec::new();
    let mut temps = Vec::new();
    let mut t0: Option<f64> = None;

    for (line, text) in data_lines(reader, WX_HEADER_LINES)? {
        let fields: Vec<&str> = text.split(',').collect();
        let secs = clock_seconds(column(&fields, WX_TIME_COL, line)?, WX_TIME_COL, line)?;
        let temp = column_f64(&fields, WX_TEMP_COL, line)?;

        let start = *t0.get_or_insert(secs);
        times.push((secs - start) / 3600.0);
        temps.push(temp);
    }

    debug!(rows = times.len(), "read weather logger data");
    TimeSeries::new(times, temps)
}

/// Altitude series from the GPS log.
pub fn read_gps<R: BufRead>(reader: R) -> PhysResult<TimeSeries> {
    let mut times = Vec::new();
    let mut alts = Vec::new();
    let mut t0: Option<f64> = None;

    for (line, text) in data_lines(reader, GPS_HEADER_LINES)? {
        let fields: Vec<&str> = text.split('\t').collect();
        let h = column_f64(&fields, 0, line)?;
        let m = column_f64(&fields, 1, line)?;
        let s = column_f64(&fields, 2, line)?;
        let alt = column_f64(&fields, GPS_ALT_COL, line)?;

        let hours = h + m / 60.0 + s / 3600.0;
        let start = *t0.get_or_insert(hours);
        times.push(hours - start);
        alts.push(alt);
    }

    debug!(rows = times.len(), "read GPS data");
    TimeSeries::new(times, alts)
}

/// Weather temperatures with GPS altitude interpolated onto their time axis.
///
/// In the result, `values` are altitudes and `dense_values` are temperatures.
pub fn correlate_flight(wx: &TimeSeries, gps: &TimeSeries) -> Aligned {
    align(wx, gps)
}

// src/weather.rs
//
// Daily station records (whitespace separated, one header line):
//
//   col 2  : date YYYYMMDD
//   col 3  : mean temperature (deg F)
//   col 17 : daily maximum (deg F)
//   col 18 : daily minimum (deg F)

use std::collections::BTreeMap;
use std::io::BufRead;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{PhysError, PhysResult};
use crate::parse::{column, column_f64, data_lines};

const HEADER_LINES: usize = 1;
const DATE_COL: usize = 2;
const TEMP_COL: usize = 3;
const MAX_COL: usize = 17;
const MIN_COL: usize = 18;

/// Daily maxima at or above this value are station error codes, not readings.
pub const MAX_TEMP_SENTINEL: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub mean_temp: f64,
    pub max_temp: f64,
    pub min_temp: f64,
}

fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const CUMULATIVE_DAYS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

impl DailyRecord {
    /// 1-based day of the year.
    pub fn day_of_year(&self) -> u32 {
        let leap = u32::from(self.month > 2 && is_leap(self.year));
        CUMULATIVE_DAYS[(self.month - 1) as usize] + self.day + leap
    }

    /// Year plus the elapsed fraction of that year at the start of the day.
    pub fn decimal_year(&self) -> f64 {
        let days = if is_leap(self.year) { 366.0 } else { 365.0 };
        self.year as f64 + (self.day_of_year() - 1) as f64 / days
    }
}

fn parse_date(s: &str, line: usize) -> PhysResult<(i32, u32, u32)> {
    let bad = || PhysError::parse(line, DATE_COL, format!("expected YYYYMMDD date, got {s:?}"));
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    let year: i32 = s[0..4].parse().map_err(|_| bad())?;
    let month: u32 = s[4..6].parse().map_err(|_| bad())?;
    let day: u32 = s[6..8].parse().map_err(|_| bad())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(bad());
    }
    Ok((year, month, day))
}

/// Read all daily records. The first malformed row aborts the read.
pub fn read_records<R: BufRead>(reader: R) -> PhysResult<Vec<DailyRecord>> {
    let mut records = Vec::new();
    for (line, text) in data_lines(reader, HEADER_LINES)? {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let (year, month, day) = parse_date(column(&fields, DATE_COL, line)?, line)?;
        records.push(DailyRecord {
            year,
            month,
            day,
            mean_temp: column_f64(&fields, TEMP_COL, line)?,
            max_temp: column_f64(&fields, MAX_COL, line)?,
            min_temp: column_f64(&fields, MIN_COL, line)?,
        });
    }
    debug!(rows = records.len(), "read station records");
    Ok(records)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthStats {
    pub month: u32,
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (divides by `count`).
    pub std_dev: f64,
}

/// Mean and standard deviation of the daily mean temperature per calendar
/// month, pooled over all years, in month order. Months with no data are absent.
pub fn monthly_stats(records: &[DailyRecord]) -> Vec<MonthStats> {
    let mut by_month: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for r in records {
        by_month.entry(r.month).or_default().push(r.mean_temp);
    }

    by_month
        .into_iter()
        .map(|(month, temps)| {
            let n = temps.len() as f64;
            let mean = temps.iter().sum::<f64>() / n;
            let var = temps.iter().map(|t| (t - mean) * (t - mean)).sum::<f64>() / n;
            MonthStats {
                month,
                count: temps.len(),
                mean,
                std_dev: var.sqrt(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearExtremes {
    pub year: i32,
    pub min: f64,
    /// `None` when every daily maximum that year was a sentinel.
    pub max: Option<f64>,
}

/// Lowest daily minimum and highest valid daily maximum per year, ascending.
pub fn yearly_extremes(records: &[DailyRecord]) -> Vec<YearExtremes> {
    let mut by_year: BTreeMap<i32, YearExtremes> = BTreeMap::new();
    let mut sentinels = 0usize;

    for r in records {
        let entry = by_year.entry(r.year).or_insert(YearExtremes {
            year: r.year,
            min: r.min_temp,
            max: None,
        });
        entry.min = entry.min.min(r.min_temp);

        if r.max_temp >= MAX_TEMP_SENTINEL {
            sentinels += 1;
            continue;
        }
        entry.max = Some(entry.max.map_or(r.max_temp, |m| m.max(r.max_temp)));
    }

    if sentinels > 0 {
        warn!(sentinels, threshold = MAX_TEMP_SENTINEL, "ignored sentinel daily maxima");
    }
    by_year.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: i32, month: u32, day: u32, mean: f64, max: f64, min: f64) -> DailyRecord {
        DailyRecord {
            year,
            month,
            day,
            mean_temp: mean,
            max_temp: max,
            min_temp: min,
        }
    }

    #[test]
    fn decimal_year_handles_leap_years() {
        assert_eq!(rec(2001, 1, 1, 0.0, 0.0, 0.0).decimal_year(), 2001.0);
        assert_eq!(rec(2000, 3, 1, 0.0, 0.0, 0.0).day_of_year(), 61);
        assert_eq!(rec(2001, 3, 1, 0.0, 0.0, 0.0).day_of_year(), 60);
        let d = rec(2001, 7, 2, 0.0, 0.0, 0.0).decimal_year();
        assert!((d - (2001.0 + 182.0 / 365.0)).abs() < 1e-12);
    }

    #[test]
    fn monthly_std_is_population() {
        let records = vec![
            rec(2000, 1, 1, 10.0, 0.0, 0.0),
            rec(2001, 1, 1, 20.0, 0.0, 0.0),
            rec(2000, 2, 1, 5.0, 0.0, 0.0),
        ];
        let stats = monthly_stats(&records);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].month, 1);
        assert_eq!(stats[0].mean, 15.0);
        assert_eq!(stats[0].std_dev, 5.0);
        assert_eq!(stats[1].std_dev, 0.0);
    }

    #[test]
    fn sentinel_maxima_are_ignored() {
        let records = vec![
            rec(2000, 1, 1, 0.0, 9999.9, 10.0),
            rec(2000, 1, 2, 0.0, 80.0, 5.0),
            rec(2000, 1, 3, 0.0, 200.0, 7.0),
            rec(2001, 1, 1, 0.0, 9999.9, 3.0),
        ];
        let ext = yearly_extremes(&records);
        assert_eq!(
            ext,
            vec![
                YearExtremes { year: 2000, min: 5.0, max: Some(80.0) },
                YearExtremes { year: 2001, min: 3.0, max: None },
            ]
        );
    }

    #[test]
    fn bad_date_is_fatal() {
        assert!(parse_date("2019013", 4).is_err());
        assert!(parse_date("20191301", 4).is_err());
        assert_eq!(parse_date("20190131", 4).unwrap(), (2019, 1, 31));
    }
}

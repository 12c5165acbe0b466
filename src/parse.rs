// src/parse.rs
//
// Positional column access shared by the text-table readers. Every failure is
// reported against its 1-based file line and 0-based column.

use std::io::BufRead;

use crate::error::{PhysError, PhysResult};

/// Data lines after skipping `header_lines`, paired with their 1-based line
/// number. Whitespace-only lines are skipped.
pub(crate) fn data_lines<R: BufRead>(
    reader: R,
    header_lines: usize,
) -> PhysResult<Vec<(usize, String)>> {
    let mut out = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i < header_lines || line.trim().is_empty() {
            continue;
        }
        out.push((i + 1, line));
    }
    Ok(out)
}

pub(crate) fn column<'a>(fields: &[&'a str], col: usize, line: usize) -> PhysResult<&'a str> {
    fields.get(col).copied().map(str::trim).ok_or_else(|| {
        PhysError::parse(
            line,
            col,
            format!("row has {} columns, expected at least {}", fields.len(), col + 1),
        )
    })
}

pub(crate) fn parse_f64(s: &str, col: usize, line: usize) -> PhysResult<f64> {
    s.parse::<f64>()
        .map_err(|e| PhysError::parse(line, col, format!("could not convert {s:?} to float: {e}")))
}

pub(crate) fn column_f64(fields: &[&str], col: usize, line: usize) -> PhysResult<f64> {
    parse_f64(column(fields, col, line)?, col, line)
}

/// `HH:MM:SS` clock time as seconds since midnight.
pub(crate) fn clock_seconds(s: &str, col: usize, line: usize) -> PhysResult<f64> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(PhysError::parse(
            line,
            col,
            format!("expected HH:MM:SS, got {s:?}"),
        ));
    }
    let h = parse_f64(parts[0], col, line)?;
    let m = parse_f64(parts[1], col, line)?;
    let sec = parse_f64(parts[2], col, line)?;
    Ok(h * 3600.0 + m * 60.0 + sec)
}

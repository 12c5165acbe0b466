// src/bin/weather_summary.rs
//
// Station weather summary: monthly mean and spread of the daily mean
// temperature, and the yearly extremes of the daily min/max.
//
// Run:
//   cargo run --release --bin weather_summary
//
// Input:
//   data/weather.txt   (whitespace separated daily records, 1 header line)
//
// Output:
//   out/weather_summary/
//     ├── config.json
//     ├── monthly.csv
//     └── yearly.csv

use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use physlab::config::{RunConfig, RunInfo};
use physlab::logging;
use physlab::table::{write_monthly, write_yearly};
use physlab::weather::{monthly_stats, read_records, yearly_extremes, MAX_TEMP_SENTINEL};

const INPUT_FILE: &str = "data/weather.txt";

#[derive(Serialize)]
struct Parameters {
    max_temp_sentinel: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let records = read_records(BufReader::new(File::open(INPUT_FILE)?))?;
    let monthly = monthly_stats(&records);
    let yearly = yearly_extremes(&records);

    let out_dir = Path::new("out").join("weather_summary");
    create_dir_all(&out_dir)?;

    RunConfig {
        parameters: Parameters {
            max_temp_sentinel: MAX_TEMP_SENTINEL,
        },
        numerics: None,
        inputs: vec![INPUT_FILE.to_string()],
        run: RunInfo::for_binary("weather_summary"),
    }
    .write_to_dir(&out_dir)?;

    write_monthly(
        &mut BufWriter::new(File::create(out_dir.join("monthly.csv"))?),
        &monthly,
    )?;
    write_yearly(
        &mut BufWriter::new(File::create(out_dir.join("yearly.csv"))?),
        &yearly,
    )?;

    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        info!(
            days = records.len(),
            from = first.decimal_year(),
            to = last.decimal_year(),
            months = monthly.len(),
            years = yearly.len(),
            "station summary"
        );
    }
    for m in &monthly {
        info!(month = m.month, mean = m.mean, std_dev = m.std_dev, "monthly");
    }

    info!("Wrote outputs to {:?}", out_dir);
    Ok(())
}

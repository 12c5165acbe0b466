// src/bin/balloon_flight.rs
//
// Balloon flight: temperature logger rows get a GPS altitude by linear
// interpolation, then the flight is split into ascent and descent at the
// highest interpolated altitude.
//
// Run:
//   cargo run --release --bin balloon_flight
//
// Input:
//   data/TempPressure.txt   (comma separated weather logger)
//   data/GPSData.txt        (tab separated GPS log)
//
// Output:
//   out/balloon_flight/
//     ├── config.json
//     └── flight.csv

use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::info;

use physlab::balloon::{correlate_flight, read_gps, read_wx};
use physlab::config::{RunConfig, RunInfo};
use physlab::logging;
use physlab::table::write_flight;

const WX_FILE: &str = "data/TempPressure.txt";
const GPS_FILE: &str = "data/GPSData.txt";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let wx = read_wx(BufReader::new(File::open(WX_FILE)?))?;
    let gps = read_gps(BufReader::new(File::open(GPS_FILE)?))?;
    let flight = correlate_flight(&wx, &gps);

    let out_dir = Path::new("out").join("balloon_flight");
    create_dir_all(&out_dir)?;

    RunConfig {
        parameters: (),
        numerics: None,
        inputs: vec![WX_FILE.to_string(), GPS_FILE.to_string()],
        run: RunInfo::for_binary("balloon_flight"),
    }
    .write_to_dir(&out_dir)?;

    let mut w = BufWriter::new(File::create(out_dir.join("flight.csv"))?);
    write_flight(&mut w, &flight)?;

    match flight.split_at_apex() {
        Some((up, down)) => info!(
            rows = flight.len(),
            dropped = wx.len() - flight.len(),
            ascent_rows = up.len(),
            descent_rows = down.len(),
            apex_ft = up.values[up.len() - 1],
            apex_hours = up.times[up.len() - 1],
            "flight correlated"
        ),
        None => info!("no weather rows inside the GPS time range"),
    }

    info!("Wrote outputs to {:?}", out_dir);
    Ok(())
}

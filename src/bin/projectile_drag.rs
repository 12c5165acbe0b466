// src/bin/projectile_drag.rs
//
// Baseball launched at 20 m/s, 45 degrees, from 1.2 m: drag-free closed form
// against linear air drag.
//
// Run:
//   cargo run --release --bin projectile_drag
//
// Output:
//   out/projectile_drag/
//     ├── config.json
//     └── paths.csv

use std::fs::{create_dir_all, File};
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use physlab::config::{RunConfig, RunInfo};
use physlab::logging;
use physlab::projectile::{path_linear_drag, path_no_drag, range, Launch, ProjectileParams};
use physlab::table::write_paths;

#[derive(Serialize)]
struct Parameters {
    launch: Launch,
    projectile: ProjectileParams,
    linear_drag_alpha: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let launch = Launch {
        speed: 20.0,
        angle_deg: 45.0,
        height: 1.2,
    };
    let params = ProjectileParams::default();

    let out_dir = Path::new("out").join("projectile_drag");
    create_dir_all(&out_dir)?;

    RunConfig {
        parameters: Parameters {
            launch,
            projectile: params,
            linear_drag_alpha: params.linear_drag_alpha(),
        },
        numerics: None,
        inputs: Vec::new(),
        run: RunInfo::for_binary("projectile_drag"),
    }
    .write_to_dir(&out_dir)?;

    let no_drag = path_no_drag(&launch, &params)?;
    let drag = path_linear_drag(&launch, &params)?;

    let mut w = BufWriter::new(File::create(out_dir.join("paths.csv"))?);
    write_paths(&mut w, &no_drag, &drag)?;

    info!(
        range_no_drag = range(&no_drag),
        range_drag = range(&drag),
        "flights finished"
    );
    info!("Wrote outputs to {:?}", out_dir);
    Ok(())
}

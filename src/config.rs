use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::error::PhysResult;
use crate::trajectory::TrajectoryConfig;

/// Everything needed to reproduce one run, written as `config.json`.
#[derive(Debug, Serialize)]
pub struct RunConfig<P: Serialize> {
    /// Physical parameters of the model (pendulum, projectile, ...).
    pub parameters: P,
    pub numerics: Option<NumericsConfig>,
    /// Input data files, for the analysis runs.
    pub inputs: Vec<String>,
    pub run: RunInfo,
}

#[derive(Debug, Serialize)]
pub struct NumericsConfig {
    pub integrator: String,
    pub dt: f64,
    pub steps: usize,
    pub steps_per_frame: usize,
}

impl From<&TrajectoryConfig> for NumericsConfig {
    fn from(cfg: &TrajectoryConfig) -> Self {
        Self {
            integrator: cfg.integrator.as_str().to_string(),
            dt: cfg.dt,
            steps: cfg.n_steps(),
            steps_per_frame: cfg.steps_per_frame,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RunInfo {
    pub binary: String,
    pub run_id: String,
}

impl RunInfo {
    /// Run named after its binary.
    pub fn for_binary(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
            run_id: binary.to_string(),
        }
    }
}

impl<P: Serialize> RunConfig<P> {
    pub fn write_to_dir(&self, out_dir: &Path) -> PhysResult<()> {
        let path = out_dir.join("config.json");
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

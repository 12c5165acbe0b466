// src/logging.rs

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Console logging for the run binaries. `RUST_LOG` overrides the `info` default.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

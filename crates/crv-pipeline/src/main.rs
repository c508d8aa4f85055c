//! Curve pipeline demo
//!
//! Generates ten random curves (circles, ellipses, helixes), prints each
//! curve's point and tangent at `t = PI/4`, then prints the radii of the
//! circles in ascending order and their sum.
//!
//! ```bash
//! crv-demo
//!
//! # Show generator diagnostics on stderr
//! RUST_LOG=crv_random=debug crv-demo
//! ```

use std::io::{self, Write};
use std::process;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crv_pipeline::{run_pipeline, PipelineConfig};
use crv_random::CurveGenerator;

fn init_tracing() {
    // Default: WARN for everything. Override with RUST_LOG.
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let config = PipelineConfig::default();
    let mut generator = CurveGenerator::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = run_pipeline(&config, &mut generator, &mut out)
        .and_then(|_| out.flush().map_err(Into::into));
    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

#![forbid(unsafe_code)]

//! Headless harness for Sortboard.
//!
//! Seeds a Todo / Doing / Done board, replays drag events against it on
//! surfaces whose transitions finish immediately, and prints the result.

pub mod cli;
pub mod error;
pub mod script;
pub mod seed;
pub mod surface;

pub use cli::{Cli, Commands, run, run_from_env};
pub use error::{HarnessError, Result};

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered by `SORTBOARD_LOG`, then `RUST_LOG`,
/// defaulting to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("SORTBOARD_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

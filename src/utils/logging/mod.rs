//! Logging utilities for table I/O and the command line

pub mod log;

pub use log::{log_operation_complete, log_operation_start, log_warning};

/// Initialise `env_logger`, defaulting to `info` when `RUST_LOG` is unset
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

//! Shared plumbing for the spot crates.
//!
//! Currently this is the logging backend; every other crate talks to the
//! `log` facade and leaves installing a backend to the binary.

pub mod logging;

pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger, max_level_from_env};

// Re-export log crate so downstream crates can use spot_base::log::*
pub use log;

//! Shared utilities for the ISFT crates.

pub mod logging;
pub mod stats;
pub mod time;

pub use logging::{init_logging, init_tracing, LogFormat, LoggingError};
pub use stats::{CallStats, OutcomeCounts};
pub use time::format_duration;

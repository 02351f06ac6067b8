//! batchlog is a small thread-safe logging core built around batched hand-off.
//!
//! Call sites build messages in short-lived [`LogStream`](log::LogStream)s
//! that never touch shared state until they are dropped. A single background
//! thread owned by the [`Logger`](log::Logger) wakes on a fixed tick, takes
//! everything handed off since the previous tick, and writes the messages
//! whose level passes the current threshold to the output writer.
//!
//! ```rust
//! use batchlog::log::{LogLevel, Logger, flush, setlevel};
//! use std::time::Duration;
//!
//! let logger = Logger::new(Duration::from_millis(20), std::io::stdout())?;
//! logger.set_threshold(LogLevel::INFO);
//!
//! logger
//!     .stream(LogLevel::INFO)
//!     .text("listening on port ")
//!     .text(8080)
//!     .append(flush())
//!     .append(setlevel(LogLevel::TRACE))
//!     .text("filtered out");
//! # Ok::<(), batchlog::LoggerError>(())
//! ```

/// Logger configuration: INI loading and construction-time settings.
pub mod config;
/// Crate error type.
pub mod error;
/// Streams, the logger, its drain thread and the level macros.
pub mod log;

pub use config::{Config, LineMode, LoggerConfig};
pub use error::{LoggerError, Result};

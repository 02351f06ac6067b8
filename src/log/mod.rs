pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_sink;
pub mod log_stream;
pub mod logger;
pub mod logger_handle;
pub mod noop_log_sink;
mod shared;
pub mod token;

pub use log_level::LogLevel;
pub use log_msg::LogMsg;
pub use log_sink::LogSink;
pub use log_stream::LogStream;
pub use logger::{Logger, Output};
pub use logger_handle::LoggerHandle;
pub use noop_log_sink::NoopLogSink;
pub use token::{Token, flush, setlevel};

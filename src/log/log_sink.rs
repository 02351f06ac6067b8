use crate::log::{log_level::LogLevel, logger::Logger};

/// Object-safe producer interface for code that only needs to emit whole
/// messages (`Arc<dyn LogSink>` is passed around like any other dependency).
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str);
}

impl LogSink for Logger {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str) {
        self.stream(level).text(msg);
    }
}

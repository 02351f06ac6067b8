use std::{fmt::Display, sync::Weak};

use crate::log::{
    log_level::LogLevel, log_sink::LogSink, log_stream::LogStream, shared::Shared,
};

/// Lightweight, cloneable handle to a [`Logger`](crate::log::Logger).
///
/// A handle only holds a weak reference: it never keeps the logger alive.
/// Once the logger is dropped, streams obtained from the handle are detached
/// and everything written to them is discarded.
///
/// # Examples
/// ```ignore
/// // Usually you obtain it via: let handle = logger.handle();
/// std::thread::spawn(move || {
///     handle.stream(LogLevel::INFO).text("worker up");
/// });
/// ```
#[derive(Clone, Debug)]
pub struct LoggerHandle {
    shared: Weak<Shared>,
}

impl LoggerHandle {
    pub(crate) fn new(shared: Weak<Shared>) -> Self {
        Self { shared }
    }

    /// Returns a fresh stream bound to the logger behind this handle.
    #[must_use]
    pub fn stream(&self, level: impl Into<LogLevel>) -> LogStream {
        LogStream::new(self.shared.clone(), level.into())
    }

    /// One-shot stream at the default level, seeded with `value`.
    #[must_use]
    pub fn write(&self, value: impl Display) -> LogStream {
        let mut stream = self.stream(LogLevel::default());
        stream.text(value);
        stream
    }

    /// Replaces the logger's threshold. Does nothing if the logger is gone.
    pub fn set_threshold(&self, level: impl Into<LogLevel>) {
        if let Some(shared) = self.shared.upgrade() {
            shared.set_threshold(level.into());
        }
    }

    /// Current threshold, or `None` if the logger is gone.
    #[must_use]
    pub fn threshold(&self) -> Option<LogLevel> {
        self.shared.upgrade().map(|shared| shared.threshold())
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.shared.strong_count() > 0
    }
}

impl LogSink for LoggerHandle {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str) {
        self.stream(level).text(msg);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::logger::Logger;
    use std::io;
    use std::time::Duration;

    #[test]
    fn handle_shares_threshold_with_logger() {
        let logger = Logger::new(Duration::from_millis(50), io::sink()).unwrap();
        let h = logger.handle();
        h.set_threshold(LogLevel::TRACE);
        assert_eq!(logger.threshold(), LogLevel::TRACE);
        assert_eq!(h.clone().threshold(), Some(LogLevel::TRACE));
    }

    #[test]
    fn handle_outliving_logger_is_inert() {
        let logger = Logger::new(Duration::from_millis(50), io::sink()).unwrap();
        let h = logger.handle();
        assert!(h.is_alive());
        drop(logger);

        assert!(!h.is_alive());
        assert_eq!(h.threshold(), None);
        h.set_threshold(LogLevel::INFO);
        let mut s = h.stream(LogLevel::ERROR);
        assert!(s.is_detached());
        s.text("dropped quietly");
        h.log(LogLevel::ERROR, "also dropped");
    }

    #[test]
    fn write_seeds_default_level_stream() {
        let logger = Logger::new(Duration::from_millis(50), io::sink()).unwrap();
        let s = logger.handle().write(42);
        assert_eq!(s.pending(), "42");
        assert_eq!(s.current_level(), LogLevel::default());
    }
}

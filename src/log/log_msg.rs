use crate::log::log_level::LogLevel;

/// A finalized log message.
///
/// Created by a [`LogStream`](crate::log::LogStream) when its in-progress
/// text is flushed, moved into the logger's shared batch at hand-off and moved
/// once more into the output writer by the drain thread. It is never cloned
/// along that path, so the type does not implement `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct LogMsg {
    level: LogLevel,
    text: String,
}

impl LogMsg {
    /// Creates a new `LogMsg` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use batchlog::log::{LogLevel, LogMsg};
    ///
    /// let msg = LogMsg::new(LogLevel::INFO, "Connection established");
    /// assert_eq!(msg.text(), "Connection established");
    /// ```
    pub fn new(level: LogLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the message, yielding its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

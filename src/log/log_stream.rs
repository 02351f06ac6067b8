use std::{
    fmt::{self, Display, Write as _},
    mem,
    sync::Weak,
};

use crate::log::{log_level::LogLevel, log_msg::LogMsg, shared::Shared, token::Token};

/// Single-owner builder that accumulates log messages for one logger.
///
/// A stream collects text into an in-progress message until it is flushed,
/// at which point the text becomes a [`LogMsg`] tagged with the stream's
/// current level and is queued locally. Nothing is shared with the logger
/// until the stream is dropped: the drop flushes any pending text and hands
/// the whole local batch over in one locked operation.
///
/// Streams are neither `Clone` nor `Sync`, so a batch is handed off at most
/// once. Ownership can still be transferred explicitly with
/// [`std::mem::take`], which leaves a detached stream behind.
///
/// # Examples
///
/// ```rust
/// use batchlog::log::{LogLevel, Logger};
/// use std::time::Duration;
///
/// let logger = Logger::new(Duration::from_millis(10), std::io::sink())?;
/// logger
///     .stream(LogLevel::ERROR)
///     .text("disk ")
///     .text(97)
///     .text("% full")
///     .flush()
///     .level(LogLevel::DEBUG)
///     .text("details follow");
/// # Ok::<(), batchlog::LoggerError>(())
/// ```
#[derive(Debug, Default)]
pub struct LogStream {
    parent: Option<Weak<Shared>>,
    messages: Vec<LogMsg>,
    current: String,
    level: LogLevel,
    // Streams stay on the thread that built them while they accumulate.
    _not_sync: std::marker::PhantomData<std::cell::Cell<()>>,
}

impl LogStream {
    pub(crate) fn new(parent: Weak<Shared>, level: LogLevel) -> Self {
        Self::with_parent(Some(parent), level)
    }

    /// Creates a stream bound to no logger; dropping it discards everything.
    #[must_use]
    pub fn detached(level: LogLevel) -> Self {
        Self::with_parent(None, level)
    }

    fn with_parent(parent: Option<Weak<Shared>>, level: LogLevel) -> Self {
        Self {
            parent,
            messages: Vec::new(),
            current: String::new(),
            level,
            _not_sync: std::marker::PhantomData,
        }
    }

    /// Single dispatch point for text and control tokens.
    pub fn append(&mut self, token: impl Into<Token>) -> &mut Self {
        match token.into() {
            Token::Text(text) => self.current.push_str(&text),
            Token::SetLevel(level) => self.level = level,
            Token::Flush => self.finish_current(),
        }
        self
    }

    /// Appends the `Display` rendering of `value` to the in-progress message.
    pub fn text(&mut self, value: impl Display) -> &mut Self {
        // Writing into a String only fails if `value`'s Display impl does.
        let _ = write!(self.current, "{value}");
        self
    }

    /// Sets the level used for messages finalized after this call.
    pub fn level(&mut self, level: impl Into<LogLevel>) -> &mut Self {
        self.level = level.into();
        self
    }

    /// Finalizes the in-progress text into a queued message.
    ///
    /// Does nothing when no text is pending, so empty messages are never
    /// produced.
    pub fn flush(&mut self) -> &mut Self {
        self.finish_current();
        self
    }

    #[must_use]
    pub fn current_level(&self) -> LogLevel {
        self.level
    }

    /// Text written since the last flush.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.current
    }

    /// Number of finalized messages waiting for hand-off.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if dropping this stream will not reach any logger.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.parent
            .as_ref()
            .is_none_or(|parent| parent.strong_count() == 0)
    }

    fn finish_current(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let text = mem::take(&mut self.current);
        self.messages.push(LogMsg::new(self.level, text));
    }
}

impl fmt::Write for LogStream {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.current.push_str(s);
        Ok(())
    }
}

impl Drop for LogStream {
    fn drop(&mut self) {
        let Some(parent) = self.parent.take() else {
            return;
        };
        self.finish_current();
        if let Some(shared) = parent.upgrade() {
            shared.ingest(mem::take(&mut self.messages));
        }
    }
}

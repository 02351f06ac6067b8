use std::fmt::Display;

use crate::log::log_level::LogLevel;

/// One item appended to a [`LogStream`](crate::log::LogStream).
///
/// `Text` carries already serialized content for the in-progress message.
/// `SetLevel` and `Flush` are directives: the stream consumes them on the
/// spot and they never reach the logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text appended to the in-progress message.
    Text(String),
    /// Retags messages finalized from now on.
    SetLevel(LogLevel),
    /// Finalizes the in-progress message, if it is not empty.
    Flush,
}

impl Token {
    /// Serializes any displayable value into a `Text` token.
    pub fn text(value: impl Display) -> Self {
        Self::Text(value.to_string())
    }
}

/// Builds a level-set token from any level-compatible value.
pub fn setlevel(level: impl Into<LogLevel>) -> Token {
    Token::SetLevel(level.into())
}

/// Builds a flush token.
pub fn flush() -> Token {
    Token::Flush
}

impl From<LogLevel> for Token {
    fn from(level: LogLevel) -> Self {
        Self::SetLevel(level)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

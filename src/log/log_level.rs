use std::{fmt, str::FromStr};

use crate::error::LoggerError;

/// Severity of a log message.
///
/// Levels are totally ordered integers where a **lower** value is **more**
/// severe. A message passes the logger's filter when its level is less than
/// or equal to the current threshold, so `LogLevel::ERROR` (0) is always
/// shown while `LogLevel::TRACE` (4) only appears once the threshold has been
/// raised that far. Values outside the named range are allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogLevel(i32);

impl LogLevel {
    /// Designates error events; the most severe named level.
    pub const ERROR: Self = Self(0);
    /// Designates potentially harmful situations.
    pub const WARN: Self = Self(1);
    /// Designates informational messages that highlight coarse-grained progress.
    pub const INFO: Self = Self(2);
    /// Designates fine-grained events that are most useful to debug an application.
    pub const DEBUG: Self = Self(3);
    /// Designates very fine-grained informational events.
    pub const TRACE: Self = Self(4);

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns `true` if a message at this level passes `threshold`.
    #[inline]
    #[must_use]
    pub fn passes(self, threshold: LogLevel) -> bool {
        self <= threshold
    }

    /// Canonical name for the named levels, `None` for any other value.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("error"),
            1 => Some("warn"),
            2 => Some("info"),
            3 => Some("debug"),
            4 => Some("trace"),
            _ => None,
        }
    }
}

impl From<i32> for LogLevel {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<u8> for LogLevel {
    fn from(value: u8) -> Self {
        Self(i32::from(value))
    }
}

impl From<LogLevel> for i32 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "level{}", self.0),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    /// Accepts the named levels (case-insensitive) or a plain integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::ERROR),
            "warn" | "warning" => Ok(Self::WARN),
            "info" => Ok(Self::INFO),
            "debug" => Ok(Self::DEBUG),
            "trace" => Ok(Self::TRACE),
            other => other
                .parse::<i32>()
                .map(Self)
                .map_err(|_| LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

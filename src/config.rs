use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use crate::error::{LoggerError, Result};
use crate::log::log_level::LogLevel;

/// Section holding every logger key.
pub const LOGGING_SECTION: &str = "Logging";

const DEFAULT_TICK: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| LoggerError::Config(format!("Error reading file {path}: {e}")))?;
        Ok(Self::parse(&content))
    }

    /// Parses INI-style text: `key = value` lines, `[section]` headers and
    /// `#` comments. Keys before the first header are globals.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = &line[1..line.len() - 1];
                current_section = Some(name.trim().to_string());
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                let value = value.trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Config { globals, sections }
    }

    pub fn empty() -> Self {
        Self {
            globals: HashMap::new(),
            sections: HashMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_or_default<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key)
            .or_else(|| self.get_global(key))
            .unwrap_or(default)
    }
}

/// Whether the drain thread terminates each message with a newline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineMode {
    /// Message text is written exactly as built.
    #[default]
    Verbatim,
    /// A `\n` follows every message.
    WithNewline,
}

/// Construction-time settings for a [`Logger`](crate::log::Logger).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Cadence of the background drain.
    pub tick: Duration,
    /// Threshold in effect until the first `set_threshold` call.
    pub threshold: LogLevel,
    pub line_mode: LineMode,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            tick: DEFAULT_TICK,
            threshold: LogLevel::default(),
            line_mode: LineMode::default(),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn with_tick(tick: Duration) -> Self {
        Self {
            tick,
            ..Self::default()
        }
    }

    /// Reads `tick_ms`, `threshold` and `newline` from the `[Logging]`
    /// section. Missing or empty keys keep their defaults.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut out = Self::default();

        if let Some(raw) = config.get_non_empty(LOGGING_SECTION, "tick_ms") {
            out.tick = parse_tick(raw)?;
        }
        if let Some(raw) = config.get_non_empty(LOGGING_SECTION, "threshold") {
            out.threshold = raw.parse()?;
        }
        if let Some(raw) = config.get_non_empty(LOGGING_SECTION, "newline") {
            out.line_mode = match raw.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" | "on" => LineMode::WithNewline,
                _ => LineMode::Verbatim,
            };
        }
        Ok(out)
    }
}

fn parse_tick(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(LoggerError::InvalidTick(raw.to_string())),
        Ok(ms) => Ok(Duration::from_millis(ms)),
    }
}

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Spawn error: could not start the drain thread: {0}")]
    Spawn(#[source] io::Error),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Invalid log level: {0:?}")]
    InvalidLevel(String),
    #[error("Invalid tick interval: {0:?}")]
    InvalidTick(String),
    #[error("Drain thread is already running")]
    AlreadyRunning,
    #[error("Output writer was lost when the drain thread panicked")]
    NoOutput,
}

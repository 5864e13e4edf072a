use crate::{DEFAULT_LOG_COLORED, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log file path. None = stderr.
    pub file: Option<String>,
    /// Colored output (ignored when logging to a file)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}

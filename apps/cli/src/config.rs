//! Runtime configuration for the CLI, read from the environment.

use std::env;

const DEFAULT_EXPORT_FORMAT: &str = "pdf";

/// Log output format selected by `HEALTHHUB_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_format: LogFormat,
    /// Format passed to `Report::export_report` in the session walk-through
    pub export_format: String,
}

impl Config {
    /// Loads `.env` when present, then reads `HEALTHHUB_*` variables.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_format = lookup("HEALTHHUB_LOG_FORMAT")
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        let export_format = lookup("HEALTHHUB_EXPORT_FORMAT")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_EXPORT_FORMAT.to_string());
        Self {
            log_format,
            export_format,
        }
    }
}

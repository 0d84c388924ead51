use std::env;

pub const LOG_VAR: &str = "WLP4SCAN_LOG";
pub const LOG_FORMAT_VAR: &str = "WLP4SCAN_LOG_FORMAT";
pub const TERSE_ERRORS_VAR: &str = "WLP4SCAN_TERSE_ERRORS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Filter directive for the tracing subscriber. `None` keeps logging off.
    pub log_filter: Option<String>,
    pub log_format: LogFormat,
    /// Print only `ERROR` on failure, without detail or offset.
    pub terse_errors: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. `WLP4SCAN_LOG` wins over
    /// `RUST_LOG` when both are present.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup(LOG_VAR).or_else(|| lookup("RUST_LOG"));

        let log_format = lookup(LOG_FORMAT_VAR)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();

        let terse_errors = lookup(TERSE_ERRORS_VAR)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        Config {
            log_filter,
            log_format,
            terse_errors,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

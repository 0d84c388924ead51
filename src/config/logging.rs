use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

use super::config::{Config, LogFormat};

/// Installs the global tracing subscriber described by `config`.
///
/// Does nothing when no filter is configured. Returns `false` if another
/// subscriber was already installed.
pub fn init_tracing(config: &Config) -> bool {
    let Some(directive) = &config.log_filter else {
        return false;
    };

    let filter = EnvFilter::builder().parse_lossy(directive);

    match config.log_format {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default()
                .with(filter)
                .with(json_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::io::stderr);

            Registry::default()
                .with(filter)
                .with(text_layer)
                .try_init()
                .is_ok()
        }
    }
}

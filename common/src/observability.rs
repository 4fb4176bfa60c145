//! Logging setup shared by the binaries.

use std::sync::OnceLock;

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FORMAT_ENV: &str = "JOBFEED_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output encoding for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// `JOBFEED_LOG_FORMAT=json` selects JSON, anything else falls back to text.
    pub fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(raw) if raw.trim().eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `default_filter` when set. Calling this again after a
/// subscriber is installed is treated as success.
pub fn init_logging(default_filter: &str, format: LogFormat) -> Result<(), TryInitError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
    }

    let _ = INITIALISED.set(());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_from_env() {
        temp_env::with_var(LOG_FORMAT_ENV, Some(" JSON "), || {
            assert_eq!(LogFormat::from_env(), LogFormat::Json);
        });
        temp_env::with_var(LOG_FORMAT_ENV, Some("pretty"), || {
            assert_eq!(LogFormat::from_env(), LogFormat::Text);
        });
        temp_env::with_var_unset(LOG_FORMAT_ENV, || {
            assert_eq!(LogFormat::from_env(), LogFormat::Text);
        });
    }

    #[test]
    fn repeated_init_is_ok() {
        assert!(init_logging("debug", LogFormat::Text).is_ok());
        assert!(init_logging("info", LogFormat::Json).is_ok());
    }
}

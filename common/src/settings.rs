//! Layered configuration: serde defaults, an optional file, then `JOBFEED__*`
//! environment variables.
//!
//! Nested keys use a double underscore, so `JOBFEED__TIMEOUT_SECS=15` sets
//! `timeout_secs` on whatever struct is being loaded. Unknown keys are ignored,
//! which lets the scraper and server read their own settings from one source.

use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::Path;

pub use config::ConfigError;

pub const ENV_PREFIX: &str = "JOBFEED";

/// Build the merged configuration and deserialize it into `T`.
///
/// `file` is required when given; the `config` crate infers its format from the suffix.
pub fn load<T: DeserializeOwned>(file: Option<&Path>) -> Result<T, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = file {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        name: String,
        retries: u32,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self {
                name: "default".into(),
                retries: 3,
            }
        }
    }

    #[test]
    fn empty_sources_yield_defaults() {
        temp_env::with_vars_unset(["JOBFEED__NAME", "JOBFEED__RETRIES"], || {
            let cfg: Sample = load(None).unwrap();
            assert_eq!(cfg, Sample::default());
        });
    }

    #[test]
    fn env_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("jobfeed.toml");
        fs::write(&path, "name = \"from-file\"\nretries = 7\n").unwrap();

        temp_env::with_vars(
            [("JOBFEED__NAME", Some("from-env")), ("JOBFEED__RETRIES", None)],
            || {
                let cfg: Sample = load(Some(&path)).unwrap();
                assert_eq!(cfg.name, "from-env");
                assert_eq!(cfg.retries, 7);
            },
        );
    }

    #[test]
    fn env_values_are_parsed() {
        temp_env::with_vars(
            [("JOBFEED__RETRIES", Some("12")), ("JOBFEED__NAME", None)],
            || {
                let cfg: Sample = load(None).unwrap();
                assert_eq!(cfg.retries, 12);
                assert_eq!(cfg.name, "default");
            },
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result: Result<Sample, _> = load(Some(&tmp.path().join("absent.toml")));
        assert!(result.is_err());
    }
}

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    pub import: ImportConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }
}

impl EnvConfig for AppConfig {
    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SQLite file; deleted and recreated on every run.
    pub path: PathBuf,
    pub busy_timeout_ms: u64,
}

impl DatabaseConfig {
    /// The path is percent-encoded so `?`, `#` and `%` in file names survive
    /// URL parsing.
    pub fn url(&self) -> String {
        let path = self.path.to_string_lossy();
        format!("sqlite://{}?mode=rwc", urlencoding::encode(&path))
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(defaults::DEFAULT_DATABASE_PATH),
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// Directory holding the five `*_import.csv` source files.
    pub data_dir: PathBuf,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(defaults::DEFAULT_DATA_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::DatabaseConfig;

    #[test]
    fn url_escapes_reserved_characters() {
        let cfg = DatabaseConfig {
            path: PathBuf::from("out/stock #1?50%.db"),
            ..Default::default()
        };

        assert_eq!(
            cfg.url(),
            "sqlite://out%2Fstock%20%231%3F50%25.db?mode=rwc"
        );
    }
}

use std::path::Path;

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Loads a config struct from `APP_`-prefixed environment variables, with
/// `__` separating nested sections (`APP_DATABASE__PATH` -> `database.path`).
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    /// Reads `.env` from the working directory only. A missing file is fine,
    /// a malformed one is not.
    fn load_dotenv() -> Result<()> {
        load_env_file(Path::new(".env"))
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv()?;

        let settings = config_rs::Config::builder()
            .add_source(
                config_rs::Environment::with_prefix(Self::PREFIX)
                    .prefix_separator("_")
                    .separator(Self::SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .context("failed to read environment variables for config")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}

fn load_env_file(path: &Path) -> Result<()> {
    match dotenvy::from_path(path) {
        Err(err) if !err.not_found() => {
            Err(err).with_context(|| format!("failed to load {}", path.display()))
        }
        _ => Ok(()),
    }
}

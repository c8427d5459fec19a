pub mod configs;
pub mod defaults;
pub mod envconfig;
pub mod validate;

pub use configs::{AppConfig, DatabaseConfig, ImportConfig, LoggingConfig};
pub use envconfig::EnvConfig;

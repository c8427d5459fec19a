use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.logging.rust_log.trim().is_empty() {
        errors.push("logging.rust_log must not be empty".to_string());
    }

    if cfg.database.path.as_os_str().is_empty() {
        errors.push("database.path must not be empty".to_string());
    } else if cfg.database.path.is_dir() {
        errors.push(format!(
            "database.path ({}) must name a file, not a directory",
            cfg.database.path.display()
        ));
    }

    if cfg.database.busy_timeout_ms == 0 {
        errors.push("database.busy_timeout_ms must be > 0".to_string());
    }

    if cfg.import.data_dir.as_os_str().is_empty() {
        errors.push("import.data_dir must not be empty".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

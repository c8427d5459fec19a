use std::{fs, io, path::Path, time::Duration};

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::{config::DatabaseConfig, error::ImportError};

/// Deletes any previous database file and opens a fresh one in its place.
pub async fn recreate(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ImportError> {
    remove_existing(&cfg.path)?;
    connect(cfg).await
}

/// Opens (creating if needed) the configured database file. The pool holds a
/// single connection: the import runs on one connection and one transaction.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ImportError> {
    if let Some(parent) = cfg.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ImportError::io(parent, source))?;
    }

    let mut options = ConnectOptions::new(cfg.url());
    options
        .max_connections(1)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    db.execute_unprepared(&format!("PRAGMA busy_timeout = {}", cfg.busy_timeout_ms))
        .await?;
    Ok(db)
}

fn remove_existing(path: &Path) -> Result<(), ImportError> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "removed previous database");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(ImportError::io(path, err)),
    }
}

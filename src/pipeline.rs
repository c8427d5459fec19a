use std::fs;

use sea_orm::TransactionTrait;
use tracing::info;

use crate::{
    config::AppConfig,
    db::{connection, schema},
    error::ImportError,
    import,
    report::ImportReport,
};

/// Rebuilds the database from scratch and loads every CSV file into it.
///
/// Tables are created before the transaction opens; all inserts share one
/// transaction that is committed only after the last file. On error the
/// transaction is dropped, which rolls it back.
pub async fn run(cfg: &AppConfig) -> Result<ImportReport, ImportError> {
    let db = connection::recreate(&cfg.database).await?;

    info!("creating tables");
    schema::initialize(&db).await?;

    info!(data_dir = %cfg.import.data_dir.display(), "importing data");
    let txn = db.begin().await?;
    let tables = import::import_all(&txn, &cfg.import.data_dir).await?;
    txn.commit().await?;
    db.close().await?;

    let path = &cfg.database.path;
    let file_size_bytes = fs::metadata(path)
        .map_err(|source| ImportError::io(path, source))?
        .len();
    info!(path = %path.display(), file_size_bytes, "database written");

    Ok(ImportReport {
        database_path: path.clone(),
        tables,
        file_size_bytes,
    })
}

use std::path::PathBuf;

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    /// `record` is 1-based and counts data rows, not the header.
    #[error("failed to insert record {record} into {table}: {source}")]
    Insert {
        table: &'static str,
        record: usize,
        #[source]
        source: DbErr,
    },
}

impl ImportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The store error behind this failure, if the store produced one.
    pub fn db_err(&self) -> Option<&DbErr> {
        match self {
            Self::Db(err) | Self::Insert { source: err, .. } => Some(err),
            Self::Io { .. } | Self::Csv { .. } => None,
        }
    }
}

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, sea_query::Index};
use tracing::debug;

use crate::db::entities::product_workshop;

/// Module path the entity registry scans for `#[sea_orm::model]` entities.
pub const ENTITY_REGISTRY: &str = "furniture_db::db::entities::*";

const ASSIGNMENT_PAIR_INDEX: &str = "idx-Product_workshops-product_id-workshop_id";

/// Creates the five tables with their foreign keys, then the unique
/// product/workshop pair. Expects an empty database.
pub async fn initialize(db: &DatabaseConnection) -> Result<(), DbErr> {
    debug!("creating tables from entities");
    db.get_schema_registry(ENTITY_REGISTRY).sync(db).await?;

    let pair = Index::create()
        .name(ASSIGNMENT_PAIR_INDEX)
        .table(product_workshop::Entity)
        .col(product_workshop::Column::ProductId)
        .col(product_workshop::Column::WorkshopId)
        .unique()
        .to_owned();
    db.execute(&pair).await?;
    debug!(index = ASSIGNMENT_PAIR_INDEX, "created unique index");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::initialize;
    use crate::{
        config::DatabaseConfig,
        db::{Table, connection, dao::summary},
    };

    #[tokio::test]
    async fn creates_every_table_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cfg = DatabaseConfig {
            path: dir.path().join("schema.db"),
            ..Default::default()
        };
        let db = connection::recreate(&cfg).await.expect("open database");

        initialize(&db).await.expect("create schema");

        let counts = summary::count_rows(&db).await.expect("count rows");
        let tables: Vec<Table> = counts.iter().map(|count| count.table).collect();
        assert_eq!(tables, Table::ALL.to_vec());
        assert!(counts.iter().all(|count| count.rows == 0));
    }
}

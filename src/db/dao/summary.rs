use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};

use crate::db::{
    Table,
    entities::prelude::{MaterialType, Product, ProductType, ProductWorkshop, Workshop},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCount {
    pub table: Table,
    pub rows: u64,
}

/// Row counts of every table, in `Table::ALL` order.
pub async fn count_rows<C: ConnectionTrait>(db: &C) -> Result<Vec<TableCount>, DbErr> {
    let mut counts = Vec::with_capacity(Table::ALL.len());
    for table in Table::ALL {
        let rows = match table {
            Table::MaterialTypes => MaterialType::find().count(db).await?,
            Table::ProductTypes => ProductType::find().count(db).await?,
            Table::Workshops => Workshop::find().count(db).await?,
            Table::Products => Product::find().count(db).await?,
            Table::ProductWorkshops => ProductWorkshop::find().count(db).await?,
        };
        counts.push(TableCount { table, rows });
    }
    Ok(counts)
}

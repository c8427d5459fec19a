use std::path::Path;

use sea_orm::{ConnectionTrait, DbErr};
use tracing::{info, warn};

use super::{
    csv_source::read_records,
    records::{
        MaterialTypeRecord, ProductRecord, ProductTypeRecord, ProductWorkshopRecord,
        WorkshopRecord,
    },
};
use crate::{
    db::{
        Table,
        dao::{
            IdentifiedModel, NaturalKeyEntity, NewAssignment, NewProduct, TableCount,
            catalog_dao, natural_key, product_dao,
        },
        entities::prelude::{MaterialType, Product, ProductType, Workshop},
    },
    error::ImportError,
};

/// Source file of each table, relative to the data directory.
pub fn source_file(table: Table) -> &'static str {
    match table {
        Table::MaterialTypes => "Material_type_import.csv",
        Table::ProductTypes => "Product_type_import.csv",
        Table::Workshops => "Workshops_import.csv",
        Table::Products => "Products_import.csv",
        Table::ProductWorkshops => "Product_workshops_import.csv",
    }
}

/// Loads all five files in dependency order. Returns the number of CSV rows
/// read per table; the first failing row stops the import.
pub async fn import_all<C: ConnectionTrait>(
    db: &C,
    data_dir: &Path,
) -> Result<Vec<TableCount>, ImportError> {
    let mut counts = Vec::with_capacity(Table::ALL.len());
    for table in Table::ALL {
        let path = data_dir.join(source_file(table));
        let rows = match table {
            Table::MaterialTypes => import_material_types(db, &path).await?,
            Table::ProductTypes => import_product_types(db, &path).await?,
            Table::Workshops => import_workshops(db, &path).await?,
            Table::Products => import_products(db, &path).await?,
            Table::ProductWorkshops => import_product_workshops(db, &path).await?,
        };
        info!(table = %table, rows, "imported");
        counts.push(TableCount { table, rows });
    }
    Ok(counts)
}

pub async fn import_material_types<C: ConnectionTrait>(
    db: &C,
    path: &Path,
) -> Result<u64, ImportError> {
    let records: Vec<MaterialTypeRecord> = read_records(path)?;
    for (index, record) in records.iter().enumerate() {
        catalog_dao::insert_material_type(db, record.name.as_deref(), record.waste_percentage)
            .await
            .map_err(insert_error(Table::MaterialTypes, index))?;
    }
    Ok(records.len() as u64)
}

pub async fn import_product_types<C: ConnectionTrait>(
    db: &C,
    path: &Path,
) -> Result<u64, ImportError> {
    let records: Vec<ProductTypeRecord> = read_records(path)?;
    for (index, record) in records.iter().enumerate() {
        catalog_dao::insert_product_type(db, record.name.as_deref(), record.type_coefficient)
            .await
            .map_err(insert_error(Table::ProductTypes, index))?;
    }
    Ok(records.len() as u64)
}

pub async fn import_workshops<C: ConnectionTrait>(
    db: &C,
    path: &Path,
) -> Result<u64, ImportError> {
    let records: Vec<WorkshopRecord> = read_records(path)?;
    for (index, record) in records.iter().enumerate() {
        catalog_dao::insert_workshop(
            db,
            record.name.as_deref(),
            record.workshop_type.as_deref(),
            record.staff_count,
        )
        .await
        .map_err(insert_error(Table::Workshops, index))?;
    }
    Ok(records.len() as u64)
}

pub async fn import_products<C: ConnectionTrait>(
    db: &C,
    path: &Path,
) -> Result<u64, ImportError> {
    let records: Vec<ProductRecord> = read_records(path)?;
    for (index, record) in records.iter().enumerate() {
        let product_type_id = resolve::<ProductType, _>(db, record.product_type.as_deref()).await?;
        let material_type_id =
            resolve::<MaterialType, _>(db, record.material_type.as_deref()).await?;
        let product = NewProduct {
            name: record.name.as_deref(),
            article_number: record.article_number.as_deref(),
            product_type_id,
            material_type_id,
            min_partner_price: record.min_partner_price,
        };
        product_dao::insert_product(db, product)
            .await
            .map_err(insert_error(Table::Products, index))?;
    }
    Ok(records.len() as u64)
}

pub async fn import_product_workshops<C: ConnectionTrait>(
    db: &C,
    path: &Path,
) -> Result<u64, ImportError> {
    let records: Vec<ProductWorkshopRecord> = read_records(path)?;
    for (index, record) in records.iter().enumerate() {
        let assignment = NewAssignment {
            product_id: resolve::<Product, _>(db, record.product.as_deref()).await?,
            workshop_id: resolve::<Workshop, _>(db, record.workshop.as_deref()).await?,
            production_time_hours: record.production_time_hours,
        };
        product_dao::insert_assignment(db, assignment)
            .await
            .map_err(insert_error(Table::ProductWorkshops, index))?;
    }
    Ok(records.len() as u64)
}

/// A blank name resolves to `None` without touching the store.
async fn resolve<E, C>(db: &C, key: Option<&str>) -> Result<Option<i32>, ImportError>
where
    E: NaturalKeyEntity,
    E::Model: IdentifiedModel,
    C: ConnectionTrait,
{
    let table = E::default().table_name();
    let Some(key) = key else {
        warn!(table, "blank name, nothing to look up");
        return Ok(None);
    };
    let id = natural_key::find_id::<E, C>(db, key).await?;
    if id.is_none() {
        warn!(table, key, "no row with this name");
    }
    Ok(id)
}

fn insert_error(table: Table, index: usize) -> impl FnOnce(DbErr) -> ImportError {
    move |source| ImportError::Insert {
        table: table.as_str(),
        record: index + 1,
        source,
    }
}

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Set};

use super::required;

use crate::db::entities::{
    material_type, product_type,
    prelude::{MaterialType, ProductType, Workshop},
    workshop,
};

pub async fn insert_material_type<C: ConnectionTrait>(
    db: &C,
    name: Option<&str>,
    waste_percentage: Option<f64>,
) -> Result<i32, DbErr> {
    let model = material_type::ActiveModel {
        material_type_name: required(name.map(str::to_string)),
        waste_percentage: Set(waste_percentage),
        ..Default::default()
    };
    Ok(MaterialType::insert(model).exec(db).await?.last_insert_id)
}

pub async fn insert_product_type<C: ConnectionTrait>(
    db: &C,
    name: Option<&str>,
    type_coefficient: Option<f64>,
) -> Result<i32, DbErr> {
    let model = product_type::ActiveModel {
        product_type_name: required(name.map(str::to_string)),
        type_coefficient: Set(type_coefficient),
        ..Default::default()
    };
    Ok(ProductType::insert(model).exec(db).await?.last_insert_id)
}

pub async fn insert_workshop<C: ConnectionTrait>(
    db: &C,
    name: Option<&str>,
    workshop_type: Option<&str>,
    staff_count: Option<i32>,
) -> Result<i32, DbErr> {
    let model = workshop::ActiveModel {
        workshop_name: required(name.map(str::to_string)),
        workshop_type: Set(workshop_type.map(str::to_string)),
        staff_count: Set(staff_count),
        ..Default::default()
    };
    Ok(Workshop::insert(model).exec(db).await?.last_insert_id)
}

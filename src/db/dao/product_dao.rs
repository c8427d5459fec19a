use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Set};

use super::required;

use crate::db::entities::{
    prelude::{Product, ProductWorkshop},
    product, product_workshop,
};

#[derive(Debug, Clone, Copy)]
pub struct NewProduct<'a> {
    pub name: Option<&'a str>,
    pub article_number: Option<&'a str>,
    pub product_type_id: Option<i32>,
    pub material_type_id: Option<i32>,
    pub min_partner_price: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
pub struct NewAssignment {
    pub product_id: Option<i32>,
    pub workshop_id: Option<i32>,
    pub production_time_hours: Option<f64>,
}

pub async fn insert_product<C: ConnectionTrait>(
    db: &C,
    new: NewProduct<'_>,
) -> Result<i32, DbErr> {
    let model = product::ActiveModel {
        product_name: required(new.name.map(str::to_string)),
        article_number: Set(new.article_number.map(str::to_string)),
        product_type_id: required(new.product_type_id),
        material_type_id: required(new.material_type_id),
        min_partner_price: Set(new.min_partner_price),
        ..Default::default()
    };
    Ok(Product::insert(model).exec(db).await?.last_insert_id)
}

pub async fn insert_assignment<C: ConnectionTrait>(
    db: &C,
    new: NewAssignment,
) -> Result<i32, DbErr> {
    let model = product_workshop::ActiveModel {
        product_id: required(new.product_id),
        workshop_id: required(new.workshop_id),
        production_time_hours: Set(new.production_time_hours),
        ..Default::default()
    };
    Ok(ProductWorkshop::insert(model).exec(db).await?.last_insert_id)
}

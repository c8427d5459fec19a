use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(id = "product_type_id", natural_key = "product_type_name")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Product_types")]
pub struct Model {
    #[sea_orm(unique)]
    pub product_type_name: String,
    pub type_coefficient: Option<f64>,
    pub style: Option<String>,
    pub description: Option<String>,
    #[sea_orm(has_many)]
    pub products: HasMany<super::product::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

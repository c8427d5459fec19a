use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

/// Assignment of a product to the workshop that manufactures it. The
/// `(product_id, workshop_id)` pair is unique; see `db::schema`.
#[base_entity(id = "product_workshop_id")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Product_workshops")]
pub struct Model {
    pub product_id: i32,
    pub workshop_id: i32,
    pub production_time_hours: Option<f64>,
    #[sea_orm(default_value = 1)]
    pub priority: i32,
    pub notes: Option<String>,
    #[sea_orm(belongs_to, from = "product_id", to = "product_id")]
    pub product: HasOne<super::product::Entity>,
    #[sea_orm(belongs_to, from = "workshop_id", to = "workshop_id")]
    pub workshop: HasOne<super::workshop::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

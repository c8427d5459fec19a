use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

// Product names are not unique; lookups by name resolve to the first stored row.
#[base_entity(id = "product_id", natural_key = "product_name", updated_at = "updated_at")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Products")]
pub struct Model {
    pub product_name: String,
    #[sea_orm(unique)]
    pub article_number: Option<String>,
    pub product_type_id: i32,
    pub material_type_id: i32,
    pub min_partner_price: Option<f64>,
    pub dimensions: Option<String>,
    pub weight: Option<f64>,
    pub description: Option<String>,
    #[sea_orm(default_value = true)]
    pub is_available: bool,
    #[sea_orm(belongs_to, from = "product_type_id", to = "product_type_id")]
    pub product_type: HasOne<super::product_type::Entity>,
    #[sea_orm(belongs_to, from = "material_type_id", to = "material_type_id")]
    pub material_type: HasOne<super::material_type::Entity>,
    #[sea_orm(has_many)]
    pub assignments: HasMany<super::product_workshop::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

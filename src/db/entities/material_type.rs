use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(id = "material_type_id", natural_key = "material_type_name")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Material_types")]
pub struct Model {
    #[sea_orm(unique)]
    pub material_type_name: String,
    pub waste_percentage: Option<f64>,
    pub description: Option<String>,
    #[sea_orm(default_value = true)]
    pub is_ecological: bool,
    #[sea_orm(has_many)]
    pub products: HasMany<super::product::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(id = "workshop_id", natural_key = "workshop_name")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Workshops")]
pub struct Model {
    #[sea_orm(unique)]
    pub workshop_name: String,
    pub workshop_type: Option<String>,
    pub staff_count: Option<i32>,
    pub location: Option<String>,
    pub equipment_description: Option<String>,
    #[sea_orm(default_value = true)]
    pub is_active: bool,
    #[sea_orm(has_many)]
    pub assignments: HasMany<super::product_workshop::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::EntityTrait;

/// Implemented by `#[base_entity]` for every model.
pub trait IdentifiedModel {
    fn id(&self) -> i32;
}

/// Entities that can be looked up by a human-readable name column.
/// Implemented by `#[base_entity(natural_key = "...")]`.
pub trait NaturalKeyEntity: EntityTrait {
    fn natural_key_column() -> Self::Column;
}
